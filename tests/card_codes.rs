use balatro_poker::cards::{parse_cards, Card, CardParseError, Color, Rank, Suit};

#[test]
fn codes_parse_letters_and_numbers() {
    assert_eq!("As".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
    assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!("Th".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!("11d".parse::<Card>().unwrap(), Card::new(Rank::Jack, Suit::Diamonds));
    assert_eq!("14c".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Clubs));
}

#[test]
fn from_code_ignores_whitespace() {
    assert_eq!(Card::from_code(" K d "), Some(Card::new(Rank::King, Suit::Diamonds)));
    assert_eq!(Card::from_code("1s"), None);
    assert_eq!(Card::from_code("Kx"), None);
    assert_eq!(Card::from_code(""), None);
}

#[test]
fn invalid_codes_are_errors() {
    assert!(matches!("Zs".parse::<Card>(), Err(CardParseError::Rank(_))));
    assert!(matches!("Kz".parse::<Card>(), Err(CardParseError::Suit(_))));
    assert!("".parse::<Card>().is_err());
    assert!(parse_cards("As Kd 7q").is_err());
}

#[test]
fn names_and_colors() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    assert_eq!(ace.to_string(), "As");
    assert_eq!(ace.long_name(), "Ace of Spades");
    assert_eq!(ace.short_name(), "A♠");
    assert_eq!(ace.color(), Color::Black);
    let ten = Card::new(Rank::Ten, Suit::Hearts);
    assert_eq!(ten.short_name(), "10♥");
    assert_eq!(ten.color(), Color::Red);
    assert_eq!(Card::new(Rank::Two, Suit::Diamonds).color(), Color::Red);
}

#[test]
fn chip_values() {
    let chips: Vec<u32> = Rank::ALL.iter().map(|r| r.chip_value()).collect();
    assert_eq!(chips, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11]);
}

#[test]
fn display_round_trips_through_parse() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(rank, suit);
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }
}
