use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high). Ace is never played low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Chips this rank contributes to a score: Ace 11, faces 10, pips their value.
    ///
    /// ```
    /// use balatro_poker::cards::Rank;
    ///
    /// assert_eq!(Rank::Ace.chip_value(), 11);
    /// assert_eq!(Rank::Queen.chip_value(), 10);
    /// assert_eq!(Rank::Seven.chip_value(), 7);
    /// ```
    pub const fn chip_value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u32,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Full English name, e.g. "Queen" or "7".
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// Label used in the short card form: "10" for Ten, otherwise one character.
    pub const fn short_label(self) -> &'static str {
        match self {
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            r => r.name(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // Numeric tokens cover every rank, so "11" is a Jack and "14" an Ace.
        if !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()) {
            return t
                .parse::<u8>()
                .ok()
                .and_then(Rank::from_value)
                .ok_or_else(|| RankParseError::Invalid(s.to_string()));
        }
        let upper = t.to_ascii_uppercase();
        let r = match upper.as_str() {
            "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let up = c.to_ascii_uppercase();
        match up {
            '2'..='9' => Rank::from_value(up as u8 - b'0')
                .ok_or_else(|| RankParseError::Invalid(c.to_string())),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(RankParseError::Invalid(c.to_string())),
        }
    }
}

/// Display colour of a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Four suits; order carries no scoring meaning but is fixed for ordering: C < D < H < S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub const fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid suit: '{0}'")]
    Invalid(String),
}

impl FromStr for Suit {
    type Err = SuitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }
        match t.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(s.to_string())),
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::Clubs),
            'd' | '♦' => Ok(Suit::Diamonds),
            'h' | '♥' => Ok(Suit::Hearts),
            's' | '♠' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit.
///
/// ```
/// use balatro_poker::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// assert_eq!(card.short_name(), "A♠");
/// assert_eq!(card.long_name(), "Ace of Spades");
/// assert_eq!(card.chip_value(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    pub const fn chip_value(self) -> u32 {
        self.rank.chip_value()
    }

    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// "Ace of Spades", "10 of Hearts".
    pub fn long_name(self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }

    /// Rank label plus suit glyph: "A♠", "10♥".
    pub fn short_name(self) -> String {
        format!("{}{}", self.rank.short_label(), self.suit.glyph())
    }

    /// Lenient parse for interactive input: whitespace anywhere is ignored and
    /// anything malformed yields `None`.
    ///
    /// ```
    /// use balatro_poker::cards::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_code(" 10 s"), Some(Card::new(Rank::Ten, Suit::Spades)));
    /// assert_eq!(Card::from_code("ah"), Some(Card::new(Rank::Ace, Suit::Hearts)));
    /// assert_eq!(Card::from_code("1x"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Card> {
        let compact: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        compact.parse().ok()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        // suit is the last char, rank is everything before it
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }
        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use balatro_poker::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd 10c").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
