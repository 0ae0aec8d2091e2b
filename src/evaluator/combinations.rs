/// Iterator over every k-combination of the indices `0..n`, in lexicographic order.
///
/// Yields nothing when `k > n`, and a single empty combination when `k == 0`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self { n, indices: (0..k).collect(), done: k > n }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices.clone();
        let k = self.indices.len();

        // Find the rightmost index that can be incremented
        let mut i = k;
        loop {
            if i == 0 {
                // All combinations exhausted
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - (k - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }
}

/// Binomial coefficient C(n, k).
#[cfg(test)]
fn choose(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
