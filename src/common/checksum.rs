use super::symbol::{CHECKSUM_MODULUS, START_B};

// Checksum
//------------------------------------------------------------------------------

/// Weighted positional sum over the data symbols, seeded with the start symbol.
///
/// The accumulator is 64 bits wide, so inputs far beyond any printable barcode
/// length cannot overflow it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Checksum {
    sum: u64,
    count: u64,
}

impl Checksum {
    pub fn new(start: usize) -> Self {
        Self { sum: start as u64, count: 0 }
    }

    /// Adds the next data symbol with weight equal to its 1-based position.
    pub fn push(&mut self, symbol: usize) {
        self.count += 1;
        self.sum += symbol as u64 * self.count;
    }

    pub fn weighted_sum(&self) -> u64 {
        self.sum
    }

    /// Index of the checksum symbol.
    pub fn symbol(&self) -> usize {
        (self.sum % CHECKSUM_MODULUS as u64) as usize
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new(START_B)
    }
}

impl FromIterator<usize> for Checksum {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut checksum = Self::default();
        iter.into_iter().for_each(|s| checksum.push(s));
        checksum
    }
}
