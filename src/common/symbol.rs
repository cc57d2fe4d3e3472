use std::fmt::{Display, Error, Formatter};

// Symbol indices
//------------------------------------------------------------------------------

pub const START_A: usize = 103;
pub const START_B: usize = 104;
pub const START_C: usize = 105;
pub const STOP: usize = 106;

pub const SYMBOL_COUNT: usize = 107;
pub const CHECKSUM_MODULUS: usize = 103;

// Subset B maps ASCII 32..=126 onto data symbols 0..=94
pub const ASCII_OFFSET: u8 = 32;
pub const MAX_DATA_SYMBOL: usize = 94;

pub const SYMBOL_SEGMENTS: usize = 6;
pub const STOP_SEGMENTS: usize = 7;
pub const SYMBOL_MODULES: usize = 11;
pub const STOP_MODULES: usize = 13;

// Pattern
//------------------------------------------------------------------------------

/// Bar/space widths of a single symbol, alternating and starting with a bar.
///
/// Every pattern has six segments except [`STOP`], which carries a seventh
/// terminating bar.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pattern {
    widths: [u8; STOP_SEGMENTS],
    len: usize,
}

impl Pattern {
    /// Splits a decimal code like `211214` into its digits, most significant first.
    pub const fn from_digits(code: u32, len: usize) -> Self {
        assert!(len <= STOP_SEGMENTS, "Pattern has too many segments");

        let mut widths = [0; STOP_SEGMENTS];
        let mut code = code;
        let mut i = len;
        while i > 0 {
            i -= 1;
            let w = (code % 10) as u8;
            assert!(1 <= w && w <= 4, "Segment width must be between 1 and 4 modules");
            widths[i] = w;
            code /= 10;
        }
        assert!(code == 0, "Code has more digits than declared");

        Self { widths, len }
    }

    pub fn widths(&self) -> &[u8] {
        &self.widths[..self.len]
    }

    pub const fn segment_count(&self) -> usize {
        self.len
    }

    pub const fn modules(&self) -> usize {
        let mut sum = 0;
        let mut i = 0;
        while i < self.len {
            sum += self.widths[i] as usize;
            i += 1;
        }
        sum
    }

    /// Position of a six-segment pattern in the symbol table.
    pub fn lookup(widths: &[u8]) -> Option<usize> {
        SYMBOL_TABLE.iter().position(|p| p.widths() == widths)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        self.widths().iter().try_for_each(|w| write!(f, "{w}"))
    }
}

// Symbol table
//------------------------------------------------------------------------------

const fn p(code: u32) -> Pattern {
    Pattern::from_digits(code, SYMBOL_SEGMENTS)
}

#[rustfmt::skip]
pub const SYMBOL_TABLE: [Pattern; SYMBOL_COUNT] = [
    p(212222), p(222122), p(222221), p(121223), p(121322), p(131222), p(122213), p(122312), p(132212), p(221213),
    p(221312), p(231212), p(112232), p(122132), p(122231), p(113222), p(123122), p(123221), p(223211), p(221132),
    p(221231), p(213212), p(223112), p(312131), p(311222), p(321122), p(321221), p(312212), p(322112), p(322211),
    p(212123), p(212321), p(232121), p(111323), p(131123), p(131321), p(112313), p(132113), p(132311), p(211313),
    p(231113), p(231311), p(112133), p(112331), p(132131), p(113123), p(113321), p(133121), p(313121), p(211331),
    p(231131), p(213113), p(213311), p(213131), p(311123), p(311321), p(331121), p(312113), p(312311), p(332111),
    p(314111), p(221411), p(431111), p(111224), p(111422), p(121124), p(121421), p(141122), p(141221), p(112214),
    p(112412), p(122114), p(122411), p(142112), p(142211), p(241211), p(221114), p(413111), p(241112), p(134111),
    p(111242), p(121142), p(121241), p(114212), p(124112), p(124211), p(411212), p(421112), p(421211), p(212141),
    p(214121), p(412121), p(111143), p(111341), p(131141), p(114113), p(114311), p(411113), p(411311), p(113141),
    p(114131), p(311141), p(411131),
    // START A, START B, START C
    p(211412), p(211214), p(211232),
    Pattern::from_digits(2331112, STOP_SEGMENTS),
];

// A malformed table fails the build rather than an encode call
const _: () = {
    let mut i = 0;
    while i < STOP {
        assert!(SYMBOL_TABLE[i].segment_count() == SYMBOL_SEGMENTS);
        assert!(SYMBOL_TABLE[i].modules() == SYMBOL_MODULES);
        i += 1;
    }
    assert!(SYMBOL_TABLE[STOP].segment_count() == STOP_SEGMENTS);
    assert!(SYMBOL_TABLE[STOP].modules() == STOP_MODULES);
};

/// Data symbol index for a subset B character, if it has one.
pub fn symbol_index(ch: char) -> Option<usize> {
    match ch {
        ' '..='~' => Some(ch as usize - ASCII_OFFSET as usize),
        _ => None,
    }
}

/// Inverse of [`symbol_index`] for data symbols 0..=94.
pub fn symbol_char(index: usize) -> Option<char> {
    if index > MAX_DATA_SYMBOL {
        return None;
    }
    Some((index as u8 + ASCII_OFFSET) as char)
}

#[cfg(test)]
mod symbol_tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_table_patterns_are_unique() {
        for (i, a) in SYMBOL_TABLE.iter().enumerate() {
            for b in &SYMBOL_TABLE[i + 1..] {
                assert_ne!(a, b, "Duplicate pattern {a}");
            }
        }
    }

    #[test]
    fn test_stop_pattern() {
        let stop = SYMBOL_TABLE[STOP];
        assert_eq!(stop.widths(), &[2, 3, 3, 1, 1, 1, 2]);
        assert_eq!(stop.segment_count(), 7);
        assert_eq!(stop.modules(), 13);
        assert_eq!(stop.to_string(), "2331112");
    }

    #[test_case(START_A, "211412")]
    #[test_case(START_B, "211214")]
    #[test_case(START_C, "211232")]
    #[test_case(0, "212222")]
    #[test_case(33, "111323")]
    #[test_case(34, "131123")]
    #[test_case(94, "131141")]
    fn test_table_entry(index: usize, code: &str) {
        assert_eq!(SYMBOL_TABLE[index].to_string(), code);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Pattern::lookup(&[2, 1, 1, 2, 1, 4]), Some(START_B));
        assert_eq!(Pattern::lookup(&[1, 1, 1, 3, 2, 3]), Some(33));
        assert_eq!(Pattern::lookup(&[1, 1, 1, 1, 1, 1]), None);
    }

    #[test_case(' ', Some(0); "space")]
    #[test_case('A', Some(33); "upper_a")]
    #[test_case('~', Some(94); "tilde")]
    #[test_case('\x1f', None; "unit_separator")]
    #[test_case('\x7f', None; "delete")]
    #[test_case('é', None; "non_ascii")]
    fn test_symbol_index(ch: char, exp: Option<usize>) {
        assert_eq!(symbol_index(ch), exp);
    }

    #[test]
    fn test_symbol_char_round_trip() {
        for ch in ' '..='~' {
            assert_eq!(symbol_char(symbol_index(ch).unwrap()), Some(ch));
        }
        assert_eq!(symbol_char(95), None);
    }
}
