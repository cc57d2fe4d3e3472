mod scan;

pub use scan::{read_runs, scan};

use tracing::{debug, trace};

use crate::common::{
    error::{BarcodeError, BarcodeResult},
    symbol::{symbol_char, Pattern, SYMBOL_SEGMENTS, SYMBOL_TABLE, START_A, START_B, START_C, STOP},
    widths::ModuleWidths,
    Checksum,
};

// Decoder
//------------------------------------------------------------------------------

/// Recovers the text of a Code 128B module width sequence.
///
/// The start and stop patterns are matched exactly and the embedded checksum
/// symbol must equal the one recomputed from the data.
///
/// ```rust
/// let widths = code128b::encode("Hello").unwrap();
/// assert_eq!(code128b::reader::decode(&widths).unwrap(), "Hello");
/// ```
pub fn decode(widths: &ModuleWidths) -> BarcodeResult<String> {
    let symbols = decode_symbols(widths)?;
    debug!("Decoded {} symbols", symbols.len());

    let (&start, rest) = symbols.split_first().ok_or(BarcodeError::SymbolNotFound)?;
    if start != START_B {
        return Err(BarcodeError::InvalidStartSymbol);
    }

    let (&found, data) = rest.split_last().ok_or(BarcodeError::InvalidLength(widths.len()))?;

    debug!("Verifying checksum...");
    let expected = data.iter().copied().collect::<Checksum>().symbol();
    if expected != found {
        return Err(BarcodeError::ChecksumMismatch { expected, found });
    }

    data.iter()
        .enumerate()
        .map(|(i, &s)| {
            symbol_char(s).ok_or(BarcodeError::UnsupportedSymbol { value: s, position: i + 1 })
        })
        .collect()
}

/// Splits the sequence into symbols, stop excluded, and maps each to its table index.
fn decode_symbols(widths: &ModuleWidths) -> BarcodeResult<Vec<usize>> {
    let raw = widths.widths();
    let len = raw.len();
    if len == 0 {
        return Err(BarcodeError::SymbolNotFound);
    }

    // Start, checksum & stop at minimum, with one extra bar in stop
    if len % SYMBOL_SEGMENTS != 1 || len < 3 * SYMBOL_SEGMENTS + 1 {
        return Err(BarcodeError::InvalidLength(len));
    }

    let (body, stop) = raw.split_at(len - SYMBOL_TABLE[STOP].segment_count());
    if stop != SYMBOL_TABLE[STOP].widths() {
        return Err(BarcodeError::InvalidStopSymbol);
    }

    body.chunks_exact(SYMBOL_SEGMENTS)
        .enumerate()
        .map(|(i, chunk)| {
            let s = Pattern::lookup(chunk).ok_or(BarcodeError::UnknownPattern(i))?;
            trace!("Symbol {i}: {} -> {s}", SYMBOL_TABLE[s]);
            match s {
                START_A | START_C if i == 0 => Err(BarcodeError::InvalidStartSymbol),
                START_A..=STOP if i != 0 => {
                    Err(BarcodeError::UnsupportedSymbol { value: s, position: i })
                }
                _ => Ok(s),
            }
        })
        .collect()
}

#[cfg(test)]
mod decoder_tests {
    use test_case::test_case;

    use super::decode;
    use crate::builder::{encode, expand_symbols};
    use crate::common::{
        error::BarcodeError,
        symbol::{START_A, START_B, STOP},
        widths::ModuleWidths,
    };

    #[test_case(""; "empty")]
    #[test_case("A"; "single")]
    #[test_case("Hello, world!"; "sentence")]
    #[test_case(" !\"#$%&'()*+,-./0123456789:;<=>?@[\\]^_`{|}~"; "punctuation")]
    fn test_decode(data: &str) {
        let widths = encode(data).unwrap();
        assert_eq!(decode(&widths).unwrap(), data);
    }

    #[test]
    fn test_decode_checksum_mismatch() {
        // "A" with checksum symbol 35 instead of 34
        let widths = expand_symbols(&[START_B, 33, 35, STOP]);
        assert_eq!(
            decode(&widths).unwrap_err(),
            BarcodeError::ChecksumMismatch { expected: 34, found: 35 }
        );
    }

    #[test]
    fn test_decode_corrupted_data() {
        // "B" in place of "A" keeps a valid pattern but breaks the checksum
        let widths = expand_symbols(&[START_B, 34, 34, STOP]);
        assert_eq!(
            decode(&widths).unwrap_err(),
            BarcodeError::ChecksumMismatch { expected: 35, found: 34 }
        );
    }

    #[test]
    fn test_decode_invalid_start() {
        let widths = expand_symbols(&[START_A, 33, 34, STOP]);
        assert_eq!(decode(&widths).unwrap_err(), BarcodeError::InvalidStartSymbol);

        let widths = expand_symbols(&[0, 33, 34, STOP]);
        assert_eq!(decode(&widths).unwrap_err(), BarcodeError::InvalidStartSymbol);
    }

    #[test]
    fn test_decode_unsupported_symbol() {
        // DEL (95) is in the table but outside printable subset B
        let checksum = (104 + 95) % 103;
        let widths = expand_symbols(&[START_B, 95, checksum, STOP]);
        assert_eq!(
            decode(&widths).unwrap_err(),
            BarcodeError::UnsupportedSymbol { value: 95, position: 1 }
        );

        let widths = expand_symbols(&[START_B, START_A, 0, STOP]);
        assert_eq!(
            decode(&widths).unwrap_err(),
            BarcodeError::UnsupportedSymbol { value: START_A, position: 1 }
        );
    }

    #[test]
    fn test_decode_invalid_stop() {
        let mut raw = encode("A").unwrap().widths();
        let last = raw.len() - 1;
        raw[last] = 3;
        let widths = ModuleWidths::from(&raw[..]);
        assert_eq!(decode(&widths).unwrap_err(), BarcodeError::InvalidStopSymbol);
    }

    #[test]
    fn test_decode_unknown_pattern() {
        let mut raw = encode("AB").unwrap().widths();
        raw[6..12].copy_from_slice(&[1, 1, 1, 1, 1, 6]);
        let widths = ModuleWidths::from(&raw[..]);
        assert_eq!(decode(&widths).unwrap_err(), BarcodeError::UnknownPattern(1));
    }

    #[test_case(vec![], BarcodeError::SymbolNotFound; "no_segments")]
    #[test_case(vec![2, 1, 1, 2, 1, 4], BarcodeError::InvalidLength(6); "start_only")]
    #[test_case(vec![2, 1, 1, 2, 1, 4, 2, 3, 3, 1, 1, 1, 2], BarcodeError::InvalidLength(13); "no_checksum")]
    fn test_decode_invalid_length(raw: Vec<u8>, err: BarcodeError) {
        let widths = ModuleWidths::from(&raw[..]);
        assert_eq!(decode(&widths).unwrap_err(), err);
    }
}
