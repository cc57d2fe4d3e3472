mod barcode;

pub use barcode::Barcode;

use tracing::{debug, trace};

use crate::common::{
    error::{BarcodeError, BarcodeResult},
    symbol::{symbol_index, SYMBOL_TABLE, START_B, STOP, SYMBOL_SEGMENTS},
    widths::ModuleWidths,
    Checksum,
};

pub const DEFAULT_HEIGHT: u32 = 40;
pub const DEFAULT_SCALE: u32 = 1;
pub const DEFAULT_QUIET_ZONE: u32 = 0;

// Encoder
//------------------------------------------------------------------------------

/// Encodes `text` as Code 128B and returns its bar/space module widths.
///
/// Every character must be printable ASCII (32..=126). The first offending
/// character aborts the call with [`BarcodeError::InvalidCharacter`].
///
/// ```rust
/// let widths = code128b::encode("A").unwrap();
/// assert!(widths[0].is_bar);
/// assert_eq!(widths.total_modules(), 11 + 11 + 11 + 13);
/// ```
pub fn encode(text: &str) -> BarcodeResult<ModuleWidths> {
    let symbols = encode_symbols(text)?;
    Ok(expand_symbols(&symbols))
}

/// Symbol indices of START B, each character, the checksum and STOP.
pub fn encode_symbols(text: &str) -> BarcodeResult<Vec<usize>> {
    let mut symbols = Vec::with_capacity(text.len() + 3);
    symbols.push(START_B);

    let mut checksum = Checksum::new(START_B);
    for (position, ch) in text.chars().enumerate() {
        let symbol = symbol_index(ch).ok_or(BarcodeError::InvalidCharacter { ch, position })?;
        trace!("Character {ch:?} at {position} -> symbol {symbol}");
        checksum.push(symbol);
        symbols.push(symbol);
    }

    debug!("Weighted sum {}, checksum symbol {}", checksum.weighted_sum(), checksum.symbol());
    symbols.push(checksum.symbol());
    symbols.push(STOP);

    Ok(symbols)
}

/// Concatenates the patterns of `symbols` into one alternating width sequence.
pub fn expand_symbols(symbols: &[usize]) -> ModuleWidths {
    let mut widths = ModuleWidths::with_capacity(symbols.len() * SYMBOL_SEGMENTS + 1);
    symbols.iter().for_each(|&s| widths.push_pattern(&SYMBOL_TABLE[s]));
    widths
}


// Builder
//------------------------------------------------------------------------------

pub struct Code128Builder<'a> {
    data: &'a str,
    height: u32,
    scale: u32,
    quiet_zone: u32,
}

impl<'a> Code128Builder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, height: DEFAULT_HEIGHT, scale: DEFAULT_SCALE, quiet_zone: DEFAULT_QUIET_ZONE }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    /// Image height in pixels.
    pub fn height(&mut self, height: u32) -> &mut Self {
        self.height = height;
        self
    }

    /// Pixels per module.
    pub fn scale(&mut self, scale: u32) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Light margin on each side, in modules.
    pub fn quiet_zone(&mut self, quiet_zone: u32) -> &mut Self {
        self.quiet_zone = quiet_zone;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Data length: {}, Height: {}, Scale: {}, Quiet zone: {} }}",
            self.data.chars().count(),
            self.height,
            self.scale,
            self.quiet_zone
        )
    }
}

impl Code128Builder<'_> {
    pub fn build(&self) -> BarcodeResult<Barcode> {
        debug!("Generating barcode {}...", self.metadata());
        if self.height == 0 || self.scale == 0 {
            return Err(BarcodeError::InvalidDimension);
        }

        debug!("Encoding data...");
        let symbols = encode_symbols(self.data)?;

        debug!("Expanding {} symbols into module widths...", symbols.len());
        let widths = expand_symbols(&symbols);

        // Rendered width must fit the u32 image dimensions
        u32::try_from(widths.total_modules())
            .ok()
            .and_then(|m| self.quiet_zone.checked_mul(2).and_then(|qz| m.checked_add(qz)))
            .and_then(|m| m.checked_mul(self.scale))
            .ok_or(BarcodeError::InvalidDimension)?;

        let barcode = Barcode::new(self.data, symbols, widths, self.height, self.scale, self.quiet_zone);
        debug!("Barcode generated: {}", barcode.metadata());

        Ok(barcode)
    }
}

#[cfg(test)]
mod builder_tests {
    use test_case::test_case;

    use super::Code128Builder;
    use crate::common::error::BarcodeError;

    #[test]
    fn test_metadata() {
        let mut builder = Code128Builder::new("Hello");
        assert_eq!(builder.metadata(), "{ Data length: 5, Height: 40, Scale: 1, Quiet zone: 0 }");
        builder.height(80).scale(3).quiet_zone(10);
        assert_eq!(builder.metadata(), "{ Data length: 5, Height: 80, Scale: 3, Quiet zone: 10 }");
    }

    #[test]
    fn test_builder_defaults() {
        let barcode = Code128Builder::new("Hello").build().unwrap();
        assert_eq!(barcode.height(), 40);
        assert_eq!(barcode.scale(), 1);
        assert_eq!(barcode.quiet_zone(), 0);
        assert_eq!(barcode.text(), "Hello");
        assert_eq!(barcode.checksum(), 76);
    }

    #[test_case(0, 1, 0; "zero_height")]
    #[test_case(40, 0, 0; "zero_scale")]
    #[test_case(40, 1, u32::MAX / 2 + 1; "oversized_quiet_zone")]
    #[test_case(40, u32::MAX / 2, 0; "oversized_scale")]
    #[test_case(40, 2, u32::MAX / 4; "oversized_scaled_quiet_zone")]
    fn test_builder_invalid_dimension(height: u32, scale: u32, quiet_zone: u32) {
        let res =
            Code128Builder::new("Hello").height(height).scale(scale).quiet_zone(quiet_zone).build();
        assert_eq!(res.unwrap_err(), BarcodeError::InvalidDimension);
    }

    #[test]
    fn test_builder_invalid_char() {
        let res = Code128Builder::new("Hi\n").build();
        assert_eq!(res.unwrap_err(), BarcodeError::InvalidCharacter { ch: '\n', position: 2 });
    }

    #[test]
    fn test_builder_large_quiet_zone() {
        let barcode = Code128Builder::new("Hello").scale(4).quiet_zone(1 << 20).build().unwrap();
        assert_eq!(barcode.width_px(), (90 + (2 << 20)) * 4);
    }

    #[test]
    fn test_builder_data_replaced() {
        let mut builder = Code128Builder::new("first");
        builder.data("second");
        assert_eq!(builder.build().unwrap().text(), "second");
    }
}
