use image::{GrayImage, Luma};
use tracing::debug;

use super::decode;
use crate::common::{
    error::{BarcodeError, BarcodeResult},
    symbol::{STOP_MODULES, STOP_SEGMENTS, SYMBOL_MODULES, SYMBOL_SEGMENTS},
    widths::ModuleWidths,
};

const THRESHOLD: u8 = 128;

fn is_dark(p: &Luma<u8>) -> bool {
    p.0[0] < THRESHOLD
}

/// Pixel run lengths of row `y`, from the first dark pixel to the last one.
///
/// The first run is always dark and runs alternate from there. A row outside the
/// image has no runs.
pub fn read_runs(img: &GrayImage, y: u32) -> Vec<u32> {
    if y >= img.height() {
        return Vec::new();
    }

    let row = (0..img.width()).map(|x| is_dark(img.get_pixel(x, y))).collect::<Vec<_>>();
    let (Some(first), Some(last)) =
        (row.iter().position(|&d| d), row.iter().rposition(|&d| d))
    else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut color = true;
    let mut len = 0;
    for &d in &row[first..=last] {
        if d == color {
            len += 1;
        } else {
            runs.push(len);
            color = d;
            len = 1;
        }
    }
    runs.push(len);
    runs
}

/// Reads the barcode across the middle row of `img`.
///
/// The module size is inferred from the run count, so any integer scale and
/// quiet zone are accepted.
pub fn scan(img: &GrayImage) -> BarcodeResult<String> {
    if img.width() == 0 || img.height() == 0 {
        return Err(BarcodeError::SymbolNotFound);
    }

    debug!("Reading runs...");
    let runs = read_runs(img, img.height() / 2);
    if runs.is_empty() {
        return Err(BarcodeError::SymbolNotFound);
    }

    // Start, data & checksum have 6 segments each, stop has 7
    let count = runs.len();
    if count < STOP_SEGMENTS || (count - STOP_SEGMENTS) % SYMBOL_SEGMENTS != 0 {
        return Err(BarcodeError::InvalidLength(count));
    }
    let symbols = (count - STOP_SEGMENTS) / SYMBOL_SEGMENTS;
    let modules = symbols * SYMBOL_MODULES + STOP_MODULES;

    let total_px = runs.iter().sum::<u32>();
    let module_sz = total_px as f32 / modules as f32;
    debug!("Found {count} runs over {total_px} pixels, module size {module_sz:.2}");

    let widths = runs.iter().map(|&r| (r as f32 / module_sz).round() as u8).collect::<Vec<_>>();

    debug!("Decoding module widths...");
    decode(&ModuleWidths::from(&widths[..]))
}
