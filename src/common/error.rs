use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum BarcodeError {
    // Barcode builder
    #[error("Invalid character {ch:?} at position {position}")]
    InvalidCharacter { ch: char, position: usize },
    #[error("Invalid render dimension, height and scale must be non-zero")]
    InvalidDimension,

    // Barcode reader
    #[error("Barcode not found")]
    SymbolNotFound,
    #[error("Invalid segment count {0}")]
    InvalidLength(usize),
    #[error("Invalid start symbol")]
    InvalidStartSymbol,
    #[error("Unknown bar pattern in symbol {0}")]
    UnknownPattern(usize),
    #[error("Unsupported symbol {value} in symbol {position}")]
    UnsupportedSymbol { value: usize, position: usize },
    #[error("Checksum mismatch, expected {expected} found {found}")]
    ChecksumMismatch { expected: usize, found: usize },
    #[error("Invalid stop symbol")]
    InvalidStopSymbol,
}

pub type BarcodeResult<T> = Result<T, BarcodeError>;
