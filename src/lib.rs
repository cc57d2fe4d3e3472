//! # code128b
//!
//! A Rust library for generating and reading Code 128 linear barcodes in subset B,
//! which covers printable ASCII one character per symbol.
//!
//! ## Features
//!
//! - **Encoding**: Map text to symbol patterns with the mandatory mod 103 checksum
//! - **Module Widths**: Flat bar/space width sequence any renderer can consume
//! - **Rendering**: Grayscale and RGB images, SVG and Unicode terminal output
//! - **Reading**: Decode width sequences or rendered images with checksum verification
//!
//! ## Quick Start
//!
//! ### Simple Barcode Generation
//!
//! ```rust
//! use code128b::Code128Builder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Height defaults to 40 pixels and scale to 1 pixel per module
//! let barcode = Code128Builder::new("Hello, World!").build()?;
//!
//! let img = barcode.render();
//! assert_eq!(img.width(), 11 + 13 * 11 + 11 + 13);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use code128b::Code128Builder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let barcode = Code128Builder::new("Hello, World!")
//!     .height(80)      // Image height in pixels
//!     .scale(3)        // Pixels per module
//!     .quiet_zone(10)  // Light margin on each side, in modules
//!     .build()?;
//!
//! let svg = barcode.to_svg_string();
//! println!("{}", barcode.to_str());
//! # Ok(())
//! # }
//! ```
//!
//! ### Module Widths Only
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let widths = code128b::encode("Hello")?;
//! for seg in &widths {
//!     // Draw `seg.width` modules, filled when `seg.is_bar`
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Reading a Barcode
//!
//! ```rust
//! use code128b::{reader::scan, Code128Builder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = Code128Builder::new("Hello").scale(2).build()?.render();
//! assert_eq!(scan(&img)?, "Hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Barcode Structure
//!
//! `[START B] [DATA] [CHECKSUM] [STOP]`
//!
//! - Every symbol is 3 bars and 3 spaces, each 1 to 4 modules wide, 11 modules total
//! - STOP has a seventh terminating bar and is 13 modules wide
//! - Each character maps to symbol `code - 32`
//! - Checksum is `(104 + sum of symbol * position) mod 103`, positions starting at 1

pub mod builder;
pub(crate) mod common;
pub mod reader;

pub use builder::{encode, Barcode, Code128Builder};
pub use common::error::{BarcodeError, BarcodeResult};
pub use common::symbol::{Pattern, SYMBOL_TABLE};
pub use common::widths::{ModuleWidths, Segment};
