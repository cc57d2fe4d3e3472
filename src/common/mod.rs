pub mod checksum;
pub mod error;
pub mod symbol;
pub mod widths;

pub use checksum::Checksum;
