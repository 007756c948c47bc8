//! Barcode identification - check digits, format detection, conversion and
//! normalization.
//!
//! # Architecture
//!
//! - **Checksum** (`checksum.rs`) - EAN/UPC and ISBN-10 check digits, shared by
//!   everything else in this module
//! - **Kind** (`kind.rs`) - [`CodeType`] classification by length and prefix
//! - **Value** (`value.rs`) - [`Barcode`], the validated code; parsing is the
//!   only way in
//! - **Convert** (`convert.rs`) - UPC-A/EAN-13/ISBN-10/ISBN-13 conversion and
//!   the normalized form used for lookups
//! - **Generate** (`generate.rs`) - EAN-13 candidates from a country prefix
//!
//! # Usage
//!
//! ```ignore
//! use barcode::{Barcode, CodeType};
//!
//! let code = Barcode::parse("036000291452")?;
//! assert_eq!(code.code_type(), CodeType::UpcA);
//! assert_eq!(code.normalize().as_str(), "0036000291452");
//! ```

pub mod checksum;
pub mod convert;
pub mod generate;
pub mod kind;
pub mod value;

pub use generate::{GenerateError, generate_batch, generate_single};
pub use kind::CodeType;
pub use value::{Barcode, InputError};
