#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

//! Type-directed C-style generic printing.
//!
//! Given a value whose type is statically known, [`Printer`] selects a format
//! convention and a cast-style annotation prefix at compile time (via
//! [`CScalar`]) and composes them into printed output, in the spirit of a C11
//! `_Generic` printing switch:
//!
//! ```
//! use tyshow::Printer;
//!
//! let printer = Printer::new().with_colors(false);
//! assert_eq!(printer.format(&10), "<ret> = (int) 10");
//! assert_eq!(printer.format(&10.10), "<ret> = (double) 10.100000");
//! assert_eq!(printer.format(&"asdf"), "<ret> = (const char*) asdf");
//! assert_eq!(printer.format_sequence(&[1, 1, 1, 2, 2, 2]), "[1, 1, 1, 2, 2, 2]");
//! ```
//!
//! Classification happens once per call; unsupported types are rejected at
//! compile time rather than degrading to an empty format:
//!
//! ```compile_fail
//! use tyshow::Printer;
//!
//! // Duration is not a classifiable scalar: unsatisfied `CScalar` bound.
//! Printer::new().format(&core::time::Duration::ZERO);
//! ```

mod display;
mod printer;

pub use display::*;
pub use printer::*;

pub use tyshow_core::{CScalar, Kind};
