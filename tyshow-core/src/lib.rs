#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

//! Core vocabulary for type-directed C-style printing.
//!
//! This crate holds the closed [`Kind`] enumeration with its format-specifier
//! and annotation tables, and the [`CScalar`] trait that maps a Rust type to
//! its kind at compile time. The printing surface lives in the `tyshow` crate;
//! everything here is `core`-only and allocation-free.

mod kind;
mod scalar;

pub use kind::*;
pub use scalar::*;
