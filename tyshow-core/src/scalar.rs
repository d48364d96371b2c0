//! The `CScalar` classification trait and its impls for the supported set.
//!
//! Classification is purely static: each impl pins the [`Kind`] as an
//! associated constant, so dispatch resolves at compile time and passing a
//! type outside the supported set is an unsatisfied-bound error rather than a
//! silent fallback. The Rust renditions of the C kinds are:
//!
//! - `bool`, `char` — `_Bool` and plain `char`
//! - `i8`/`i16`/`i32`/`i64`/`i128` — `signed char` through `long long`
//! - `u8`/`u16`/`u32`/`u64`/`u128` — the unsigned column
//! - `f32`/`f64` — `float` and `double` (`long double` has no Rust primitive)
//! - `&str` / `&mut str` — `const char*` / `char*`
//! - `&[char]` / `&mut [char]` — `const wchar_t*` / `wchar_t*`
//! - `*const c_void` / `*mut c_void` — `const void*` / `void*`

use core::ffi::c_void;
use core::fmt::{self, Write as _};

use crate::Kind;

/// Types that participate in kind-directed printing.
///
/// `KIND` is the compile-time classification; `write_value` renders the value
/// the way that kind's format specifier would. Both are deterministic pure
/// functions of the value, with the single sink write as the only effect.
///
/// Implementing this for your own type is the explicit opt-in replacement for
/// the old silent fallback: pick [`Kind::Unknown`] and write nothing if you
/// want that behavior back.
pub trait CScalar {
    /// The kind this type classifies as.
    const KIND: Kind;

    /// Write the value using this kind's formatting convention.
    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result;
}

impl CScalar for bool {
    const KIND: Kind = Kind::Bool;

    // %d: prints 1/0, not true/false
    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl CScalar for char {
    const KIND: Kind = Kind::Char;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        f.write_char(*self)
    }
}

macro_rules! impl_cscalar_for_integer {
    ($type:ty => $kind:ident) => {
        impl CScalar for $type {
            const KIND: Kind = Kind::$kind;

            fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
                write!(f, "{self}")
            }
        }
    };
}

impl_cscalar_for_integer!(i8 => SignedChar);
impl_cscalar_for_integer!(u8 => UnsignedChar);
impl_cscalar_for_integer!(i16 => Short);
impl_cscalar_for_integer!(i32 => Int);
impl_cscalar_for_integer!(i64 => Long);
impl_cscalar_for_integer!(i128 => LongLong);
impl_cscalar_for_integer!(u16 => UnsignedShort);
impl_cscalar_for_integer!(u32 => UnsignedInt);
impl_cscalar_for_integer!(u64 => UnsignedLong);
impl_cscalar_for_integer!(u128 => UnsignedLongLong);

macro_rules! impl_cscalar_for_float {
    ($type:ty => $kind:ident) => {
        impl CScalar for $type {
            const KIND: Kind = Kind::$kind;

            // %f convention: fixed notation, six fractional digits
            fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
                write!(f, "{self:.6}")
            }
        }
    };
}

impl_cscalar_for_float!(f32 => Float);
impl_cscalar_for_float!(f64 => Double);

impl CScalar for &str {
    const KIND: Kind = Kind::ConstCharPtr;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        f.write_str(self)
    }
}

impl CScalar for &mut str {
    const KIND: Kind = Kind::CharPtr;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        f.write_str(self)
    }
}

impl CScalar for &[char] {
    const KIND: Kind = Kind::ConstWideCharPtr;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        for c in self.iter() {
            f.write_char(*c)?;
        }
        Ok(())
    }
}

impl CScalar for &mut [char] {
    const KIND: Kind = Kind::WideCharPtr;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        for c in self.iter() {
            f.write_char(*c)?;
        }
        Ok(())
    }
}

impl CScalar for *const c_void {
    const KIND: Kind = Kind::ConstVoidPtr;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write!(f, "{:p}", *self)
    }
}

impl CScalar for *mut c_void {
    const KIND: Kind = Kind::VoidPtr;

    fn write_value(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write!(f, "{:p}", *self)
    }
}
