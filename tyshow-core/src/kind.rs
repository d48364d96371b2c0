//! The closed set of kinds and their lookup tables.

/// The category a supported type classifies into.
///
/// This mirrors the type list of a C11 `_Generic` printing switch: boolean,
/// the character kinds, signed and unsigned integers of four widths, three
/// floating kinds, and the pointer kinds that are printable as text. Pointer
/// kinds distinguish constness even though the representations are identical,
/// because the annotation spells it out.
///
/// Every supported static type maps to exactly one `Kind`; see [`crate::CScalar`]
/// for the mapping. [`Kind::Unknown`] exists so the tables stay total, but no
/// built-in type classifies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `_Bool`, printed `%d`-style as `1`/`0`.
    Bool,
    /// Plain `char`, printed as the character itself.
    Char,
    /// `signed char`.
    SignedChar,
    /// `unsigned char`.
    UnsignedChar,
    /// `short`.
    Short,
    /// `int`.
    Int,
    /// `long`.
    Long,
    /// `long long`.
    LongLong,
    /// `unsigned short`.
    UnsignedShort,
    /// `unsigned int`.
    UnsignedInt,
    /// `unsigned long`.
    UnsignedLong,
    /// `unsigned long long`.
    UnsignedLongLong,
    /// `float`.
    Float,
    /// `double`. Shares its specifier with `Float`.
    Double,
    /// `long double`. Keeps its own `%Lf` specifier in the table even though
    /// no built-in Rust type classifies to it.
    LongDouble,
    /// `char*`, printed as a string.
    CharPtr,
    /// `const char*`, printed as a string.
    ConstCharPtr,
    /// `wchar_t*`, printed as a wide string.
    WideCharPtr,
    /// `const wchar_t*`, printed as a wide string.
    ConstWideCharPtr,
    /// `void*`, printed as an address.
    VoidPtr,
    /// `const void*`, printed as an address.
    ConstVoidPtr,
    /// The fallback kind. It has an empty specifier and an empty annotation;
    /// values classified here format as nothing at all.
    Unknown,
}

impl Kind {
    /// Every kind, in declaration order. Handy for exhaustive table checks.
    pub const ALL: [Kind; 22] = [
        Kind::Bool,
        Kind::Char,
        Kind::SignedChar,
        Kind::UnsignedChar,
        Kind::Short,
        Kind::Int,
        Kind::Long,
        Kind::LongLong,
        Kind::UnsignedShort,
        Kind::UnsignedInt,
        Kind::UnsignedLong,
        Kind::UnsignedLongLong,
        Kind::Float,
        Kind::Double,
        Kind::LongDouble,
        Kind::CharPtr,
        Kind::ConstCharPtr,
        Kind::WideCharPtr,
        Kind::ConstWideCharPtr,
        Kind::VoidPtr,
        Kind::ConstVoidPtr,
        Kind::Unknown,
    ];

    /// The canonical printf-style format specifier for this kind.
    ///
    /// A pure table lookup: no locale, no width or precision computation.
    /// [`Kind::Unknown`] is the one kind without a specifier and yields `""`.
    pub const fn format_spec(self) -> &'static str {
        match self {
            Kind::Bool | Kind::Int => "%d",
            Kind::Char => "%c",
            Kind::SignedChar => "%hhd",
            Kind::UnsignedChar => "%hhu",
            Kind::Short => "%hd",
            Kind::Long => "%ld",
            Kind::LongLong => "%lld",
            Kind::UnsignedShort => "%hu",
            Kind::UnsignedInt => "%u",
            Kind::UnsignedLong => "%lu",
            Kind::UnsignedLongLong => "%llu",
            Kind::Float | Kind::Double => "%f",
            Kind::LongDouble => "%Lf",
            Kind::CharPtr | Kind::ConstCharPtr => "%s",
            Kind::WideCharPtr | Kind::ConstWideCharPtr => "%ls",
            Kind::VoidPtr | Kind::ConstVoidPtr => "%p",
            Kind::Unknown => "",
        }
    }

    /// The cast-style prefix emitted before a formatted value,
    /// e.g. `"<ret> = (const char*) "`.
    ///
    /// `SignedChar` folds into the plain `(char)` spelling, matching the
    /// historical table. [`Kind::Unknown`] yields `""` rather than a
    /// placeholder, so unknown values print as a bare empty line.
    pub const fn annotation(self) -> &'static str {
        match self {
            Kind::Bool => "<ret> = (bool) ",
            Kind::Char | Kind::SignedChar => "<ret> = (char) ",
            Kind::UnsignedChar => "<ret> = (unsigned char) ",
            Kind::Short => "<ret> = (short) ",
            Kind::Int => "<ret> = (int) ",
            Kind::Long => "<ret> = (long) ",
            Kind::LongLong => "<ret> = (long long) ",
            Kind::UnsignedShort => "<ret> = (unsigned short) ",
            Kind::UnsignedInt => "<ret> = (unsigned int) ",
            Kind::UnsignedLong => "<ret> = (unsigned long) ",
            Kind::UnsignedLongLong => "<ret> = (unsigned long long) ",
            Kind::Float => "<ret> = (float) ",
            Kind::Double => "<ret> = (double) ",
            Kind::LongDouble => "<ret> = (long double) ",
            Kind::CharPtr => "<ret> = (char*) ",
            Kind::ConstCharPtr => "<ret> = (const char*) ",
            Kind::WideCharPtr => "<ret> = (wchar_t*) ",
            Kind::ConstWideCharPtr => "<ret> = (const wchar_t*) ",
            Kind::VoidPtr => "<ret> = (void*) ",
            Kind::ConstVoidPtr => "<ret> = (const void*) ",
            Kind::Unknown => "",
        }
    }
}
