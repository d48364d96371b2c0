//! `Display` integration for kind-classified values.

use core::fmt::{self, Display, Formatter};

use tyshow_core::CScalar;

use crate::Printer;

/// Display wrapper around a classified value.
///
/// Renders annotation + formatted value, same as [`Printer::format`], so a
/// classified value can drop straight into `format!`/`println!` pipelines.
pub struct Show<'a, T: CScalar + ?Sized> {
    pub(crate) value: &'a T,
    pub(crate) printer: Printer,
}

impl<T: CScalar + ?Sized> Display for Show<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.printer.write(self.value, f)
    }
}

/// Extension trait to get a displayable wrapper for any classified value.
pub trait ShowExt: CScalar {
    /// Wrap with default printer settings.
    fn show(&self) -> Show<'_, Self>;

    /// Wrap with custom printer settings.
    fn show_with(&self, printer: Printer) -> Show<'_, Self>;
}

impl<T: CScalar + ?Sized> ShowExt for T {
    fn show(&self) -> Show<'_, Self> {
        Show {
            value: self,
            printer: Printer::new(),
        }
    }

    fn show_with(&self, printer: Printer) -> Show<'_, Self> {
        Show {
            value: self,
            printer,
        }
    }
}
