//! Printer implementation: annotation + value composition and sequence output.

use core::fmt::{self, Write as _};
use std::io::{self, Write as _};

use owo_colors::OwoColorize;

use tyshow_core::{CScalar, Kind};

/// A configurable printer for kind-classified values.
///
/// The printer holds only configuration; every call classifies its argument
/// once (at compile time), looks the format and annotation up once, and
/// performs a single write against the sink. The `print*` family composes the
/// whole line in memory first, so a full call is the atomic unit of
/// interleaving when several threads share a sink.
#[derive(Debug, Clone)]
pub struct Printer {
    use_colors: bool,
    sequence_annotations: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self {
            use_colors: std::env::var_os("NO_COLOR").is_none(),
            sequence_annotations: false,
        }
    }
}

impl Printer {
    /// Create a new `Printer` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable dimming of the annotation prefix.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Emit the *element* kind's annotation before printed sequences.
    ///
    /// Off by default: the historical behavior classified the sequence handle
    /// itself, which for every element-pointer type resolved to an empty
    /// annotation anyway.
    pub fn with_sequence_annotations(mut self, enabled: bool) -> Self {
        self.sequence_annotations = enabled;
        self
    }

    /// Format annotation + value to a string (no trailing newline).
    pub fn format<T: CScalar + ?Sized>(&self, value: &T) -> String {
        let mut output = String::new();
        self.write(value, &mut output).expect("formatting failed");
        output
    }

    /// Format the value alone: no annotation, no newline.
    pub fn format_raw<T: CScalar + ?Sized>(&self, value: &T) -> String {
        let mut output = String::new();
        self.write_raw(value, &mut output).expect("formatting failed");
        output
    }

    /// Format a sequence as `[a, b, c]`, elements in raw form.
    pub fn format_sequence<T: CScalar>(&self, items: &[T]) -> String {
        let mut output = String::new();
        self.write_sequence(items, &mut output)
            .expect("formatting failed");
        output
    }

    /// Write annotation + formatted value into a sink.
    pub fn write<T: CScalar + ?Sized>(&self, value: &T, f: &mut dyn fmt::Write) -> fmt::Result {
        self.write_annotation(T::KIND, f)?;
        value.write_value(f)
    }

    /// Write the formatted value only.
    pub fn write_raw<T: CScalar + ?Sized>(&self, value: &T, f: &mut dyn fmt::Write) -> fmt::Result {
        value.write_value(f)
    }

    /// Write a bracketed, comma-separated sequence into a sink.
    ///
    /// The element type is classified once and drives both formatting and the
    /// optional leading annotation. An empty slice writes `[]`.
    pub fn write_sequence<T: CScalar>(&self, items: &[T], f: &mut dyn fmt::Write) -> fmt::Result {
        if self.sequence_annotations {
            self.write_annotation(T::KIND, f)?;
        }
        f.write_str("[")?;
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.write_value(f)?;
        }
        f.write_str("]")
    }

    /// Print annotation + value + newline to stdout.
    ///
    /// The line is composed in memory and flushed as one write; a sink
    /// failure propagates as-is, nothing is buffered or retried.
    pub fn print<T: CScalar + ?Sized>(&self, value: &T) -> io::Result<()> {
        self.print_to(value, &mut io::stdout().lock())
    }

    /// Like [`Printer::print`], against an explicit byte sink.
    pub fn print_to<T: CScalar + ?Sized>(
        &self,
        value: &T,
        sink: &mut dyn io::Write,
    ) -> io::Result<()> {
        let mut line = self.format(value);
        line.push('\n');
        sink.write_all(line.as_bytes())
    }

    /// Print the value alone to stdout: no annotation, no newline.
    pub fn print_raw<T: CScalar + ?Sized>(&self, value: &T) -> io::Result<()> {
        self.print_raw_to(value, &mut io::stdout().lock())
    }

    /// Like [`Printer::print_raw`], against an explicit byte sink.
    pub fn print_raw_to<T: CScalar + ?Sized>(
        &self,
        value: &T,
        sink: &mut dyn io::Write,
    ) -> io::Result<()> {
        sink.write_all(self.format_raw(value).as_bytes())
    }

    /// Print a sequence to stdout (no trailing newline, matching scalar raw
    /// output).
    pub fn print_sequence<T: CScalar>(&self, items: &[T]) -> io::Result<()> {
        self.print_sequence_to(items, &mut io::stdout().lock())
    }

    /// Like [`Printer::print_sequence`], against an explicit byte sink.
    pub fn print_sequence_to<T: CScalar>(
        &self,
        items: &[T],
        sink: &mut dyn io::Write,
    ) -> io::Result<()> {
        sink.write_all(self.format_sequence(items).as_bytes())
    }

    fn write_annotation(&self, kind: Kind, f: &mut dyn fmt::Write) -> fmt::Result {
        let annotation = kind.annotation();
        if annotation.is_empty() {
            return Ok(());
        }
        if self.use_colors {
            write!(f, "{}", annotation.dimmed())
        } else {
            f.write_str(annotation)
        }
    }
}
