use core::ffi::c_void;
use std::io;

use insta::assert_snapshot;
use tyshow::{CScalar, Kind, Printer};

fn printer() -> Printer {
    Printer::new().with_colors(false)
}

#[test]
fn scalar_output_per_kind() {
    assert_snapshot!(printer().format(&true), @"<ret> = (bool) 1");
    assert_snapshot!(printer().format(&'x'), @"<ret> = (char) x");
    assert_snapshot!(printer().format(&-5i8), @"<ret> = (char) -5");
    assert_snapshot!(printer().format(&200u8), @"<ret> = (unsigned char) 200");
    assert_snapshot!(printer().format(&-300i16), @"<ret> = (short) -300");
    assert_snapshot!(printer().format(&10), @"<ret> = (int) 10");
    assert_snapshot!(printer().format(&10i64), @"<ret> = (long) 10");
    assert_snapshot!(printer().format(&10i128), @"<ret> = (long long) 10");
    assert_snapshot!(printer().format(&7u16), @"<ret> = (unsigned short) 7");
    assert_snapshot!(printer().format(&7u32), @"<ret> = (unsigned int) 7");
    assert_snapshot!(printer().format(&7u64), @"<ret> = (unsigned long) 7");
    assert_snapshot!(printer().format(&7u128), @"<ret> = (unsigned long long) 7");
    assert_snapshot!(printer().format(&1.5f32), @"<ret> = (float) 1.500000");
    assert_snapshot!(printer().format(&10.10), @"<ret> = (double) 10.100000");
    assert_snapshot!(printer().format(&"asdf"), @"<ret> = (const char*) asdf");
}

#[test]
fn mutable_string_kinds() {
    let mut owned = String::from("asdf");
    let s: &mut str = owned.as_mut_str();
    assert_snapshot!(printer().format(&s), @"<ret> = (char*) asdf");

    let mut buf = ['w', 'i', 'd', 'e'];
    let wide: &mut [char] = &mut buf;
    assert_snapshot!(printer().format(&wide), @"<ret> = (wchar_t*) wide");
}

#[test]
fn wide_string_kind() {
    let wide: &[char] = &['w', 'i', 'd', 'e'];
    assert_snapshot!(printer().format(&wide), @"<ret> = (const wchar_t*) wide");
}

#[test]
fn void_pointer_kinds() {
    let null_const: *const c_void = core::ptr::null();
    assert_snapshot!(printer().format(&null_const), @"<ret> = (const void*) 0x0");

    let null_mut: *mut c_void = core::ptr::null_mut();
    assert_snapshot!(printer().format(&null_mut), @"<ret> = (void*) 0x0");

    let x = 7i32;
    let p = &x as *const i32 as *const c_void;
    let rendered = printer().format(&p);
    assert!(rendered.starts_with("<ret> = (const void*) 0x"), "{rendered}");
}

fn assert_composes<T: CScalar + ?Sized>(value: &T) {
    let p = printer();
    let expected = format!("{}{}", T::KIND.annotation(), p.format_raw(value));
    assert_eq!(p.format(value), expected, "composition broke for {:?}", T::KIND);
}

#[test]
fn format_is_annotation_plus_raw() {
    assert_composes(&true);
    assert_composes(&'x');
    assert_composes(&-5i8);
    assert_composes(&200u8);
    assert_composes(&-300i16);
    assert_composes(&10i32);
    assert_composes(&10i64);
    assert_composes(&10i128);
    assert_composes(&7u16);
    assert_composes(&7u32);
    assert_composes(&7u64);
    assert_composes(&7u128);
    assert_composes(&1.5f32);
    assert_composes(&10.10f64);
    assert_composes(&"asdf");

    let mut owned = String::from("asdf");
    let s: &mut str = owned.as_mut_str();
    assert_composes(&s);

    let wide: &[char] = &['a', 'b'];
    assert_composes(&wide);
    let mut buf = ['a', 'b'];
    let wide_mut: &mut [char] = &mut buf;
    assert_composes(&wide_mut);

    let null_const: *const c_void = core::ptr::null();
    assert_composes(&null_const);
    let null_mut: *mut c_void = core::ptr::null_mut();
    assert_composes(&null_mut);
}

#[test]
fn print_appends_exactly_one_newline() {
    let mut sink = Vec::new();
    printer().print_to(&10, &mut sink).unwrap();
    assert_eq!(sink, b"<ret> = (int) 10\n");

    sink.clear();
    printer().print_to(&"asdf", &mut sink).unwrap();
    assert_eq!(sink, b"<ret> = (const char*) asdf\n");
}

#[test]
fn print_raw_has_no_annotation_and_no_newline() {
    let mut sink = Vec::new();
    printer().print_raw_to(&10, &mut sink).unwrap();
    assert_eq!(sink, b"10");
}

#[test]
fn double_round_trips_through_text() {
    let rendered = printer().format_raw(&10.10f64);
    assert_snapshot!(rendered, @"10.100000");
    let reparsed: f64 = rendered.parse().unwrap();
    assert!((reparsed - 10.10).abs() < 1e-9);
}

struct Mystery;

impl CScalar for Mystery {
    const KIND: Kind = Kind::Unknown;

    fn write_value(&self, _f: &mut dyn core::fmt::Write) -> core::fmt::Result {
        Ok(())
    }
}

#[test]
fn unknown_kind_prints_an_empty_line() {
    assert_eq!(Kind::Unknown.format_spec(), "");
    assert_eq!(printer().format(&Mystery), "");

    let mut sink = Vec::new();
    printer().print_to(&Mystery, &mut sink).unwrap();
    assert_eq!(sink, b"\n");
}

#[test]
fn colors_only_touch_the_annotation() {
    let colored = Printer::new().with_colors(true).format(&10);
    assert!(colored.contains("\u{1b}["), "{colored:?}");
    assert!(colored.ends_with("10"), "{colored:?}");
    assert!(colored.contains("<ret> = (int) "), "{colored:?}");

    // Raw output never carries styling.
    let raw = Printer::new().with_colors(true).format_raw(&10);
    assert_eq!(raw, "10");
}

struct BrokenSink;

impl io::Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_propagates() {
    let err = printer().print_to(&10, &mut BrokenSink).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[derive(Default)]
struct CountingSink {
    writes: usize,
    bytes: Vec<u8>,
}

impl io::Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn print_is_one_sink_write() {
    let mut sink = CountingSink::default();
    printer().print_to(&10.10, &mut sink).unwrap();
    assert_eq!(sink.writes, 1);
    assert_eq!(sink.bytes, b"<ret> = (double) 10.100000\n");
}
