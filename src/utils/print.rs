/*!
 * Element Printing
 */

use std::fmt;

pub fn print_int(out: &mut dyn fmt::Write, value: &i32) -> fmt::Result {
    write!(out, "{value}")
}

/// Six decimal places
pub fn print_float(out: &mut dyn fmt::Write, value: &f32) -> fmt::Result {
    write!(out, "{value:.6}")
}

/// Six decimal places
pub fn print_double(out: &mut dyn fmt::Write, value: &f64) -> fmt::Result {
    write!(out, "{value:.6}")
}

pub fn print_string(out: &mut dyn fmt::Write, value: &str) -> fmt::Result {
    out.write_str(value)
}

pub fn print_char(out: &mut dyn fmt::Write, value: &char) -> fmt::Result {
    out.write_char(*value)
}

/// `0x`-prefixed lowercase hexadecimal, e.g. for block addresses
pub fn print_hex(out: &mut dyn fmt::Write, value: &usize) -> fmt::Result {
    write!(out, "{value:#x}")
}
