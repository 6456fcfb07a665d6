// lessonguard/src/ui/output_format.rs
//! Status-line formatting for stderr messages.
//!
//! Colors are applied only when the caller says the target supports them
//! (normally `is_terminal()` on the stream).

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    color: AnsiColors,
    enable_colors: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, message);
    if enable_colors {
        writeln!(writer, "{}", line.color(color))
    } else {
        writeln!(writer, "{}", line)
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", message, AnsiColors::Cyan, enable_colors)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", message, AnsiColors::Green, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", message, AnsiColors::Yellow, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Error: ", message, AnsiColors::BrightRed, enable_colors)
}

/// A bold section heading.
pub fn print_header<W: Write>(writer: &mut W, title: &str, enable_colors: bool) -> io::Result<()> {
    if enable_colors {
        writeln!(writer, "{}", title.bold().yellow())
    } else {
        writeln!(writer, "{}", title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let out = render(|w| print_error_message(w, "bad input", false));
        assert_eq!(out, "Error: bad input\n");
        let out = render(|w| print_warn_message(w, "careful", false));
        assert_eq!(out, "Warning: careful\n");
    }

    #[test]
    fn test_colored_output_wraps_message() {
        let out = render(|w| print_info_message(w, "hello", true));
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("hello"));
    }
}
