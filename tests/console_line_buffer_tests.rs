//! Line buffer tests

use hwctl::console::line_buffer::{LineBuffer, MAX_LINE};

#[test]
fn test_line_buffer_push() {
    let mut buf = LineBuffer::new();

    buf.push('h');
    buf.push('e');
    buf.push('l');
    buf.push('p');

    assert_eq!(buf.as_str(), "help");
}

#[test]
fn test_line_buffer_backspace() {
    let mut buf = LineBuffer::new();

    buf.set("help");
    buf.backspace();
    buf.backspace();

    assert_eq!(buf.as_str(), "he");
}

#[test]
fn test_line_buffer_backspace_empty() {
    let mut buf = LineBuffer::new();

    buf.backspace(); // should not panic
    assert_eq!(buf.as_str(), "");
}

#[test]
fn test_line_buffer_clear() {
    let mut buf = LineBuffer::new();

    buf.set("help");
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_line_buffer_set_from_str() {
    let mut buf = LineBuffer::new();

    buf.set("show fan.speed");
    assert_eq!(buf.as_str(), "show fan.speed");
}

#[test]
fn test_line_buffer_overflow() {
    let mut buf = LineBuffer::new();

    for i in 0..MAX_LINE + 10 {
        buf.push((b'a' + (i % 26) as u8) as char);
    }

    // Input past the limit is dropped
    assert_eq!(buf.len(), MAX_LINE);
}

#[test]
fn test_line_buffer_set_truncates() {
    let mut buf = LineBuffer::new();

    let long = "x".repeat(MAX_LINE + 50);
    buf.set(&long);
    assert_eq!(buf.len(), MAX_LINE);
}
