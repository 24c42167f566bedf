//! Tests for the fixed-width field codec

extern crate std;

use std::io::Cursor;
use byteorder::{ByteOrder, NativeEndian};
use proptest::prelude::*;

use crate::io::field_codec::{encode_text, parse_numeric, FieldRead};
use crate::nitf::errors::NitfError;

#[test]
fn test_read_text_is_verbatim() {
    let mut cursor = Cursor::new(b"AB  CD".to_vec());
    let value = cursor.read_text("FTITLE", 4).unwrap();
    std::assert_eq!(value, "AB  ");
    std::assert_eq!(cursor.tell().unwrap(), 4);
}

#[test]
fn test_read_text_keeps_high_bytes() {
    let raw = vec![b'R', 0xE9, b's', b'u', b'm', 0xFF];
    let mut cursor = Cursor::new(raw.clone());
    let value = cursor.read_text("ICOM", 6).unwrap();
    std::assert_eq!(value, "R\u{e9}sum\u{ff}");
    std::assert_eq!(value.chars().count(), 6);
    std::assert_eq!(encode_text(&value), Some(raw));
}

#[test]
fn test_encode_text_rejects_wide_chars() {
    std::assert_eq!(encode_text("\u{20ac}"), None);
}

#[test]
fn test_read_numeric_tolerates_blanks() {
    let mut cursor = Cursor::new(b" 42  00017".to_vec());
    std::assert_eq!(cursor.read_numeric("HL", 5).unwrap(), 42);
    std::assert_eq!(cursor.read_numeric("FL", 5).unwrap(), 17);
}

#[test]
fn test_read_numeric_rejects_garbage() {
    let mut cursor = Cursor::new(b"xx4 2".to_vec());
    cursor.set_position(2);
    match cursor.read_numeric("NUMI", 3) {
        Err(NitfError::MalformedField { field, offset, raw }) => {
            std::assert_eq!(field, "NUMI");
            std::assert_eq!(offset, 2);
            std::assert_eq!(raw, "4 2");
        }
        other => panic!("expected MalformedField, got {:?}", other),
    }
}

#[test]
fn test_read_numeric_rejects_blank_field() {
    let mut cursor = Cursor::new(b"     ".to_vec());
    let err = cursor.read_numeric("FSCOP", 5).unwrap_err();
    std::assert!(err.is_structural());
}

#[test]
fn test_read_numeric_or_unset() {
    let mut cursor = Cursor::new(b"     00003".to_vec());
    std::assert_eq!(cursor.read_numeric_or_unset("FSCOP", 5).unwrap(), None);
    std::assert_eq!(cursor.read_numeric_or_unset("FSCPYS", 5).unwrap(), Some(3));
}

#[test]
fn test_read_binary_network_order() {
    let mut cursor = Cursor::new(vec![0x01, 0x02, 0x00, 0x00, 0x01, 0x00]);
    std::assert_eq!(cursor.read_binary("SHORT", 2).unwrap(), 0x0102);
    std::assert_eq!(cursor.read_binary("LONG", 4).unwrap(), 0x0100);
}

#[test]
fn test_read_binary_odd_width_host_order() {
    let bytes = [0x10, 0x20, 0x30];
    let mut cursor = Cursor::new(bytes.to_vec());
    std::assert_eq!(cursor.read_binary("LTC", 3).unwrap(), NativeEndian::read_uint(&bytes, 3));
}

#[test]
fn test_read_binary_invalid_width() {
    let mut cursor = Cursor::new(vec![0u8; 16]);
    std::assert!(matches!(cursor.read_binary("X", 0), Err(NitfError::MalformedField { .. })));
    std::assert!(matches!(cursor.read_binary("X", 9), Err(NitfError::MalformedField { .. })));
}

#[test]
fn test_short_read_is_unexpected_eof() {
    let mut cursor = Cursor::new(b"NIT".to_vec());
    match cursor.read_raw("FHDR", 4) {
        Err(NitfError::UnexpectedEof { field, offset }) => {
            std::assert_eq!(field, "FHDR");
            std::assert_eq!(offset, 0);
        }
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}

proptest! {
    #[test]
    fn prop_numeric_accepts_padded_digits(value in 0u64..1_000_000, pad in 0usize..4) {
        let field = format!("{}{}{}", " ".repeat(pad), value, " ".repeat(pad));
        prop_assert_eq!(parse_numeric(field.as_bytes()), Some(value));
    }

    #[test]
    fn prop_numeric_rejects_embedded_letters(prefix in "[0-9]{1,4}", letter in "[A-Za-z]", suffix in "[0-9]{0,4}") {
        let field = format!("{}{}{}", prefix, letter, suffix);
        prop_assert_eq!(parse_numeric(field.as_bytes()), None);
    }
}
