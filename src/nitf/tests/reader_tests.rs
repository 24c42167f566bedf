//! Tests for whole-file reading

extern crate std;

use std::io::{Cursor, Seek, SeekFrom};
use byteorder::{ByteOrder, NativeEndian};
use proptest::prelude::*;

use crate::io::field_codec::encode_text;
use crate::nitf::errors::{ErrorKind, NitfError};
use crate::nitf::reader::{detect_version, NitfReader, NitfReaderBuilder};
use crate::nitf::tests::test_utils::{
    extras, extras_raw, image_subheader, text_subheader, tre, FieldWriter, ImageOptions, NitfFileBuilder,
    MINIMAL_HEADER_LENGTH,
};
use crate::nitf::tre::TreRegistry;
use crate::nitf::types::SegmentKind;
use crate::nitf::validation;
use crate::nitf::version::NitfVersion;

#[test]
fn test_minimal_21_file() {
    let bytes = NitfFileBuilder::new(NitfVersion::V21).build();
    std::assert_eq!(bytes.len(), MINIMAL_HEADER_LENGTH);

    let record = NitfReader::new().read(&mut Cursor::new(bytes)).unwrap();
    std::assert_eq!(record.header.version, NitfVersion::V21);
    std::assert_eq!(record.header.header_length, MINIMAL_HEADER_LENGTH as u64);
    std::assert_eq!(record.header.file_length, MINIMAL_HEADER_LENGTH as u64);
    std::assert_eq!(record.header.background_color, Some(NativeEndian::read_uint(&[0x00, 0x80, 0xff], 3)));
    std::assert_eq!(record.header.copy_number, Some(1));
    std::assert_eq!(record.header.num_copies, Some(2));
    std::assert_eq!(record.header.segment_total(), 0);
    for kind in SegmentKind::ALL {
        std::assert_eq!(record.segment_count(kind), 0);
    }
    std::assert!(record.is_clean());
}

#[test]
fn test_minimal_20_file() {
    let bytes = NitfFileBuilder::new(NitfVersion::V20).build();
    std::assert_eq!(bytes.len(), MINIMAL_HEADER_LENGTH);

    let record = NitfReader::new().read(&mut Cursor::new(bytes)).unwrap();
    std::assert_eq!(record.header.version, NitfVersion::V20);
    std::assert_eq!(record.header.background_color, None);
    std::assert_eq!(record.header.originator_name.trim_end(), "Originator");
    std::assert_eq!(record.header.originator_name.len(), 27);
}

#[test]
fn test_nsif_is_read_as_21() {
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).magic("NSIF", "01.00").cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();
    std::assert_eq!(record.header.version, NitfVersion::V21);
    std::assert_eq!(record.header.profile_name, "NSIF");
}

#[test]
fn test_blank_copy_fields_are_unset() {
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).blank_copy_fields().cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();
    std::assert_eq!(record.header.copy_number, None);
    std::assert_eq!(record.header.num_copies, None);
}

#[test]
fn test_not_nitf() {
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).magic("XXXX", "02.10").cursor();
    let err = NitfReader::new().read(&mut cursor).unwrap_err();
    std::assert!(matches!(err, NitfError::NotNitf { .. }));
    std::assert_eq!(err.kind(), ErrorKind::Structural);
    std::assert!(err.to_string().contains("not NITF"));
}

#[test]
fn test_unknown_version() {
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).magic("NITF", "03.00").cursor();
    let err = NitfReader::new().read(&mut cursor).unwrap_err();
    std::assert!(matches!(err, NitfError::UnknownVersion { .. }));
}

#[test]
fn test_streaming_header_rejected() {
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).file_length("999999999999").cursor();
    let err = NitfReader::new().read(&mut cursor).unwrap_err();
    std::assert!(matches!(err, NitfError::StreamingHeader));
}

#[test]
fn test_header_length_mismatch() {
    let actual = MINIMAL_HEADER_LENGTH as u64;
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).header_length(actual + 1).cursor();
    match NitfReader::new().read(&mut cursor) {
        Err(NitfError::LengthMismatch { section, expected, actual: read }) => {
            std::assert_eq!(section, "File header");
            std::assert_eq!(expected, actual + 1);
            std::assert_eq!(read, actual);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_header_length_shorter_than_consumed() {
    let actual = MINIMAL_HEADER_LENGTH as u64;
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).header_length(actual - 1).cursor();
    match NitfReader::new().read(&mut cursor) {
        Err(NitfError::LengthMismatch { section, expected, actual: read }) => {
            std::assert_eq!(section, "File header");
            std::assert_eq!(expected, actual - 1);
            std::assert_eq!(read, actual);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_title_with_high_bytes_is_lossless() {
    // FTITLE starts after FHDR, FVER, CLEVEL, STYPE, OSTAID and FDT
    const FTITLE_OFFSET: usize = 4 + 5 + 2 + 4 + 10 + 14;
    let plain = NitfFileBuilder::new(NitfVersion::V21).build();
    let mut acute = plain.clone();
    acute[FTITLE_OFFSET] = 0xE9;
    let mut grave = plain;
    grave[FTITLE_OFFSET] = 0xE8;

    let acute = NitfReader::new().read(&mut Cursor::new(acute)).unwrap();
    let grave = NitfReader::new().read(&mut Cursor::new(grave)).unwrap();

    std::assert!(acute.header.title.starts_with('\u{e9}'));
    std::assert_eq!(acute.header.title.chars().count(), 80);
    std::assert_eq!(encode_text(&acute.header.title).map(|b| b[0]), Some(0xE9));
    std::assert_ne!(acute, grave);
}

#[test]
fn test_image_subheader_length_mismatch() {
    let version = NitfVersion::V21;
    let subheader = image_subheader(version, &ImageOptions::default());
    let declared = subheader.len() as u64 - 1;
    let mut cursor = NitfFileBuilder::new(version)
        .segment_declaring(SegmentKind::Image, subheader, vec![0u8; 4], declared)
        .cursor();

    let err = NitfReader::new().read(&mut cursor).unwrap_err();
    std::assert!(err.is_structural());
    let message = err.to_string();
    std::assert!(message.contains("image subheader [0]"), "{}", message);
    std::assert!(message.contains(&format!("expected to have length {}", declared)), "{}", message);
}

#[test]
fn test_truncated_header_is_unexpected_eof() {
    let mut bytes = NitfFileBuilder::new(NitfVersion::V21).build();
    bytes.truncate(200);
    let err = NitfReader::new().read(&mut Cursor::new(bytes)).unwrap_err();
    std::assert!(matches!(err, NitfError::UnexpectedEof { .. }));
    std::assert!(err.is_structural());
}

#[test]
fn test_one_image_three_bands() {
    let version = NitfVersion::V21;
    let data = vec![7u8; 512];
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::Image, image_subheader(version, &ImageOptions { nbands: 3, ..Default::default() }), data)
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    std::assert_eq!(record.images.len(), record.header.image_info.len());
    let segment = &record.images[0];
    std::assert_eq!(segment.subheader.bands.len(), 3);
    std::assert_eq!(segment.offset, MINIMAL_HEADER_LENGTH as u64 + 16 + record.header.image_info[0].subheader_length);
    std::assert_eq!(segment.data_length(), 512);
    std::assert!(record.is_clean());
}

#[test]
fn test_segment_extents_follow_file_order() {
    let version = NitfVersion::V21;
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::Text, text_subheader(version, &extras(&[])), b"abc".to_vec())
        .segment(SegmentKind::Image, image_subheader(version, &ImageOptions::default()), vec![1u8; 10])
        .segment(SegmentKind::Image, image_subheader(version, &ImageOptions::default()), vec![2u8; 20])
        .cursor();
    let total = cursor.get_ref().len() as u64;
    let record = NitfReader::new().read(&mut cursor).unwrap();

    std::assert_eq!(record.images.len(), 2);
    std::assert_eq!(record.texts.len(), 1);
    std::assert!(record.images[0].end < record.images[1].offset);
    std::assert!(record.images[1].end < record.texts[0].offset);
    std::assert_eq!(record.texts[0].end, total);
    std::assert_eq!(record.segment_range(SegmentKind::Image, 1).unwrap(), (record.images[1].offset, record.images[1].end));
}

#[test]
fn test_segment_range_out_of_bounds() {
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21).cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();
    match record.segment_range(SegmentKind::Graphic, 0) {
        Err(NitfError::SegmentNotFound { kind, index, count }) => {
            std::assert_eq!(kind, "graphic");
            std::assert_eq!(index, 0);
            std::assert_eq!(count, 0);
        }
        other => panic!("expected SegmentNotFound, got {:?}", other),
    }
}

#[test]
fn test_udhd_with_malformed_tre_warns() {
    let mut body = FieldWriter::new();
    body.text("NOTREG", 6).num(99999, 5).bytes(b"short");
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21)
        .user_defined(extras_raw(&body.into_bytes()))
        .extended(extras(&[tre("XHDTRE", b"kept")]))
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    std::assert_eq!(record.warnings.len(), 1);
    std::assert_eq!(record.warnings[0].category, "TRE");
    std::assert!(record.header.user_defined.is_empty());
    std::assert_eq!(record.header.user_defined.data_length, 3 + 16);
    std::assert!(record.header.extended.extensions.contains_key("XHDTRE"));
}

#[test]
fn test_registry_is_consulted_for_header_tres() {
    let mut payload = FieldWriter::new();
    payload.text("", 89);
    let registry = TreRegistry::with_builtin_descriptions();
    let reader = NitfReaderBuilder::new().lookup(&registry).build();
    let mut cursor = NitfFileBuilder::new(NitfVersion::V21)
        .extended(extras(&[tre("STDIDC", &payload.into_bytes())]))
        .cursor();
    let record = reader.read(&mut cursor).unwrap();

    let stdidc = &record.header.extended.extensions["STDIDC"];
    std::assert!(stdidc.raw_data().is_none());
    std::assert_eq!(stdidc.field("MISSION").map(str::len), Some(14));
}

#[test]
fn test_parse_is_idempotent() {
    let version = NitfVersion::V21;
    let bytes = NitfFileBuilder::new(version)
        .user_defined(extras(&[tre("ABCDEF", b"123")]))
        .segment(SegmentKind::Image, image_subheader(version, &ImageOptions { nbands: 2, ..Default::default() }), vec![0u8; 8])
        .build();
    let reader = NitfReader::new();

    let first = reader.read(&mut Cursor::new(bytes.clone())).unwrap();
    let second = reader.read(&mut Cursor::new(bytes)).unwrap();
    std::assert_eq!(first, second);
}

#[test]
fn test_detect_version_restores_position() {
    let bytes = NitfFileBuilder::new(NitfVersion::V20).build();
    let mut cursor = Cursor::new(bytes);
    std::assert_eq!(detect_version(&mut cursor), NitfVersion::V20);
    std::assert_eq!(cursor.position(), 0);

    cursor.seek(SeekFrom::Start(10)).unwrap();
    std::assert_eq!(detect_version(&mut cursor), NitfVersion::Unknown);
    std::assert_eq!(cursor.position(), 10);

    let mut short = Cursor::new(b"NIT".to_vec());
    std::assert_eq!(detect_version(&mut short), NitfVersion::Unknown);
    std::assert_eq!(short.position(), 0);
}

#[test]
fn test_file_length_check() {
    let mut bytes = NitfFileBuilder::new(NitfVersion::V21).build();
    let declared = bytes.len() as u64;
    std::assert!(validation::check_file_length(&mut Cursor::new(bytes.clone()), declared).unwrap());

    bytes.extend_from_slice(b"padding");
    let mut cursor = Cursor::new(bytes);
    std::assert!(!validation::check_file_length(&mut cursor, declared).unwrap());
    std::assert_eq!(cursor.position(), 0);

    // A padded file still parses; the disagreement is only logged
    cursor.set_position(0);
    std::assert!(NitfReader::new().read(&mut cursor).is_ok());
    let quiet = NitfReaderBuilder::new().check_file_length(false).build();
    cursor.set_position(0);
    std::assert!(quiet.read(&mut cursor).is_ok());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_segment_counts_match_component_info(images in 0usize..4, texts in 0usize..4, data_len in 0usize..64) {
        let version = NitfVersion::V21;
        let mut builder = NitfFileBuilder::new(version);
        for _ in 0..images {
            builder = builder.segment(SegmentKind::Image, image_subheader(version, &ImageOptions::default()), vec![0u8; data_len]);
        }
        for _ in 0..texts {
            builder = builder.segment(SegmentKind::Text, text_subheader(version, &extras(&[])), vec![b't'; data_len]);
        }
        let bytes = builder.build();
        let reader = NitfReader::new();

        let record = reader.read(&mut Cursor::new(bytes.clone())).unwrap();
        prop_assert_eq!(record.images.len(), images);
        prop_assert_eq!(record.texts.len(), texts);
        prop_assert_eq!(record.header.image_info.len(), images);
        prop_assert!(record.images.iter().all(|s| s.data_length() == data_len as u64));
        prop_assert_eq!(record, reader.read(&mut Cursor::new(bytes)).unwrap());
    }
}
