//! Tests for the per-kind subheader parsers

extern crate std;

use byteorder::{ByteOrder, NativeEndian};

use crate::nitf::reader::NitfReader;
use crate::nitf::tests::test_utils::{
    des_subheader, extras, graphic_subheader, image_subheader, label_subheader, lut_bytes, res_subheader,
    text_subheader, tre, ImageOptions, NitfFileBuilder, LABEL_BACKGROUND_COLOR, LABEL_TEXT_COLOR,
};
use crate::nitf::tre::Tre;
use crate::nitf::types::{Record, SegmentKind};
use crate::nitf::version::NitfVersion;

fn read_image(version: NitfVersion, opts: &ImageOptions) -> Record {
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::Image, image_subheader(version, opts), vec![0u8; 16])
        .cursor();
    NitfReader::new().read(&mut cursor).unwrap()
}

#[test]
fn test_image_three_bands_without_luts() {
    let record = read_image(NitfVersion::V21, &ImageOptions { nbands: 3, ..Default::default() });
    let image = &record.images[0].subheader;
    std::assert_eq!(image.num_bands, 3);
    std::assert_eq!(image.band_count(), 3);
    std::assert!(image.bands.iter().all(|band| band.num_luts == 0 && band.lut.is_none()));
    std::assert_eq!(image.num_rows, 16);
    std::assert_eq!(image.num_cols, 32);
    std::assert_eq!(image.extended_num_bands, None);
}

#[test]
fn test_image_extended_band_count_in_21() {
    let record = read_image(NitfVersion::V21, &ImageOptions { nbands: 0, xbands: 12, ..Default::default() });
    let image = &record.images[0].subheader;
    std::assert_eq!(image.num_bands, 0);
    std::assert_eq!(image.extended_num_bands, Some(12));
    std::assert_eq!(image.band_count(), 12);
}

#[test]
fn test_image_zero_bands_in_20_reads_no_xbands() {
    let record = read_image(NitfVersion::V20, &ImageOptions { nbands: 0, ..Default::default() });
    let image = &record.images[0].subheader;
    std::assert_eq!(image.extended_num_bands, None);
    std::assert_eq!(image.band_count(), 0);
}

#[test]
fn test_image_lookup_tables() {
    let opts = ImageOptions {
        nbands: 2,
        luts: vec![(0, 0), (2, 3)],
        ..Default::default()
    };
    let record = read_image(NitfVersion::V21, &opts);
    let image = &record.images[0].subheader;
    std::assert!(image.bands[0].lut.is_none());

    let lut = image.bands[1].lut.as_ref().unwrap();
    let expected = lut_bytes(1, 2, 3);
    std::assert_eq!(lut.num_tables, 2);
    std::assert_eq!(lut.entries_per_table, 3);
    std::assert_eq!(lut.data, expected);
    std::assert_eq!(lut.table(1), Some(&expected[3..6]));
    std::assert_eq!(lut.table(2), None);
}

#[test]
fn test_corner_coordinates_gated_by_version() {
    // 'N' carries corners in 2.1 but not in 2.0
    let v21 = read_image(NitfVersion::V21, &ImageOptions { icords: "N", ..Default::default() });
    std::assert!(v21.images[0].subheader.corner_coordinates.is_some());

    let v20 = read_image(NitfVersion::V20, &ImageOptions { icords: "N", ..Default::default() });
    std::assert_eq!(v20.images[0].subheader.corner_coordinates, None);

    let blank = read_image(NitfVersion::V21, &ImageOptions::default());
    std::assert_eq!(blank.images[0].subheader.corner_coordinates, None);

    let geographic = read_image(NitfVersion::V20, &ImageOptions { icords: "G", ..Default::default() });
    std::assert_eq!(
        geographic.images[0].subheader.corner_coordinates.as_deref().map(str::len),
        Some(60)
    );
}

#[test]
fn test_compression_rate_only_when_compressed() {
    let compressed = read_image(NitfVersion::V21, &ImageOptions { compression: "C3", ..Default::default() });
    std::assert_eq!(compressed.images[0].subheader.compression_rate.as_deref(), Some("1.5 "));

    let masked = read_image(NitfVersion::V21, &ImageOptions { compression: "NM", ..Default::default() });
    std::assert_eq!(masked.images[0].subheader.compression_rate, None);
}

#[test]
fn test_image_comments_and_extensions() {
    let opts = ImageOptions {
        comments: vec!["first comment", "second comment"],
        extended: extras(&[tre("PIAIMC", b"payload")]),
        ..Default::default()
    };
    let record = read_image(NitfVersion::V21, &opts);
    let image = &record.images[0].subheader;
    std::assert_eq!(image.comments.len(), 2);
    std::assert_eq!(image.comments[1].trim_end(), "second comment");
    std::assert_eq!(image.extended.extensions["PIAIMC"].raw_data(), Some(&b"payload"[..]));
    std::assert!(image.user_defined.is_empty());
}

#[test]
fn test_graphic_label_and_text_subheaders() {
    let version = NitfVersion::V20;
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::Graphic, graphic_subheader(version), b"CGM".to_vec())
        .segment(SegmentKind::Label, label_subheader(version), b"hello".to_vec())
        .segment(SegmentKind::Text, text_subheader(version, &extras(&[tre("TXTTRE", b"t")])), b"text body".to_vec())
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let graphic = &record.graphics[0].subheader;
    std::assert_eq!(graphic.graphic_id.trim_end(), "GRAPHIC1");
    std::assert_eq!(graphic.display_level, 2);

    let label = &record.labels[0].subheader;
    std::assert_eq!(label.location_row, 100);
    std::assert_eq!(label.location_column, 200);
    std::assert_eq!(label.text_color, NativeEndian::read_uint(&LABEL_TEXT_COLOR, 3));
    std::assert_eq!(label.background_color, NativeEndian::read_uint(&LABEL_BACKGROUND_COLOR, 3));

    let text = &record.texts[0].subheader;
    std::assert_eq!(text.format, "STA");
    std::assert!(text.extended.extensions.contains_key("TXTTRE"));
    std::assert_eq!(record.texts[0].data_length(), 9);
}

#[test]
fn test_des_subheader_fields_parsed_as_tre() {
    let version = NitfVersion::V21;
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::DataExtension, des_subheader(version, "MYDES", b"ABCD"), b"opaque".to_vec())
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let des = &record.data_extensions[0].subheader;
    std::assert_eq!(des.tag(), "MYDES");
    std::assert!(!des.is_tre_overflow());
    std::assert_eq!(des.overflowed_header_type, None);
    std::assert_eq!(des.subheader_fields_length, 4);
    std::assert_eq!(des.subheader_fields, Some(Tre::raw("MYDES", b"ABCD".to_vec())));
    std::assert!(des.payload_extensions.is_empty());
}

#[test]
fn test_tre_overflow_des_payload_is_parsed() {
    let version = NitfVersion::V21;
    let payload = [tre("FIRST1", b"one"), tre("SECND2", b"two two")].concat();
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::DataExtension, des_subheader(version, "TRE_OVERFLOW", b""), payload.clone())
        .segment(SegmentKind::ReservedExtension, res_subheader(version, "AFTER", b""), b"res".to_vec())
        .cursor();
    let total = cursor.get_ref().len() as u64;
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let segment = &record.data_extensions[0];
    let des = &segment.subheader;
    std::assert!(des.is_tre_overflow());
    std::assert_eq!(des.overflowed_header_type.as_deref(), Some("UDHD  "));
    std::assert_eq!(des.data_item_overflowed, Some(0));
    std::assert_eq!(des.subheader_fields, None);
    std::assert_eq!(des.payload_extensions.len(), 2);
    std::assert_eq!(des.payload_extensions["SECND2"].raw_data(), Some(&b"two two"[..]));
    std::assert_eq!(segment.data_length(), payload.len() as u64);
    std::assert!(record.warnings.is_empty());

    // The RES after it only parses if the DES left the stream at its end
    std::assert_eq!(record.reserved_extensions[0].offset, segment.end + record.header.reserved_extension_info[0].subheader_length);
    std::assert_eq!(record.reserved_extensions[0].end, total);
}

#[test]
fn test_registered_extensions_des_in_20() {
    let version = NitfVersion::V20;
    let mut cursor = NitfFileBuilder::new(version)
        .segment(
            SegmentKind::DataExtension,
            des_subheader(version, "Registered Extensions", b""),
            tre("REGTRE", b"inline"),
        )
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let des = &record.data_extensions[0].subheader;
    std::assert!(des.is_tre_overflow());
    std::assert_eq!(des.payload_extensions["REGTRE"].raw_data(), Some(&b"inline"[..]));
}

#[test]
fn test_tre_overflow_tag_is_opaque_in_20() {
    let version = NitfVersion::V20;
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::DataExtension, des_subheader(version, "TRE_OVERFLOW", b""), tre("REGTRE", b"x"))
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let des = &record.data_extensions[0].subheader;
    std::assert!(!des.is_tre_overflow());
    std::assert!(des.payload_extensions.is_empty());
}

#[test]
fn test_malformed_tre_in_overflow_des_warns() {
    let version = NitfVersion::V21;
    let payload = [tre("GOOD01", b"ok"), b"BROKEN?????".to_vec()].concat();
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::DataExtension, des_subheader(version, "TRE_OVERFLOW", b""), payload)
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let des = &record.data_extensions[0].subheader;
    std::assert_eq!(des.payload_extensions.len(), 1);
    std::assert_eq!(record.warnings.len(), 1);
    std::assert_eq!(record.warnings[0].tag.as_deref(), Some("BROKEN"));
}

#[test]
fn test_overflow_tre_cannot_reach_into_next_segment() {
    let version = NitfVersion::V21;
    let payload = [tre("GOOD01", b"ok"), b"OVERRN00020short".to_vec()].concat();
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::DataExtension, des_subheader(version, "TRE_OVERFLOW", b""), payload)
        .segment(SegmentKind::ReservedExtension, res_subheader(version, "AFTER", b""), b"res".to_vec())
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let segment = &record.data_extensions[0];
    let des = &segment.subheader;
    std::assert_eq!(des.payload_extensions.len(), 1);
    std::assert!(des.payload_extensions.contains_key("GOOD01"));
    std::assert!(!des.payload_extensions.contains_key("OVERRN"));

    std::assert_eq!(record.warnings.len(), 1);
    std::assert_eq!(record.warnings[0].tag.as_deref(), Some("OVERRN"));
    std::assert_eq!(record.warnings[0].offset, segment.offset + 13 + 11);

    let res = &record.reserved_extensions[0];
    std::assert_eq!(res.subheader.type_id.trim_end(), "AFTER");
    std::assert_eq!(res.data_length(), 3);
}

#[test]
fn test_res_subheader_fields_are_raw() {
    let version = NitfVersion::V21;
    let mut cursor = NitfFileBuilder::new(version)
        .segment(SegmentKind::ReservedExtension, res_subheader(version, "MYRES", b"\x01\x02\x03"), b"data".to_vec())
        .cursor();
    let record = NitfReader::new().read(&mut cursor).unwrap();

    let res = &record.reserved_extensions[0].subheader;
    std::assert_eq!(res.type_id.trim_end(), "MYRES");
    std::assert_eq!(res.subheader_fields_length, 3);
    std::assert_eq!(res.subheader_fields, vec![1, 2, 3]);
}
