mod field_codec_tests;
mod subheader_tests;
mod reader_tests;
