pub mod io;
pub mod nitf;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::NitfKit;

pub use nitf::{NitfReader, NitfReaderBuilder, NitfError, NitfResult, NitfVersion, Record};
pub use nitf::{SegmentKind, SegmentReader, TreRegistry};
