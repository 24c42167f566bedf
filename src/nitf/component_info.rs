//! Component info tables of the file header

use log::debug;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::errors::NitfResult;

/// Declared lengths of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentInfo {
    pub subheader_length: u64,
    pub data_length: u64,
}

/// Field names of one component info table
#[derive(Debug, Clone, Copy)]
pub struct ComponentFields {
    pub count: &'static str,
    pub subheader_length: &'static str,
    pub data_length: &'static str,
}

/// Reads a count followed by `count` (subheader length, data length) pairs
///
/// A zero count reads nothing further.
pub fn read_component_info(
    reader: &mut dyn SeekableReader,
    fields: ComponentFields,
    count_width: usize,
    subheader_width: usize,
    data_width: usize,
) -> NitfResult<Vec<ComponentInfo>> {
    let count = reader.read_numeric(fields.count, count_width)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    debug!("{} = {}", fields.count, count);
    let mut infos = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let subheader_length = reader.read_numeric(fields.subheader_length, subheader_width)?;
        let data_length = reader.read_numeric(fields.data_length, data_width)?;
        infos.push(ComponentInfo {
            subheader_length,
            data_length,
        });
    }

    Ok(infos)
}
