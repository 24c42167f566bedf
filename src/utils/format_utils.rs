//! Formatting helpers for analysis output

use crate::nitf::extensions::Extensions;
use crate::nitf::tre::TreData;
use crate::nitf::types::{Record, SegmentKind};
use crate::utils::string_utils::{printable_preview, trim_field};

/// Longest raw TRE payload preview shown in summaries
const RAW_PREVIEW_BYTES: usize = 32;

/// Formats a byte count with a binary unit
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// One line per TRE, with described fields or a raw preview
pub fn format_extensions(extensions: &Extensions, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for tre in extensions.values() {
        match &tre.data {
            TreData::Raw(bytes) => lines.push(format!(
                "{}{} ({} bytes): {}",
                indent,
                tre.tag,
                tre.length,
                printable_preview(bytes, RAW_PREVIEW_BYTES)
            )),
            TreData::Fields(fields) => {
                lines.push(format!("{}{} ({} bytes)", indent, tre.tag, tre.length));
                for field in fields {
                    lines.push(format!("{}  {} = {}", indent, field.name, trim_field(&field.value)));
                }
            }
        }
    }
    lines
}

/// Compact multi-line summary of a record
pub fn format_record_summary(record: &Record) -> String {
    let header = &record.header;
    let mut result = String::from("NITF Analysis Results:\n");
    result.push_str(&format!("  Format: {}\n", header.version));
    result.push_str(&format!("  Title: {}\n", trim_field(&header.title)));
    result.push_str(&format!("  File Length: {}\n", format_size(header.file_length)));

    for kind in SegmentKind::ALL {
        let count = record.segment_count(kind);
        if count == 0 {
            continue;
        }
        result.push_str(&format!("  {} segments: {}\n", kind, count));
        for index in 0..count {
            if let Ok((offset, end)) = record.segment_range(kind, index) {
                result.push_str(&format!(
                    "    [{}] offset {} ({})\n",
                    index,
                    offset,
                    format_size(end - offset)
                ));
            }
        }
    }

    let header_tres = format_extensions(&header.user_defined.extensions, "    ")
        .into_iter()
        .chain(format_extensions(&header.extended.extensions, "    "));
    let header_tres: Vec<String> = header_tres.collect();
    if !header_tres.is_empty() {
        result.push_str("  Header TREs:\n");
        for line in header_tres {
            result.push_str(&line);
            result.push('\n');
        }
    }

    result.push_str(&format!("  Warnings: {}\n", record.warnings.len()));
    result
}
