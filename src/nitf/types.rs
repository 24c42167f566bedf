//! Core NITF data structures

use std::fmt;
use std::str::FromStr;

use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::file_header::FileHeader;
use crate::nitf::subheaders::{
    DataExtensionSubheader, GraphicSubheader, ImageSubheader, LabelSubheader,
    ReservedExtensionSubheader, TextSubheader,
};

/// Recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    /// Stream position when the problem was detected
    pub offset: u64,
    pub category: String,
    /// Tag of the offending TRE, when it was read
    pub tag: Option<String>,
    pub message: String,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "[{}] {} ({}) at offset {}", self.category, self.message, tag, self.offset),
            None => write!(f, "[{}] {} at offset {}", self.category, self.message, self.offset),
        }
    }
}

/// The six segment kinds, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Image,
    Graphic,
    Label,
    Text,
    DataExtension,
    ReservedExtension,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 6] = [
        SegmentKind::Image,
        SegmentKind::Graphic,
        SegmentKind::Label,
        SegmentKind::Text,
        SegmentKind::DataExtension,
        SegmentKind::ReservedExtension,
    ];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Image => "image",
            SegmentKind::Graphic => "graphic",
            SegmentKind::Label => "label",
            SegmentKind::Text => "text",
            SegmentKind::DataExtension => "DES",
            SegmentKind::ReservedExtension => "RES",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmentKind {
    type Err = NitfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" | "im" => Ok(SegmentKind::Image),
            "graphic" | "sy" => Ok(SegmentKind::Graphic),
            "label" | "la" => Ok(SegmentKind::Label),
            "text" | "te" => Ok(SegmentKind::Text),
            "des" | "de" => Ok(SegmentKind::DataExtension),
            "res" | "re" => Ok(SegmentKind::ReservedExtension),
            other => Err(NitfError::GenericError(format!("Unknown segment type: {}", other))),
        }
    }
}

/// A parsed subheader and the extent of its data payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<S> {
    pub subheader: S,
    /// First payload byte
    pub offset: u64,
    /// One past the last payload byte
    pub end: u64,
}

impl<S> Segment<S> {
    /// Payload length in bytes
    pub fn data_length(&self) -> u64 {
        self.end - self.offset
    }
}

/// A fully parsed NITF file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: FileHeader,
    pub images: Vec<Segment<ImageSubheader>>,
    pub graphics: Vec<Segment<GraphicSubheader>>,
    pub labels: Vec<Segment<LabelSubheader>>,
    pub texts: Vec<Segment<TextSubheader>>,
    pub data_extensions: Vec<Segment<DataExtensionSubheader>>,
    pub reserved_extensions: Vec<Segment<ReservedExtensionSubheader>>,
    /// Recoverable problems, in the order they were found
    pub warnings: Vec<FieldWarning>,
}

impl Record {
    /// Number of segments of `kind`
    pub fn segment_count(&self, kind: SegmentKind) -> usize {
        match kind {
            SegmentKind::Image => self.images.len(),
            SegmentKind::Graphic => self.graphics.len(),
            SegmentKind::Label => self.labels.len(),
            SegmentKind::Text => self.texts.len(),
            SegmentKind::DataExtension => self.data_extensions.len(),
            SegmentKind::ReservedExtension => self.reserved_extensions.len(),
        }
    }

    /// Payload extent `(offset, end)` of segment `index` of `kind`
    pub fn segment_range(&self, kind: SegmentKind, index: usize) -> NitfResult<(u64, u64)> {
        fn extent<S>(segments: &[Segment<S>], index: usize) -> Option<(u64, u64)> {
            segments.get(index).map(|s| (s.offset, s.end))
        }

        let range = match kind {
            SegmentKind::Image => extent(&self.images, index),
            SegmentKind::Graphic => extent(&self.graphics, index),
            SegmentKind::Label => extent(&self.labels, index),
            SegmentKind::Text => extent(&self.texts, index),
            SegmentKind::DataExtension => extent(&self.data_extensions, index),
            SegmentKind::ReservedExtension => extent(&self.reserved_extensions, index),
        };

        range.ok_or(NitfError::SegmentNotFound {
            kind: kind.name(),
            index,
            count: self.segment_count(kind),
        })
    }

    /// Whether parsing completed without warnings
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NITF File:")?;
        write!(f, "{}", self.header)?;

        for (i, segment) in self.images.iter().enumerate() {
            writeln!(f, "Image Segment [{}]: bytes {}..{}", i, segment.offset, segment.end)?;
            write!(f, "{}", segment.subheader)?;
        }
        for (i, segment) in self.graphics.iter().enumerate() {
            writeln!(f, "Graphic Segment [{}]: bytes {}..{}", i, segment.offset, segment.end)?;
            write!(f, "{}", segment.subheader)?;
        }
        for (i, segment) in self.labels.iter().enumerate() {
            writeln!(f, "Label Segment [{}]: bytes {}..{}", i, segment.offset, segment.end)?;
            write!(f, "{}", segment.subheader)?;
        }
        for (i, segment) in self.texts.iter().enumerate() {
            writeln!(f, "Text Segment [{}]: bytes {}..{}", i, segment.offset, segment.end)?;
            write!(f, "{}", segment.subheader)?;
        }
        for (i, segment) in self.data_extensions.iter().enumerate() {
            writeln!(f, "DES Segment [{}]: bytes {}..{}", i, segment.offset, segment.end)?;
            write!(f, "{}", segment.subheader)?;
        }
        for (i, segment) in self.reserved_extensions.iter().enumerate() {
            writeln!(f, "RES Segment [{}]: bytes {}..{}", i, segment.offset, segment.end)?;
            write!(f, "{}", segment.subheader)?;
        }

        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  {}", warning)?;
            }
        }

        Ok(())
    }
}
