//! Per-parse state shared by the section parsers

use log::warn;

use crate::nitf::constants::extensions::{NOT_PROPERLY_FORMED, WARNING_CATEGORY};
use crate::nitf::tre::TreLookup;
use crate::nitf::types::FieldWarning;
use crate::nitf::version::NitfVersion;

/// State threaded through one parse
pub struct ParseContext<'a> {
    pub lookup: &'a dyn TreLookup,
    pub version: NitfVersion,
    pub warnings: Vec<FieldWarning>,
}

impl<'a> ParseContext<'a> {
    pub fn new(lookup: &'a dyn TreLookup, version: NitfVersion) -> Self {
        ParseContext {
            lookup,
            version,
            warnings: Vec::new(),
        }
    }

    /// Records a malformed TRE
    pub fn warn_malformed_tre(&mut self, offset: u64, tag: Option<String>) {
        warn!(
            "TRE {} at offset {}: {}",
            tag.as_deref().unwrap_or("<unknown>"),
            offset,
            NOT_PROPERLY_FORMED
        );
        self.warnings.push(FieldWarning {
            offset,
            category: WARNING_CATEGORY.to_string(),
            tag,
            message: NOT_PROPERLY_FORMED.to_string(),
        });
    }

    /// Takes the accumulated warnings, leaving none behind
    pub fn take_warnings(&mut self) -> Vec<FieldWarning> {
        std::mem::take(&mut self.warnings)
    }
}
