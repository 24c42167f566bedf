//! Description-driven TRE handlers
//!
//! A description is the ordered list of fixed-width fields making up a
//! TRE payload. Descriptions are loaded from TOML, either the set
//! compiled into the crate or a user-supplied file.

use std::collections::HashMap;
use std::fs;
use lazy_static::lazy_static;
use log::{trace, warn};

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::tre::{Tre, TreData, TreField, TreHandler};

lazy_static! {
    // Descriptions shipped with the crate
    static ref BUILTIN_DESCRIPTIONS: TreDescriptions = {
        let content = include_str!("../../../tre_descriptions.toml");
        TreDescriptions::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in TRE descriptions: {}", e);
            TreDescriptions::default()
        })
    };
}

/// Field layout of a single TRE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreDescription {
    pub tag: String,
    /// (name, width) pairs in payload order
    pub fields: Vec<(String, usize)>,
}

impl TreDescription {
    /// Payload length this layout accounts for
    pub fn total_length(&self) -> u64 {
        self.fields.iter().map(|(_, width)| *width as u64).sum()
    }
}

/// Set of TRE descriptions keyed by tag
#[derive(Debug, Clone, Default)]
pub struct TreDescriptions {
    pub descriptions: HashMap<String, TreDescription>,
}

impl TreDescriptions {
    /// Descriptions compiled into the crate
    pub fn builtin() -> &'static TreDescriptions {
        &BUILTIN_DESCRIPTIONS
    }

    /// Parse descriptions from a TOML string
    pub fn from_str(content: &str) -> NitfResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(NitfError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let table = toml_value
            .as_table()
            .ok_or_else(|| NitfError::GenericError("TRE descriptions must be a table".to_string()))?;

        let mut defs = TreDescriptions::default();
        for (tag, value) in table {
            let description = Self::parse_description(tag, value)?;
            defs.descriptions.insert(tag.clone(), description);
        }

        Ok(defs)
    }

    fn parse_description(tag: &str, value: &toml::Value) -> NitfResult<TreDescription> {
        let entries = value
            .get("fields")
            .and_then(|v| v.as_array())
            .ok_or_else(|| NitfError::GenericError(format!("TRE {} has no fields array", tag)))?;

        let mut fields = Vec::with_capacity(entries.len());
        for entry in entries {
            let pair = entry.as_array().map(|a| a.as_slice());
            match pair {
                Some([name, width]) => match (name.as_str(), width.as_integer()) {
                    (Some(name), Some(width)) if width > 0 => {
                        fields.push((name.to_string(), width as usize));
                    }
                    _ => {
                        return Err(NitfError::GenericError(format!(
                            "TRE {} has an invalid field entry: {}",
                            tag, entry
                        )))
                    }
                },
                _ => {
                    return Err(NitfError::GenericError(format!(
                        "TRE {} field entries must be [name, width] pairs",
                        tag
                    )))
                }
            }
        }

        Ok(TreDescription {
            tag: tag.to_string(),
            fields,
        })
    }

    /// Load descriptions from a TOML file
    pub fn from_file(path: &str) -> NitfResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(NitfError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Gets the description for a tag
    pub fn get(&self, tag: &str) -> Option<&TreDescription> {
        self.descriptions.get(tag)
    }

    /// Number of described tags
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    /// Whether no tags are described
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

/// Splits a payload into the named fields of a description
#[derive(Debug, Clone)]
pub struct DescriptionHandler {
    description: TreDescription,
}

impl DescriptionHandler {
    pub fn new(description: TreDescription) -> Self {
        DescriptionHandler { description }
    }

    pub fn description(&self) -> &TreDescription {
        &self.description
    }
}

impl TreHandler for DescriptionHandler {
    fn name(&self) -> &str {
        "description"
    }

    fn parse(&self, reader: &mut dyn SeekableReader, tag: &str, length: u64) -> NitfResult<Tre> {
        let expected = self.description.total_length();
        if expected != length {
            return Err(NitfError::LengthMismatch {
                section: format!("TRE {}", tag),
                expected,
                actual: length,
            });
        }

        let mut fields = Vec::with_capacity(self.description.fields.len());
        for (name, width) in &self.description.fields {
            let value = reader.read_text("TRE field", *width)?;
            trace!("{}.{} = {:?}", tag, name, value);
            fields.push(TreField {
                name: name.clone(),
                value,
            });
        }

        Ok(Tre {
            tag: tag.to_string(),
            length,
            data: TreData::Fields(fields),
        })
    }
}
