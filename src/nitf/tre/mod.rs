//! Tagged Record Extensions
//!
//! A TRE is a 6-character tag, a 5-digit payload length and the payload
//! itself. Payload interpretation is delegated to a pluggable
//! `TreHandler`, chosen per tag through a `TreLookup`.

pub mod default_handler;
pub mod description;
pub mod registry;

pub use default_handler::RawTreHandler;
pub use description::{DescriptionHandler, TreDescription, TreDescriptions};
pub use registry::{NoHandlers, TreRegistry};

use std::fmt;

use crate::io::seekable::SeekableReader;
use crate::nitf::errors::NitfResult;

/// A parsed extension record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tre {
    /// Tag, trimmed of blanks
    pub tag: String,
    /// Declared payload length
    pub length: u64,
    pub data: TreData,
}

/// Handler-specific view of a TRE payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreData {
    /// Unparsed payload bytes
    Raw(Vec<u8>),
    /// Named fields in payload order
    Fields(Vec<TreField>),
}

/// One named field of a described TRE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreField {
    pub name: String,
    pub value: String,
}

impl Tre {
    /// Creates a TRE holding raw payload bytes
    pub fn raw(tag: &str, data: Vec<u8>) -> Self {
        Tre {
            tag: tag.to_string(),
            length: data.len() as u64,
            data: TreData::Raw(data),
        }
    }

    /// Raw payload bytes, if this TRE was not interpreted
    pub fn raw_data(&self) -> Option<&[u8]> {
        match &self.data {
            TreData::Raw(bytes) => Some(bytes),
            TreData::Fields(_) => None,
        }
    }

    /// Looks up the value of a described field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        match &self.data {
            TreData::Fields(fields) => fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.value.as_str()),
            TreData::Raw(_) => None,
        }
    }
}

impl fmt::Display for Tre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            TreData::Raw(_) => writeln!(f, "    {} ({} bytes, raw)", self.tag, self.length),
            TreData::Fields(fields) => {
                writeln!(f, "    {} ({} bytes)", self.tag, self.length)?;
                for field in fields {
                    writeln!(f, "      {}: {}", field.name, field.value.trim_end())?;
                }
                Ok(())
            }
        }
    }
}

/// Interprets the payload of a TRE
///
/// `parse` is entered with the stream positioned at the first payload
/// byte and must consume exactly `length` bytes. A handler that fails,
/// or succeeds having consumed a different amount, is replaced by the
/// raw handler for that record.
pub trait TreHandler {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// Parses `length` payload bytes for `tag`
    fn parse(&self, reader: &mut dyn SeekableReader, tag: &str, length: u64) -> NitfResult<Tre>;
}

/// Resolves the handler for a tag
pub trait TreLookup {
    /// Returns the handler for `tag`, or `None` to use the raw handler
    fn lookup(&self, tag: &str) -> Option<&dyn TreHandler>;
}
