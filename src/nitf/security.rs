//! Security group parsing
//!
//! Every header and subheader carries a classification block. The field
//! set differs between 2.0 and 2.1, so the group is a tagged variant and
//! the version is threaded in by the caller.

use log::trace;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::security as sz;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::version::NitfVersion;

/// Classification and handling block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityGroup {
    V20(SecurityFields20),
    V21(SecurityFields21),
}

/// 2.0 security fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityFields20 {
    pub codewords: String,
    pub control_and_handling: String,
    pub releasing_instructions: String,
    pub classification_authority: String,
    pub control_number: String,
    pub downgrade_date: String,
    /// Present only when the downgrade date is `999998`
    pub downgrade_event: Option<String>,
}

/// 2.1 security fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityFields21 {
    pub classification_system: String,
    pub codewords: String,
    pub control_and_handling: String,
    pub releasing_instructions: String,
    pub declassification_type: String,
    pub declassification_date: String,
    pub declassification_exemption: String,
    pub downgrade: String,
    pub downgrade_date: String,
    pub classification_text: String,
    pub classification_authority_type: String,
    pub classification_authority: String,
    pub classification_reason: String,
    pub source_date: String,
    pub control_number: String,
}

impl SecurityGroup {
    /// Reads a security group laid out for `version`
    pub fn read(reader: &mut dyn SeekableReader, version: NitfVersion) -> NitfResult<Self> {
        match version {
            NitfVersion::V20 => Self::read_20(reader).map(SecurityGroup::V20),
            NitfVersion::V21 => Self::read_21(reader).map(SecurityGroup::V21),
            NitfVersion::Unknown => Err(NitfError::GenericError("Invalid NITF Version".to_string())),
        }
    }

    fn read_20(reader: &mut dyn SeekableReader) -> NitfResult<SecurityFields20> {
        let codewords = reader.read_text("CODE", sz::CODE_20)?;
        let control_and_handling = reader.read_text("CTLH", sz::CTLH_20)?;
        let releasing_instructions = reader.read_text("REL", sz::REL_20)?;
        let classification_authority = reader.read_text("CAUT", sz::CAUT_20)?;
        let control_number = reader.read_text("CTLN", sz::CTLN_20)?;
        let downgrade_date = reader.read_text("DGDT", sz::DGDT_20)?;

        let downgrade_event = if downgrade_date.as_bytes() == sz::DOWNGRADE_EVENT_20 {
            trace!("Downgrade date is 999998, reading downgrade event");
            Some(reader.read_text("CLTX", sz::CLTX_20)?)
        } else {
            None
        };

        Ok(SecurityFields20 {
            codewords,
            control_and_handling,
            releasing_instructions,
            classification_authority,
            control_number,
            downgrade_date,
            downgrade_event,
        })
    }

    fn read_21(reader: &mut dyn SeekableReader) -> NitfResult<SecurityFields21> {
        Ok(SecurityFields21 {
            classification_system: reader.read_text("CLSY", sz::CLSY)?,
            codewords: reader.read_text("CODE", sz::CODE)?,
            control_and_handling: reader.read_text("CTLH", sz::CTLH)?,
            releasing_instructions: reader.read_text("REL", sz::REL)?,
            declassification_type: reader.read_text("DCTP", sz::DCTP)?,
            declassification_date: reader.read_text("DCDT", sz::DCDT)?,
            declassification_exemption: reader.read_text("DCXM", sz::DCXM)?,
            downgrade: reader.read_text("DG", sz::DG)?,
            downgrade_date: reader.read_text("DGDT", sz::DGDT)?,
            classification_text: reader.read_text("CLTX", sz::CLTX)?,
            classification_authority_type: reader.read_text("CATP", sz::CATP)?,
            classification_authority: reader.read_text("CAUT", sz::CAUT)?,
            classification_reason: reader.read_text("CRSN", sz::CRSN)?,
            source_date: reader.read_text("RDT", sz::RDT)?,
            control_number: reader.read_text("CTLN", sz::CTLN)?,
        })
    }

    /// Version this group was laid out for
    pub fn version(&self) -> NitfVersion {
        match self {
            SecurityGroup::V20(_) => NitfVersion::V20,
            SecurityGroup::V21(_) => NitfVersion::V21,
        }
    }

    /// Codewords, common to both layouts
    pub fn codewords(&self) -> &str {
        match self {
            SecurityGroup::V20(s) => &s.codewords,
            SecurityGroup::V21(s) => &s.codewords,
        }
    }

    /// Control number, common to both layouts
    pub fn control_number(&self) -> &str {
        match self {
            SecurityGroup::V20(s) => &s.control_number,
            SecurityGroup::V21(s) => &s.control_number,
        }
    }
}
