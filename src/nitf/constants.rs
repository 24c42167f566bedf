//! NITF format constants
//!
//! Field widths in bytes, grouped by the header that owns them. Widths
//! are identical in 2.0 and 2.1 unless a `_20` variant says otherwise.

/// File header magic and version values
pub mod magic {
    pub const NITF: &[u8; 4] = b"NITF";
    pub const NSIF: &[u8; 4] = b"NSIF";
    pub const NITF_20: &[u8; 5] = b"02.00";
    pub const NITF_21: &[u8; 5] = b"02.10";
    pub const NSIF_10: &[u8; 5] = b"01.00";
}

/// File header fields
pub mod file_header {
    pub const FHDR: usize = 4;
    pub const FVER: usize = 5;
    pub const CLEVEL: usize = 2;
    pub const STYPE: usize = 4;
    pub const OSTAID: usize = 10;
    pub const FDT: usize = 14;
    pub const FTITLE: usize = 80;
    pub const FSCLAS: usize = 1;
    pub const FSCOP: usize = 5;
    pub const FSCPYS: usize = 5;
    pub const ENCRYP: usize = 1;
    pub const FBKGC: usize = 3;
    pub const ONAME: usize = 24;
    /// 2.0 has no FBKGC, its ONAME absorbs the three bytes
    pub const ONAME_20: usize = 27;
    pub const OPHONE: usize = 18;
    pub const FL: usize = 12;
    pub const HL: usize = 6;
    pub const UDHDL: usize = 5;
    pub const UDHOFL: usize = 3;
    pub const XHDL: usize = 5;
    pub const XHDLOFL: usize = 3;
}

/// Component info tables: (count, subheader length, data length)
pub mod component_info {
    pub const COUNT: usize = 3;
    pub const IMAGE: (usize, usize) = (6, 10);
    pub const GRAPHIC: (usize, usize) = (4, 6);
    pub const LABEL: (usize, usize) = (4, 3);
    pub const TEXT: (usize, usize) = (4, 5);
    pub const DATA_EXTENSION: (usize, usize) = (4, 9);
    pub const RESERVED_EXTENSION: (usize, usize) = (4, 7);
}

/// Security group fields
pub mod security {
    pub const CLSY: usize = 2;
    pub const CODE: usize = 11;
    pub const CTLH: usize = 2;
    pub const REL: usize = 20;
    pub const DCTP: usize = 2;
    pub const DCDT: usize = 8;
    pub const DCXM: usize = 4;
    pub const DG: usize = 1;
    pub const DGDT: usize = 8;
    pub const CLTX: usize = 43;
    pub const CATP: usize = 1;
    pub const CAUT: usize = 40;
    pub const CRSN: usize = 1;
    pub const RDT: usize = 8;
    pub const CTLN: usize = 15;

    pub const CODE_20: usize = 40;
    pub const CTLH_20: usize = 40;
    pub const REL_20: usize = 40;
    pub const CAUT_20: usize = 20;
    pub const CTLN_20: usize = 20;
    pub const DGDT_20: usize = 6;
    pub const CLTX_20: usize = 40;

    /// 2.0 downgrade date announcing a downgrade event text
    pub const DOWNGRADE_EVENT_20: &[u8] = b"999998";
}

/// Extras (TRE) blocks and records
pub mod extensions {
    pub const OVERFLOW_OFFSET: usize = 3;
    pub const ETAG: usize = 6;
    pub const EL: usize = 5;
    /// Warning category for malformed TREs
    pub const WARNING_CATEGORY: &str = "TRE";
    pub const NOT_PROPERLY_FORMED: &str = "Not properly formed";
}

/// Image subheader fields
pub mod image {
    pub const IM: usize = 2;
    pub const IID1: usize = 10;
    pub const IDATIM: usize = 14;
    pub const TGTID: usize = 17;
    pub const IID2: usize = 80;
    pub const ISCLAS: usize = 1;
    pub const ENCRYP: usize = 1;
    pub const ISORCE: usize = 42;
    pub const NROWS: usize = 8;
    pub const NCOLS: usize = 8;
    pub const PVTYPE: usize = 3;
    pub const IREP: usize = 8;
    pub const ICAT: usize = 8;
    pub const ABPP: usize = 2;
    pub const PJUST: usize = 1;
    pub const ICORDS: usize = 1;
    pub const IGEOLO: usize = 60;
    pub const NICOM: usize = 1;
    pub const ICOM: usize = 80;
    pub const IC: usize = 2;
    pub const COMRAT: usize = 4;
    pub const NBANDS: usize = 1;
    pub const XBANDS: usize = 5;
    pub const IREPBAND: usize = 2;
    pub const ISUBCAT: usize = 6;
    pub const IFC: usize = 1;
    pub const IMFLT: usize = 3;
    pub const NLUTS: usize = 1;
    pub const NELUT: usize = 5;
    pub const ISYNC: usize = 1;
    pub const IMODE: usize = 1;
    pub const NBPR: usize = 4;
    pub const NBPC: usize = 4;
    pub const NPPBH: usize = 4;
    pub const NPPBV: usize = 4;
    pub const NBPP: usize = 2;
    pub const IDLVL: usize = 3;
    pub const IALVL: usize = 3;
    pub const ILOC: usize = 10;
    pub const IMAG: usize = 4;
    pub const UDIDL: usize = 5;
    pub const UDOFL: usize = 3;
    pub const IXSHDL: usize = 5;
    pub const IXSOFL: usize = 3;

    /// ICORDS codes that are followed by IGEOLO
    pub const CORNER_CODES_20: &[u8] = b"UGC";
    pub const CORNER_CODES_21: &[u8] = b"UGNSD";

    /// IC values without a COMRAT field
    pub const UNCOMPRESSED: &[&str] = &["NC", "NM"];
}

/// Graphic subheader fields
pub mod graphic {
    pub const SY: usize = 2;
    pub const SID: usize = 10;
    pub const SNAME: usize = 20;
    pub const SSCLAS: usize = 1;
    pub const ENCRYP: usize = 1;
    pub const SFMT: usize = 1;
    pub const SSTRUCT: usize = 13;
    pub const SDLVL: usize = 3;
    pub const SALVL: usize = 3;
    pub const SLOC: usize = 10;
    pub const SBND1: usize = 10;
    pub const SCOLOR: usize = 1;
    pub const SBND2: usize = 10;
    pub const SRES2: usize = 2;
    pub const SXSHDL: usize = 5;
    pub const SXSOFL: usize = 3;
}

/// Label subheader fields
pub mod label {
    pub const LA: usize = 2;
    pub const LID: usize = 10;
    pub const LSCLAS: usize = 1;
    pub const ENCRYP: usize = 1;
    pub const LFS: usize = 1;
    pub const LCW: usize = 2;
    pub const LCH: usize = 2;
    pub const LDLVL: usize = 3;
    pub const LALVL: usize = 3;
    pub const LLOCR: usize = 5;
    pub const LLOCC: usize = 5;
    pub const LTC: usize = 3;
    pub const LBC: usize = 3;
    pub const LXSHDL: usize = 5;
    pub const LXSOFL: usize = 3;
}

/// Text subheader fields
pub mod text {
    pub const TE: usize = 2;
    pub const TEXTID: usize = 7;
    pub const TXTALVL: usize = 3;
    pub const TXTDT: usize = 14;
    pub const TXTITL: usize = 80;
    pub const TSCLAS: usize = 1;
    pub const ENCRYP: usize = 1;
    pub const TXTFMT: usize = 3;
    pub const TXSHDL: usize = 5;
    pub const TXSOFL: usize = 3;
}

/// Data extension subheader fields
pub mod data_extension {
    pub const DE: usize = 2;
    pub const DESTAG: usize = 25;
    pub const DESVER: usize = 2;
    pub const DESCLAS: usize = 1;
    pub const DESOFLW: usize = 6;
    pub const DESITEM: usize = 3;
    pub const DESSHL: usize = 4;

    pub const TRE_OVERFLOW: &str = "TRE_OVERFLOW";
    pub const REGISTERED_EXTENSIONS: &str = "Registered Extensions";
    pub const CONTROLLED_EXTENSIONS: &str = "Controlled Extensions";
}

/// Reserved extension subheader fields
pub mod reserved_extension {
    pub const RE: usize = 2;
    pub const RESTAG: usize = 25;
    pub const RESVER: usize = 2;
    pub const RESCLAS: usize = 1;
    pub const RESSHL: usize = 4;
}
