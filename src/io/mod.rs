//! I/O utilities for file handling
//!
//! This module provides the seekable reader abstraction and the
//! fixed-width field codec every NITF parser is built on.

pub mod seekable;
pub mod field_codec;
