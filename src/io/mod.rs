//! I/O utilities for file handling
//!
//! This module provides the seekable reader abstraction, byte order
//! strategies and the cursor-tracking byte source used by the parser.

pub mod seekable;
pub mod byte_order;
pub mod source;

pub use source::TiffSource;
