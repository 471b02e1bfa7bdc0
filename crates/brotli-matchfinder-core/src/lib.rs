//! # Brotli Match Finder Core
//!
//! Shared types, traits, and errors for the Brotli match finder.
//!
//! The match finder turns a byte stream into [`Match`] records: runs of
//! literals, each followed by a copy of earlier data. An entropy encoder
//! consumes those records to produce a compressed stream; this crate only
//! defines the vocabulary the two sides agree on.
//!
//! ## Core Traits
//!
//! - [`MatchFinder`] - Incremental LZ77 match finding
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use brotli_matchfinder::M4;
//! use brotli_matchfinder_core::MatchFinder;
//!
//! let mut finder = M4::default();
//! let matches = finder.find_all(b"abcdabcdabcd")?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::MatchStats;
pub use traits::{Codec, Compressor, Decompressor, MatchFinder};
pub use types::{CompressionLevel, CompressionRatio, MAX_QUALITY, Match};
