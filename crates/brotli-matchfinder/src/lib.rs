//! # Brotli Match Finder
//!
//! LZ77 match finding for Brotli encoders (RFC 7932).
//!
//! The match finder scans a byte stream, finds substrings repeated within a
//! sliding history window, and emits [`Match`] records: a run of literals
//! followed by a copy of earlier data. An entropy encoder turns those
//! records into a compressed stream.
//!
//! ## Features
//!
//! - **Lookahead parsing**: Up to three overlapping matches held in flight
//! - **Streaming**: Chunks submitted across calls form one logical stream
//! - **Bounded memory**: Fixed-size hash table, history trimmed to the window
//! - **Format tables**: Brotli alphabet sizes and block-length prefix codes
//!
//! ## Example
//!
//! ```ignore
//! use brotli_matchfinder::{M4, M4Config, apply_matches};
//! use brotli_matchfinder_core::MatchFinder;
//!
//! let mut finder = M4::new(M4Config::default())?;
//! let matches = finder.find_all(b"abcdabcdabcd")?;
//!
//! let mut rebuilt = Vec::new();
//! apply_matches(&mut rebuilt, b"abcdabcdabcd", &matches)?;
//! ```

pub mod codec;
pub mod config;
pub mod constants;
pub mod extend;
pub mod history;
pub mod m4;
pub mod replay;
pub mod table;

// Re-export main types
pub use brotli_matchfinder_core::{Error, Match, MatchFinder, MatchStats, Result};
pub use codec::BrotliCodec;
pub use config::M4Config;
pub use m4::M4;
pub use replay::apply_matches;
