// src/lib.rs
//! # fcs-rs
//!
//! A Rust library and CLI for decoding Flow Cytometry Standard (FCS) files —
//! the binary/text hybrid format produced by flow and mass cytometers —
//! into an in-memory document and a tabular form for CSV export.
//!
//! ## Features
//!
//! - 📖 **Self-describing decode**: segment offsets, keyword metadata and
//!   data layout are all read from the file itself
//! - 🔢 **Byte-order aware**: little- and big-endian DATA segments per `$BYTEORD`
//! - 🧮 **Stabilizing transform**: optional CyTOF arcsinh transform applied
//!   during the decode pass
//! - 📦 **Zero-copy segments**: raw segment bytes are cheap slices of the
//!   file buffer
//! - ✅ **Strict validation**: the mandatory keyword set and per-channel
//!   keywords are checked before any data is touched
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fcs_rs::*;
//!
//! fn main() -> Result<()> {
//!     let reader = FcsReader::open("sample.fcs")?;
//!     let document = reader.decode(Transform::Identity)?;
//!
//!     println!(
//!         "{} events x {} parameters",
//!         document.data.event_count(),
//!         document.data.parameter_count()
//!     );
//!
//!     document.to_csv("sample.csv", NameKind::Display)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Decoding bytes already in memory
//!
//! ```rust,no_run
//! use fcs_rs::*;
//!
//! fn main() -> Result<()> {
//!     let bytes = std::fs::read("sample.fcs")?;
//!     let document = Fcs::decode(bytes, Transform::cytof())?;
//!     let names = document.names();
//!     println!("channels: {}", names.join(", "));
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod transform;
pub mod header;
pub mod text;
pub mod validator;
pub mod params;
pub mod data;
pub mod table;
pub mod document;
pub mod reader;
pub mod export;
pub mod cli;

// Re-export commonly used types at the crate root for convenience
pub use error::{FcsError, Result};

// Type exports
pub use types::{ByteOrder, SegmentKind};

// Pipeline exports
pub use document::Fcs;
pub use header::{Header, Segment};
pub use text::TextSection;
pub use params::Parameter;
pub use data::DataSection;
pub use table::NameKind;
pub use transform::Transform;

// Reader exports
pub use reader::FcsReader;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use fcs_rs::prelude::*;
    //! ```

    pub use crate::document::Fcs;
    pub use crate::error::{FcsError, Result};
    pub use crate::reader::FcsReader;
    pub use crate::table::NameKind;
    pub use crate::transform::Transform;
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
