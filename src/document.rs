// src/document.rs
use crate::data::DataSection;
use crate::error::{FcsError, Result};
use crate::export;
use crate::header::Header;
use crate::params::extract_parameters;
use crate::table::{self, NameKind};
use crate::text::TextSection;
use crate::transform::Transform;
use crate::types::SegmentKind;
use crate::validator::check_keywords;
use bytes::Bytes;
use std::path::Path;
use tracing::debug;

/// A fully decoded FCS file: header, TEXT section and DATA section.
///
/// Built once by [`Fcs::decode`] and immutable afterwards; decoding
/// either returns a complete document or the first error, never a
/// partial value.
#[derive(Debug, Clone)]
pub struct Fcs {
    pub header: Header,
    pub text: TextSection,
    pub data: DataSection,
}

impl Fcs {
    /// Run the full decode pipeline over raw file bytes.
    ///
    /// Stages run in order — locate header, tokenize TEXT, validate
    /// keywords, extract parameter metadata, sanitize the DATA range,
    /// decode the DATA segment — and the first failure aborts the whole
    /// decode.
    pub fn decode(file: impl Into<Bytes>, transform: Transform) -> Result<Fcs> {
        let file = file.into();

        let mut header = Header::parse(&file)?;
        let mut text = TextSection::parse(&file, &header)?;
        check_keywords(&text.keywords)?;
        text.parameters = extract_parameters(&text.keywords)?;
        header.sanitize(&text.keywords)?;

        let segment = header.segments[&SegmentKind::Data];
        if segment.start > segment.end {
            return Err(FcsError::MalformedHeader {
                field: "DATA begin",
                found: format!("range {}..{}", segment.start, segment.end),
            });
        }
        if segment.end >= file.len() {
            return Err(FcsError::InsufficientData {
                needed: segment.byte_len(),
                available: file.len().saturating_sub(segment.start),
            });
        }
        let data_bytes = file.slice(segment.start..=segment.end);
        let data = DataSection::decode(&text, data_bytes, &transform)?;

        debug!(
            version = %header.version,
            events = data.event_count(),
            parameters = data.parameter_count(),
            "decoded document"
        );

        Ok(Fcs { header, text, data })
    }

    /// Display names of all channels, in id order ($PnS, falling back to
    /// $PnN when absent)
    pub fn names(&self) -> Vec<String> {
        self.text
            .parameters
            .iter()
            .map(|parameter| {
                if parameter.display_name.is_empty() {
                    parameter.short_name.clone()
                } else {
                    parameter.display_name.clone()
                }
            })
            .collect()
    }

    /// Short names of all channels, in id order ($PnN)
    pub fn short_names(&self) -> Vec<String> {
        self.text
            .parameters
            .iter()
            .map(|parameter| parameter.short_name.clone())
            .collect()
    }

    /// Project the document into a header row plus one row per event
    pub fn to_table(&self, kind: NameKind) -> Vec<Vec<String>> {
        table::project(self, kind)
    }

    /// Project and write the document as CSV
    pub fn to_csv(&self, path: impl AsRef<Path>, kind: NameKind) -> Result<()> {
        export::write_csv(&self.to_table(kind), path)
    }
}
