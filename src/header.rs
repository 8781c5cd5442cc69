// src/header.rs
use crate::error::{FcsError, Result};
use crate::text::keyword_int;
use crate::types::{SegmentKind, BEGINDATA, ENDDATA};
use bytes::{Bytes, BytesMut};
use std::collections::HashMap;
use tracing::{debug, info};

/// One fixed-offset ASCII field of the FCS header (inclusive byte range)
struct Field {
    name: &'static str,
    start: usize,
    end: usize,
}

const VERSION: Field = Field { name: "version", start: 0, end: 5 };
const TEXT_BEGIN: Field = Field { name: "TEXT begin", start: 10, end: 17 };
const TEXT_END: Field = Field { name: "TEXT end", start: 18, end: 25 };
const DATA_BEGIN: Field = Field { name: "DATA begin", start: 26, end: 33 };
const DATA_END: Field = Field { name: "DATA end", start: 34, end: 41 };
const ANALYSIS_BEGIN: Field = Field { name: "ANALYSIS begin", start: 42, end: 49 };
const ANALYSIS_END: Field = Field { name: "ANALYSIS end", start: 50, end: 57 };

/// A located segment: inclusive byte offsets into the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Number of bytes the inclusive range covers
    pub fn byte_len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// The fixed-offset FCS header.
///
/// Holds the raw header bytes (including any vendor OTHER content found
/// between the fixed fields and the TEXT segment), the trimmed format
/// version tag, and the declared byte range of each mandatory segment.
#[derive(Debug, Clone)]
pub struct Header {
    pub bytes: Bytes,
    pub version: String,
    pub segments: HashMap<SegmentKind, Segment>,
}

impl Header {
    /// Size of the fixed header region: version tag, padding and the six
    /// 8-character right-justified segment offset fields
    pub const FIXED_LEN: usize = 58;

    /// Locate the segment boundaries from the fixed header fields.
    ///
    /// Fails with [`FcsError::MalformedHeader`] when the file is shorter
    /// than the fixed header, when any offset field does not trim to a
    /// non-negative integer, or when the declared TEXT range does not fit
    /// inside the file.
    pub fn parse(file: &Bytes) -> Result<Header> {
        if file.len() < Self::FIXED_LEN {
            return Err(FcsError::MalformedHeader {
                field: "fixed header",
                found: format!("{} bytes", file.len()),
            });
        }

        let version = ascii_field(file, &VERSION).to_string();

        let text = Segment {
            kind: SegmentKind::Text,
            start: int_field(file, &TEXT_BEGIN)?,
            end: int_field(file, &TEXT_END)?,
        };
        let data = Segment {
            kind: SegmentKind::Data,
            start: int_field(file, &DATA_BEGIN)?,
            end: int_field(file, &DATA_END)?,
        };
        let analysis = Segment {
            kind: SegmentKind::Analysis,
            start: int_field(file, &ANALYSIS_BEGIN)?,
            end: int_field(file, &ANALYSIS_END)?,
        };

        if text.start > text.end {
            return Err(FcsError::MalformedHeader {
                field: TEXT_BEGIN.name,
                found: format!("range {}..{}", text.start, text.end),
            });
        }
        if text.start < Self::FIXED_LEN || text.end >= file.len() {
            return Err(FcsError::MalformedHeader {
                field: TEXT_BEGIN.name,
                found: format!("range {}..{} outside file of {} bytes", text.start, text.end, file.len()),
            });
        }

        // Retain the fixed header plus any vendor-defined OTHER content
        // sitting between it and the TEXT segment. OTHER bytes are kept
        // verbatim, never interpreted.
        let mut retained = BytesMut::from(&file[..Self::FIXED_LEN]);
        if text.start > Self::FIXED_LEN {
            let other = &file[Self::FIXED_LEN..text.start];
            info!(length = other.len(), "vendor-defined OTHER segment present");
            retained.extend_from_slice(other);
        }

        debug!(
            version = %version,
            text_start = text.start,
            text_end = text.end,
            data_start = data.start,
            data_end = data.end,
            "located header segments"
        );

        let mut segments = HashMap::new();
        segments.insert(SegmentKind::Text, text);
        segments.insert(SegmentKind::Data, data);
        segments.insert(SegmentKind::Analysis, analysis);

        Ok(Header {
            bytes: retained.freeze(),
            version,
            segments,
        })
    }

    pub fn segment(&self, kind: SegmentKind) -> Option<Segment> {
        self.segments.get(&kind).copied()
    }

    /// Patch the DATA range for FCS 3.1 files that defer it to keywords.
    ///
    /// Revision 3.1 allows a file to declare the DATA offsets as 0/0 in
    /// the header and carry the real bounds in `$BEGINDATA`/`$ENDDATA`.
    /// This is a format nuance across revisions, kept as an explicit
    /// post-validation step rather than folded into the header parse.
    pub fn sanitize(&mut self, keywords: &HashMap<String, String>) -> Result<()> {
        let data = self.segments[&SegmentKind::Data];
        if data.start != 0 || data.end != 0 {
            return Ok(());
        }

        let start = keyword_int(keywords, BEGINDATA)?;
        let end = keyword_int(keywords, ENDDATA)?;
        debug!(start, end, "patched DATA range from $BEGINDATA/$ENDDATA");

        self.segments.insert(
            SegmentKind::Data,
            Segment {
                kind: SegmentKind::Data,
                start,
                end,
            },
        );
        Ok(())
    }
}

fn ascii_field<'a>(file: &'a [u8], field: &Field) -> &'a str {
    std::str::from_utf8(&file[field.start..=field.end])
        .unwrap_or("")
        .trim()
}

fn int_field(file: &[u8], field: &Field) -> Result<usize> {
    let raw = ascii_field(file, field);
    raw.parse().map_err(|_| FcsError::MalformedHeader {
        field: field.name,
        found: raw.to_string(),
    })
}
