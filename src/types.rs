// src/types.rs
use crate::error::{FcsError, Result};

/// FCS segment kind enumeration
///
/// The header declares byte ranges for the TEXT, DATA and ANALYSIS
/// segments; anything vendor-defined between the fixed header and the
/// TEXT segment is OTHER content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Text,
    Data,
    Analysis,
    Other,
}

impl SegmentKind {
    /// Get the name of the segment kind as it appears in the standard
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Text => "TEXT",
            SegmentKind::Data => "DATA",
            SegmentKind::Analysis => "ANALYSIS",
            SegmentKind::Other => "OTHER",
        }
    }
}

/// Byte order of the DATA segment, resolved from the `$BYTEORD` keyword.
///
/// The standard writes the byte permutation out literally: "1,2,3,4" is
/// little-endian and "4,3,2,1" is big-endian. Mixed orders from old
/// hardware (e.g. "2,1,4,3") are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Resolve a `$BYTEORD` keyword value
    pub fn from_keyword(value: &str) -> Result<Self> {
        match value.trim() {
            "1,2,3,4" => Ok(ByteOrder::LittleEndian),
            "4,3,2,1" => Ok(ByteOrder::BigEndian),
            other => Err(FcsError::UnsupportedByteOrder(other.to_string())),
        }
    }

    pub fn is_big_endian(&self) -> bool {
        matches!(self, ByteOrder::BigEndian)
    }
}

// TEXT segment required keywords
pub const BEGINANALYSIS: &str = "$BEGINANALYSIS";
pub const BEGINDATA: &str = "$BEGINDATA";
pub const BEGINSTEXT: &str = "$BEGINSTEXT";
pub const BYTEORD: &str = "$BYTEORD";
pub const DATATYPE: &str = "$DATATYPE";
pub const ENDANALYSIS: &str = "$ENDANALYSIS";
pub const ENDDATA: &str = "$ENDDATA";
pub const ENDSTEXT: &str = "$ENDSTEXT";
pub const MODE: &str = "$MODE";
pub const NEXTDATA: &str = "$NEXTDATA";
pub const PAR: &str = "$PAR";
pub const TOT: &str = "$TOT";

/// The keyword set every conforming TEXT segment must carry
pub const REQUIRED_KEYWORDS: [&str; 12] = [
    BEGINANALYSIS,
    BEGINDATA,
    BEGINSTEXT,
    BYTEORD,
    DATATYPE,
    ENDANALYSIS,
    ENDDATA,
    ENDSTEXT,
    MODE,
    NEXTDATA,
    PAR,
    TOT,
];

/// Per-channel keyword suffixes, in the order they are probed
pub const PARAMETER_SUFFIXES: [char; 4] = ['B', 'E', 'N', 'R'];

/// Format a per-channel keyword, e.g. `parameter_keyword(3, 'N')` -> "$P3N"
pub fn parameter_keyword(channel: usize, suffix: char) -> String {
    format!("$P{}{}", channel, suffix)
}
