// src/validator.rs
use crate::error::{FcsError, Result};
use crate::text::keyword_int;
use crate::types::{parameter_keyword, PAR, PARAMETER_SUFFIXES, REQUIRED_KEYWORDS};
use std::collections::HashMap;

// Only printable ASCII characters in the range 32-126 (20-7E hex) are valid
pub fn is_valid_keyword(keyword: &str) -> bool {
    keyword.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

/// Validate the keyword mapping before any metadata is derived from it.
///
/// Two checks, both pure predicates:
/// 1. every keyword must be printable ASCII;
/// 2. the mandatory keyword set must be present, plus the four
///    per-channel keywords for every channel 1..=$PAR.
///
/// The first violation is returned; the caller treats it as fatal for
/// the whole decode.
pub fn check_keywords(keywords: &HashMap<String, String>) -> Result<()> {
    for keyword in keywords.keys() {
        if !is_valid_keyword(keyword) {
            return Err(FcsError::InvalidKeyword(keyword.clone()));
        }
    }

    for required in REQUIRED_KEYWORDS {
        if !keywords.contains_key(required) {
            return Err(FcsError::MissingRequiredKeyword(required.to_string()));
        }
    }

    let channels = keyword_int(keywords, PAR)?;
    for channel in 1..=channels {
        for suffix in PARAMETER_SUFFIXES {
            let keyword = parameter_keyword(channel, suffix);
            if !keywords.contains_key(&keyword) {
                return Err(FcsError::MissingParameterKeyword { channel, keyword });
            }
        }
    }

    Ok(())
}
