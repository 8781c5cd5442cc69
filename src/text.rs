// src/text.rs
use crate::error::{FcsError, Result};
use crate::header::Header;
use crate::params::Parameter;
use crate::types::SegmentKind;
use bytes::Bytes;
use std::collections::HashMap;

/// The self-describing TEXT segment: raw bytes, the keyword mapping and
/// the per-channel metadata derived from it.
///
/// Keys are unique; writing the same keyword twice keeps the last value.
/// Iteration order of the mapping is never relied upon.
#[derive(Debug, Clone)]
pub struct TextSection {
    pub bytes: Bytes,
    pub keywords: HashMap<String, String>,
    pub parameters: Vec<Parameter>,
}

impl TextSection {
    /// Slice the TEXT segment out of the file and tokenize it into the
    /// keyword mapping. Parameters are filled in by a later stage.
    pub fn parse(file: &Bytes, header: &Header) -> Result<TextSection> {
        let segment = header.segments[&SegmentKind::Text];
        let bytes = file.slice(segment.start..=segment.end);

        let fields = tokenize(&bytes)?;

        let mut keywords = HashMap::new();
        for pair in fields.chunks(2) {
            keywords.insert(pair[0].trim().to_string(), pair[1].trim().to_string());
        }

        Ok(TextSection {
            bytes,
            keywords,
            parameters: Vec::new(),
        })
    }

    pub fn keyword(&self, key: &str) -> Option<&str> {
        self.keywords.get(key).map(String::as_str)
    }
}

/// Split a TEXT segment into its keyword/value fields.
///
/// The first byte declares the delimiter. The segment is split on
/// unescaped delimiter occurrences; two consecutive delimiter bytes
/// inside a field stand for one literal delimiter character. The leading
/// and trailing padding fields are discarded before returning.
///
/// Fails with [`FcsError::Tokenize`] on an empty segment or when the
/// remaining field count is odd (a keyword without a value, or an
/// unterminated segment).
pub fn tokenize(segment: &[u8]) -> Result<Vec<String>> {
    if segment.is_empty() {
        return Err(FcsError::Tokenize("empty TEXT segment".to_string()));
    }

    let delimiter = segment[0];
    let mut fields: Vec<String> = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    let mut i = 0;
    while i < segment.len() {
        let byte = segment[i];
        if byte == delimiter {
            // Doubled delimiter: one literal delimiter byte in the field.
            // The leading byte at offset 0 is the declaration itself and
            // always acts as a separator.
            if i > 0 && i + 1 < segment.len() && segment[i + 1] == delimiter {
                current.push(delimiter);
                i += 2;
                continue;
            }
            fields.push(String::from_utf8_lossy(&current).into_owned());
            current.clear();
        } else {
            current.push(byte);
        }
        i += 1;
    }
    fields.push(String::from_utf8_lossy(&current).into_owned());

    // Drop the padding fields before and after the delimited run.
    if fields.len() < 2 {
        return Err(FcsError::Tokenize(
            "TEXT segment contains no delimited fields".to_string(),
        ));
    }
    let inner = &fields[1..fields.len() - 1];

    if inner.len() % 2 != 0 {
        return Err(FcsError::Tokenize(format!(
            "odd field count: {} fields cannot form keyword/value pairs",
            inner.len()
        )));
    }

    Ok(inner.to_vec())
}

/// Look up a keyword and parse it as a non-negative integer.
///
/// An absent keyword reports an empty value; both cases surface as
/// [`FcsError::NumericConversion`] naming the keyword.
pub(crate) fn keyword_int(keywords: &HashMap<String, String>, keyword: &str) -> Result<usize> {
    let value = keywords.get(keyword).map(String::as_str).unwrap_or("");
    value.trim().parse().map_err(|_| FcsError::NumericConversion {
        keyword: keyword.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic_pairs() {
        let fields = tokenize(b"/$PAR/2/$TOT/3/").unwrap();
        assert_eq!(fields, vec!["$PAR", "2", "$TOT", "3"]);
    }

    #[test]
    fn test_tokenize_comma_delimiter() {
        let fields = tokenize(b",$MODE,L,$DATATYPE,F,").unwrap();
        assert_eq!(fields, vec!["$MODE", "L", "$DATATYPE", "F"]);
    }

    #[test]
    fn test_tokenize_escaped_delimiter_in_value() {
        // "a//b" decodes to the literal value "a/b"
        let fields = tokenize(b"/$SMNO/a//b/").unwrap();
        assert_eq!(fields, vec!["$SMNO", "a/b"]);
    }

    #[test]
    fn test_tokenize_escaped_comma_is_not_missplit() {
        let fields = tokenize(b",$CYT,Model,,A 2000,").unwrap();
        assert_eq!(fields, vec!["$CYT", "Model,A 2000"]);
    }

    #[test]
    fn test_tokenize_odd_field_count_fails() {
        let err = tokenize(b"/$PAR/2/$TOT/").unwrap_err();
        assert!(matches!(err, FcsError::Tokenize(_)));
    }

    #[test]
    fn test_tokenize_unterminated_segment_fails() {
        // Missing the trailing delimiter: the final value is consumed as
        // padding, leaving an odd run.
        let err = tokenize(b"/$PAR/2/$TOT/3").unwrap_err();
        assert!(matches!(err, FcsError::Tokenize(_)));
    }

    #[test]
    fn test_tokenize_empty_segment_fails() {
        let err = tokenize(b"").unwrap_err();
        assert!(matches!(err, FcsError::Tokenize(_)));
    }

    #[test]
    fn test_keywords_are_trimmed_and_last_write_wins() {
        let mut file = vec![0u8; 58];
        file.extend_from_slice(b"/ $MODE / L / $MODE /H/");
        let text_end = file.len() - 1;

        let mut segments = HashMap::new();
        segments.insert(
            SegmentKind::Text,
            crate::header::Segment { kind: SegmentKind::Text, start: 58, end: text_end },
        );
        let header = Header {
            bytes: Bytes::new(),
            version: "FCS3.1".to_string(),
            segments,
        };

        let text = TextSection::parse(&Bytes::from(file), &header).unwrap();
        assert_eq!(text.keyword("$MODE"), Some("H"));
    }

    #[test]
    fn test_keyword_int() {
        let mut keywords = HashMap::new();
        keywords.insert("$TOT".to_string(), " 42 ".to_string());
        keywords.insert("$PAR".to_string(), "many".to_string());

        assert_eq!(keyword_int(&keywords, "$TOT").unwrap(), 42);
        assert!(matches!(
            keyword_int(&keywords, "$PAR").unwrap_err(),
            FcsError::NumericConversion { .. }
        ));
        assert!(matches!(
            keyword_int(&keywords, "$ABSENT").unwrap_err(),
            FcsError::NumericConversion { .. }
        ));
    }
}
