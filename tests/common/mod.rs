// tests/common/mod.rs
//! Builder for synthetic in-memory FCS files used by the integration tests.

use std::collections::HashMap;

/// Builds a complete FCS byte stream: fixed header, optional vendor
/// OTHER bytes, delimited TEXT segment and float32 DATA segment, with
/// all offsets computed to be self-consistent.
pub struct FcsFileBuilder {
    version: String,
    delimiter: u8,
    par: usize,
    tot: usize,
    byteord: String,
    values: Vec<f32>,
    short_names: HashMap<usize, String>,
    display_names: HashMap<usize, String>,
    extra_keywords: Vec<(String, String)>,
    omitted_keywords: Vec<String>,
    defer_data_offsets: bool,
    other_bytes: Vec<u8>,
    truncate_data: Option<usize>,
}

impl FcsFileBuilder {
    pub fn new(par: usize, tot: usize) -> Self {
        let values = (0..par * tot).map(|i| i as f32).collect();
        FcsFileBuilder {
            version: "FCS3.1".to_string(),
            delimiter: b'/',
            par,
            tot,
            byteord: "1,2,3,4".to_string(),
            values,
            short_names: HashMap::new(),
            display_names: HashMap::new(),
            extra_keywords: Vec::new(),
            omitted_keywords: Vec::new(),
            defer_data_offsets: false,
            other_bytes: Vec::new(),
            truncate_data: None,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn byteord(mut self, byteord: &str) -> Self {
        self.byteord = byteord.to_string();
        self
    }

    pub fn big_endian(self) -> Self {
        self.byteord("4,3,2,1")
    }

    pub fn values(mut self, values: &[f32]) -> Self {
        self.values = values.to_vec();
        self
    }

    pub fn short_name(mut self, channel: usize, name: &str) -> Self {
        self.short_names.insert(channel, name.to_string());
        self
    }

    pub fn display_name(mut self, channel: usize, name: &str) -> Self {
        self.display_names.insert(channel, name.to_string());
        self
    }

    /// Add or override a keyword
    pub fn keyword(mut self, keyword: &str, value: &str) -> Self {
        self.extra_keywords
            .push((keyword.to_string(), value.to_string()));
        self
    }

    /// Drop a keyword that would otherwise be generated
    pub fn omit(mut self, keyword: &str) -> Self {
        self.omitted_keywords.push(keyword.to_string());
        self
    }

    /// Declare the DATA offsets as 0/0 in the header, deferring to the
    /// $BEGINDATA/$ENDDATA keywords (FCS 3.1 style)
    pub fn defer_data_offsets(mut self) -> Self {
        self.defer_data_offsets = true;
        self
    }

    /// Insert vendor-defined bytes between the fixed header and TEXT
    pub fn other_bytes(mut self, bytes: &[u8]) -> Self {
        self.other_bytes = bytes.to_vec();
        self
    }

    /// Cut the DATA segment down to the given byte length
    pub fn truncate_data(mut self, len: usize) -> Self {
        self.truncate_data = Some(len);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut data: Vec<u8> = if self.byteord == "4,3,2,1" {
            self.values.iter().flat_map(|v| v.to_be_bytes()).collect()
        } else {
            self.values.iter().flat_map(|v| v.to_le_bytes()).collect()
        };
        if let Some(len) = self.truncate_data {
            data.truncate(len);
        }

        // $BEGINDATA/$ENDDATA are rendered zero-padded to 8 digits so the
        // TEXT length does not depend on the offsets it describes.
        let mut keywords: Vec<(String, String)> = vec![
            ("$BEGINANALYSIS".to_string(), "0".to_string()),
            ("$BEGINDATA".to_string(), "00000000".to_string()),
            ("$BEGINSTEXT".to_string(), "0".to_string()),
            ("$BYTEORD".to_string(), self.byteord.clone()),
            ("$DATATYPE".to_string(), "F".to_string()),
            ("$ENDANALYSIS".to_string(), "0".to_string()),
            ("$ENDDATA".to_string(), "00000000".to_string()),
            ("$ENDSTEXT".to_string(), "0".to_string()),
            ("$MODE".to_string(), "L".to_string()),
            ("$NEXTDATA".to_string(), "0".to_string()),
            ("$PAR".to_string(), self.par.to_string()),
            ("$TOT".to_string(), self.tot.to_string()),
        ];
        for channel in 1..=self.par {
            let short = self
                .short_names
                .get(&channel)
                .cloned()
                .unwrap_or_else(|| format!("CH{channel}"));
            keywords.push((format!("$P{channel}B"), "32".to_string()));
            keywords.push((format!("$P{channel}E"), "0,0".to_string()));
            keywords.push((format!("$P{channel}N"), short));
            keywords.push((format!("$P{channel}R"), "1024".to_string()));
            if let Some(display) = self.display_names.get(&channel) {
                keywords.push((format!("$P{channel}S"), display.clone()));
            }
        }
        for (keyword, value) in &self.extra_keywords {
            if let Some(existing) = keywords.iter_mut().find(|(k, _)| k == keyword) {
                existing.1 = value.clone();
            } else {
                keywords.push((keyword.clone(), value.clone()));
            }
        }
        keywords.retain(|(k, _)| !self.omitted_keywords.contains(k));

        let text_start = 58 + self.other_bytes.len();
        let text_len = render_text(&keywords, self.delimiter).len();
        let data_start = text_start + text_len;
        let data_end = data_start + data.len().max(1) - 1;

        for (keyword, value) in keywords.iter_mut() {
            if keyword == "$BEGINDATA" {
                *value = format!("{data_start:08}");
            } else if keyword == "$ENDDATA" {
                *value = format!("{data_end:08}");
            }
        }
        let text = render_text(&keywords, self.delimiter);
        assert_eq!(text.len(), text_len, "TEXT length must not shift when offsets are patched");

        let (header_data_start, header_data_end) = if self.defer_data_offsets {
            (0, 0)
        } else {
            (data_start, data_end)
        };

        let mut file = Vec::new();
        file.extend_from_slice(format!("{:<10}", self.version).as_bytes());
        for offset in [
            text_start,
            text_start + text_len - 1,
            header_data_start,
            header_data_end,
            0,
            0,
        ] {
            file.extend_from_slice(format!("{offset:>8}").as_bytes());
        }
        assert_eq!(file.len(), 58);

        file.extend_from_slice(&self.other_bytes);
        file.extend_from_slice(&text);
        file.extend_from_slice(&data);
        file
    }
}

/// Render keyword pairs as a delimited TEXT segment, doubling any
/// delimiter byte that occurs inside a field (the format's escape rule)
fn render_text(keywords: &[(String, String)], delimiter: u8) -> Vec<u8> {
    let mut text = vec![delimiter];
    for (keyword, value) in keywords {
        for field in [keyword, value] {
            for &byte in field.as_bytes() {
                text.push(byte);
                if byte == delimiter {
                    text.push(delimiter);
                }
            }
            text.push(delimiter);
        }
    }
    text
}
