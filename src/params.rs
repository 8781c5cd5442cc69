// src/params.rs
use crate::error::{FcsError, Result};
use crate::text::keyword_int;
use crate::types::{parameter_keyword, PAR, PARAMETER_SUFFIXES};
use std::collections::HashMap;

/// Metadata for one measured channel, derived from the `$Pn*` keywords.
///
/// Ids are dense and 1-based; the record for channel `n` sits at index
/// `n - 1` of the extracted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub id: usize,

    /// Bits reserved per value (`$PnB`)
    pub bits: usize,
    /// Amplification type (`$PnE`), kept as the raw "f1,f2" string
    pub amplification: String,
    /// Short name (`$PnN`)
    pub short_name: String,
    /// Numeric range (`$PnR`)
    pub range: usize,

    /// Optional display name (`$PnS`), empty when absent
    pub display_name: String,
}

/// Build one [`Parameter`] per declared channel.
///
/// `$PAR` gives the channel count; for each channel the four required
/// keywords must resolve ($PnB and $PnR as integers) or the whole call
/// fails.
pub fn extract_parameters(keywords: &HashMap<String, String>) -> Result<Vec<Parameter>> {
    let channels = keyword_int(keywords, PAR)?;

    let mut parameters = Vec::with_capacity(channels);
    for channel in 1..=channels {
        for suffix in PARAMETER_SUFFIXES {
            let keyword = parameter_keyword(channel, suffix);
            if !keywords.contains_key(&keyword) {
                return Err(FcsError::MissingParameterKeyword { channel, keyword });
            }
        }

        let bits = keyword_int(keywords, &parameter_keyword(channel, 'B'))?;
        let range = keyword_int(keywords, &parameter_keyword(channel, 'R'))?;
        let amplification = keywords[&parameter_keyword(channel, 'E')].clone();
        let short_name = keywords[&parameter_keyword(channel, 'N')].clone();
        let display_name = keywords
            .get(&parameter_keyword(channel, 'S'))
            .cloned()
            .unwrap_or_default();

        parameters.push(Parameter {
            id: channel,
            bits,
            amplification,
            short_name,
            range,
            display_name,
        });
    }

    Ok(parameters)
}
