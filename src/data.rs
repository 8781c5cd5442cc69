// src/data.rs
use crate::error::{FcsError, Result};
use crate::text::{keyword_int, TextSection};
use crate::transform::Transform;
use crate::types::{ByteOrder, BYTEORD, DATATYPE, MODE, PAR, TOT};
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use bytes::Bytes;
use tracing::debug;

/// Size in bytes of one encoded element (IEEE-754 32-bit float)
pub const ELEMENT_SIZE: usize = 4;

/// The decoded DATA segment.
///
/// `events` is the row-major event-by-parameter matrix: one row per
/// acquired event ($TOT rows), one column per channel ($PAR columns).
/// `rendered` is its 6-digit fixed-point string twin, produced in the
/// same pass so tabular export needs no second walk over the floats.
#[derive(Debug, Clone)]
pub struct DataSection {
    pub bytes: Bytes,
    /// Storage mode tag (`$MODE`)
    pub mode: String,
    /// Element datatype tag (`$DATATYPE`)
    pub data_type: String,
    pub events: Vec<Vec<f32>>,
    pub rendered: Vec<Vec<String>>,
}

impl DataSection {
    /// Decode the raw DATA segment bytes against the keyword mapping.
    ///
    /// Resolves `$BYTEORD` before touching any float: an unrecognized
    /// order token fails without parsing a single value. The segment must
    /// hold at least `$PAR * $TOT` encoded floats; trailing bytes beyond
    /// that are ignored. The transform strategy is applied to every
    /// element as it is decoded.
    ///
    /// Single pass, fully synchronous; any failure aborts the decode.
    pub fn decode(text: &TextSection, bytes: Bytes, transform: &Transform) -> Result<DataSection> {
        let mode = text.keyword(MODE).unwrap_or("").to_string();
        let data_type = text.keyword(DATATYPE).unwrap_or("").to_string();

        let parameters = keyword_int(&text.keywords, PAR)?;
        let event_count = keyword_int(&text.keywords, TOT)?;
        let order = ByteOrder::from_keyword(text.keyword(BYTEORD).unwrap_or(""))?;

        if bytes.len() < ELEMENT_SIZE {
            return Err(FcsError::InsufficientData {
                needed: ELEMENT_SIZE,
                available: bytes.len(),
            });
        }
        let element_count = event_count * parameters;
        let needed = element_count * ELEMENT_SIZE;
        if bytes.len() < needed {
            return Err(FcsError::InsufficientData {
                needed,
                available: bytes.len(),
            });
        }

        debug!(
            events = event_count,
            parameters,
            order = ?order,
            "decoding DATA segment"
        );

        let mut flat = vec![0f32; element_count];
        match order {
            ByteOrder::LittleEndian => LittleEndian::read_f32_into(&bytes[..needed], &mut flat),
            ByteOrder::BigEndian => BigEndian::read_f32_into(&bytes[..needed], &mut flat),
        }

        let mut events = Vec::with_capacity(event_count);
        let mut rendered = Vec::with_capacity(event_count);
        for event_index in 0..event_count {
            let offset = event_index * parameters;
            let mut event = Vec::with_capacity(parameters);
            let mut strings = Vec::with_capacity(parameters);
            for &raw in &flat[offset..offset + parameters] {
                let value = transform.apply(raw);
                event.push(value);
                strings.push(format!("{value:.6}"));
            }
            events.push(event);
            rendered.push(strings);
        }

        Ok(DataSection {
            bytes,
            mode,
            data_type,
            events,
            rendered,
        })
    }

    /// Number of decoded events (rows)
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of channels per event (columns)
    pub fn parameter_count(&self) -> usize {
        self.events.first().map_or(0, Vec::len)
    }
}
