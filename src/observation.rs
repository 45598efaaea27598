//! Device observation: one tab-separated capture line with typed accessors.
//!
//! Layout: `timestamp, frequency, signal, type, subtype, src, dest, reserved, station`,
//! then `key, value` pairs. Parsing never fails; bad fields degrade per accessor
//! and only [`Observation::valid`] (or [`Observation::check`]) reports structure.

use crate::attrs::Attributes;
use crate::escape::mask_hex_escapes;
use std::ops::Range;

pub const FIELD_SEPARATOR: char = '\t';

pub const DATA_TIMESTAMP: usize = 0;
pub const DATA_FREQUENCY: usize = 1;
pub const DATA_SIGLEVEL: usize = 2;
pub const DATA_PAKTYPE: usize = 3;
pub const DATA_SUBTYPE: usize = 4;
pub const DATA_SOURCE: usize = 5;
pub const DATA_DEST: usize = 6;
pub const DATA_RESERVED: usize = 7;
pub const DATA_STATION: usize = 8;
/// First field of the key/value tail.
pub const DATA_ATTRS: usize = 9;

/// A record needs fields `0..=DATA_DEST` to be valid.
pub const MIN_FIELDS: usize = DATA_DEST + 1;

/// Timestamp reported when field 0 is not a float.
pub const NO_TIMESTAMP: f64 = -1.0;
/// Signal reported when field 2 is not an integer.
pub const NO_SIGNAL: i32 = 100;

/// Management frame subtype for beacons.
pub const SUBTYPE_BEACON: u32 = 8;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("too few fields: {found} (need at least {})", MIN_FIELDS)]
    TooFewFields { found: usize },
    #[error("timestamp is not a number: {0:?}")]
    BadTimestamp(String),
    #[error("type is not an integer: {0:?}")]
    BadType(String),
    #[error("subtype is not an integer: {0:?}")]
    BadSubtype(String),
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// One parsed capture line. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    record: String,
    fields: Vec<Range<usize>>,
    attrs: Attributes,
}

impl Observation {
    /// Split `record` into fields. Accepts any string.
    pub fn new(record: impl Into<String>) -> Self {
        let record = record.into();
        let body = record
            .strip_suffix("\r\n")
            .or_else(|| record.strip_suffix('\n'))
            .unwrap_or(record.as_str());

        let mut fields = Vec::new();
        let mut start = 0;
        for part in body.split(FIELD_SEPARATOR) {
            fields.push(start..start + part.len());
            start += part.len() + FIELD_SEPARATOR.len_utf8();
        }

        let attrs = Attributes::from_fields(
            fields
                .iter()
                .skip(DATA_ATTRS)
                .map(|r| &record[r.clone()]),
        );

        Observation {
            record,
            fields,
            attrs,
        }
    }

    /// The line exactly as given, line ending included.
    pub fn raw(&self) -> &str {
        &self.record
    }

    /// Raw text of field `index`, or `None` past the end of the line.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|r| &self.record[r.clone()])
    }

    /// Fixed fields missing from a short line read as `""`.
    fn fixed(&self, index: usize) -> &str {
        self.field(index).unwrap_or("")
    }

    /// Number of tab-separated fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Seconds since the epoch, or [`NO_TIMESTAMP`].
    pub fn timestamp(&self) -> f64 {
        self.fixed(DATA_TIMESTAMP)
            .parse::<f64>()
            .unwrap_or(NO_TIMESTAMP)
    }

    /// Frequency with unit suffix, e.g. `2.437GHz`.
    pub fn frequency(&self) -> &str {
        self.fixed(DATA_FREQUENCY)
    }

    /// Signal level, or [`NO_SIGNAL`].
    pub fn signal(&self) -> i32 {
        self.fixed(DATA_SIGLEVEL).parse().unwrap_or(NO_SIGNAL)
    }

    pub fn r#type(&self) -> Option<u32> {
        self.fixed(DATA_PAKTYPE).parse().ok()
    }

    pub fn subtype(&self) -> Option<u32> {
        self.fixed(DATA_SUBTYPE).parse().ok()
    }

    /// `(type, subtype)`.
    pub fn packet_type(&self) -> (Option<u32>, Option<u32>) {
        (self.r#type(), self.subtype())
    }

    pub fn src(&self) -> &str {
        self.fixed(DATA_SOURCE)
    }

    pub fn dest(&self) -> &str {
        self.fixed(DATA_DEST)
    }

    /// Station field with each `\xHH` replaced by `.`.
    pub fn station(&self) -> String {
        mask_hex_escapes(self.fixed(DATA_STATION))
    }

    /// Attribute value, verbatim. `Some("")` is a present but empty value.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key)
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// Beacon frame (subtype 8).
    pub fn ap(&self) -> bool {
        self.subtype() == Some(SUBTYPE_BEACON)
    }

    /// Fields `0..=6` are present.
    pub fn valid(&self) -> bool {
        self.fields.len() >= MIN_FIELDS
    }

    /// Structural check: `Err` exactly when [`Observation::valid`] is false.
    pub fn check(&self) -> Result<(), RecordError> {
        if self.valid() {
            Ok(())
        } else {
            Err(RecordError::TooFewFields {
                found: self.fields.len(),
            })
        }
    }

    /// [`Observation::check`] plus timestamp, type and subtype must parse.
    pub fn check_strict(&self) -> Result<(), RecordError> {
        self.check()?;
        let ts = self.fixed(DATA_TIMESTAMP);
        if ts.parse::<f64>().is_err() {
            return Err(RecordError::BadTimestamp(ts.to_string()));
        }
        if self.r#type().is_none() {
            return Err(RecordError::BadType(self.fixed(DATA_PAKTYPE).to_string()));
        }
        if self.subtype().is_none() {
            return Err(RecordError::BadSubtype(self.fixed(DATA_SUBTYPE).to_string()));
        }
        Ok(())
    }
}

impl From<String> for Observation {
    fn from(record: String) -> Self {
        Observation::new(record)
    }
}

impl From<&str> for Observation {
    fn from(record: &str) -> Self {
        Observation::new(record)
    }
}
