use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::registry::{type_code, TagDefinition, TagKey, TagRegistry};

/// A converted tag component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Integer(i64),
    /// Rational, signed rational and float components. A zero denominator
    /// produces a non-finite value.
    Float(f64),
    Text(String),
}

impl TypedValue {
    /// Convert one raw component according to its TIFF field type.
    pub fn convert(raw: &str, type_code: u16) -> Self {
        match type_code {
            type_code::BYTE | type_code::SHORT | type_code::LONG | type_code::SSHORT => {
                Self::Integer(parse_integer(raw))
            }
            type_code::RATIONAL | type_code::SRATIONAL | type_code::FLOAT => {
                Self::Float(parse_fraction(raw))
            }
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Integer projection. Floats truncate, text parses leniently (0 on failure).
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Integer(v) => *v,
            Self::Float(v) => *v as i64,
            Self::Text(s) => parse_integer(s),
        }
    }

    /// Floating-point projection. Text parses leniently (0.0 on failure).
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(v) => *v as f64,
            Self::Float(v) => *v,
            Self::Text(s) => parse_fraction(s),
        }
    }

    /// Borrow the text variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

fn parse_integer(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

fn parse_float(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// `"N/D"` becomes `N / D`, anything else parses as a plain float.
fn parse_fraction(raw: &str) -> f64 {
    match raw.split_once('/') {
        Some((numerator, denominator)) => parse_float(numerator) / parse_float(denominator),
        None => parse_float(raw),
    }
}

/// What happened to one raw observation passed to [`ValueStore::record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Values converted and stored.
    Stored,
    /// `(tag id, group id)` is not in the catalogue; nothing stored.
    UnknownTag,
    /// The tag was already recorded for this image; the first observation wins.
    AlreadyRecorded,
    /// Component count disagreed with the declared count; the entry holds no values.
    CountMismatch,
}

/// One recorded tag: its definition plus the converted components.
#[derive(Debug, Clone)]
pub struct ValueEntry<'r> {
    definition: &'r TagDefinition,
    values: Vec<TypedValue>,
}

impl<'r> ValueEntry<'r> {
    pub fn definition(&self) -> &'r TagDefinition {
        self.definition
    }

    pub fn values(&self) -> &[TypedValue] {
        &self.values
    }

    pub fn first(&self) -> Option<&TypedValue> {
        self.values.first()
    }
}

/// Per-image tag values, keyed by catalogue entry.
#[derive(Debug)]
pub struct ValueStore<'r> {
    registry: &'r TagRegistry,
    entries: Vec<ValueEntry<'r>>,
    index: HashMap<TagKey, usize>,
}

impl<'r> ValueStore<'r> {
    pub fn new(registry: &'r TagRegistry) -> Self {
        Self {
            registry,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Resolve and convert one raw observation.
    ///
    /// A single component (or an ASCII/UNDEFINED value) is converted whole.
    /// Otherwise the raw string is split on single spaces and every
    /// component converted; a component count other than `count` leaves
    /// the entry without values.
    pub fn record(
        &mut self,
        tag_id: u16,
        group_id: u16,
        raw: &str,
        type_code: u16,
        count: u32,
    ) -> RecordOutcome {
        let Some(definition) = self.registry.lookup(tag_id, group_id) else {
            return RecordOutcome::UnknownTag;
        };

        let key = definition.key();
        if self.index.contains_key(&key) {
            return RecordOutcome::AlreadyRecorded;
        }

        let (values, outcome) = convert_components(raw, type_code, count);
        if outcome == RecordOutcome::CountMismatch {
            log::debug!(
                "{}: expected {count} components, got {:?}",
                definition.name,
                raw
            );
        }

        self.index.insert(key, self.entries.len());
        self.entries.push(ValueEntry { definition, values });
        outcome
    }

    pub fn entry(&self, tag_id: u16, group_id: u16) -> Option<&ValueEntry<'r>> {
        self.index
            .get(&(tag_id, group_id))
            .map(|&position| &self.entries[position])
    }

    pub fn first_value(&self, tag_id: u16, group_id: u16) -> Option<&TypedValue> {
        self.entry(tag_id, group_id).and_then(ValueEntry::first)
    }

    pub fn all_values(&self, tag_id: u16, group_id: u16) -> &[TypedValue] {
        self.entry(tag_id, group_id)
            .map(ValueEntry::values)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &ValueEntry<'r>> {
        self.entries.iter()
    }
}

fn convert_components(raw: &str, type_code: u16, count: u32) -> (Vec<TypedValue>, RecordOutcome) {
    if count == 1 || type_code::is_textual(type_code) {
        return (vec![TypedValue::convert(raw, type_code)], RecordOutcome::Stored);
    }

    let components: Vec<&str> = raw.split(' ').collect();
    if components.len() != count as usize {
        return (Vec::new(), RecordOutcome::CountMismatch);
    }

    let values = components
        .into_iter()
        .map(|component| TypedValue::convert(component, type_code))
        .collect();
    (values, RecordOutcome::Stored)
}
