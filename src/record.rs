// 🧾 Record - immutable, validated value object
//
// Identity and values are fixed at construction. The only way in is `Record::try_new`;
// every factory and every decode path funnels through it, so a Record that exists is valid.
//
// Two failure models live side by side:
// - convenience factories (`of`, `from_json`, `from_bytes`, `to_json`, ...) return Option
// - raw paths (`decode_json`, `Deserialize`, sequence decode) return a structured RecordError

use crate::error::{RecordError, Result};
use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ============================================================================
// RECORD
// ============================================================================

/// Field order here is the wire key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordWire")]
pub struct Record {
    id: String,

    name: String,

    #[serde(rename = "intValue")]
    int_value: i32,

    #[serde(rename = "typeOfThing")]
    kind: Kind,

    /// In-memory only. Survives clone, never JSON.
    #[serde(skip_serializing)]
    ignored: String,
}

impl Record {
    /// Validate and normalize. A blank `id` or an unknown `kind` name is rejected;
    /// `None` for `name` or `ignored` becomes an empty string.
    pub fn try_new(
        id: &str,
        name: Option<&str>,
        int_value: i32,
        kind: &str,
        ignored: Option<&str>,
    ) -> Result<Record> {
        if id.trim().is_empty() {
            return Err(RecordError::BlankId);
        }
        let kind: Kind = kind.parse()?;

        Ok(Record {
            id: id.to_string(),
            name: name.unwrap_or_default().to_string(),
            int_value,
            kind,
            ignored: ignored.unwrap_or_default().to_string(),
        })
    }

    // ========================================================================
    // CONVENIENCE FACTORIES (failure => None)
    // ========================================================================

    pub fn of(
        id: Option<&str>,
        name: Option<&str>,
        int_value: i32,
        kind: Option<&str>,
    ) -> Option<Record> {
        Record::of_with_ignored(id, name, int_value, kind, None)
    }

    pub fn of_with_ignored(
        id: Option<&str>,
        name: Option<&str>,
        int_value: i32,
        kind: Option<&str>,
        ignored: Option<&str>,
    ) -> Option<Record> {
        let result = Record::try_new(
            id.unwrap_or_default(),
            name,
            int_value,
            kind.unwrap_or_default(),
            ignored,
        );
        swallow("of", result)
    }

    /// Full copy of `source`, `ignored` included.
    pub fn from_record(source: Option<&Record>) -> Option<Record> {
        source.cloned()
    }

    /// Parse a JSON object. Absent input, malformed JSON and invalid values all give `None`.
    pub fn from_json(json: Option<&str>) -> Option<Record> {
        swallow("from_json", Record::decode_json(json?))
    }

    pub fn from_bytes(bytes: Option<&[u8]>) -> Option<Record> {
        swallow("from_bytes", Record::decode_bytes(bytes?))
    }

    // ========================================================================
    // RAW DECODE / ENCODE (failure => RecordError)
    // ========================================================================

    pub fn decode_json(json: &str) -> Result<Record> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn decode_bytes(bytes: &[u8]) -> Result<Record> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn encode_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn encode_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Compact `{"id","name","intValue","typeOfThing"}` object; `ignored` is never emitted.
    pub fn to_json(&self) -> Option<String> {
        swallow("to_json", self.encode_json())
    }

    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        swallow("to_bytes", self.encode_bytes())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn int_value(&self) -> i32 {
        self.int_value
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn ignored(&self) -> &str {
        &self.ignored
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ id='{}', name='{}', intValue='{}', typeOfThing='{}', ignored='{}'}}",
            self.id, self.name, self.int_value, self.kind, self.ignored
        )
    }
}

fn swallow<T>(operation: &'static str, result: Result<T>) -> Option<T> {
    result
        .inspect_err(|error| debug!(operation, %error, "record operation yielded no value"))
        .ok()
}

// ============================================================================
// WIRE SHAPE (decode side)
// ============================================================================

/// Everything optional so missing/null keys reach `try_new` instead of failing in serde.
/// Unknown keys, `ignored` among them, are dropped.
#[derive(Debug, Deserialize)]
struct RecordWire {
    id: Option<String>,

    name: Option<String>,

    #[serde(rename = "intValue")]
    int_value: Option<i32>,

    #[serde(rename = "typeOfThing")]
    type_of_thing: Option<String>,
}

impl TryFrom<RecordWire> for Record {
    type Error = RecordError;

    fn try_from(wire: RecordWire) -> Result<Record> {
        Record::try_new(
            wire.id.as_deref().unwrap_or_default(),
            wire.name.as_deref(),
            wire.int_value.unwrap_or_default(),
            wire.type_of_thing.as_deref().unwrap_or_default(),
            None,
        )
    }
}
