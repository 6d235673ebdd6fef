//! The `Script` record and the typed decoding of intake request bodies.
//!
//! A request body is decoded in a fixed order so the first structural
//! problem is always the one reported:
//!
//! 1. the body must be a JSON object (`null` counts as an empty object),
//! 2. `calcFunc` must be a string,
//! 3. `queries` must be an array,
//! 4. every element of `queries` must be a string, lowest index first.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Request header carrying the target server name.
pub const HEADER_SERVER: &str = "X-Server";

/// Request header whose value becomes the record's `Content-Type` entry.
pub const HEADER_CONTENT_TYPE: &str = "X-Header-Content-Type";

/// Key under which the content type is stored in [`Script::headers`].
pub const CONTENT_TYPE_KEY: &str = "Content-Type";

/// Body field naming the calculation function.
pub const FIELD_CALC_FUNC: &str = "calcFunc";

/// Body field holding the query list.
pub const FIELD_QUERIES: &str = "queries";

// ---------------------------------------------------------------------------
// ScriptId
// ---------------------------------------------------------------------------

/// Random version-4 identifier. Doubles as the record's file name stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScriptId(Uuid);

impl ScriptId {
    /// Mint a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// File name the record is persisted under: `<id>.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl Default for ScriptId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScriptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// A persisted script record.
///
/// Serialized field order and names are part of the on-disk format:
/// `UUID`, `Server`, `Queries`, `Headers`, `CalcFunc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Script {
    #[serde(rename = "UUID")]
    pub id: ScriptId,
    pub server: String,
    pub queries: Vec<String>,
    pub headers: BTreeMap<String, String>,
    pub calc_func: String,
}

impl Script {
    /// Assemble a new record with a freshly minted identifier.
    pub fn new(server: String, content_type: String, body: ScriptBody) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE_KEY.to_string(), content_type);

        Self {
            id: ScriptId::new(),
            server,
            queries: body.queries,
            headers,
            calc_func: body.calc_func,
        }
    }
}

// ---------------------------------------------------------------------------
// ScriptBody
// ---------------------------------------------------------------------------

/// The validated part of an intake request body.
///
/// Fields other than `calcFunc` and `queries` are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBody {
    pub calc_func: String,
    pub queries: Vec<String>,
}

impl ScriptBody {
    /// Decode and validate a raw request body.
    ///
    /// Only the first JSON value is decoded; anything after it is ignored.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        let object = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Option<Map<String, Value>>>()
            .next()
            .ok_or_else(|| CoreError::Decode("EOF".to_string()))?
            .map_err(|e| CoreError::Decode(e.to_string()))?;

        Self::from_object(object.unwrap_or_default())
    }

    /// Validate an already-decoded JSON object.
    pub fn from_object(mut object: Map<String, Value>) -> Result<Self, CoreError> {
        let calc_func = match object.remove(FIELD_CALC_FUNC) {
            Some(Value::String(calc_func)) => calc_func,
            _ => return Err(CoreError::MissingField(FIELD_CALC_FUNC)),
        };

        let items = match object.remove(FIELD_QUERIES) {
            Some(Value::Array(items)) => items,
            _ => return Err(CoreError::MissingField(FIELD_QUERIES)),
        };

        // Collecting into a Result stops at the first non-string element.
        let queries = items
            .into_iter()
            .map(|item| match item {
                Value::String(query) => Ok(query),
                _ => Err(CoreError::InvalidField(FIELD_QUERIES)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { calc_func, queries })
    }
}
