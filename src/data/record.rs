//! Bank record as stored in the data file.

use serde::Deserialize;
use serde_json::Value;

/// `COD_STATE` value of a bank in normal operation.
pub const NORMAL_STATE_CODE: f64 = 1.0;

/// One bank entity.
///
/// Fields are loosely typed: the data file has no enforced schema, so a
/// missing field (or `null`) is simply `None` and any JSON type is kept
/// as-is for projection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BankRecord {
    /// Bank routing/identification code.
    #[serde(rename = "MFO", default)]
    pub mfo: Option<Value>,

    /// Short display name.
    #[serde(rename = "SHORTNAME", default)]
    pub short_name: Option<Value>,

    /// Status code, `1` for normal.
    #[serde(rename = "COD_STATE", default)]
    pub cod_state: Option<Value>,
}

impl BankRecord {
    /// Build a record from one element of the top-level array.
    ///
    /// Elements that are not objects become records with every field absent.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    /// Whether `COD_STATE` is numerically equal to 1.
    ///
    /// Strict: the string `"1"` is not a normal state.
    pub fn is_normal(&self) -> bool {
        match &self.cod_state {
            Some(Value::Number(n)) => n.as_f64() == Some(NORMAL_STATE_CODE),
            _ => false,
        }
    }
}
