//! Filtering and projection of bank records.

use serde_json::{Number, Value};

use crate::data::BankRecord;
use crate::processing::document::{BankEntry, ResponseDocument};
use crate::processing::flags::QueryFlags;

/// Turn the loaded records into a response document.
///
/// With `normal`, only records in normal state are kept. Input order is
/// preserved. Missing fields never fail: they come out as absent keys, or an
/// empty `name`.
pub fn process(records: &[BankRecord], flags: QueryFlags) -> ResponseDocument {
    let banks = records
        .iter()
        .filter(|record| !flags.normal || record.is_normal())
        .map(|record| project(record, flags))
        .collect();

    ResponseDocument::new(banks)
}

fn project(record: &BankRecord, flags: QueryFlags) -> BankEntry {
    BankEntry {
        mfo_code: if flags.mfo {
            record.mfo.as_ref().and_then(text_of)
        } else {
            None
        },
        name: record
            .short_name
            .as_ref()
            .and_then(text_of)
            .unwrap_or_default(),
        state_code: if flags.normal {
            record.cod_state.as_ref().and_then(text_of)
        } else {
            None
        },
    }
}

/// Element text for a JSON value. `null` has none.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_text(n)),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Whole floats print without a fraction, so `1.0` and `1e5` read as `1` and
/// `100000`. Beyond 1e21 the exponent form is kept.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}
