use serde::{Deserialize, Serialize, Serializer};

use crate::{Operation, StatValue};

// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub operations: Vec<&'static str>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct NumsQuery {
    pub nums: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatResponse {
    pub operation: Operation,
    pub value: StatValue,
}

/// Writes integral floats as JSON integers (`2`, not `2.0`).
fn serialize_number<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

struct JsonNumber(f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(self.0, serializer)
    }
}

impl Serialize for StatValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StatValue::Single(value) => serialize_number(*value, serializer),
            StatValue::Multiple(values) => {
                serializer.collect_seq(values.iter().map(|&v| JsonNumber(v)))
            }
        }
    }
}
