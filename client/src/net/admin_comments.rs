//! Shape-tolerant extraction for the admin comments payload.
//!
//! The admin endpoint has answered with a bare array and with objects wrapping
//! the array under `data`, `comments` or `results`. Each accepted shape is a
//! named strategy; they are tried in order and the first match wins.

#[cfg(test)]
#[path = "admin_comments_test.rs"]
mod admin_comments_test;

use serde_json::Value;

/// One accepted payload shape. Hands the payload back untouched on a miss.
pub struct Strategy {
    pub name: &'static str,
    pub apply: fn(Value) -> Result<Vec<Value>, Value>,
}

/// Accepted shapes in priority order.
pub const STRATEGIES: [Strategy; 4] = [
    Strategy { name: "data", apply: data_field },
    Strategy { name: "comments", apply: comments_field },
    Strategy { name: "results", apply: results_field },
    Strategy { name: "bare_array", apply: bare_array },
];

/// Run the strategies and return the first match with its name.
#[must_use]
pub fn extract_with_strategy(payload: Value) -> Option<(&'static str, Vec<Value>)> {
    let mut payload = payload;
    for strategy in &STRATEGIES {
        match (strategy.apply)(payload) {
            Ok(items) => return Some((strategy.name, items)),
            Err(back) => payload = back,
        }
    }
    None
}

/// Extract the comment list, degrading to empty with a warning on no match.
#[must_use]
pub fn extract(payload: Value) -> Vec<Value> {
    match extract_with_strategy(payload) {
        Some((name, items)) => {
            log::debug!("admin comments: matched `{name}` shape ({} items)", items.len());
            items
        }
        None => {
            log::warn!("admin comments: unrecognized payload shape, returning empty list");
            Vec::new()
        }
    }
}

fn bare_array(payload: Value) -> Result<Vec<Value>, Value> {
    match payload {
        Value::Array(items) => Ok(items),
        other => Err(other),
    }
}

fn data_field(payload: Value) -> Result<Vec<Value>, Value> {
    take_array(payload, "data")
}

fn comments_field(payload: Value) -> Result<Vec<Value>, Value> {
    take_array(payload, "comments")
}

fn results_field(payload: Value) -> Result<Vec<Value>, Value> {
    take_array(payload, "results")
}

fn take_array(mut payload: Value, key: &str) -> Result<Vec<Value>, Value> {
    if payload.get(key).is_some_and(Value::is_array) {
        if let Some(Value::Array(items)) = payload.get_mut(key).map(Value::take) {
            return Ok(items);
        }
    }
    Err(payload)
}
