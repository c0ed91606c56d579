//! Citizen record extraction from the deproc response.
//!
//! The deproc payload shape is not stable: the citizen object has been
//! observed at the top level, under `result`, under `data`, and nested
//! deeper still. Rather than guessing one shape, this module walks the
//! whole object graph breadth-first until it finds something that carries a
//! citizen identifier, then normalizes it through the alias tables.

use std::collections::{HashSet, VecDeque};

use serde_json::{Map, Value};

use super::aliases;
use crate::domain::entities::CitizenRecord;

/// Traversal depth bound. An identifier nested deeper than this is treated
/// as absent.
const MAX_DEPTH: usize = 10;

/// Locate and normalize the citizen record inside an arbitrarily shaped
/// payload.
///
/// Breadth-first traversal with an explicit `(node, depth)` queue so the
/// depth bound stays enforceable, and an identity-seen set as a cycle
/// guard. The first object exposing a citizen identifier (any spelling in
/// [`aliases::CITIZEN_ID`], non-empty) wins; `None` means extraction
/// failure, not a crash.
pub fn extract_citizen(payload: &Value) -> Option<CitizenRecord> {
    let mut queue: VecDeque<(&Value, usize)> = VecDeque::new();
    let mut seen: HashSet<usize> = HashSet::new();
    queue.push_back((payload, 0));

    while let Some((node, depth)) = queue.pop_front() {
        if depth > MAX_DEPTH {
            continue;
        }
        if !seen.insert(node as *const Value as usize) {
            continue;
        }

        match node {
            Value::Object(object) => {
                if let Some(citizen_id) = aliases::lookup(object, aliases::CITIZEN_ID)
                    .and_then(coerce_scalar)
                {
                    return Some(normalize(object, citizen_id));
                }
                for child in object.values() {
                    queue.push_back((child, depth + 1));
                }
            }
            Value::Array(items) => {
                for child in items {
                    queue.push_back((child, depth + 1));
                }
            }
            _ => {}
        }
    }

    None
}

/// Coerce a scalar JSON value to a non-empty string.
///
/// Numeric citizen identifiers show up in some environments; objects and
/// arrays are never business data here.
fn coerce_scalar(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    aliases::lookup(object, keys).and_then(coerce_scalar)
}

fn normalize(object: &Map<String, Value>, citizen_id: String) -> CitizenRecord {
    CitizenRecord {
        citizen_id,
        user_id: field(object, aliases::USER_ID),
        first_name: field(object, aliases::FIRST_NAME),
        last_name: field(object, aliases::LAST_NAME),
        date_of_birth: field(object, aliases::DATE_OF_BIRTH),
        mobile: field(object, aliases::MOBILE),
        email: field(object, aliases::EMAIL),
        notification: field(object, aliases::NOTIFICATION),
        raw: Some(Value::Object(object.clone())),
    }
}
