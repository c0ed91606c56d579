//! Access token extraction from the validate response.

use serde_json::Value;

use super::aliases;

/// Extract the access token from a parsed validate response.
///
/// Checks the top-level keys in the fixed priority order
/// `Result > result > Token > token` and returns the first non-empty
/// string. The order is deterministic so tests are reproducible even when
/// an upstream environment sends several of the spellings at once.
pub fn extract_token(payload: Option<&Value>) -> Option<String> {
    let object = payload?.as_object()?;
    for key in aliases::TOKEN {
        if let Some(Value::String(token)) = object.get(*key) {
            if !token.trim().is_empty() {
                return Some(token.clone());
            }
        }
    }
    None
}
