use crate::utils::error::{ClientError, Result};
use serde_json::Value;

/// Looks up a value in nested JSON by following `path` one key at a time.
///
/// At every step the current value must be an object containing the next key:
/// an absent key yields [`ClientError::MissingKey`], while a non-object value
/// that still has keys left to apply yields [`ClientError::NotAnObject`].
/// Both errors name the key that could not be applied. An empty path returns
/// `value` itself.
pub fn access_nested<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = value;
    for key in path {
        let obj = current.as_object().ok_or_else(|| ClientError::NotAnObject {
            key: (*key).to_string(),
        })?;
        current = obj.get(*key).ok_or_else(|| ClientError::MissingKey {
            key: (*key).to_string(),
        })?;
    }
    Ok(current)
}
