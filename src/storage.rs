//! Starred Persistence
//!
//! Keeps the starred-id set in browser localStorage.

use std::collections::HashSet;

const STARRED_KEY: &str = "today-bar.starred";

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or("No window")?
        .local_storage()
        .map_err(|e| format!("localStorage error: {:?}", e))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn decode_starred(json: &str) -> Result<HashSet<String>, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Sorted so the stored value is stable
pub fn encode_starred(starred_ids: &HashSet<String>) -> Result<String, String> {
    let mut ids: Vec<&String> = starred_ids.iter().collect();
    ids.sort();
    serde_json::to_string(&ids).map_err(|e| e.to_string())
}

/// Missing key yields an empty set
pub fn load_starred() -> Result<HashSet<String>, String> {
    let stored = local_storage()?
        .get_item(STARRED_KEY)
        .map_err(|e| format!("localStorage read error: {:?}", e))?;

    match stored {
        Some(json) => decode_starred(&json),
        None => Ok(HashSet::new()),
    }
}

pub fn save_starred(starred_ids: &HashSet<String>) -> Result<(), String> {
    let json = encode_starred(starred_ids)?;
    local_storage()?
        .set_item(STARRED_KEY, &json)
        .map_err(|e| format!("localStorage write error: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sorted() {
        let ids: HashSet<String> = ["t-2", "g-1", "s-9"].iter().map(|s| s.to_string()).collect();
        assert_eq!(encode_starred(&ids).unwrap(), r#"["g-1","s-9","t-2"]"#);
    }

    #[test]
    fn test_decode_round_trip() {
        let ids: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let decoded = decode_starred(&encode_starred(&ids).unwrap()).unwrap();
        assert_eq!(decoded, ids);
    }

    #[test]
    fn test_decode_collapses_duplicates() {
        let decoded = decode_starred(r#"["a","a","b"]"#).unwrap();
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_starred("{oops").is_err());
        assert!(decode_starred(r#"{"a":1}"#).is_err());
    }
}
