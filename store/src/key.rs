//! Composite key encoding.

use crate::StoreError;

/// Separator between key segments. NUL cannot appear in any segment, which
/// makes the encoding collision-free for distinct part sequences.
const SEPARATOR: char = '\u{0}';

/// Encode a prefix plus ordered parts into a single storage key.
///
/// Deterministic: the same inputs always produce the same key. Fails if any
/// segment contains the separator.
pub fn composite_key(prefix: &str, parts: &[&str]) -> Result<String, StoreError> {
    let mut key = String::with_capacity(prefix.len() + parts.iter().map(|p| p.len() + 1).sum::<usize>());
    for segment in std::iter::once(&prefix).chain(parts.iter()) {
        if segment.contains(SEPARATOR) {
            return Err(StoreError::Backend(format!(
                "key segment contains reserved separator: {segment:?}"
            )));
        }
    }
    key.push_str(prefix);
    for part in parts {
        key.push(SEPARATOR);
        key.push_str(part);
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = composite_key("output", &["acct", "tx1"]).unwrap();
        let b = composite_key("output", &["acct", "tx1"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_parts_distinct_keys() {
        // Without a separator, ("ab", "c") and ("a", "bc") would collide.
        let a = composite_key("p", &["ab", "c"]).unwrap();
        let b = composite_key("p", &["a", "bc"]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_separator_in_segment() {
        assert!(composite_key("p", &["a\u{0}b"]).is_err());
        assert!(composite_key("p\u{0}", &["a"]).is_err());
    }

    #[test]
    fn test_prefix_only() {
        assert_eq!(composite_key("meta", &[]).unwrap(), "meta");
    }
}
