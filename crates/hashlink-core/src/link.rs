use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored mapping from a short code to the original URL.
///
/// `short_url` always equals `id`; both are kept so the serialized record
/// matches the shape clients already consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    /// The key the record is stored under.
    pub id: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
    /// The externally visible short code.
    pub short_url: ShortCode,
    /// When the record was (last) written.
    #[serde(rename = "creation_date")]
    pub created_at: Timestamp,
}

impl ShortLink {
    pub fn new(code: ShortCode, original_url: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: code.clone(),
            original_url: original_url.into(),
            short_url: code,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_and_short_url_match() {
        let code = ShortCode::new_unchecked("c984d06a");
        let link = ShortLink::new(code.clone(), "https://example.com", Timestamp::UNIX_EPOCH);

        assert_eq!(link.id, code);
        assert_eq!(link.short_url, code);
        assert_eq!(link.original_url, "https://example.com");
    }

    #[test]
    fn serialized_field_names() {
        let code = ShortCode::new_unchecked("c984d06a");
        let link = ShortLink::new(code, "https://example.com", Timestamp::UNIX_EPOCH);

        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["id"], "c984d06a");
        assert_eq!(value["original_url"], "https://example.com");
        assert_eq!(value["short_url"], "c984d06a");
        assert_eq!(value["creation_date"], "1970-01-01T00:00:00Z");
    }
}
