//! Opaque identifiers used by the directory.
//!
//! The directory serialises primary keys as numbers in most payloads but
//! echoes them back as strings when they come from a URL segment (for example
//! the `pk` returned after a delete). Identifiers are therefore stored as text
//! and decoded from either JSON representation.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawId::deserialize(deserializer)?;
    let text = match raw {
        RawId::Text(value) => value.trim().to_owned(),
        RawId::Unsigned(value) => value.to_string(),
        RawId::Signed(value) => value.to_string(),
    };

    if text.is_empty() {
        return Err(serde::de::Error::custom("identifier must not be blank"));
    }
    Ok(text)
}

/// Identifier of a requester's block list (an access-control group).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockListId(#[serde(deserialize_with = "deserialize_opaque_id")] String);

/// Identifier of a single block-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(#[serde(deserialize_with = "deserialize_opaque_id")] String);

/// Identifier of a worker listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(#[serde(deserialize_with = "deserialize_opaque_id")] String);

impl BlockListId {
    /// Wraps an identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl EntryId {
    /// Wraps an identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl WorkerId {
    /// Wraps an identifier value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BlockListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{EntryId, WorkerId};

    #[rstest]
    #[case::number(json!(2), "2")]
    #[case::string(json!("2"), "2")]
    #[case::padded_string(json!(" 17 "), "17")]
    #[case::negative(json!(-4), "-4")]
    #[case::opaque(json!("W1"), "W1")]
    fn decodes_numbers_and_strings_to_the_same_text(
        #[case] raw: serde_json::Value,
        #[case] expected: &str,
    ) {
        let id: EntryId = serde_json::from_value(raw).expect("identifier should decode");
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    fn numeric_and_textual_ids_compare_equal() {
        let numeric: EntryId = serde_json::from_value(json!(2)).expect("numeric id");
        let textual: EntryId = serde_json::from_value(json!("2")).expect("textual id");
        assert_eq!(numeric, textual);
    }

    #[rstest]
    #[case::empty(json!(""))]
    #[case::whitespace(json!("   "))]
    #[case::null(json!(null))]
    #[case::object(json!({"id": 1}))]
    fn rejects_blank_or_non_scalar_ids(#[case] raw: serde_json::Value) {
        let result = serde_json::from_value::<WorkerId>(raw);
        assert!(result.is_err(), "expected decode failure, got {result:?}");
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let value = serde_json::to_value(WorkerId::new("W1")).expect("serialise worker id");
        assert_eq!(value, json!("W1"));
    }
}
