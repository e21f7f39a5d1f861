use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The three fixed assessment sections, each with its own scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Preferences,
    Environment,
    Accommodations,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [
        SectionId::Preferences,
        SectionId::Environment,
        SectionId::Accommodations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Preferences => "preferences",
            SectionId::Environment => "environment",
            SectionId::Accommodations => "accommodations",
        }
    }

}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The scale a single answer is recorded on. Which dimensions are legal for a
/// statement is fixed by its section variant at catalog-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Interest,
    Confidence,
    Importance,
    Current,
    Need,
    Toggle,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Interest => "interest",
            Dimension::Confidence => "confidence",
            Dimension::Importance => "importance",
            Dimension::Current => "current",
            Dimension::Need => "need",
            Dimension::Toggle => "toggle",
        }
    }

    pub fn parse(tag: &str) -> Option<Dimension> {
        match tag {
            "interest" => Some(Dimension::Interest),
            "confidence" => Some(Dimension::Confidence),
            "importance" => Some(Dimension::Importance),
            "current" => Some(Dimension::Current),
            "need" => Some(Dimension::Need),
            "toggle" => Some(Dimension::Toggle),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured composite key for one recorded answer. Serialized form is the
/// flat `{statement}_{dimension}` string used by the state file and exports;
/// dimension tags never contain underscores, so the split is unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResponseKey {
    pub statement: String,
    pub dimension: Dimension,
}

impl ResponseKey {
    pub fn new(statement: impl Into<String>, dimension: Dimension) -> Self {
        Self {
            statement: statement.into(),
            dimension,
        }
    }

    pub fn storage_key(&self) -> String {
        format!("{}_{}", self.statement, self.dimension.as_str())
    }

    pub fn parse(raw: &str) -> Option<ResponseKey> {
        let (statement, tag) = raw.rsplit_once('_')?;
        if statement.is_empty() {
            return None;
        }
        Dimension::parse(tag).map(|dimension| ResponseKey::new(statement, dimension))
    }
}

/// Sparse map of recorded answers. Absent key means unanswered; present
/// ratings are always integers in 0..=4 (0|1 for toggles). The scoring engine
/// only ever reads this map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    map: BTreeMap<ResponseKey, u8>,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rating(&self, statement: &str, dimension: Dimension) -> Option<u8> {
        self.map.get(&ResponseKey::new(statement, dimension)).copied()
    }

    pub fn is_answered(&self, statement: &str, dimension: Dimension) -> bool {
        self.rating(statement, dimension).is_some()
    }

    pub fn insert(&mut self, key: ResponseKey, value: u8) {
        self.map.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Serialize for Responses {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.map
                .iter()
                .map(|(key, value)| (key.storage_key(), *value)),
        )
    }
}

impl<'de> Deserialize<'de> for Responses {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, u8>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (raw_key, value) in raw {
            let key = ResponseKey::parse(&raw_key)
                .ok_or_else(|| D::Error::custom(format!("malformed response key: {raw_key}")))?;
            if value > 4 {
                return Err(D::Error::custom(format!(
                    "rating out of range for {raw_key}: {value}"
                )));
            }
            map.insert(key, value);
        }
        Ok(Responses { map })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_key_round_trips_through_storage_form() {
        let key = ResponseKey::new("s1_research_qual_1", Dimension::Interest);
        assert_eq!(key.storage_key(), "s1_research_qual_1_interest");
        assert_eq!(ResponseKey::parse("s1_research_qual_1_interest"), Some(key));
    }

    #[test]
    fn response_key_rejects_unknown_dimension_tags() {
        assert_eq!(ResponseKey::parse("s1_research_qual_1_volume"), None);
        assert_eq!(ResponseKey::parse("interest"), None);
        assert_eq!(ResponseKey::parse("_interest"), None);
    }

    #[test]
    fn responses_serialize_to_flat_string_map() {
        let mut responses = Responses::new();
        responses.insert(ResponseKey::new("s3_comm_meet_nn", Dimension::Toggle), 1);
        responses.insert(ResponseKey::new("s1_research_qual_1", Dimension::Interest), 3);

        let json = serde_json::to_string(&responses).expect("responses should serialize");
        assert!(json.contains("\"s1_research_qual_1_interest\":3"));
        assert!(json.contains("\"s3_comm_meet_nn_toggle\":1"));

        let back: Responses = serde_json::from_str(&json).expect("responses should deserialize");
        assert_eq!(back, responses);
    }

    #[test]
    fn responses_deserialize_rejects_out_of_range_ratings() {
        let result: std::result::Result<Responses, _> =
            serde_json::from_str(r#"{"s1_research_qual_1_interest": 7}"#);
        assert!(result.is_err());
    }
}
