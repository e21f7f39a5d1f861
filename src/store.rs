//! Versioned JSON persistence for assessment progress, plus the
//! export/import record. The response map is the single source of truth;
//! anything unreadable or from another schema version is discarded and
//! treated as "no saved progress".

use crate::error::{Result, StrengthsError};
use crate::types::response::{Responses, SectionId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const STATE_VERSION: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub responses: Responses,
    pub current_section: SectionId,
    pub current_index: usize,
    pub timestamp: String,
    pub version: u32,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            responses: Responses::new(),
            current_section: SectionId::Preferences,
            current_index: 0,
            timestamp: Utc::now().to_rfc3339(),
            version: STATE_VERSION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub export_date: String,
    pub responses: Responses,
}

pub fn load(path: &Path) -> Result<Option<SavedState>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    match serde_json::from_str::<SavedState>(&raw) {
        Ok(state) if state.version == STATE_VERSION => {
            debug!(path = %path.display(), answers = state.responses.len(), "loaded saved state");
            Ok(Some(state))
        }
        Ok(state) => {
            warn!(
                path = %path.display(),
                version = state.version,
                "discarding saved state with unsupported schema version"
            );
            Ok(None)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "discarding unreadable saved state");
            Ok(None)
        }
    }
}

pub fn save(
    path: &Path,
    responses: &Responses,
    current_section: SectionId,
    current_index: usize,
) -> Result<()> {
    let state = SavedState {
        responses: responses.clone(),
        current_section,
        current_index,
        timestamp: Utc::now().to_rfc3339(),
        version: STATE_VERSION,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(&state)?)?;
    debug!(path = %path.display(), answers = responses.len(), "saved state");
    Ok(())
}

pub fn clear(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

pub fn export_json(responses: &Responses) -> Result<String> {
    let record = ExportRecord {
        export_date: Utc::now().to_rfc3339(),
        responses: responses.clone(),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

pub fn import_json(raw: &str) -> Result<Responses> {
    let record: ExportRecord =
        serde_json::from_str(raw).map_err(|error| StrengthsError::InvalidImport(error.to_string()))?;
    Ok(record.responses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scoring;
    use crate::types::response::{Dimension, ResponseKey};
    use tempfile::TempDir;

    fn sample_responses() -> Responses {
        let mut responses = Responses::new();
        responses.insert(ResponseKey::new("s1_research_qual_1", Dimension::Interest), 4);
        responses.insert(
            ResponseKey::new("s1_research_qual_2", Dimension::Confidence),
            3,
        );
        responses.insert(ResponseKey::new("s3_comm_meet_nn", Dimension::Toggle), 1);
        responses
    }

    #[test]
    fn save_then_load_round_trips_state() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("state.json");
        let responses = sample_responses();

        save(&path, &responses, SectionId::Environment, 7).expect("save should succeed");
        let state = load(&path)
            .expect("load should not fail")
            .expect("state should be present");
        assert_eq!(state.responses, responses);
        assert_eq!(state.current_section, SectionId::Environment);
        assert_eq!(state.current_index, 7);
        assert_eq!(state.version, STATE_VERSION);
    }

    #[test]
    fn load_returns_none_for_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let state = load(&dir.path().join("state.json")).expect("load should not fail");
        assert!(state.is_none());
    }

    #[test]
    fn wrong_schema_version_is_discarded() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("state.json");
        std::fs::write(
            &path,
            r#"{"responses":{},"currentSection":"preferences","currentIndex":0,"timestamp":"t","version":1}"#,
        )
        .expect("state file should write");

        assert!(load(&path).expect("load should not fail").is_none());
    }

    #[test]
    fn corrupt_json_is_discarded_not_an_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").expect("state file should write");

        assert!(load(&path).expect("load should not fail").is_none());
    }

    #[test]
    fn state_file_uses_the_original_field_names() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("state.json");
        save(&path, &sample_responses(), SectionId::Preferences, 0)
            .expect("save should succeed");

        let raw = std::fs::read_to_string(&path).expect("state file should read");
        assert!(raw.contains("\"currentSection\": \"preferences\""));
        assert!(raw.contains("\"currentIndex\""));
        assert!(raw.contains("\"s1_research_qual_1_interest\": 4"));
    }

    #[test]
    fn export_import_round_trip_reproduces_identical_scores() {
        let catalog = Catalog::build();
        let responses = sample_responses();

        let exported = export_json(&responses).expect("export should serialize");
        let imported = import_json(&exported).expect("import should parse");
        assert_eq!(imported, responses);

        let before = scoring::all_results(&catalog, &responses);
        let after = scoring::all_results(&catalog, &imported);
        let before_json = serde_json::to_string(&before).expect("results should serialize");
        let after_json = serde_json::to_string(&after).expect("results should serialize");
        assert_eq!(before_json, after_json);
    }

    #[test]
    fn import_rejects_payloads_without_responses() {
        let error = import_json(r#"{"exportDate":"now"}"#).expect_err("import should fail");
        assert!(matches!(error, StrengthsError::InvalidImport(_)));
    }
}
