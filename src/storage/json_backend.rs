//! JSON snapshot export/import.
//!
//! A snapshot is the only way application state crosses a process boundary.
//! Import is all-or-nothing: the document is parsed and validated into a
//! complete replacement state before the caller swaps it in, so a failed
//! import can never leave a half-imported hybrid behind.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::config::Theme;
use crate::errors::{FinanceError, Result};
use crate::model::AppState;
use crate::utils::ensure_dir;

pub const SNAPSHOT_SCHEMA_VERSION: u8 = 1;

/// Fixed name offered for exported files.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "finance_data.json";

const TMP_SUFFIX: &str = "tmp";

/// The serialized document: the entire [`AppState`] plus the theme
/// preference, enough to fully reconstruct a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default = "Snapshot::schema_version_default")]
    pub schema_version: u8,
    #[serde(default)]
    pub theme: Theme,
    #[serde(flatten)]
    pub state: AppState,
}

impl Snapshot {
    pub fn capture(state: &AppState, theme: Theme) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            theme,
            state: state.clone(),
        }
    }

    fn schema_version_default() -> u8 {
        SNAPSHOT_SCHEMA_VERSION
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| FinanceError::Storage(err.to_string()))
    }

    /// Parses a document without validating invariants; pair with
    /// [`Snapshot::into_state`].
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|err| FinanceError::MalformedSnapshot(err.to_string()))
    }

    /// Validates structural invariants and yields the replacement state.
    pub fn into_state(mut self) -> Result<(AppState, Theme)> {
        if self.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(FinanceError::MalformedSnapshot(format!(
                "schema version {} is newer than supported version {}",
                self.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }
        validate_state(&self.state)?;
        self.state.sync_id_counter();
        Ok((self.state, self.theme))
    }
}

fn validate_state(state: &AppState) -> Result<()> {
    let mut ids = HashSet::new();
    for txn in &state.transactions {
        if !ids.insert(txn.id) {
            return Err(FinanceError::MalformedSnapshot(format!(
                "duplicate transaction id {}",
                txn.id
            )));
        }
    }
    check_unique_keys("budget category", state.budgets.iter().map(|b| &b.category))?;
    check_unique_keys("investment name", state.investments.iter().map(|i| &i.name))?;
    check_unique_keys("goal name", state.goals.iter().map(|g| &g.name))?;

    for budget in &state.budgets {
        if budget.limit < 0.0 {
            return Err(FinanceError::MalformedSnapshot(format!(
                "budget `{}` has negative limit",
                budget.category
            )));
        }
    }
    for investment in &state.investments {
        if investment.value < 0.0 {
            return Err(FinanceError::MalformedSnapshot(format!(
                "investment `{}` has negative value",
                investment.name
            )));
        }
    }
    for goal in &state.goals {
        if goal.target <= 0.0 || goal.current < 0.0 {
            return Err(FinanceError::MalformedSnapshot(format!(
                "goal `{}` has an invalid target or current amount",
                goal.name
            )));
        }
    }
    Ok(())
}

fn check_unique_keys<'a>(label: &str, keys: impl Iterator<Item = &'a String>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.as_str()) {
            return Err(FinanceError::MalformedSnapshot(format!(
                "duplicate {} `{}`",
                label, key
            )));
        }
    }
    Ok(())
}

/// Writes a snapshot of `state` to `path` via a temp file and rename.
pub fn export_to_path(path: &Path, state: &AppState, theme: Theme) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = Snapshot::capture(state, theme).to_json()?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    tracing::info!(path = %path.display(), "snapshot exported");
    Ok(())
}

/// Reads, parses, and validates a snapshot file. The caller's current state
/// is untouched until it chooses to swap in the returned one.
pub fn import_from_path(path: &Path) -> Result<(AppState, Theme)> {
    let data = fs::read_to_string(path)?;
    let snapshot = Snapshot::from_json(&data)?;
    let result = snapshot.into_state()?;
    tracing::info!(path = %path.display(), "snapshot imported");
    Ok(result)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::sample_state;
    use crate::model::{Budget, User};
    use tempfile::TempDir;

    #[test]
    fn snapshot_roundtrip_reproduces_observable_state() {
        let state = sample_state();
        let json = Snapshot::capture(&state, Theme::Dark).to_json().expect("serialize");
        let (restored, theme) = Snapshot::from_json(&json)
            .expect("parse")
            .into_state()
            .expect("validate");
        assert_eq!(restored, state);
        assert_eq!(theme, Theme::Dark);
    }

    #[test]
    fn restored_state_allocates_fresh_ids() {
        let state = sample_state();
        let highest = state.transactions.iter().map(|t| t.id).max().unwrap();
        let json = Snapshot::capture(&state, Theme::Light).to_json().unwrap();
        let (mut restored, _) = Snapshot::from_json(&json).unwrap().into_state().unwrap();
        assert!(restored.allocate_transaction_id() > highest);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Snapshot::from_json("{ not json").expect_err("parse must fail");
        assert!(matches!(err, FinanceError::MalformedSnapshot(_)));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let err = Snapshot::from_json(r#"{"transactions": []}"#).expect_err("no user field");
        assert!(matches!(err, FinanceError::MalformedSnapshot(_)));
    }

    #[test]
    fn duplicate_budget_categories_are_rejected() {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        state.budgets.push(Budget::new("Food", 500.0));
        state.budgets.push(Budget::new("Food", 300.0));
        let err = Snapshot::capture(&state, Theme::Light)
            .into_state()
            .expect_err("duplicate key");
        assert!(matches!(err, FinanceError::MalformedSnapshot(_)));
    }

    #[test]
    fn newer_schema_versions_are_rejected() {
        let mut snapshot = Snapshot::capture(&sample_state(), Theme::Light);
        snapshot.schema_version = SNAPSHOT_SCHEMA_VERSION + 1;
        let err = snapshot.into_state().expect_err("newer schema");
        assert!(matches!(err, FinanceError::MalformedSnapshot(_)));
    }

    #[test]
    fn export_then_import_via_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(DEFAULT_EXPORT_FILE_NAME);
        let state = sample_state();
        export_to_path(&path, &state, Theme::Dark).expect("export");
        let (restored, theme) = import_from_path(&path).expect("import");
        assert_eq!(restored, state);
        assert_eq!(theme, Theme::Dark);
    }
}
