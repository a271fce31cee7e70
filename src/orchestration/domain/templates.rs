//! Technology template selection recorded on each task.

use serde::{Deserialize, Serialize};

/// Placeholder value used before template selection has run.
const PLACEHOLDER: &str = "TBD";

/// Technology selection for a task.
///
/// Populated by the template-selection process, which is outside this
/// subsystem; tasks start with placeholder values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSelection {
    base: String,
    ui: Vec<String>,
    datastore: String,
}

impl TemplateSelection {
    /// Creates the placeholder selection assigned at task creation.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            base: PLACEHOLDER.to_owned(),
            ui: Vec::new(),
            datastore: PLACEHOLDER.to_owned(),
        }
    }

    /// Creates a concrete selection.
    #[must_use]
    pub fn new(
        base: impl Into<String>,
        ui: impl IntoIterator<Item = String>,
        datastore: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            ui: ui.into_iter().collect(),
            datastore: datastore.into(),
        }
    }

    /// Returns the base template identifier.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the ordered UI template identifiers.
    #[must_use]
    pub fn ui(&self) -> &[String] {
        &self.ui
    }

    /// Returns the datastore template identifier.
    #[must_use]
    pub fn datastore(&self) -> &str {
        &self.datastore
    }
}

impl Default for TemplateSelection {
    fn default() -> Self {
        Self::placeholder()
    }
}
