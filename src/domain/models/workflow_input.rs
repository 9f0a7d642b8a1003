//! Workflow-dispatch input payloads.
//!
//! A [`WorkflowInput`] is a sparse set of optional named fields. The
//! dispatcher flattens it into [`InputFields`] and merges it over the
//! always-present defaults (issue number and event tag) with
//! [`merge_inputs`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::issue::IssueState;

/// Flattened, string-valued workflow inputs as sent on the wire.
pub type InputFields = BTreeMap<String, String>;

/// Input key carrying the target issue number.
pub const ISSUE_NUMBER_KEY: &str = "issue_number";
/// Input key carrying the fixed event tag.
pub const EVENT_TYPE_KEY: &str = "event_type";

/// Whether a label was attached to or removed from an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAction {
    Added,
    Removed,
}

impl LabelAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for LabelAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied inputs for one workflow dispatch.
///
/// Unset fields are omitted from the payload entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_action: Option<LabelAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_updated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_updated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_updated: Option<IssueState>,
    /// Additional free-form inputs, applied after the typed fields.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: InputFields,
}

impl WorkflowInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs describing a label change.
    pub fn label(name: impl Into<String>, color: Option<String>, action: LabelAction) -> Self {
        Self {
            label_name: Some(name.into()),
            label_color: color,
            label_action: Some(action),
            ..Self::default()
        }
    }

    /// Inputs flagging an assignee change.
    pub fn assignee_updated() -> Self {
        Self {
            assignee_updated: Some(true),
            ..Self::default()
        }
    }

    /// Inputs flagging a milestone change.
    pub fn milestone_updated() -> Self {
        Self {
            milestone_updated: Some(true),
            ..Self::default()
        }
    }

    /// Inputs reporting the issue's new lifecycle state.
    pub fn state_updated(state: IssueState) -> Self {
        Self {
            state_updated: Some(state),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Flatten the set fields into string-valued inputs.
    pub fn to_fields(&self) -> InputFields {
        let mut fields = InputFields::new();
        if let Some(name) = &self.label_name {
            fields.insert("label_name".to_string(), name.clone());
        }
        if let Some(color) = &self.label_color {
            fields.insert("label_color".to_string(), color.clone());
        }
        if let Some(action) = self.label_action {
            fields.insert("label_action".to_string(), action.to_string());
        }
        if let Some(flag) = self.assignee_updated {
            fields.insert("assignee_updated".to_string(), flag.to_string());
        }
        if let Some(flag) = self.milestone_updated {
            fields.insert("milestone_updated".to_string(), flag.to_string());
        }
        if let Some(state) = self.state_updated {
            fields.insert("state_updated".to_string(), state.to_string());
        }
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }
}

/// Shallow-merge two input maps: `defaults` first, then `overrides`.
///
/// On key conflict the override wins.
pub fn merge_inputs(defaults: InputFields, overrides: InputFields) -> InputFields {
    let mut merged = defaults;
    for (key, value) in overrides {
        merged.insert(key, value);
    }
    merged
}
