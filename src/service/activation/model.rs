use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Month,
    Year,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Month => "month",
            Plan::Year => "year",
        }
    }

    /// Price in rubles shown in the plan menu.
    pub fn price(&self) -> u32 {
        match self {
            Plan::Month => 149,
            Plan::Year => 1099,
        }
    }

    /// Menu choice a user types to get this plan's payment link.
    pub fn from_menu_choice(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Plan::Month),
            "2" => Some(Plan::Year),
            _ => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan: {0}")]
pub struct UnknownPlan(pub String);

impl FromStr for Plan {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "month" => Ok(Plan::Month),
            "year" => Ok(Plan::Year),
            _ => Err(UnknownPlan(s.to_string())),
        }
    }
}

/// What gets written under `/activation_codes/<user_id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    pub code: String,
    pub plan: Plan,
}

/// What comes back from the store. Every field is optional because records can be
/// edited by hand in the database console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredActivation {
    pub code: Option<String>,
    pub plan: Option<String>,
}

impl StoredActivation {
    /// Decodes a raw JSON value from the store. Anything that is not an object is
    /// treated as a record without fields.
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Self {
                code: map.get("code").and_then(scalar_to_string),
                plan: map.get("plan").and_then(scalar_to_string),
            },
            _ => Self::default(),
        }
    }
}

impl From<&ActivationRecord> for StoredActivation {
    fn from(record: &ActivationRecord) -> Self {
        Self {
            code: Some(record.code.clone()),
            plan: Some(record.plan.to_string()),
        }
    }
}

fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
