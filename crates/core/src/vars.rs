//! Template variable environment.
//!
//! A small fixed-shape set of named values used both for `[name]` placeholder
//! substitution and for the Context line of the composed document. The wire
//! shape matches the persisted `bucketVars` object: three always-present
//! keys, two optional ones.

use serde::{Deserialize, Serialize};

/// The variable environment carried in the persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketVars {
    #[serde(default)]
    pub framework: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub style: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl Default for BucketVars {
    fn default() -> Self {
        Self {
            framework: "React".into(),
            language: "TypeScript".into(),
            style: "Tailwind".into(),
            database: None,
            platform: None,
        }
    }
}

impl BucketVars {
    /// Value for a placeholder name, or `None` when unknown or unset.
    ///
    /// Empty strings count as unset — substitution falls back the same way
    /// for `""` as for a missing value.
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match name {
            "framework" => Some(self.framework.as_str()),
            "language" => Some(self.language.as_str()),
            "style" => Some(self.style.as_str()),
            "database" => self.database.as_deref(),
            "platform" => self.platform.as_deref(),
            _ => None,
        };
        value.filter(|v| !v.is_empty())
    }

    /// Placeholder value, with the literal placeholder name as fallback.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }
}
