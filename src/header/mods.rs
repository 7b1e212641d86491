//! Embedded mod metadata.
//!
//! Modded saves carry a JSON document of the form
//! `{"Version": 1, "FullMapName": "...", "Mods": [{"Reference": "...", "Name": "..."}]}`.
//! Only the mod list is of interest. A document that does not parse is
//! treated as listing no mods. Keys are matched in their written case or
//! all lower case.

use serde::Deserialize;

/// Placeholder used for a mod entry that carries neither a name nor a reference.
pub const UNNAMED_MOD: &str = "?";

#[derive(Debug, Deserialize)]
struct ModMetadata {
    #[serde(rename = "Mods", alias = "mods", default)]
    mods: Vec<ModEntry>,
}

#[derive(Debug, Deserialize)]
struct ModEntry {
    #[serde(rename = "Name", alias = "name", default)]
    name: Option<String>,
    #[serde(rename = "Reference", alias = "reference", default)]
    reference: Option<String>,
}

impl ModEntry {
    fn into_display_name(self) -> String {
        self.name
            .or(self.reference)
            .unwrap_or_else(|| UNNAMED_MOD.to_string())
    }
}

/// Extracts the mod display names from a mod metadata string.
///
/// Each entry contributes its `Name`, falling back to its `Reference`.
/// An empty string, malformed JSON or a missing `Mods` list all yield an
/// empty list.
///
/// ```
/// use sav_stats::header::mods::parse_mod_names;
///
/// let raw = r#"{"Mods":[{"Reference":"FicsItNetworks","Name":"FicsIt-Networks"}]}"#;
/// assert_eq!(parse_mod_names(raw), vec!["FicsIt-Networks".to_string()]);
/// assert!(parse_mod_names("{not json").is_empty());
/// ```
#[must_use]
pub fn parse_mod_names(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<ModMetadata>(raw) {
        Ok(metadata) => metadata
            .mods
            .into_iter()
            .map(ModEntry::into_display_name)
            .collect(),
        Err(e) => {
            log::debug!("Ignoring unparsable mod metadata: {e}");
            Vec::new()
        }
    }
}
