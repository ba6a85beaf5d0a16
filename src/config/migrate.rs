//! Config migration: add fields introduced since the user's file was written.
//!
//! Works on the TOML document rather than the deserialized struct so user
//! comments, ordering and formatting survive.

use toml_edit::DocumentMut;

use super::{Config, ConfigError};

/// Outcome of `migrate_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateResult {
    /// Migrated document
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that were missing entirely
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field of the default config that `content` lacks.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        if !doc.contains_key(section) {
            for (key, _) in default_table.iter() {
                added_fields.push(format!("{}.{}", section, key));
            }
            sections_added.push(section.to_string());
            doc.insert(section, default_item.clone());
            continue;
        }

        let Some(table) = doc[section].as_table_like_mut() else {
            tracing::warn!(section, "config section is not a table, leaving it alone");
            continue;
        };
        for (key, value) in default_table.iter() {
            if !table.contains_key(key) {
                table.insert(key, value.clone());
                added_fields.push(format!("{}.{}", section, key));
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
