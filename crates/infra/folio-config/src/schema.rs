//! JSON Schema for `site-config.json`.
//!
//! The remote document is partial by nature: every section and field is
//! optional and falls back to its default, so the schema lists properties
//! without requiring any of them.

use crate::loader::REMOTE_FILE;
use crate::types::SiteConfig;
use schemars::{Schema, generate::SchemaSettings};
use serde_json::Value;

/// Schema for the site configuration document.
pub fn schema() -> Schema {
    let mut schema = SchemaSettings::draft2020_12()
        .into_generator()
        .into_root_schema_for::<SiteConfig>();
    schema.insert("title".into(), Value::String(format!("folio {REMOTE_FILE}")));
    schema.insert(
        "description".into(),
        Value::String(format!(
            "Site configuration for a folio site. Missing or empty fields in {REMOTE_FILE} \
             keep their default values."
        )),
    );
    schema
}

pub fn schema_json_pretty() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&schema())?)
}
