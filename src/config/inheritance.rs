use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::GenegridError;
use serde::{Deserialize, Serialize};

/// Controls the random source driving per-cell inheritance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InheritanceConfig {
    /// Fixed RNG seed for reproducible diagrams. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl ConfigSection for InheritanceConfig {
    fn section_name() -> &'static str {
        "inheritance"
    }

    fn validate(&self) -> Result<(), GenegridError> {
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Inheritance".to_string(),
            fields: vec![FieldManifest {
                name: "seed".to_string(),
                field_type: "integer".to_string(),
                default: serde_json::json!(null),
                min: None,
                max: None,
                description: "Fixed RNG seed for reproducible diagrams".to_string(),
            }],
        }
    }
}
