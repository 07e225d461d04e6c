use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::GenegridError;
use crate::types::TraitPair;
use serde::{Deserialize, Serialize};

/// Ordered colour pairs, one consumed per founder couple.
///
/// The palette bounds how wide a pedigree can get: a diagram of N generations
/// needs `2^(N-2)` pairs for its founder couples. `max_generations()` makes
/// that coupling explicit so callers can reject an oversized request up front
/// instead of running off the end of the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub pairs: Vec<TraitPair>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            pairs: vec![
                ("black".to_string(), "white".to_string()),
                ("#ff0000".to_string(), "#008000".to_string()), // red, green
                ("#0000ff".to_string(), "#ffa500".to_string()), // blue, orange
                ("#ffff00".to_string(), "#800080".to_string()), // yellow, purple
            ],
        }
    }
}

impl PaletteConfig {
    /// Largest generation count this palette can colour:
    /// `floor(log2(pairs)) + 2`.
    pub fn max_generations(&self) -> u32 {
        let mut n = 2;
        while (1usize << (n - 1)) <= self.pairs.len() {
            n += 1;
        }
        n
    }

    /// Check there are enough pairs for the founder couples of an
    /// N-generation pedigree.
    pub fn check_capacity(&self, num_generations: u32) -> Result<(), GenegridError> {
        let pairs_needed = 1usize << (num_generations - 2);
        if self.pairs.len() < pairs_needed {
            return Err(GenegridError::Palette(format!(
                "{} generations need {} colour pairs, palette has {}",
                num_generations,
                pairs_needed,
                self.pairs.len()
            )));
        }
        Ok(())
    }
}

impl ConfigSection for PaletteConfig {
    fn section_name() -> &'static str {
        "palette"
    }

    fn validate(&self) -> Result<(), GenegridError> {
        if self.pairs.is_empty() {
            return Err(GenegridError::Configuration(
                "Palette must contain at least one colour pair".to_string(),
            ));
        }
        for (a, b) in &self.pairs {
            if a.is_empty() || b.is_empty() {
                return Err(GenegridError::Configuration(
                    "Palette colours must be non-empty tokens".to_string(),
                ));
            }
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Palette".to_string(),
            fields: vec![FieldManifest {
                name: "pairs".to_string(),
                field_type: "array".to_string(),
                default: serde_json::json!([["black", "white"]]),
                min: Some(1.0),
                max: None,
                description: "Colour pairs, one per founder couple".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_supports_four_generations() {
        let palette = PaletteConfig::default();
        assert_eq!(palette.pairs.len(), 4);
        assert_eq!(palette.max_generations(), 4);
        assert!(palette.check_capacity(4).is_ok());
    }

    #[test]
    fn test_single_pair_limits_to_two_generations() {
        let palette = PaletteConfig {
            pairs: vec![("black".to_string(), "white".to_string())],
        };
        assert_eq!(palette.max_generations(), 2);
        assert!(palette.check_capacity(2).is_ok());
        assert!(palette.check_capacity(3).is_err());
    }
}
