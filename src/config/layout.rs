use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::GenegridError;
use crate::types::CELLS_PER_SIDE;
use serde::{Deserialize, Serialize};

/// Geometry of the rendered diagram. All lengths are in SVG user units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Side length of one individual's block.
    pub block_size: f64,
    /// Horizontal gap between adjacent founder blocks.
    pub block_spacing: f64,
    /// Vertical distance between generation rows.
    pub vertical_spacing: f64,
    /// Side length of one cell inside a block.
    pub cell_size: f64,
    /// Width within which the founder row is centred.
    pub canvas_width: f64,
    /// Y coordinate of the founder row.
    pub base_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_size: 80.0,
            block_spacing: 120.0,
            vertical_spacing: 220.0,
            cell_size: 10.0,
            canvas_width: 1400.0,
            base_y: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Horizontal step between adjacent blocks in the founder row.
    pub fn step(&self) -> f64 {
        self.block_size + self.block_spacing
    }
}

impl ConfigSection for LayoutConfig {
    fn section_name() -> &'static str {
        "layout"
    }

    fn validate(&self) -> Result<(), GenegridError> {
        if self.block_size <= 0.0 || self.cell_size <= 0.0 {
            return Err(GenegridError::Configuration(
                "Block size and cell size must be positive".to_string(),
            ));
        }
        if (self.cell_size * CELLS_PER_SIDE as f64 - self.block_size).abs() > 1e-9 {
            return Err(GenegridError::Configuration(format!(
                "Cell grid must tile the block exactly: {} cells of {} != block size {}",
                CELLS_PER_SIDE, self.cell_size, self.block_size
            )));
        }
        if self.block_spacing < 0.0 || self.vertical_spacing <= 0.0 {
            return Err(GenegridError::Configuration(
                "Spacing values must be positive".to_string(),
            ));
        }
        if self.canvas_width <= 0.0 {
            return Err(GenegridError::Configuration(
                "Canvas width must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Layout".to_string(),
            fields: vec![
                FieldManifest {
                    name: "block_size".to_string(),
                    field_type: "number".to_string(),
                    default: serde_json::json!(80.0),
                    min: Some(8.0),
                    max: Some(800.0),
                    description: "Side length of one individual's block".to_string(),
                },
                FieldManifest {
                    name: "vertical_spacing".to_string(),
                    field_type: "number".to_string(),
                    default: serde_json::json!(220.0),
                    min: Some(100.0),
                    max: Some(1000.0),
                    description: "Vertical distance between generations".to_string(),
                },
                // ... add all other fields
            ],
        }
    }
}
