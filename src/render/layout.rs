use crate::config::LayoutConfig;
use crate::model::Pedigree;

/// Top-left corner of one block, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Stroke geometry linking one parent couple to each other and their child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Shared vertical midpoint of the couple's blocks.
    pub couple_y: f64,
    /// Right edge of the left parent.
    pub left_x: f64,
    /// Left edge of the right parent.
    pub right_x: f64,
    /// X of the vertical drop, the midpoint between the parents' centres.
    pub drop_x: f64,
    /// Top edge of the child block.
    pub child_top_y: f64,
}

/// Assigned coordinates for every individual, plus one connector per couple.
///
/// Positions are derived bottom-up: the founder row is centred within the
/// canvas width, and every child is placed from its two already-placed
/// parents, so the whole tree stays internally consistent whatever the
/// spacing configuration.
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    positions: Vec<Vec<Point>>,
    connectors: Vec<Connector>,
}

impl DiagramLayout {
    pub fn compute(pedigree: &Pedigree, config: &LayoutConfig) -> Self {
        let step = config.step();
        let founder_count = pedigree.generations()[0].len();
        let start_x = (config.canvas_width - founder_count as f64 * step) / 2.0;

        let founders: Vec<Point> = (0..founder_count)
            .map(|i| Point {
                x: start_x + i as f64 * step,
                y: config.base_y,
            })
            .collect();

        let mut positions = vec![founders];
        let mut connectors = Vec::new();

        for (g, row) in pedigree.generations().iter().enumerate().skip(1) {
            let y = config.base_y + g as f64 * config.vertical_spacing;
            let mut placed = Vec::with_capacity(row.len());

            for i in 0..row.len() {
                let parent_a = positions[g - 1][2 * i];
                let parent_b = positions[g - 1][2 * i + 1];

                // Centre of the gap between the parents' block centres,
                // shifted left by half a block so the child sits centred
                // beneath the couple.
                let drop_x = (parent_a.x + parent_b.x + config.block_size) / 2.0;
                let child_x = drop_x - config.block_size / 2.0;

                placed.push(Point { x: child_x, y });
                connectors.push(Connector {
                    couple_y: parent_a.y + config.block_size / 2.0,
                    left_x: parent_a.x + config.block_size,
                    right_x: parent_b.x,
                    drop_x,
                    child_top_y: y,
                });
            }

            positions.push(placed);
        }

        Self {
            positions,
            connectors,
        }
    }

    /// Positions parallel to the pedigree's generations.
    pub fn positions(&self) -> &[Vec<Point>] {
        &self.positions
    }

    pub fn position(&self, generation: usize, index: usize) -> Point {
        self.positions[generation][index]
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }
}
