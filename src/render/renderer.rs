use crate::config::LayoutConfig;
use crate::error::{GenegridError, Result};
use crate::model::{Block, Pedigree};
use crate::render::layout::{Connector, DiagramLayout, Point};
use crate::render::svg::{SvgDocument, SvgElement};
use crate::types::CELLS_PER_SIDE;
use std::fmt::Write;

// ViewBox framing: generous margins on every side, height growing with the
// number of generation rows.
const VIEW_BOX_X: f64 = -200.0;
const VIEW_BOX_Y: f64 = -50.0;
const VIEW_BOX_WIDTH: f64 = 1800.0;
const VIEW_BOX_HEIGHT_PER_GENERATION: f64 = 300.0;

const GRID_PATTERN_ID: &str = "grid8x8";
const STROKE_WIDTH: f64 = 1.0;

/// Turns a built pedigree into a complete SVG document string.
///
/// Rendering is pure: given the same pedigree and configuration it always
/// produces the same markup. The document carries one group per individual
/// (background rect, 64 cell rects, 14 separator lines) and two connector
/// strokes per parent couple, with a reusable grid pattern in `<defs>`.
pub struct Renderer {
    config: LayoutConfig,
}

impl Renderer {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, pedigree: &Pedigree) -> Result<String> {
        let layout = DiagramLayout::compute(pedigree, &self.config);

        let height = VIEW_BOX_HEIGHT_PER_GENERATION * pedigree.num_generations() as f64;
        let mut doc = SvgDocument::new((VIEW_BOX_X, VIEW_BOX_Y, VIEW_BOX_WIDTH, height));

        doc.add_def(self.grid_pattern());

        for (g, row) in pedigree.generations().iter().enumerate() {
            for (i, block) in row.iter().enumerate() {
                doc.add(self.block_group(layout.position(g, i), block));
            }
        }

        for connector in layout.connectors() {
            let (couple, drop) = self.connector_paths(connector);
            doc.add(couple);
            doc.add(drop);
        }

        log::debug!(
            "Rendered {} individuals and {} couples",
            pedigree.total_individuals(),
            layout.connectors().len()
        );

        doc.serialize()
            .map_err(|e| GenegridError::Render(format!("Failed to serialize SVG: {}", e)))
    }

    /// Reusable tile dividing one block into 8x8 cells: seven vertical and
    /// seven horizontal strokes in a single path.
    fn grid_pattern(&self) -> SvgElement {
        let block = self.config.block_size;
        let cell = self.config.cell_size;
        let mut d = String::new();

        for i in 1..CELLS_PER_SIDE {
            let x = i as f64 * cell;
            let _ = write!(d, "M {},0 L {},{} ", x, x, block);
        }
        for i in 1..CELLS_PER_SIDE {
            let y = i as f64 * cell;
            let _ = write!(d, "M 0,{} L {},{} ", y, block, y);
        }

        SvgElement::Pattern {
            id: GRID_PATTERN_ID.to_string(),
            width: block,
            height: block,
            children: vec![SvgElement::Path {
                d: d.trim_end().to_string(),
                fill: None,
                stroke: Some(("black".to_string(), STROKE_WIDTH)),
            }],
        }
    }

    /// One individual: a translated group holding the bordered background,
    /// the 64 cell rects and the separator lines.
    fn block_group(&self, position: Point, block: &Block) -> SvgElement {
        let block_size = self.config.block_size;
        let cell = self.config.cell_size;
        let mut children = Vec::with_capacity(1 + CELLS_PER_SIDE * CELLS_PER_SIDE + 14);

        children.push(SvgElement::Rect {
            x: 0.0,
            y: 0.0,
            width: block_size,
            height: block_size,
            fill: Some("white".to_string()),
            stroke: Some(("black".to_string(), STROKE_WIDTH)),
        });

        for row in 0..CELLS_PER_SIDE {
            for col in 0..CELLS_PER_SIDE {
                children.push(SvgElement::Rect {
                    x: col as f64 * cell,
                    y: row as f64 * cell,
                    width: cell,
                    height: cell,
                    fill: Some(block.cell(row, col).clone()),
                    stroke: None,
                });
            }
        }

        for i in 1..CELLS_PER_SIDE {
            let offset = i as f64 * cell;
            children.push(SvgElement::Line {
                x1: offset,
                y1: 0.0,
                x2: offset,
                y2: block_size,
                stroke: ("black".to_string(), STROKE_WIDTH),
            });
            children.push(SvgElement::Line {
                x1: 0.0,
                y1: offset,
                x2: block_size,
                y2: offset,
                stroke: ("black".to_string(), STROKE_WIDTH),
            });
        }

        SvgElement::Group {
            transform: Some(format!("translate({},{})", position.x, position.y)),
            children,
        }
    }

    /// The two strokes per couple: a horizontal segment joining the facing
    /// parent edges, and a vertical drop from its midpoint to the child.
    fn connector_paths(&self, c: &Connector) -> (SvgElement, SvgElement) {
        let couple = SvgElement::Path {
            d: format!(
                "M {},{} L {},{}",
                c.left_x, c.couple_y, c.right_x, c.couple_y
            ),
            fill: None,
            stroke: Some(("black".to_string(), STROKE_WIDTH)),
        };
        let drop = SvgElement::Path {
            d: format!(
                "M {},{} L {},{}",
                c.drop_x, c.couple_y, c.drop_x, c.child_top_y
            ),
            fill: None,
            stroke: Some(("black".to_string(), STROKE_WIDTH)),
        };
        (couple, drop)
    }
}
