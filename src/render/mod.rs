pub mod layout;
pub mod svg;
pub mod renderer;

pub use layout::{Connector, DiagramLayout, Point};
pub use renderer::Renderer;
pub use svg::{SvgDocument, SvgElement};
