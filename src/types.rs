/// Cells per side of an individual's grid. Every individual carries
/// `CELLS_PER_SIDE * CELLS_PER_SIDE` units of simulated genetic information.
pub const CELLS_PER_SIDE: usize = 8;

/// Total cells per individual (the 8x8 grid, row-major).
pub const CELLS_PER_BLOCK: usize = CELLS_PER_SIDE * CELLS_PER_SIDE;

/// Smallest pedigree worth drawing: one couple and their child.
pub const MIN_GENERATIONS: u32 = 2;

/// Largest supported pedigree. Bounded by the default palette
/// (`2^(MAX_GENERATIONS - 2)` founder couples need that many colour pairs).
pub const MAX_GENERATIONS: u32 = 4;

/// An opaque colour token: a named SVG colour ("black") or a hex string
/// ("#ff0000"). Inheritance copies tokens verbatim and never interprets them.
pub type Color = String;

/// A (trait A, trait B) colour pair consumed by one founder couple.
/// The first member of the couple gets trait A, the second trait B.
pub type TraitPair = (Color, Color);
