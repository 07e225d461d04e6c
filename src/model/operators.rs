use crate::model::block::Block;
use crate::types::Color;
use rand::Rng;

/// Uniform fill: a founder block carrying a single pure trait colour.
pub fn solid(color: &Color) -> Block {
    Block::new(std::array::from_fn(|_| color.clone()))
}

/// Biparental inheritance: one independent unbiased coin flip per cell.
///
/// Each of the 64 cells is copied verbatim from the same coordinate of one
/// parent, chosen with probability 0.5. The draws are per cell, not per
/// individual or per row, so a child normally carries an interleaved mix of
/// both parents' colours.
pub fn inherit<R: Rng>(parent_a: &Block, parent_b: &Block, rng: &mut R) -> Block {
    Block::new(std::array::from_fn(|i| {
        if rng.gen::<bool>() {
            parent_a.cell_at(i).clone()
        } else {
            parent_b.cell_at(i).clone()
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CELLS_PER_BLOCK;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_solid_fills_every_cell() {
        let block = solid(&"black".to_string());
        assert!(block.is_uniform());
        assert_eq!(block.cells().len(), CELLS_PER_BLOCK);
        assert_eq!(block.cell(7, 7), "black");
    }

    #[test]
    fn test_inherit_copies_from_one_parent_per_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = solid(&"black".to_string());
        let b = solid(&"white".to_string());
        let child = inherit(&a, &b, &mut rng);

        for i in 0..CELLS_PER_BLOCK {
            let c = child.cell_at(i);
            assert!(c == a.cell_at(i) || c == b.cell_at(i));
        }
    }

    #[test]
    fn test_inherit_is_deterministic_for_a_fixed_seed() {
        let a = solid(&"black".to_string());
        let b = solid(&"white".to_string());

        let first = inherit(&a, &b, &mut StdRng::seed_from_u64(42));
        let second = inherit(&a, &b, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
