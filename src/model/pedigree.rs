use crate::config::PaletteConfig;
use crate::error::{GenegridError, Result};
use crate::model::block::Block;
use crate::model::operators;
use crate::types::{MAX_GENERATIONS, MIN_GENERATIONS};
use rand::Rng;

/// Reject generation counts outside the supported range before any
/// construction work happens.
pub fn validate_generations(num_generations: u32) -> Result<()> {
    if !(MIN_GENERATIONS..=MAX_GENERATIONS).contains(&num_generations) {
        return Err(GenegridError::InvalidGenerations {
            min: MIN_GENERATIONS,
            max: MAX_GENERATIONS,
            actual: num_generations,
        });
    }
    Ok(())
}

/// The full family tree: a flat list of generations, oldest first.
///
/// Relationships are positional rather than referential: the child at index
/// `i` of generation `g + 1` has parents `2i` and `2i + 1` of generation `g`.
/// Generation 0 holds `2^(N-1)` founders and each later generation halves the
/// count, ending at exactly one individual.
#[derive(Debug, Clone)]
pub struct Pedigree {
    generations: Vec<Vec<Block>>,
    num_generations: u32,
}

impl Pedigree {
    /// Build an N-generation pedigree: uniform-filled founders coloured from
    /// the palette, then per-cell inheritance for every later generation.
    pub fn build<R: Rng>(
        num_generations: u32,
        palette: &PaletteConfig,
        rng: &mut R,
    ) -> Result<Self> {
        validate_generations(num_generations)?;
        palette.check_capacity(num_generations)?;

        let num_pairs = 1usize << (num_generations - 2);
        let founder_count = num_pairs * 2;

        // Couples are adjacent index pairs; couple i/2 consumes palette pair
        // i/2, with the first member taking trait A and the second trait B.
        let founders: Vec<Block> = (0..founder_count)
            .map(|i| {
                let (trait_a, trait_b) = &palette.pairs[i / 2];
                operators::solid(if i % 2 == 0 { trait_a } else { trait_b })
            })
            .collect();

        let mut generations = Vec::with_capacity(num_generations as usize);
        generations.push(founders);

        for g in 1..num_generations as usize {
            let count = 1usize << (num_generations as usize - 1 - g);
            let children: Vec<Block> = (0..count)
                .map(|i| {
                    let parents = &generations[g - 1];
                    operators::inherit(&parents[2 * i], &parents[2 * i + 1], rng)
                })
                .collect();
            generations.push(children);
        }

        debug_assert_eq!(generations.last().map(Vec::len), Some(1));
        log::debug!(
            "Built pedigree: {} generations, {} individuals",
            num_generations,
            generations.iter().map(Vec::len).sum::<usize>()
        );

        Ok(Self {
            generations,
            num_generations,
        })
    }

    pub fn num_generations(&self) -> u32 {
        self.num_generations
    }

    /// Generations oldest-first; index 0 is the founder row.
    pub fn generations(&self) -> &[Vec<Block>] {
        &self.generations
    }

    pub fn total_individuals(&self) -> usize {
        self.generations.iter().map(Vec::len).sum()
    }
}
