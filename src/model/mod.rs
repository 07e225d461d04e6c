pub mod block;
pub mod operators;
pub mod pedigree;

pub use block::Block;
pub use pedigree::{validate_generations, Pedigree};
