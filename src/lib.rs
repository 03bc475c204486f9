use shakmaty::Bitboard;

pub mod emitter;
pub mod header;
pub mod mock;
pub mod parse;
pub mod source;

pub use emitter::{EmitError, HeaderConfig, HeaderEmitter, LookupError};
pub use header::{Header, Line};
pub use source::ShakmatySource;

/// Number of squares a complete square table must expose.
pub const NUM_SQUARES: usize = 64;

/// Number of ranks (and files) a complete table must expose.
pub const NUM_LINES: usize = 8;

/// Trait for reading the canonical bitboard tables of a chess library.
///
/// Abstracts over the real library tables (shakmaty) and synthetic
/// tables used in tests, providing a uniform interface for
/// [`HeaderEmitter`].
pub trait BitboardSource {
    /// Number of squares in the square table.
    fn square_count(&self) -> usize;

    /// Algebraic name of the square at `index` (e.g. "e4"), if present.
    fn square_name(&self, index: usize) -> Option<String>;

    /// Single-square mask for the square at `index`, if present.
    fn square_mask(&self, index: usize) -> Option<Bitboard>;

    /// Rank masks in order, rank 1 first.
    fn rank_masks(&self) -> Vec<Bitboard>;

    /// File names paired with their masks, in canonical a to h order.
    fn file_entries(&self) -> Vec<(char, Bitboard)>;

    /// The board with no squares set.
    fn empty_mask(&self) -> Bitboard;

    /// The board with every square set.
    fn full_mask(&self) -> Bitboard;
}
