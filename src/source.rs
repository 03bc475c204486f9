use shakmaty::{Bitboard, File, Rank, Square};

use crate::BitboardSource;

/// Bitboard tables as defined by shakmaty.
///
/// Square order is shakmaty's canonical order: a1 = 0, h1 = 7, a8 = 56, h8 = 63.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatySource;

impl ShakmatySource {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl BitboardSource for ShakmatySource {
    #[inline]
    fn square_count(&self) -> usize {
        Square::ALL.len()
    }

    fn square_name(&self, index: usize) -> Option<String> {
        Square::ALL.get(index).map(|sq| sq.to_string())
    }

    fn square_mask(&self, index: usize) -> Option<Bitboard> {
        Square::ALL.get(index).copied().map(Bitboard::from_square)
    }

    fn rank_masks(&self) -> Vec<Bitboard> {
        Rank::ALL.into_iter().map(Bitboard::from_rank).collect()
    }

    fn file_entries(&self) -> Vec<(char, Bitboard)> {
        File::ALL
            .into_iter()
            .map(|file| (file.char(), Bitboard::from_file(file)))
            .collect()
    }

    #[inline]
    fn empty_mask(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    #[inline]
    fn full_mask(&self) -> Bitboard {
        Bitboard::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "a1", 0x0000_0000_0000_0001; "a1")]
    #[test_case(7, "h1", 0x0000_0000_0000_0080; "h1")]
    #[test_case(28, "e4", 0x0000_0000_1000_0000; "e4")]
    #[test_case(56, "a8", 0x0100_0000_0000_0000; "a8")]
    #[test_case(63, "h8", 0x8000_0000_0000_0000; "h8")]
    fn test_square_entry(index: usize, name: &str, mask: u64) {
        let source = ShakmatySource::new();
        assert_eq!(source.square_name(index).as_deref(), Some(name));
        assert_eq!(source.square_mask(index).map(u64::from), Some(mask));
    }

    #[test]
    fn test_square_out_of_range() {
        let source = ShakmatySource::new();
        assert_eq!(source.square_count(), 64);
        assert_eq!(source.square_name(64), None);
        assert_eq!(source.square_mask(64), None);
    }

    #[test]
    fn test_file_names_are_lowercase() {
        let names: String = ShakmatySource::new()
            .file_entries()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, "abcdefgh");
    }

    #[test]
    fn test_rank_and_file_masks() {
        let source = ShakmatySource::new();
        let ranks = source.rank_masks();
        let files = source.file_entries();

        assert_eq!(u64::from(ranks[0]), 0x0000_0000_0000_00ff);
        assert_eq!(u64::from(ranks[7]), 0xff00_0000_0000_0000);
        assert_eq!(u64::from(files[0].1), 0x0101_0101_0101_0101);
        assert_eq!(u64::from(files[7].1), 0x8080_8080_8080_8080);
    }

    #[test]
    fn test_sentinels() {
        let source = ShakmatySource::new();
        assert_eq!(u64::from(source.empty_mask()), 0);
        assert_eq!(u64::from(source.full_mask()), u64::MAX);
    }
}
