use shakmaty::Bitboard;

use crate::{BitboardSource, NUM_LINES, NUM_SQUARES};

/// Synthetic bitboard tables for testing.
///
/// Masks are computed from coordinates (bit N = square N, a1 = 0) rather
/// than read from a chess library. Entries can be removed to simulate an
/// incomplete library.
#[derive(Debug, Clone)]
pub struct TableSource {
    square_count: usize,
    rank_count: usize,
    file_count: usize,
    missing_name: Option<usize>,
    missing_mask: Option<usize>,
}

impl Default for TableSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource {
    /// Create a complete table.
    pub fn new() -> Self {
        Self {
            square_count: NUM_SQUARES,
            rank_count: NUM_LINES,
            file_count: NUM_LINES,
            missing_name: None,
            missing_mask: None,
        }
    }

    /// Report `count` squares instead of 64.
    pub fn with_square_count(mut self, count: usize) -> Self {
        self.square_count = count;
        self
    }

    /// Report `count` ranks; ranks past the eighth are empty.
    pub fn with_rank_count(mut self, count: usize) -> Self {
        self.rank_count = count;
        self
    }

    /// Report `count` files; files past h are empty.
    pub fn with_file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn without_square_name(mut self, index: usize) -> Self {
        self.missing_name = Some(index);
        self
    }

    pub fn without_square_mask(mut self, index: usize) -> Self {
        self.missing_mask = Some(index);
        self
    }

    fn has_square(&self, index: usize) -> bool {
        index < self.square_count && index < NUM_SQUARES
    }
}

/// Shift that yields an empty mask once every bit is shifted out.
fn shifted(mask: u64, by: usize) -> u64 {
    u32::try_from(by)
        .ok()
        .and_then(|by| mask.checked_shl(by))
        .unwrap_or(0)
}

impl BitboardSource for TableSource {
    #[inline]
    fn square_count(&self) -> usize {
        self.square_count
    }

    fn square_name(&self, index: usize) -> Option<String> {
        if !self.has_square(index) || self.missing_name == Some(index) {
            return None;
        }
        let file = (b'a' + (index % 8) as u8) as char;
        let rank = index / 8 + 1;
        Some(format!("{file}{rank}"))
    }

    fn square_mask(&self, index: usize) -> Option<Bitboard> {
        if !self.has_square(index) || self.missing_mask == Some(index) {
            return None;
        }
        Some(Bitboard(1 << index))
    }

    fn rank_masks(&self) -> Vec<Bitboard> {
        (0..self.rank_count)
            .map(|rank| Bitboard(shifted(0xff, 8 * rank)))
            .collect()
    }

    fn file_entries(&self) -> Vec<(char, Bitboard)> {
        (0..self.file_count)
            .map(|file| {
                let name = (b'a' + file as u8) as char;
                (name, Bitboard(shifted(0x0101_0101_0101_0101, file)))
            })
            .collect()
    }

    #[inline]
    fn empty_mask(&self) -> Bitboard {
        Bitboard(0)
    }

    #[inline]
    fn full_mask(&self) -> Bitboard {
        Bitboard(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShakmatySource;

    #[test]
    fn test_matches_shakmaty() {
        let table = TableSource::new();
        let real = ShakmatySource::new();

        for index in 0..NUM_SQUARES {
            assert_eq!(table.square_name(index), real.square_name(index));
            assert_eq!(table.square_mask(index), real.square_mask(index));
        }
        assert_eq!(table.rank_masks(), real.rank_masks());
        assert_eq!(table.file_entries(), real.file_entries());
        assert_eq!(table.empty_mask(), real.empty_mask());
        assert_eq!(table.full_mask(), real.full_mask());
    }

    #[test]
    fn test_removed_entries() {
        let table = TableSource::new()
            .with_square_count(10)
            .with_rank_count(2)
            .with_file_count(0)
            .without_square_name(3)
            .without_square_mask(4);

        assert_eq!(table.square_count(), 10);
        assert_eq!(table.square_name(3), None);
        assert!(table.square_mask(3).is_some());
        assert_eq!(table.square_mask(4), None);
        assert_eq!(table.square_name(10), None);
        assert_eq!(table.rank_masks().len(), 2);
        assert!(table.file_entries().is_empty());
    }

    #[test]
    fn test_extra_lines_do_not_overflow() {
        let table = TableSource::new().with_rank_count(9).with_file_count(9);

        let ranks = table.rank_masks();
        assert_eq!(ranks.len(), 9);
        assert_eq!(ranks[8], Bitboard(0));

        let files = table.file_entries();
        assert_eq!(files.len(), 9);
        assert_eq!(files[8].0, 'i');
    }
}
