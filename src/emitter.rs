use std::io::Write;

use shakmaty::Bitboard;
use thiserror::Error;

use crate::header::{Header, Line};
use crate::{BitboardSource, NUM_LINES, NUM_SQUARES};

/// A table the source was expected to expose is missing or malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// Square table is shorter or longer than a full board
    #[error("square table has {found} entries, expected {expected}")]
    SquareCount { expected: usize, found: usize },

    /// No name for a square index inside the table
    #[error("missing name for square {0}")]
    SquareName(usize),

    /// No mask for a square index inside the table
    #[error("missing mask for square {0}")]
    SquareMask(usize),

    /// Rank table ends before rank 8 (1-based rank number)
    #[error("missing mask for rank {0}")]
    Rank(usize),

    /// File table ends before file h (0-based file index)
    #[error("missing entry for file {}", file_letter(.0))]
    File(usize),

    /// Rank or file table has more entries than the board has lines
    #[error("{table} table has {found} entries, expected {expected}")]
    Oversized {
        table: &'static str,
        expected: usize,
        found: usize,
    },
}

fn file_letter(index: &usize) -> char {
    (b'a'..=b'z').nth(*index).map_or('?', char::from)
}

/// Failure while writing a header.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("failed to write header: {0}")]
    Io(#[from] std::io::Error),
}

/// Naming of the generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Include guard symbol
    pub guard: String,
    /// Prefix of every generated constant and macro
    pub prefix: String,
    /// System header providing fixed-width integer types
    pub include: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            guard: "BITBOARD_H_".to_string(),
            prefix: "BB_".to_string(),
            include: "stdint.h".to_string(),
        }
    }
}

/// Builds a bitboard header from the tables of a [`BitboardSource`].
///
/// The whole header is built in memory before anything is written, so a
/// lookup failure never leaves a truncated header behind.
#[derive(Debug, Clone)]
pub struct HeaderEmitter<S> {
    source: S,
    config: HeaderConfig,
}

impl<S: BitboardSource> HeaderEmitter<S> {
    #[inline]
    pub fn new(source: S) -> Self {
        Self::with_config(source, HeaderConfig::default())
    }

    pub fn with_config(source: S, config: HeaderConfig) -> Self {
        Self { source, config }
    }

    #[inline]
    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Build the header document.
    ///
    /// Groups are emitted in a fixed order: sentinels, squares, the
    /// square macro, ranks, back ranks, files.
    pub fn build(&self) -> Result<Header, LookupError> {
        let squares = self.squares()?;
        let ranks = self.ranks()?;
        let files = self.files()?;
        let prefix = &self.config.prefix;

        let mut header = Header::new();
        header.push(Line::GuardOpen(self.config.guard.clone()));
        header.push(Line::Blank);
        header.push(Line::Include(self.config.include.clone()));
        header.push(Line::Blank);

        let void = format!("{prefix}VOID");
        let all = format!("{prefix}ALL");
        let width = void.len().max(all.len());
        header.push(Line::Constant {
            name: void,
            value: self.source.empty_mask().into(),
            width,
        });
        header.push(Line::Constant {
            name: all,
            value: self.source.full_mask().into(),
            width,
        });
        header.push(Line::Blank);

        for (name, mask) in squares {
            header.push(Line::constant(
                format!("{prefix}{}", name.to_ascii_uppercase()),
                mask.into(),
            ));
        }
        header.push(Line::Blank);

        header.push(Line::Macro {
            signature: format!("{prefix}SQUARE(sq)"),
            body: "(1ULL << sq)".to_string(),
        });
        header.push(Line::Blank);

        for (rank, mask) in ranks.into_iter().enumerate() {
            header.push(Line::constant(self.rank_name(rank + 1), mask.into()));
        }
        header.push(Line::Blank);

        header.push(Line::Union {
            name: format!("{prefix}BACKRANKS"),
            operands: vec![self.rank_name(1), self.rank_name(NUM_LINES)],
        });
        header.push(Line::Blank);

        for (name, mask) in files {
            header.push(Line::constant(
                format!("{prefix}FILE_{}", name.to_ascii_uppercase()),
                mask.into(),
            ));
        }
        header.push(Line::Blank);

        header.push(Line::GuardClose(self.config.guard.clone()));

        log::debug!(
            "built header {} with {} constants",
            self.config.guard,
            header.constants().count()
        );
        Ok(header)
    }

    /// Build the header and write it to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EmitError> {
        let header = self.build()?;
        write!(out, "{header}")?;
        out.flush()?;
        Ok(())
    }

    fn rank_name(&self, rank: usize) -> String {
        format!("{}RANK_{rank}", self.config.prefix)
    }

    /// Square names paired with masks, in index order.
    fn squares(&self) -> Result<Vec<(String, Bitboard)>, LookupError> {
        let found = self.source.square_count();
        if found != NUM_SQUARES {
            return Err(LookupError::SquareCount {
                expected: NUM_SQUARES,
                found,
            });
        }

        (0..NUM_SQUARES)
            .map(|index| -> Result<_, LookupError> {
                let name = self
                    .source
                    .square_name(index)
                    .ok_or(LookupError::SquareName(index))?;
                let mask = self
                    .source
                    .square_mask(index)
                    .ok_or(LookupError::SquareMask(index))?;
                Ok((name, mask))
            })
            .collect()
    }

    fn ranks(&self) -> Result<Vec<Bitboard>, LookupError> {
        let ranks = self.source.rank_masks();
        match ranks.len() {
            NUM_LINES => Ok(ranks),
            found if found < NUM_LINES => Err(LookupError::Rank(found + 1)),
            found => Err(LookupError::Oversized {
                table: "rank",
                expected: NUM_LINES,
                found,
            }),
        }
    }

    fn files(&self) -> Result<Vec<(char, Bitboard)>, LookupError> {
        let files = self.source.file_entries();
        match files.len() {
            NUM_LINES => Ok(files),
            found if found < NUM_LINES => Err(LookupError::File(found)),
            found => Err(LookupError::Oversized {
                table: "file",
                expected: NUM_LINES,
                found,
            }),
        }
    }
}
