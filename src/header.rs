use std::fmt;

/// Render a mask as a 64-bit C literal, e.g. `0x0000000000000001ULL`.
#[inline]
pub fn hex_literal(value: u64) -> String {
    format!("{value:#018x}ULL")
}

/// A single record of a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `#ifndef GUARD` followed by `#define GUARD`
    GuardOpen(String),
    /// `#include <path>`
    Include(String),
    /// Empty separator line
    Blank,
    /// Named mask literal.
    ///
    /// `width` pads the name so neighbouring values line up; it never
    /// changes the name itself.
    Constant {
        name: String,
        value: u64,
        width: usize,
    },
    /// Named bitwise OR of previously defined constants
    Union { name: String, operands: Vec<String> },
    /// Function-like macro, e.g. `BB_SQUARE(sq)`
    Macro { signature: String, body: String },
    /// `#endif` closing the guard opened by [`Line::GuardOpen`]
    GuardClose(String),
}

impl Line {
    /// Constant definition without name padding.
    pub fn constant(name: impl Into<String>, value: u64) -> Self {
        Line::Constant {
            name: name.into(),
            value,
            width: 0,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::GuardOpen(guard) => write!(f, "#ifndef {guard}\n#define {guard}"),
            Line::Include(path) => write!(f, "#include <{path}>"),
            Line::Blank => Ok(()),
            Line::Constant { name, value, width } => {
                write!(
                    f,
                    "#define {name:<width$} {}",
                    hex_literal(*value),
                    width = *width
                )
            }
            Line::Union { name, operands } => {
                write!(f, "#define {name} ({})", operands.join(" | "))
            }
            Line::Macro { signature, body } => write!(f, "#define {signature} {body}"),
            Line::GuardClose(guard) => write!(f, "#endif  // ifndef {guard}"),
        }
    }
}

/// An ordered list of header records, rendered to text only at the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    lines: Vec<Line>,
}

impl Header {
    #[inline]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Numeric constants in emission order.
    pub fn constants(&self) -> impl Iterator<Item = (&str, u64)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Constant { name, value, .. } => Some((name.as_str(), *value)),
            _ => None,
        })
    }

    /// Look up a numeric constant by name.
    pub fn constant(&self, name: &str) -> Option<u64> {
        self.constants()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }
}

impl From<Vec<Line>> for Header {
    fn from(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
