use thiserror::Error;

/// Error when reading constants back from a generated header.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Hex literal is not `0x` + 16 hex digits + `ULL`
    #[error("line {line}: invalid literal '{literal}'")]
    Literal { line: usize, literal: String },

    /// Union refers to a constant not defined above it
    #[error("line {line}: unknown constant '{name}'")]
    UnknownConstant { line: usize, name: String },
}

/// Read every numeric constant defined in a header, in order.
///
/// Literal definitions (`#define NAME 0x...ULL`) are decoded directly and
/// unions (`#define NAME (A | B)`) are folded from constants defined
/// earlier in the text. Guards, includes and function-like macros are
/// skipped.
pub fn parse_constants(text: &str) -> Result<Vec<(String, u64)>, ParseError> {
    let mut constants: Vec<(String, u64)> = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        let line = number + 1;
        let Some(definition) = raw.trim().strip_prefix("#define ") else {
            continue;
        };
        let Some((name, body)) = definition.split_once(char::is_whitespace) else {
            // Bare define, e.g. the include guard
            continue;
        };
        if name.contains('(') {
            continue;
        }

        let body = body.trim();
        let union = body.strip_prefix('(').and_then(|b| b.strip_suffix(')'));
        let value = if let Some(operands) = union {
            fold_union(operands, &constants, line)?
        } else {
            parse_literal(body).ok_or_else(|| ParseError::Literal {
                line,
                literal: body.to_string(),
            })?
        };
        constants.push((name.to_string(), value));
    }

    Ok(constants)
}

/// Decode `0x` + exactly 16 hex digits + `ULL`.
fn parse_literal(literal: &str) -> Option<u64> {
    let digits = literal.strip_prefix("0x")?.strip_suffix("ULL")?;
    if digits.len() != 16 {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn fold_union(operands: &str, known: &[(String, u64)], line: usize) -> Result<u64, ParseError> {
    operands
        .split('|')
        .map(str::trim)
        .try_fold(0u64, |acc, operand| {
            known
                .iter()
                .find(|(name, _)| name == operand)
                .map(|(_, value)| acc | value)
                .ok_or_else(|| ParseError::UnknownConstant {
                    line,
                    name: operand.to_string(),
                })
        })
}
