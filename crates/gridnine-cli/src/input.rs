//! Normalization of raw puzzle text into a [`Grid`].

use gridnine_core::{Grid, ParseGridError};

/// How strictly raw puzzle text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Any non-whitespace character that is not a digit 1-9 counts as an
    /// empty cell. Typos and stray symbols are silently discarded, so the
    /// only reportable problem is a wrong cell count.
    Lenient,
    /// Only digits and the empty-cell markers `0`, `.`, `_` are accepted;
    /// anything else is an error.
    Strict,
}

/// Parses puzzle text into a grid under the given mode.
///
/// Both modes ignore whitespace and expect exactly 81 cells.
///
/// # Errors
///
/// Returns [`ParseGridError::CellCount`] when the text does not describe 81
/// cells, and in strict mode [`ParseGridError::UnexpectedChar`] for any
/// character outside the grid alphabet.
pub fn parse_grid(text: &str, mode: ParseMode) -> Result<Grid, ParseGridError> {
    match mode {
        ParseMode::Strict => text.parse(),
        ParseMode::Lenient => {
            let normalized: String = text
                .chars()
                .map(|c| {
                    if c.is_whitespace() || c.is_ascii_digit() {
                        c
                    } else {
                        '.'
                    }
                })
                .collect();
            normalized.parse()
        }
    }
}
