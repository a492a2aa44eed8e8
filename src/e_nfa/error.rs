// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;
use std::result;

/// The `ENFAError` type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ENFAError {
    /// No symbol of the alphabet is a prefix of the input starting at byte
    /// `position`. `remainder` is the unconsumed part of the input.
    UnmatchedInput {
        /// Byte offset of the first character that could not be matched.
        position: usize,
        /// The input left at `position`.
        remainder: String,
    },
    /// A construction call referenced a state that does not exist.
    UnknownState(String),
    /// A construction call referenced a symbol outside of the alphabet.
    UnknownSymbol(String),
    /// An alphabet symbol with an empty text was requested. The empty text is
    /// reserved for epsilon.
    EmptySymbol,
    /// No starting state is specified.
    MissingStartingState,
    /// A transition table does not hold one cell per (state, symbol) pair.
    IllformedTable {
        /// Number of cells the table should contain.
        expected: usize,
        /// Number of cells actually provided.
        found: usize,
    },
}

impl fmt::Display for ENFAError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ENFAError::UnmatchedInput { position, ref remainder } => {
                write!(f, "No symbol matches the input at {}: {:?}.", position, remainder)
            }
            ENFAError::UnknownState(ref name) => write!(f, "Unknown state {:?}.", name),
            ENFAError::UnknownSymbol(ref text) => write!(f, "Unknown symbol {:?}.", text),
            ENFAError::EmptySymbol => write!(f, "Empty symbol."),
            ENFAError::MissingStartingState => write!(f, "Missing starting state."),
            ENFAError::IllformedTable { expected, found } => {
                write!(f, "Illformed table: {} cells expected, {} found.", expected, found)
            }
        }
    }
}

impl error::Error for ENFAError {}

/// Alias for result::Result<T,ENFAError>.
pub type Result<T> = result::Result<T, ENFAError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let err = ENFAError::UnmatchedInput { position: 2, remainder: "zz".to_owned() };
        assert_eq!(err.to_string(), "No symbol matches the input at 2: \"zz\".");
        assert_eq!(ENFAError::UnknownState("q9".to_owned()).to_string(), "Unknown state \"q9\".");
        assert_eq!(
            ENFAError::IllformedTable { expected: 4, found: 3 }.to_string(),
            "Illformed table: 4 cells expected, 3 found."
        );
    }
}
