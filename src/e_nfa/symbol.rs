// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

/// A symbol of the alphabet. A symbol may span several characters (`"if"`,
/// `"ab"`). Two symbols are equal when their texts are equal.
///
/// The symbol with an empty text is epsilon. It never belongs to an alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    text: String,
}

impl Symbol {
    /// Creates a symbol from its text.
    pub fn new<S: Into<String>>(text: S) -> Symbol {
        Symbol { text: text.into() }
    }

    /// The epsilon symbol.
    pub fn epsilon() -> Symbol {
        Symbol { text: String::new() }
    }

    /// Test if the symbol is epsilon.
    pub fn is_epsilon(&self) -> bool {
        self.text.is_empty()
    }

    /// The text of the symbol.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes of the text.
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_epsilon() {
            write!(f, "ε")
        } else {
            write!(f, "{}", self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon() {
        assert!(Symbol::epsilon().is_epsilon());
        assert!(Symbol::new("").is_epsilon());
        assert!(!Symbol::new("a").is_epsilon());
        assert_eq!(Symbol::epsilon().to_string(), "ε");
    }

    #[test]
    fn test_equality_by_text() {
        assert_eq!(Symbol::new("ab"), Symbol::new(String::from("ab")));
        assert!(Symbol::new("ab") != Symbol::new("a"));
        assert_eq!(Symbol::new("ab").len(), 2);
    }
}
