// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use log::debug;

use crate::e_nfa::error::{ENFAError, Result};
use crate::e_nfa::symbol::Symbol;

/// Splits `input` into a sequence of symbols of `alphabet`.
///
/// At each position the longest symbol whose text is a prefix of the
/// remaining input is consumed. There is no backtracking: with the alphabet
/// `{"a", "ab", "bc"}`, `"abc"` is split as `"ab"` then fails on `"c"`.
/// Epsilon and empty symbols never match.
///
/// # Errors
///
/// Return an `ENFAError::UnmatchedInput` if no symbol matches at some position.
///
/// # Examples
///
/// ```
/// extern crate regular_language;
///
/// use regular_language::e_nfa::symbol::Symbol;
/// use regular_language::e_nfa::tokenizer::tokenize;
///
/// fn main() {
///     let alphabet = vec![Symbol::new("a"), Symbol::new("ab")];
///     let tokens = tokenize("aba", &alphabet).unwrap();
///     let texts: Vec<_> = tokens.iter().map(|symb| symb.text()).collect();
///     assert_eq!(texts, vec!["ab", "a"]);
/// }
/// ```
pub fn tokenize<'a, I>(input: &str, alphabet: I) -> Result<Vec<&'a Symbol>>
where
    I: IntoIterator<Item = &'a Symbol>,
    I::IntoIter: Clone,
{
    let alphabet = alphabet.into_iter();
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < input.len() {
        let remainder = &input[position..];
        let symb = alphabet
            .clone()
            .filter(|symb| !symb.is_epsilon() && remainder.starts_with(symb.text()))
            .max_by_key(|symb| symb.len())
            .ok_or_else(|| ENFAError::UnmatchedInput { position, remainder: remainder.to_owned() })?;
        position += symb.len();
        tokens.push(symb);
    }

    debug!("tokenized {:?} into {:?}", input, tokens.iter().map(|symb| symb.text()).collect::<Vec<_>>());
    Ok(tokens)
}
