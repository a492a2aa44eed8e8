// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use log::debug;

use crate::e_nfa::core::ENFA;
use crate::e_nfa::error::{ENFAError, Result};

/// The `ENFABuilder` follows the builder pattern and allows to create an
/// `ENFA`. The builder is moved at each call so it is necessary to bind
/// to a new variable the return value for each function of the builder.
///
/// The calls are only recorded: states may be used before being declared and
/// every reference is checked by `finalize`.
///
/// # Errors
///
/// Return an error if the starting state is not specified.
///
/// Return an error if a transition, the starting state or a final state refers
/// to an undeclared state or symbol.
///
/// # Examples
///
/// ```
/// extern crate regular_language;
///
/// use regular_language::e_nfa::builder::*;
///
/// fn main() {
///     // (abc)*
///     let nfa = ENFABuilder::new()
///         .add_start("0")
///         .add_final("0")
///         .add_final("3")
///         .add_transition("a", "0", "1")
///         .add_transition("b", "1", "2")
///         .add_transition("c", "2", "3")
///         .add_e_transition("3", "0")
///         .add_symbol("a")
///         .add_symbol("b")
///         .add_symbol("c")
///         .add_state("0")
///         .add_state("1")
///         .add_state("2")
///         .add_state("3")
///         .finalize()
///         .unwrap();
///     assert_eq!(nfa.accepts("abcabc"), Ok(true));
///     assert_eq!(nfa.accepts("abca"), Ok(false));
/// }
/// ```
///
/// ```
/// extern crate regular_language;
///
/// use regular_language::e_nfa::builder::*;
/// use regular_language::e_nfa::error::ENFAError;
///
/// fn main() {
///     let nfa = ENFABuilder::new()
///         .add_state("0")
///         .add_final("0")
///         .finalize();
///     match nfa {
///         Err(ENFAError::MissingStartingState) => assert!(true),
///         _ => assert!(false),
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct ENFABuilder {
    symbols     : Vec<String>,
    states      : Vec<String>,
    start       : Option<String>,
    finals      : Vec<String>,
    transitions : Vec<(String, String, String)>,
}

/// ENFABuilding is the trait assiociated to the ENFABuilder type. It is
/// implemented by `ENFABuilder` and by `Result<ENFABuilder>`, so the calls can
/// be chained without unwrapping.
///
/// # Errors
///
/// If self contains an ENFAError then each function should transfer this error.
pub trait ENFABuilding {
    /// Add a symbol to the alphabet.
    fn add_symbol(self, symb: &str) -> Result<ENFABuilder>;

    /// Add a state.
    fn add_state(self, state: &str) -> Result<ENFABuilder>;

    /// Set the starting state. The last call wins.
    fn add_start(self, state: &str) -> Result<ENFABuilder>;

    /// Add a final state.
    fn add_final(self, state: &str) -> Result<ENFABuilder>;

    /// Add a transition. An empty `symb` is an epsilon transition.
    fn add_transition(self, symb: &str, src: &str, dest: &str) -> Result<ENFABuilder>;

    /// Add an epsilon transition.
    fn add_e_transition(self, src: &str, dest: &str) -> Result<ENFABuilder>;

    /// Finalize the building of the ENFA.
    ///
    /// # Errors
    ///
    /// Return a ENFAError::MissingStartingState if no starting state is specified.
    ///
    /// Return a ENFAError::UnknownState or ENFAError::UnknownSymbol if a
    /// recorded call refers to an undeclared state or symbol.
    ///
    /// Return a ENFAError::EmptySymbol if an empty symbol was added.
    fn finalize(self) -> Result<ENFA>;
}

impl ENFABuilder {
    /// Creates a new ENFABuilder.
    pub fn new() -> Result<ENFABuilder> {
        Ok(ENFABuilder::default())
    }
}

impl ENFABuilding for ENFABuilder {
    fn add_symbol(self, symb: &str) -> Result<ENFABuilder> {
        Ok(self).add_symbol(symb)
    }

    fn add_state(self, state: &str) -> Result<ENFABuilder> {
        Ok(self).add_state(state)
    }

    fn add_start(self, state: &str) -> Result<ENFABuilder> {
        Ok(self).add_start(state)
    }

    fn add_final(self, state: &str) -> Result<ENFABuilder> {
        Ok(self).add_final(state)
    }

    fn add_transition(self, symb: &str, src: &str, dest: &str) -> Result<ENFABuilder> {
        Ok(self).add_transition(symb, src, dest)
    }

    fn add_e_transition(self, src: &str, dest: &str) -> Result<ENFABuilder> {
        Ok(self).add_e_transition(src, dest)
    }

    fn finalize(self) -> Result<ENFA> {
        Ok(self).finalize()
    }
}

/// Implementing ENFABuilding trait for Result<ENFABuilder> allows
/// to chain the return value of the ENFABuilder instead of unwrapping them
/// at each stage of the building process.
impl ENFABuilding for Result<ENFABuilder> {
    fn add_symbol(self, symb: &str) -> Result<ENFABuilder> {
        self.and_then(|mut nfa| {
            if symb.is_empty() {
                return Err(ENFAError::EmptySymbol);
            }
            nfa.symbols.push(symb.to_owned());
            Ok(nfa)
        })
    }

    fn add_state(self, state: &str) -> Result<ENFABuilder> {
        self.map(|mut nfa| {
            nfa.states.push(state.to_owned());
            nfa
        })
    }

    fn add_start(self, state: &str) -> Result<ENFABuilder> {
        self.map(|mut nfa| {
            nfa.start = Some(state.to_owned());
            nfa
        })
    }

    fn add_final(self, state: &str) -> Result<ENFABuilder> {
        self.map(|mut nfa| {
            nfa.finals.push(state.to_owned());
            nfa
        })
    }

    fn add_transition(self, symb: &str, src: &str, dest: &str) -> Result<ENFABuilder> {
        self.map(|mut nfa| {
            nfa.transitions.push((src.to_owned(), symb.to_owned(), dest.to_owned()));
            nfa
        })
    }

    fn add_e_transition(self, src: &str, dest: &str) -> Result<ENFABuilder> {
        self.add_transition("", src, dest)
    }

    fn finalize(self) -> Result<ENFA> {
        self.and_then(|nfa| {
            let start = nfa.start.ok_or(ENFAError::MissingStartingState)?;
            let mut enfa = ENFA::new(nfa.symbols)?;
            for state in nfa.states {
                enfa.add_state(state);
            }
            for (src, symb, dest) in &nfa.transitions {
                enfa.add_transition(src, symb, dest)?;
            }
            for state in &nfa.finals {
                enfa.mark_final(state)?;
            }
            if !enfa.set_start(&start) {
                return Err(ENFAError::UnknownState(start));
            }
            debug!(
                "built an automaton with {} states, {} symbols and {} transitions",
                enfa.len(),
                enfa.alphabet().len(),
                nfa.transitions.len()
            );
            Ok(enfa)
        })
    }
}
