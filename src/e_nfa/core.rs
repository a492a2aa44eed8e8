// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;

use indexmap::IndexSet;
use log::{debug, trace};

use crate::e_nfa::closure;
use crate::e_nfa::error::{ENFAError, Result};
use crate::e_nfa::state::{State, StateId, StateSet};
use crate::e_nfa::symbol::Symbol;
use crate::e_nfa::tokenizer;

/// The type `ENFA` represents a NonDeterministic Finite Automaton with epsilon
/// transitions over an alphabet of (possibly multi-character) symbols.
///
/// States live in an arena owned by the automaton and are referenced by
/// `StateId`. The alphabet keeps its insertion order.
///
/// Construction calls take `&mut self` and queries take `&self`, so an
/// automaton shared between threads can only be queried.
#[derive(Debug, Clone, Default)]
pub struct ENFA {
    states   : Vec<State>,
    names    : HashMap<String, StateId>,
    alphabet : IndexSet<Symbol>,
    start    : Option<StateId>,
}

impl ENFA {
    /// Creates an automaton without states over the alphabet `symbols`.
    ///
    /// # Errors
    ///
    /// Return an `ENFAError::EmptySymbol` if one of the texts is empty.
    pub fn new<I, S>(symbols: I) -> Result<ENFA>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut enfa = ENFA::default();
        for symb in symbols {
            enfa.add_symbol(symb)?;
        }
        Ok(enfa)
    }

    /// Adds a state named `name`. Returns `false` if the state already exists.
    pub fn add_state<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.names.contains_key(&name) {
            return false;
        }
        let id = self.states.len();
        self.states.push(State::new(id, name.clone()));
        self.names.insert(name, id);
        true
    }

    /// Adds a symbol to the alphabet. Returns `false` if the symbol already
    /// exists.
    ///
    /// # Errors
    ///
    /// Return an `ENFAError::EmptySymbol` if `text` is empty.
    pub fn add_symbol<S: Into<String>>(&mut self, text: S) -> Result<bool> {
        let symb = Symbol::new(text);
        if symb.is_epsilon() {
            return Err(ENFAError::EmptySymbol);
        }
        Ok(self.alphabet.insert(symb))
    }

    /// Sets the starting state. Returns `false`, and keeps the previous
    /// starting state, if no state is named `name`.
    pub fn set_start(&mut self, name: &str) -> bool {
        match self.names.get(name) {
            Some(&id) => {
                self.start = Some(id);
                true
            }
            None => false,
        }
    }

    /// Marks the state `name` as final. Returns `false` if it already was.
    ///
    /// # Errors
    ///
    /// Return an `ENFAError::UnknownState` if no state is named `name`.
    pub fn mark_final(&mut self, name: &str) -> Result<bool> {
        self.set_final(name, true)
    }

    /// Marks the state `name` as non-final. Returns `false` if it already was.
    ///
    /// # Errors
    ///
    /// Return an `ENFAError::UnknownState` if no state is named `name`.
    pub fn unmark_final(&mut self, name: &str) -> Result<bool> {
        self.set_final(name, false)
    }

    fn set_final(&mut self, name: &str, is_final: bool) -> Result<bool> {
        let id = self.state_id(name)?;
        let state = &mut self.states[id];
        let changed = state.is_final() != is_final;
        state.set_final(is_final);
        Ok(changed)
    }

    /// Adds the transition `src --symb--> dest`. The empty text stands for
    /// epsilon. Returns `false` if the transition already exists.
    ///
    /// # Errors
    ///
    /// Return an `ENFAError::UnknownState` if `src` or `dest` is not a state,
    /// and an `ENFAError::UnknownSymbol` if `symb` is neither in the alphabet
    /// nor empty. The automaton is left untouched on error.
    pub fn add_transition(&mut self, src: &str, symb: &str, dest: &str) -> Result<bool> {
        let src = self.state_id(src)?;
        let symb = Symbol::new(symb);
        if !symb.is_epsilon() && !self.alphabet.contains(&symb) {
            return Err(ENFAError::UnknownSymbol(symb.text().to_owned()));
        }
        let dest = self.state_id(dest)?;
        Ok(self.states[src].add_transition(symb, dest))
    }

    /// Adds the epsilon transition `src --ε--> dest`. Same contract as
    /// `add_transition`.
    pub fn add_epsilon_transition(&mut self, src: &str, dest: &str) -> Result<bool> {
        self.add_transition(src, "", dest)
    }

    fn state_id(&self, name: &str) -> Result<StateId> {
        self.names.get(name).cloned().ok_or_else(|| ENFAError::UnknownState(name.to_owned()))
    }

    /// The states, in insertion order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The state named `name`, if any.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.names.get(name).map(|&id| &self.states[id])
    }

    /// The state with id `id`, if any.
    pub fn state_by_id(&self, id: StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// The alphabet, in insertion order. Epsilon is not part of it.
    pub fn alphabet(&self) -> &IndexSet<Symbol> {
        &self.alphabet
    }

    /// The starting state, if set.
    pub fn start(&self) -> Option<&State> {
        self.start.map(|id| &self.states[id])
    }

    /// The final states.
    pub fn final_states(&self) -> StateSet {
        self.states.iter().filter(|state| state.is_final()).map(|state| state.id()).collect()
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Test if the automaton has no state.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The epsilon closure of `states`.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        closure::epsilon_closure(&self.states, states)
    }

    /// Test if an input string is a word of the language defined by the ENFA.
    /// The input is first split into symbols of the alphabet (see
    /// `tokenizer::tokenize`), then every possible path is followed at once.
    ///
    /// An automaton without starting state accepts nothing.
    ///
    /// # Errors
    ///
    /// Return an `ENFAError::UnmatchedInput` if `input` can not be split into
    /// symbols of the alphabet.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate regular_language;
    ///
    /// use regular_language::e_nfa::core::*;
    ///
    /// fn main() {
    ///     // (ab)*
    ///     let mut nfa = ENFA::new(vec!["ab"]).unwrap();
    ///     nfa.add_state("q0");
    ///     nfa.set_start("q0");
    ///     nfa.mark_final("q0").unwrap();
    ///     nfa.add_transition("q0", "ab", "q0").unwrap();
    ///
    ///     assert_eq!(nfa.accepts(""), Ok(true));
    ///     assert_eq!(nfa.accepts("abab"), Ok(true));
    ///     assert!(nfa.accepts("aba").is_err());
    /// }
    /// ```
    pub fn accepts(&self, input: &str) -> Result<bool> {
        let tokens = tokenizer::tokenize(input, &self.alphabet)?;
        let mut active = match self.start {
            Some(start) => self.epsilon_closure(&[start].iter().cloned().collect()),
            None => StateSet::new(),
        };

        for symb in tokens {
            if active.is_empty() {
                debug!("{:?} rejected, no active state left", input);
                return Ok(false);
            }
            let stepped: StateSet = active
                .iter()
                .flat_map(|&id| self.states[id].successors(symb).iter().cloned())
                .collect();
            active = self.epsilon_closure(&stepped);
            trace!("on {:?} active states are {:?}", symb.text(), active);
        }

        let accepted = active.iter().any(|&id| self.states[id].is_final());
        debug!("{:?} {}", input, if accepted { "accepted" } else { "rejected" });
        Ok(accepted)
    }
}
