// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::{BTreeSet, HashMap};

use crate::e_nfa::symbol::Symbol;

/// Index of a state inside the automaton that owns it.
pub type StateId = usize;

/// A set of states, ordered by id.
pub type StateSet = BTreeSet<StateId>;

static NO_SUCCESSORS: StateSet = BTreeSet::new();

/// A named state. Destinations are stored as ids and resolved through the
/// `ENFA` owning the state.
#[derive(Debug, Clone)]
pub struct State {
    id: StateId,
    name: String,
    is_final: bool,
    transitions: HashMap<Symbol, StateSet>,
}

impl State {
    /// Creates a non-final state. Its epsilon transitions already hold the
    /// state itself.
    pub fn new<S: Into<String>>(id: StateId, name: S) -> State {
        let mut transitions = HashMap::new();
        transitions.insert(Symbol::epsilon(), [id].iter().cloned().collect());
        State { id, name: name.into(), is_final: false, transitions }
    }

    /// Id of the state in its automaton.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Name of the state.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test if the state is final.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Set or unset the final flag.
    pub fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }

    /// Registers `dest` as reachable on `symbol`. Returns `false` if the pair
    /// was already registered.
    pub fn add_transition(&mut self, symbol: Symbol, dest: StateId) -> bool {
        self.transitions.entry(symbol).or_insert_with(StateSet::new).insert(dest)
    }

    /// The states reached in one step on `symbol`.
    pub fn successors(&self, symbol: &Symbol) -> &StateSet {
        self.transitions.get(symbol).unwrap_or(&NO_SUCCESSORS)
    }

    /// The states reached in one epsilon step. Always contains `self`.
    pub fn epsilon_successors(&self) -> &StateSet {
        self.successors(&Symbol::epsilon())
    }

    /// Iterates over the transitions, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (&Symbol, &StateSet)> + '_ {
        self.transitions.iter()
    }
}
