// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use log::trace;

use crate::e_nfa::state::{State, StateSet};

/// Computes the epsilon closure of `seeds`: every state reachable from one of
/// them through zero or more epsilon transitions.
///
/// `states` is the arena the ids refer to. Ids outside of the arena are kept
/// in the result but not followed.
pub fn epsilon_closure(states: &[State], seeds: &StateSet) -> StateSet {
    let mut closure = StateSet::new();
    let mut stack: Vec<_> = seeds.iter().cloned().collect();

    while let Some(id) = stack.pop() {
        if !closure.insert(id) {
            continue;
        }
        if let Some(state) = states.get(id) {
            stack.extend(state.epsilon_successors().iter().filter(|dest| !closure.contains(*dest)));
        }
    }

    trace!("epsilon closure of {:?} is {:?}", seeds, closure);
    closure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::e_nfa::symbol::Symbol;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn chain(len: usize) -> Vec<State> {
        let mut states: Vec<_> = (0..len).map(|id| State::new(id, format!("q{}", id))).collect();
        for id in 1..len {
            states[id - 1].add_transition(Symbol::epsilon(), id);
        }
        states
    }

    fn set(ids: &[usize]) -> StateSet {
        ids.iter().cloned().collect()
    }

    #[test]
    fn test_reflexive() {
        let states = chain(1);
        assert_eq!(epsilon_closure(&states, &set(&[0])), set(&[0]));
    }

    #[test]
    fn test_follows_whole_chain() {
        let states = chain(4);
        assert_eq!(epsilon_closure(&states, &set(&[0])), set(&[0, 1, 2, 3]));
        assert_eq!(epsilon_closure(&states, &set(&[2])), set(&[2, 3]));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut states = chain(3);
        states[2].add_transition(Symbol::epsilon(), 0);
        assert_eq!(epsilon_closure(&states, &set(&[1])), set(&[0, 1, 2]));
    }

    #[test]
    fn test_fixed_point() {
        let mut states = chain(5);
        states[4].add_transition(Symbol::new("a"), 0);
        for seeds in vec![set(&[]), set(&[0]), set(&[3]), set(&[1, 4])] {
            let closure = epsilon_closure(&states, &seeds);
            assert!(seeds.is_subset(&closure));
            assert_eq!(epsilon_closure(&states, &closure), closure);
        }
    }

    #[test]
    fn test_ignores_other_symbols() {
        let mut states = chain(2);
        states[0].add_transition(Symbol::new("a"), 1);
        states[1].add_transition(Symbol::new("a"), 0);
        assert_eq!(epsilon_closure(&states, &set(&[1])), set(&[1]));
    }
}
