// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use itertools::{iproduct, Itertools};

use crate::e_nfa::core::ENFA;
use crate::e_nfa::error::{ENFAError, Result};
use crate::e_nfa::state::StateSet;
use crate::e_nfa::symbol::Symbol;

const MIN_CELL_WIDTH: usize = 3;

/// Transition table of an `ENFA`, rendered through `Display`.
///
/// One row per state, in insertion order. The first column holds the epsilon
/// transitions, then one column per symbol of the alphabet. The starting
/// state is prefixed with `->` and the final states with `*`.
///
/// ```text
/// --------------------
/// |      |  ε  |  a  |
/// |------|-----|-----|
/// | ->q0 | q0  | q1  |
/// | *q1  | q1  |     |
/// --------------------
/// ```
pub struct TransitionTable<'a> {
    enfa: &'a ENFA,
}

impl<'a> TransitionTable<'a> {
    /// Creates the table of `enfa`.
    pub fn new(enfa: &'a ENFA) -> TransitionTable<'a> {
        TransitionTable { enfa }
    }

    fn columns(&self) -> Vec<Symbol> {
        Some(Symbol::epsilon()).into_iter().chain(self.enfa.alphabet().iter().cloned()).collect()
    }

    fn label(&self, id: usize) -> String {
        let state = &self.enfa.states()[id];
        let mut label = String::new();
        if self.enfa.start().map(|start| start.id()) == Some(id) {
            label.push_str("->");
        }
        if state.is_final() {
            label.push('*');
        }
        label.push_str(state.name());
        label
    }

    fn cell(&self, dests: &StateSet) -> String {
        dests.iter().map(|&id| self.enfa.states()[id].name()).join(", ")
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn write_row(f: &mut fmt::Formatter, cells: &[String], widths: &[usize]) -> fmt::Result {
    write!(f, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        write!(f, " {:^width$} |", cell, width = width)?;
    }
    writeln!(f)
}

impl<'a> fmt::Display for TransitionTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let columns = self.columns();
        let header: Vec<String> = Some(String::new())
            .into_iter()
            .chain(columns.iter().map(|symb| symb.to_string()))
            .collect();
        let rows: Vec<Vec<String>> = self
            .enfa
            .states()
            .iter()
            .map(|state| {
                Some(self.label(state.id()))
                    .into_iter()
                    .chain(columns.iter().map(|symb| self.cell(state.successors(symb))))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|col| {
                rows.iter()
                    .map(|row| width(&row[col]))
                    .chain(Some(width(&header[col])))
                    .chain(Some(if col == 0 { 0 } else { MIN_CELL_WIDTH }))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let rule = "-".repeat(widths.iter().map(|width| width + 3).sum::<usize>() + 1);

        writeln!(f, "{}", rule)?;
        write_row(f, &header, &widths)?;
        writeln!(f, "|{}", widths.iter().map(|width| format!("{}|", "-".repeat(width + 2))).join(""))?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        writeln!(f, "{}", rule)
    }
}

impl fmt::Display for ENFA {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", TransitionTable::new(self))
    }
}

/// Builds an `ENFA` from a transition table.
///
/// `cells` holds the table row by row: `cells[i * symbols.len() + j]` lists
/// the destinations of `states[i]` on `symbols[j]`. Destinations are separated
/// by white spaces or commas and may be surrounded by braces (`"{q1, q2}"`).
/// An empty symbol in `symbols` designates the epsilon column.
///
/// # Errors
///
/// Return an `ENFAError::IllformedTable` if the number of cells does not match,
/// and the errors of `ENFA::add_transition` for unknown states.
///
/// # Examples
///
/// ```
/// extern crate regular_language;
///
/// use regular_language::e_nfa::table::from_table;
///
/// fn main() {
///     // words over {0, 1} ending with 01
///     let nfa = from_table(
///         &["q0", "q1", "q2"],
///         &["0", "1"],
///         &["{q0, q1}", "q0",
///           "",         "q2",
///           "",         ""],
///         "q0",
///         &["q2"]).unwrap();
///     assert_eq!(nfa.accepts("1101"), Ok(true));
///     assert_eq!(nfa.accepts("110"), Ok(false));
/// }
/// ```
pub fn from_table(states: &[&str], symbols: &[&str], cells: &[&str], start: &str, finals: &[&str]) -> Result<ENFA> {
    let expected = states.len() * symbols.len();
    if cells.len() != expected {
        return Err(ENFAError::IllformedTable { expected, found: cells.len() });
    }

    let mut enfa = ENFA::new(symbols.iter().filter(|symb| !symb.is_empty()).cloned())?;
    for state in states {
        enfa.add_state(*state);
    }
    for ((src, symb), cell) in iproduct!(states, symbols).zip(cells) {
        let dests = cell.split(|c: char| c.is_whitespace() || c == ',' || c == '{' || c == '}');
        for dest in dests.filter(|dest| !dest.is_empty()) {
            enfa.add_transition(src, symb, dest)?;
        }
    }
    if !enfa.set_start(start) {
        return Err(ENFAError::UnknownState(start.to_owned()));
    }
    for state in finals {
        enfa.mark_final(state)?;
    }
    Ok(enfa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn sample() -> ENFA {
        from_table(
            &["q0", "q1", "q2"],
            &["", "a", "bb"],
            &["q1", "", "q2",
              "",   "q1, q2", "",
              "",   "",   "{q0}"],
            "q0",
            &["q2"]).unwrap()
    }

    #[test]
    fn test_from_table() {
        let enfa = sample();
        assert_eq!(enfa.len(), 3);
        assert_eq!(enfa.alphabet().iter().map(|symb| symb.text()).collect::<Vec<_>>(), vec!["a", "bb"]);
        let samples = vec![("", false), ("a", true), ("bb", true), ("aaa", true), ("abb", false), ("bbbb", false),
                           ("bbbbbb", true), ("bba", true)];
        for (input, expected_result) in samples {
            assert_eq!(enfa.accepts(input), Ok(expected_result), "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_from_table_wrong_size() {
        let enfa = from_table(&["q0", "q1"], &["a"], &["q1"], "q0", &[]);
        assert_eq!(enfa.unwrap_err(), ENFAError::IllformedTable { expected: 2, found: 1 });
    }

    #[test]
    fn test_from_table_unknown_state() {
        assert_eq!(
            from_table(&["q0"], &["a"], &["q7"], "q0", &[]).unwrap_err(),
            ENFAError::UnknownState("q7".to_owned())
        );
        assert_eq!(
            from_table(&["q0"], &["a"], &["q0"], "q1", &[]).unwrap_err(),
            ENFAError::UnknownState("q1".to_owned())
        );
        assert_eq!(
            from_table(&["q0"], &["a"], &["q0"], "q0", &["q1"]).unwrap_err(),
            ENFAError::UnknownState("q1".to_owned())
        );
    }

    #[test]
    fn test_display() {
        let mut enfa = ENFA::new(vec!["a", "bb"]).unwrap();
        enfa.add_state("q0");
        enfa.add_state("q1");
        enfa.set_start("q0");
        enfa.mark_final("q1").unwrap();
        enfa.add_transition("q0", "a", "q1").unwrap();
        enfa.add_transition("q0", "a", "q0").unwrap();
        enfa.add_epsilon_transition("q1", "q0").unwrap();

        let expected = "\
--------------------------------
|      |   ε    |   a    | bb  |
|------|--------|--------|-----|
| ->q0 |   q0   | q0, q1 |     |
| *q1  | q0, q1 |        |     |
--------------------------------
";
        assert_eq!(TransitionTable::new(&enfa).to_string(), expected);
        assert_eq!(enfa.to_string(), expected);
    }

    #[test]
    fn test_display_start_and_final() {
        let mut enfa = ENFA::new(vec!["a"]).unwrap();
        enfa.add_state("s");
        enfa.set_start("s");
        enfa.mark_final("s").unwrap();
        let expected = "\
--------------------
|      |  ε  |  a  |
|------|-----|-----|
| ->*s |  s  |     |
--------------------
";
        assert_eq!(enfa.to_string(), expected);
    }

    #[test]
    fn test_from_table_rendered_back() {
        let enfa = from_table(
            &["q0", "q1"],
            &["", "a"],
            &["",   "q1",
              "q0", ""],
            "q0",
            &["q1"]).unwrap();
        let expected = "\
-----------------------
|      |   ε    |  a  |
|------|--------|-----|
| ->q0 |   q0   | q1  |
| *q1  | q0, q1 |     |
-----------------------
";
        assert_eq!(TransitionTable::new(&enfa).to_string(), expected);
    }
}
