// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(warnings, missing_docs)]

//! Epsilon non deterministic finite automata over alphabets of multi-character
//! symbols, and membership test of input strings.

/// e_nfa api
pub mod e_nfa;

pub use crate::e_nfa::builder::{ENFABuilder, ENFABuilding};
pub use crate::e_nfa::core::ENFA;
pub use crate::e_nfa::error::{ENFAError, Result};
pub use crate::e_nfa::symbol::Symbol;
pub use crate::e_nfa::table::TransitionTable;
