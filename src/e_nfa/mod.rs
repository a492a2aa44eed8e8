// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

/// e_nfa core api
pub mod core;
/// e_nfa builder
pub mod builder;
/// epsilon closure
pub mod closure;
/// e_nfa errors
pub mod error;
/// e_nfa states
pub mod state;
/// e_nfa symbols
pub mod symbol;
/// transition table rendering and loading
pub mod table;
/// splitting of the input into symbols
pub mod tokenizer;
