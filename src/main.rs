extern crate regular_language;

use std::process;

use log::error;
use regular_language::{ENFABuilder, ENFABuilding};

fn main() {
    env_logger::init();

    // identifiers: a letter followed by letters or digits. "if" is in the
    // alphabet without any transition, so it is tokenized then rejected.
    let nfa = ENFABuilder::new()
        .add_symbol("a")
        .add_symbol("b")
        .add_symbol("0")
        .add_symbol("1")
        .add_symbol("if")
        .add_state("start")
        .add_state("letter")
        .add_state("ident")
        .add_start("start")
        .add_final("ident")
        .add_transition("a", "start", "letter")
        .add_transition("b", "start", "letter")
        .add_e_transition("letter", "ident")
        .add_transition("a", "ident", "letter")
        .add_transition("b", "ident", "letter")
        .add_transition("0", "ident", "ident")
        .add_transition("1", "ident", "ident")
        .finalize();
    match nfa {
        Ok(nfa) => {
            println!("{}", nfa);
            for input in &["a", "ab01", "b1a", "0a", "", "if", "abc"] {
                match nfa.accepts(input) {
                    Ok(accepted) => println!("{:?}: {}", input, accepted),
                    Err(e) => println!("{:?}: {}", input, e),
                }
            }
        },
        Err(e) => {
            error!("{}", e);
            process::exit(1)
        },
    }
}
