//! Workout export normalizer
//!
//! Parses the text exports of the Setgraph workout tracker, whose rep data
//! comes in a handful of ad-hoc encodings, and renders every session in one
//! compact tabular form.
//!
//! # Examples
//!
//! ```
//! use liftlog::convert;
//!
//! let out = convert("Bench press • 3×45 kg, 2×50 kg", None).unwrap();
//! assert_eq!(out, "Bench press\t45/50kg 2*3/2\n");
//! ```
//!
//! # Pipeline
//!
//! [`clean`] the raw text, [`parse_sessions`] the resulting lines, optionally
//! sort each session against a reference order, then [`render`]. [`convert`]
//! runs the whole pipeline in one call.

pub mod cleaner;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod renderer;
pub mod session;
pub mod sorter;


pub use cleaner::clean;
pub use error::{ConvertError, Result};
pub use grammar::{parse_rep_data, RepGrammar};
pub use lexer::{lex, RepToken};
pub use parser::{parse_sessions, NAME_SEP};
pub use renderer::render;
pub use session::{LiftSet, Rep, Session};
pub use sorter::{reference_ranks, sort_sessions};

/// Convert a raw export into the tabular form.
///
/// `sort_reference` is the content of an optional name-per-line file fixing
/// the order of sets inside each session; `None` keeps input order.
pub fn convert(raw: &str, sort_reference: Option<&str>) -> Result<String> {
    let lines = clean(raw);
    let mut sessions = parse_sessions(&lines)?;
    if let Some(reference) = sort_reference {
        let ranks = reference_ranks(reference);
        sort_sessions(&mut sessions, &ranks);
    }
    Ok(render(&sessions))
}
