//! Parser for a small `html`/`div` markup vocabulary.
//!
//! [`parse`] turns a markup string into a [`Forest`] of top-level elements, or fails
//! with a [`ParseError`] naming the first problem found. The lower-level [`Tokenizer`]
//! and [`TreeBuilder`] are public for callers that want to drive the parse themselves.

pub mod battery;
pub mod debug;
#[cfg(any(test, feature = "dom-snapshot"))]
pub mod dom_snapshot;
pub mod perf_fixtures;
pub mod serialize;
pub mod traverse;

mod dom_builder;
mod error;
mod tokenizer;
mod types;
mod vocabulary;

pub use crate::dom_builder::{
    TreeBuilder, TreeBuilderConfig, TreeBuilderResult, parse, parse_with,
};
pub use crate::error::{ErrorDetail, ParseError, ParseErrorCode};
pub use crate::tokenizer::{Tokenizer, TokenizerConfig, classify_state, next_tag, tokenize};
pub use crate::types::{Attribute, Forest, Id, Node, TagState, TagToken};
pub use crate::vocabulary::Vocabulary;
