pub mod outline;
pub mod presentation;
pub mod select;
pub mod syntax;

// Re-exports so other crates can just use `css::...` nicely.
pub use outline::outline_with_presentation;
pub use presentation::{NodeFlags, Presentation};
pub use select::{
    apply_chain, apply_selector, find_matches, matches_compound, matches_selector, matching_ids,
};
pub use syntax::{Compound, Selector, SelectorChain, last_token, parse_selector};
