#![no_main]

use html::dom_snapshot::{DomSnapshotOptions, assert_forest_eq};
use html::serialize::to_markup;
use html::traverse::walk;
use html::{TagState, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(forest) = parse(input) else {
        return;
    };
    assert!(walk(&forest).all(|visit| visit.node.state() != Some(TagState::Opened)));
    let reparsed = parse(&to_markup(&forest)).expect("serialized markup must parse");
    assert_forest_eq(&forest, &reparsed, DomSnapshotOptions::default());
});
