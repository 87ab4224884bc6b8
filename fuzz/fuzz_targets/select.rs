#![no_main]

use css::{Presentation, apply_selector, find_matches};
use html::parse;
use html::traverse::{ancestors_of, node_count};
use libfuzzer_sys::fuzz_target;

// Input is `markup \0 selector`.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (markup, selector) = text.split_once('\0').unwrap_or((text, "div"));
    let Ok(forest) = parse(markup) else {
        return;
    };
    let presentation = find_matches(&forest, selector);
    let count = node_count(&forest) as u32;
    for id in presentation.selected_ids() {
        assert!(id.0 < count);
        for ancestor in ancestors_of(&forest, id) {
            assert!(presentation.is_opened(ancestor));
        }
    }

    let mut reused = Presentation::new();
    apply_selector(&forest, "div", &mut reused);
    apply_selector(&forest, selector, &mut reused);
    assert_eq!(reused, presentation);
});
