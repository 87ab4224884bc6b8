use crate::presentation::Presentation;
use html::Node;
use html::debug::outline_forest_annotated;

// input: forest of `<html><div id="x"/></html>`, overlay after selecting "#x"
// output: ["<html>  [opened]", "  <div id=\"x\" />  [selected]"]
pub fn outline_with_presentation(
    forest: &[Node],
    presentation: &Presentation,
    cap: usize,
) -> Vec<String> {
    outline_forest_annotated(forest, cap, |id| {
        let flags = presentation.flags(id);
        match (flags.selected, flags.opened) {
            (false, false) => None,
            (true, false) => Some("[selected]".to_string()),
            (false, true) => Some("[opened]".to_string()),
            (true, true) => Some("[selected] [opened]".to_string()),
        }
    })
}
