use crate::presentation::Presentation;
use crate::syntax::{Compound, Selector, SelectorChain, parse_selector};
use html::traverse::walk;
use html::{Id, Node};

fn has_attribute(node: &Node, key: &str, want: &str) -> bool {
    node.attributes()
        .iter()
        .any(|attr| attr.name == key && attr.value == want)
}

// Check if an element matches a single token. Class values are compared whole; a
// class attribute of "a b" matches ".a b" only, never ".a".
pub fn matches_selector(node: &Node, selector: &Selector) -> bool {
    match selector {
        Selector::Type(name) => node.name() == Some(name.as_str()),
        Selector::Id(want) => has_attribute(node, "id", want),
        Selector::Class(want) => has_attribute(node, "class", want),
    }
}

pub fn matches_compound(node: &Node, compound: &Compound) -> bool {
    node.is_element() && compound.parts.iter().all(|part| matches_selector(node, part))
}

// Elements seen so far by the walk, indexed by id, with their parent.
type Seen<'a> = Vec<(&'a Node, Option<Id>)>;

// Each compound, innermost first, must match some ancestor above the previous match.
fn ancestors_match(seen: &Seen<'_>, mut parent: Option<Id>, compounds: &[Compound]) -> bool {
    for compound in compounds.iter().rev() {
        loop {
            let Some(id) = parent else {
                return false;
            };
            let (node, grandparent) = seen[id.0 as usize];
            parent = grandparent;
            if matches_compound(node, compound) {
                break;
            }
        }
    }
    true
}

/// Ids of every element the chain selects, in document order.
pub fn matching_ids(forest: &[Node], chain: &SelectorChain) -> Vec<Id> {
    let mut out = Vec::new();
    for_each_match(forest, chain, |id, _| out.push(id));
    out
}

fn for_each_match<'a>(
    forest: &'a [Node],
    chain: &SelectorChain,
    mut on_match: impl FnMut(Id, &Seen<'a>),
) {
    let Some((subject, outer)) = chain.compounds.split_last() else {
        return;
    };
    let mut seen: Seen<'a> = Vec::new();
    for visit in walk(forest) {
        seen.push((visit.node, visit.parent));
        if matches_compound(visit.node, subject) && ancestors_match(&seen, visit.parent, outer) {
            on_match(visit.id, &seen);
        }
    }
}

/// Re-runs selection over `forest`, replacing whatever `presentation` held.
///
/// Matched elements get `selected`; every ancestor of a match gets `opened`. A selector
/// with no tokens leaves the overlay empty. Returns the number of matches.
pub fn apply_chain(
    forest: &[Node],
    chain: &SelectorChain,
    presentation: &mut Presentation,
) -> usize {
    presentation.clear();
    if chain.is_empty() {
        log::trace!(target: "css.select", "empty selector, flags cleared");
        return 0;
    }
    let mut count = 0usize;
    for_each_match(forest, chain, |id, seen| {
        count += 1;
        presentation.mark_selected(id);
        let mut parent = seen[id.0 as usize].1;
        while let Some(ancestor) = parent {
            if presentation.is_opened(ancestor) {
                // Its own ancestors were opened with it.
                break;
            }
            presentation.mark_opened(ancestor);
            parent = seen[ancestor.0 as usize].1;
        }
    });
    log::debug!(target: "css.select", "selector `{chain}` matched {count} elements");
    count
}

pub fn apply_selector(forest: &[Node], selector: &str, presentation: &mut Presentation) -> usize {
    apply_chain(forest, &parse_selector(selector), presentation)
}

/// Like [`apply_selector`], into a fresh overlay.
pub fn find_matches(forest: &[Node], selector: &str) -> Presentation {
    let mut presentation = Presentation::new();
    apply_selector(forest, selector, &mut presentation);
    presentation
}

#[cfg(test)]
mod tests {
    use super::*;
    use html::parse;
    use html::traverse::find_node_by_id;

    const PAGE: &str = r#"<html><div id="x" class="a"><div class="b">t</div></div><div class="b"><div id="y"/></div></html><div class="a"/>"#;

    fn selected(forest: &[Node], selector: &str) -> Vec<u32> {
        find_matches(forest, selector)
            .selected_ids()
            .map(|id| id.0)
            .collect()
    }

    #[test]
    fn tokens_match_name_id_and_exact_class() {
        let forest = parse(PAGE).expect("valid");
        assert_eq!(selected(&forest, "div"), vec![1, 2, 3, 4, 5]);
        assert_eq!(selected(&forest, "html"), vec![0]);
        assert_eq!(selected(&forest, "#y"), vec![4]);
        assert_eq!(selected(&forest, ".a"), vec![1, 5]);
        assert!(selected(&forest, "span").is_empty());
    }

    #[test]
    fn class_values_are_not_split() {
        let forest = parse(r#"<div class="a b"/>"#).expect("valid");
        assert!(selected(&forest, ".a").is_empty());
        assert!(selected(&forest, ".b").is_empty());
    }

    #[test]
    fn id_selector_opens_every_ancestor() {
        let forest = parse(PAGE).expect("valid");
        let presentation = find_matches(&forest, "#y");
        assert_eq!(presentation.selected_ids().collect::<Vec<_>>(), vec![Id(4)]);
        assert_eq!(presentation.opened_ids().collect::<Vec<_>>(), vec![Id(0), Id(3)]);
        let node = find_node_by_id(&forest, Id(4)).expect("exists");
        assert_eq!(node.attr("id"), Some("y"));
    }

    #[test]
    fn descendant_chain_requires_matching_ancestor() {
        let forest = parse(PAGE).expect("valid");
        assert_eq!(selected(&forest, "html .b"), vec![2, 3]);
        assert_eq!(selected(&forest, "#x .b"), vec![2]);
        assert_eq!(selected(&forest, "html .a"), vec![1]);
        assert_eq!(selected(&forest, ".b #y"), vec![4]);
        assert!(selected(&forest, "#x #y").is_empty());
    }

    #[test]
    fn compound_requires_all_parts_on_one_element() {
        let forest = parse(PAGE).expect("valid");
        assert_eq!(selected(&forest, "div#x.a"), vec![1]);
        assert!(selected(&forest, "div#x.b").is_empty());
        assert!(selected(&forest, "html.a").is_empty());
    }

    #[test]
    fn empty_selector_clears_previous_flags() {
        let forest = parse(PAGE).expect("valid");
        let mut presentation = Presentation::new();
        assert_eq!(apply_selector(&forest, ".b", &mut presentation), 2);
        assert!(!presentation.is_empty());
        assert_eq!(apply_selector(&forest, "", &mut presentation), 0);
        assert!(presentation.is_empty());
        apply_selector(&forest, ".b", &mut presentation);
        assert_eq!(apply_selector(&forest, "> ", &mut presentation), 0);
        assert!(presentation.is_empty());
    }

    #[test]
    fn reselecting_replaces_the_overlay() {
        let forest = parse(PAGE).expect("valid");
        let mut presentation = Presentation::new();
        presentation.toggle_opened(Id(5));
        apply_selector(&forest, "#x", &mut presentation);
        assert_eq!(presentation, find_matches(&forest, "#x"));
        assert!(!presentation.is_opened(Id(5)));
    }

    #[test]
    fn text_nodes_never_match() {
        let forest = parse("<div>div</div>").expect("valid");
        assert_eq!(selected(&forest, "div"), vec![0]);
    }

    #[test]
    fn deep_trees_are_walked_iteratively() {
        let depth = 50_000;
        let input = format!(
            "{}<div id=\"leaf\"/>{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let forest = parse(&input).expect("valid");
        let presentation = find_matches(&forest, "#leaf");
        assert_eq!(presentation.selected_ids().count(), 1);
        assert_eq!(presentation.opened_ids().count(), depth);
    }
}
