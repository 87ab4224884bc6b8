//! Markup output for forests, and the tag text a viewer shows for each element.

use crate::{Node, TagState};

/// The opening tag as a viewer displays it: `<div class="a" id="b">`, or `<div />` for a
/// self-closed element. Text nodes render as their text.
pub fn tag_text(node: &Node) -> String {
    let mut out = String::new();
    push_tag_text(&mut out, node);
    out
}

fn push_tag_text(out: &mut String, node: &Node) {
    match node {
        Node::Element {
            name,
            state,
            attributes,
            ..
        } => {
            out.push('<');
            out.push_str(name);
            for attr in attributes {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&attr.value);
                out.push('"');
            }
            if *state == TagState::SelfClosed {
                out.push_str(" /");
            }
            out.push('>');
        }
        Node::Text { text } => out.push_str(text),
    }
}

/// Writes the forest back as markup that parses to an equal forest.
///
/// Attribute values never hold `"` and text never holds a complete tag, so nothing needs
/// escaping.
pub fn to_markup(forest: &[Node]) -> String {
    enum Step<'a> {
        Enter(&'a Node),
        Close(&'a str),
    }

    let mut out = String::new();
    let mut stack: Vec<Step<'_>> = forest.iter().rev().map(Step::Enter).collect();
    while let Some(step) = stack.pop() {
        match step {
            Step::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Step::Enter(node) => {
                push_tag_text(&mut out, node);
                if let Node::Element {
                    name,
                    state: TagState::Closed | TagState::Opened,
                    children,
                    ..
                } = node
                {
                    stack.push(Step::Close(name));
                    stack.extend(children.iter().rev().map(Step::Enter));
                }
            }
        }
    }
    out
}
