use crate::serialize::tag_text;
use crate::{Id, Node};

const INDENT_STEP: &str = "  ";
const PREVIEW_CHARS: usize = 40;

/// Indented one-line-per-node view of a forest, at most `cap` lines.
pub fn outline_forest(forest: &[Node], cap: usize) -> Vec<String> {
    outline_forest_annotated(forest, cap, |_| None)
}

/// Like [`outline_forest`], appending `annotate(id)` (when it returns something) to each
/// element line.
pub fn outline_forest_annotated<F>(forest: &[Node], cap: usize, annotate: F) -> Vec<String>
where
    F: Fn(Id) -> Option<String>,
{
    let mut out = Vec::new();
    let mut next_id = 0u32;
    let mut stack: Vec<(&Node, usize)> = forest.iter().rev().map(|node| (node, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        if out.len() >= cap {
            break;
        }
        let indent = INDENT_STEP.repeat(depth);
        match node {
            Node::Element { children, .. } => {
                let id = Id(next_id);
                next_id += 1;
                let mut line = String::with_capacity(indent.len() + 64);
                line.push_str(&indent);
                line.push_str(&tag_text(node));
                if let Some(note) = annotate(id) {
                    line.push_str("  ");
                    line.push_str(&note);
                }
                out.push(line);
                stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
            }
            Node::Text { text } => {
                if let Some(trimmed) = trimmed_nonempty_slice(text) {
                    let mut line = String::with_capacity(indent.len() + 64);
                    line.push_str(&indent);
                    line.push('"');
                    push_preview_replace_newlines(&mut line, trimmed, PREVIEW_CHARS);
                    line.push('"');
                    out.push(line);
                }
            }
        }
    }
    out
}

fn trimmed_nonempty_slice(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn push_preview_replace_newlines(out: &mut String, s: &str, max_chars: usize) {
    let mut truncated = false;
    for (i, ch) in s.chars().enumerate() {
        if i == max_chars {
            truncated = true;
            break;
        }
        out.push(if ch == '\n' { ' ' } else { ch });
    }
    if truncated {
        out.push('…');
    }
}
