use crate::{Node, TagState};
use std::fmt::{self, Write};
use std::slice;
use std::sync::OnceLock;

/// Deterministic forest serialization and equality rules for golden tests.
/// Not a public stable format; intended for internal test comparisons.
///
/// Equivalence rules:
/// - Node kinds must match.
/// - Element names must match.
/// - Attribute list order is significant; names and values must match.
/// - Text nodes must match exactly.
/// - Tag state must match unless `ignore_state` is set, in which case `<div/>` and
///   `<div></div>` compare equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSnapshotOptions {
    pub ignore_state: bool,
}

#[derive(Debug)]
pub struct DomSnapshot {
    lines: Vec<String>,
}

impl DomSnapshot {
    pub fn new(forest: &[Node], options: DomSnapshotOptions) -> Self {
        let mut lines = Vec::new();
        let mut stack: Vec<(&Node, usize)> = forest.iter().rev().map(|node| (node, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            let mut line = " ".repeat(depth * 2);
            write_node_line(&mut line, node, &options);
            lines.push(line);
            if let Node::Element { children, .. } = node {
                stack.extend(children.iter().rev().map(|child| (child, depth + 1)));
            }
        }
        Self { lines }
    }

    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for DomSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct DomMismatch<'a> {
    path: String,
    detail: String,
    expected: String,
    actual: String,
    expected_nodes: &'a [Node],
    actual_nodes: &'a [Node],
    options: DomSnapshotOptions,
    expected_subtree: OnceLock<String>,
    actual_subtree: OnceLock<String>,
}

impl DomMismatch<'_> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for DomMismatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected_subtree = self
            .expected_subtree
            .get_or_init(|| DomSnapshot::new(self.expected_nodes, self.options).render());
        let actual_subtree = self
            .actual_subtree
            .get_or_init(|| DomSnapshot::new(self.actual_nodes, self.options).render());
        writeln!(f, "tree mismatch at {}: {}", self.path, self.detail)?;
        writeln!(f, "expected: {}", self.expected)?;
        writeln!(f, "actual:   {}", self.actual)?;
        writeln!(f, "expected subtree:\n{expected_subtree}")?;
        writeln!(f, "actual subtree:\n{actual_subtree}")?;
        Ok(())
    }
}

impl std::error::Error for DomMismatch<'_> {}

pub fn assert_forest_eq(expected: &[Node], actual: &[Node], options: DomSnapshotOptions) {
    if let Err(mismatch) = compare_forest(expected, actual, options) {
        panic!("{mismatch}");
    }
}

enum Step<'a> {
    Children(&'a [Node], &'a [Node]),
    Node(&'a Node, &'a Node, String),
    Leave,
}

pub fn compare_forest<'a>(
    expected: &'a [Node],
    actual: &'a [Node],
    options: DomSnapshotOptions,
) -> Result<(), Box<DomMismatch<'a>>> {
    let mut path = vec!["#forest".to_string()];
    let mut stack = vec![Step::Children(expected, actual)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Leave => {
                path.pop();
            }
            Step::Node(expected, actual, label) => {
                path.push(label);
                compare_nodes(expected, actual, &options, &path)?;
                stack.push(Step::Leave);
                stack.push(Step::Children(expected.children(), actual.children()));
            }
            Step::Children(expected, actual) => {
                if expected.len() != actual.len() {
                    return Err(Box::new(mismatch(
                        &path,
                        &format!(
                            "child count (expected {}, actual {})",
                            expected.len(),
                            actual.len()
                        ),
                        expected,
                        actual,
                        &options,
                    )));
                }
                for (idx, (exp, act)) in expected.iter().zip(actual).enumerate().rev() {
                    stack.push(Step::Node(exp, act, format!("{}[{}]", node_label(exp), idx)));
                }
            }
        }
    }
    Ok(())
}

// Compares one node pair, children excluded.
fn compare_nodes<'a>(
    expected: &'a Node,
    actual: &'a Node,
    options: &DomSnapshotOptions,
    path: &[String],
) -> Result<(), Box<DomMismatch<'a>>> {
    let fail = |detail: &str| -> Result<(), Box<DomMismatch<'a>>> {
        Err(Box::new(mismatch(
            path,
            detail,
            slice::from_ref(expected),
            slice::from_ref(actual),
            options,
        )))
    };
    match (expected, actual) {
        (
            Node::Element {
                name: expected_name,
                state: expected_state,
                attributes: expected_attrs,
                ..
            },
            Node::Element {
                name: actual_name,
                state: actual_state,
                attributes: actual_attrs,
                ..
            },
        ) => {
            if expected_name != actual_name {
                return fail("element name");
            }
            if !options.ignore_state && expected_state != actual_state {
                return fail("tag state");
            }
            if expected_attrs.len() != actual_attrs.len() {
                return fail("attribute count");
            }
            for (i, (exp, act)) in expected_attrs.iter().zip(actual_attrs).enumerate() {
                if exp.name != act.name {
                    return fail(&format!("attribute name at index {i}"));
                }
                if exp.value != act.value {
                    return fail(&format!("attribute value at index {i}"));
                }
            }
            Ok(())
        }
        (
            Node::Text {
                text: expected_text,
            },
            Node::Text { text: actual_text },
        ) => {
            if expected_text != actual_text {
                return fail("text");
            }
            Ok(())
        }
        _ => fail("node kind"),
    }
}

fn mismatch<'a>(
    path: &[String],
    detail: &str,
    expected: &'a [Node],
    actual: &'a [Node],
    options: &DomSnapshotOptions,
) -> DomMismatch<'a> {
    let path = format!("/{}", path.join("/"));
    DomMismatch {
        path,
        detail: detail.to_string(),
        expected: truncate_line(format_nodes_line(expected, options), 160),
        actual: truncate_line(format_nodes_line(actual, options), 160),
        expected_nodes: expected,
        actual_nodes: actual,
        options: *options,
        expected_subtree: OnceLock::new(),
        actual_subtree: OnceLock::new(),
    }
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Element { name, .. } => {
            let mut label = name.clone();
            if let Some(id_value) = node.attr("id").filter(|value| !value.is_empty()) {
                label.push('#');
                write_escaped(&mut label, id_value);
            } else if let Some(class_value) = node.attr("class").filter(|value| !value.is_empty()) {
                label.push_str(".class=");
                write_escaped(&mut label, class_value);
            }
            label
        }
        Node::Text { .. } => "#text".to_string(),
    }
}

fn truncate_line(mut line: String, max_len: usize) -> String {
    if line.len() > max_len {
        let mut cut = max_len.saturating_sub(3);
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        line.truncate(cut);
        line.push_str("...");
    }
    line
}

// One line for a single node, or the node lines joined with ` | ` for a child list.
fn format_nodes_line(nodes: &[Node], options: &DomSnapshotOptions) -> String {
    let mut line = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i != 0 {
            line.push_str(" | ");
        }
        write_node_line(&mut line, node, options);
    }
    if nodes.is_empty() {
        line.push_str("(none)");
    }
    line
}

fn write_node_line(out: &mut String, node: &Node, options: &DomSnapshotOptions) {
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
                write_escaped(out, &attr.value);
                out.push('"');
            }
            if !options.ignore_state && *state == TagState::SelfClosed {
                out.push_str(" /");
            }
            out.push('>');
        }
        Node::Text { text } => {
            out.push('"');
            write_escaped(out, text);
            out.push('"');
        }
    }
}

fn write_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ if ch.is_ascii() => out.push(ch),
            _ => {
                let _ = write!(out, "\\u{{{:X}}}", ch as u32);
            }
        }
    }
}
