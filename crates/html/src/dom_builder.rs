use crate::error::{ErrorDetail, ParseError};
use crate::tokenizer::{Tokenizer, TokenizerConfig};
use crate::types::{Attribute, Forest, Node, TagState, TagToken};

#[derive(Clone, Debug, Default)]
pub struct TreeBuilderConfig {
    pub tokenizer: TokenizerConfig,
    /// Keep text runs that are entirely whitespace. Off by default: such runs are
    /// dropped and only text with visible content reaches the tree.
    pub keep_whitespace_text: bool,
}

pub type TreeBuilderResult<T> = Result<T, ParseError>;

/// Parses `input` with the default `html`/`div` vocabulary.
pub fn parse(input: &str) -> TreeBuilderResult<Forest> {
    parse_with(input, &TreeBuilderConfig::default())
}

/// Parses `input` into its top-level elements. Fails on the first invalid tag or on
/// unbalanced nesting; no partial forest is returned.
pub fn parse_with(input: &str, config: &TreeBuilderConfig) -> TreeBuilderResult<Forest> {
    let mut tokenizer = Tokenizer::new(input, &config.tokenizer);
    let mut builder = TreeBuilder::new(config);
    while let Some(token) = tokenizer.next_tag()? {
        builder.push_tag(token)?;
    }
    builder.finish()
}

#[derive(Debug)]
struct OpenElement {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
    offset: usize,
}

impl OpenElement {
    fn into_node(self) -> Node {
        Node::Element {
            name: self.name,
            state: TagState::Closed,
            attributes: self.attributes,
            children: self.children,
        }
    }
}

/// Shift-reduce builder fed one tag at a time.
///
/// Elements stay on the open stack, collecting children, until their closing tag pops
/// them; a popped or self-closed element goes to the new stack top, or to the forest
/// when the stack is empty.
#[derive(Debug)]
pub struct TreeBuilder<'c> {
    config: &'c TreeBuilderConfig,
    open_elements: Vec<OpenElement>,
    roots: Forest,
}

impl<'c> TreeBuilder<'c> {
    pub fn new(config: &'c TreeBuilderConfig) -> Self {
        Self {
            config,
            open_elements: Vec::new(),
            roots: Vec::new(),
        }
    }

    pub fn push_tag(&mut self, token: TagToken<'_>) -> TreeBuilderResult<()> {
        self.push_text(token.text_before);
        match token.state {
            TagState::Opened => {
                self.open_elements.push(OpenElement {
                    name: token.name,
                    attributes: token.attributes,
                    children: Vec::new(),
                    offset: token.offset,
                });
            }
            TagState::SelfClosed => {
                self.attach(Node::Element {
                    name: token.name,
                    state: TagState::SelfClosed,
                    attributes: token.attributes,
                    children: Vec::new(),
                });
            }
            TagState::Closed => {
                let top = self.open_elements.last().map(|top| top.name.as_str());
                if top != Some(token.name.as_str()) {
                    let open = top.map(str::to_string);
                    log::debug!(
                        target: "html.tree_builder",
                        "unmatched </{}> at {} (open: {:?})",
                        token.name,
                        token.offset,
                        open
                    );
                    return Err(ParseError::new(
                        token.offset,
                        ErrorDetail::UnmatchedClosingTag {
                            name: token.name,
                            open,
                        },
                    ));
                }
                if let Some(element) = self.open_elements.pop() {
                    self.attach(element.into_node());
                }
            }
        }
        Ok(())
    }

    /// Completes the parse. Every tag must have been closed.
    pub fn finish(self) -> TreeBuilderResult<Forest> {
        if let Some(innermost) = self.open_elements.last() {
            let position = innermost.offset;
            let open: Vec<String> = self
                .open_elements
                .into_iter()
                .map(|element| element.name)
                .collect();
            log::debug!(target: "html.tree_builder", "unclosed tags at end of input: {open:?}");
            return Err(ParseError::new(position, ErrorDetail::UnclosedTag { open }));
        }
        log::trace!(target: "html.tree_builder", "built {} top-level nodes", self.roots.len());
        Ok(self.roots)
    }

    pub fn depth(&self) -> usize {
        self.open_elements.len()
    }

    // Text with no open element to hold it is dropped.
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.config.keep_whitespace_text && text.chars().all(char::is_whitespace) {
            return;
        }
        if let Some(parent) = self.open_elements.last_mut() {
            parent.children.push(Node::text(text));
        }
    }

    fn attach(&mut self, node: Node) {
        match self.open_elements.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }
}
