/// Pre-order index of an element within a [`Forest`].
///
/// Ids are derived from tree position rather than stored on nodes, so parsing the same
/// input twice yields equal forests and equal ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(pub u32);

/// How a tag was written: `<div>`, `</div>` or `<div/>`.
///
/// `Opened` only exists on the tree builder's stack; finished trees hold `Closed` and
/// `SelfClosed` elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagState {
    Opened,
    Closed,
    SelfClosed,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One recognized `<...>` construct, borrowed from the input it was scanned from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagToken<'a> {
    /// Interior name with brackets, slashes and backslashes stripped.
    pub name: String,
    /// The matched text, brackets included.
    pub raw: &'a str,
    pub state: TagState,
    pub attributes: Vec<Attribute>,
    /// Literal text between the previous tag (or input start) and this one.
    pub text_before: &'a str,
    /// Byte offset of `raw` in the tokenized input.
    pub offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element {
        name: String,
        state: TagState,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
}

// Children are torn down from an explicit stack so nesting depth never reaches the
// call stack.
impl Drop for Node {
    fn drop(&mut self) {
        let Node::Element { children, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

/// Top-level elements of a successful parse, in document order.
pub type Forest = Vec<Node>;

impl Node {
    pub fn element(
        name: impl Into<String>,
        state: TagState,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            name: name.into(),
            state,
            attributes,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            Node::Text { .. } => None,
        }
    }

    pub fn state(&self) -> Option<TagState> {
        match self {
            Node::Element { state, .. } => Some(*state),
            Node::Text { .. } => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            Node::Element { attributes, .. } => attributes,
            Node::Text { .. } => &[],
        }
    }

    /// First attribute named `key`. Duplicates are kept by the parser; lookups see the
    /// earliest one.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|attr| attr.name == key)
            .map(|attr| attr.value.as_str())
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text { text } => Some(text),
            Node::Element { .. } => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }
}
