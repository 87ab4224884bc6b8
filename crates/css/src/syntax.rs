use std::fmt;

// One selector token: "div", "#main", ".note"
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Type(String),  // element/tag selector
    Id(String),    // #id selector
    Class(String), // .class selector
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(name) => f.write_str(name),
            Selector::Id(id) => write!(f, "#{id}"),
            Selector::Class(class) => write!(f, ".{class}"),
        }
    }
}

// Tokens written back to back; all of them must hold for the same element.
// input: "div.a#b"
// output: Compound { parts: [Type("div"), Class("a"), Id("b")] }
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    pub parts: Vec<Selector>,
}

// Compounds separated by whitespace, outermost first. The last compound picks the
// matched elements; each earlier one must match some ancestor of the one after it.
// input: "html .a"
// output: SelectorChain { compounds: [[Type("html")], [Class("a")]] }
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorChain {
    pub compounds: Vec<Compound>,
}

impl SelectorChain {
    // No tokens at all: selecting with it clears every flag.
    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    pub fn subject(&self) -> Option<&Compound> {
        self.compounds.last()
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            for part in &compound.parts {
                write!(f, "{part}")?;
            }
        }
        Ok(())
    }
}

fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

// Splits the trailing `[#.]?[A-Za-z0-9_-]+` off `input` (trailing whitespace ignored).
// input: "div .a"
// output: Some(("div ", ".a"))
pub fn last_token(input: &str) -> Option<(&str, &str)> {
    let text = input.trim_end();
    let bytes = text.as_bytes();
    let name_len = bytes.iter().rev().take_while(|&&b| is_name_char(b)).count();
    if name_len == 0 {
        return None;
    }
    let mut start = bytes.len() - name_len;
    if start > 0 && matches!(bytes[start - 1], b'#' | b'.') {
        start -= 1;
    }
    Some((&text[..start], &text[start..]))
}

fn token_selector(token: &str) -> Selector {
    if let Some(id) = token.strip_prefix('#') {
        return Selector::Id(id.to_string());
    }
    if let Some(class) = token.strip_prefix('.') {
        return Selector::Class(class.to_string());
    }
    Selector::Type(token.to_string())
}

// Tokens are taken from the right until none can be extracted; whatever is left
// in front of that point is ignored.
// input: "html div.a"
// output: SelectorChain { compounds: [[Type("html")], [Type("div"), Class("a")]] }
pub fn parse_selector(input: &str) -> SelectorChain {
    let mut compounds = Vec::new();
    let mut current = Vec::new();
    let mut rest = input;
    while let Some((before, token)) = last_token(rest) {
        current.push(token_selector(token));
        let descendant_boundary = before.is_empty() || before.ends_with(char::is_whitespace);
        if descendant_boundary {
            current.reverse();
            compounds.push(Compound {
                parts: std::mem::take(&mut current),
            });
        }
        rest = before;
    }
    if !current.is_empty() {
        current.reverse();
        compounds.push(Compound { parts: current });
    }
    compounds.reverse();
    SelectorChain { compounds }
}
