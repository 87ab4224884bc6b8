//! Tag tokenizer for the restricted markup vocabulary.
//!
//! A tag is the leftmost `<...>` whose interior is non-empty and holds no `<` or `>`.
//! Everything between two tags is handed to the caller as `text_before` on the later
//! token; text after the last tag is never reported.
//!
//! Interior content is the matched text with every `<`, `>`, `/` and `\` removed. Its
//! first word is the tag name, followed by zero or more `name="value"` attributes.
//! "Whitespace" inside a tag is any Unicode whitespace, no-break space included.
//!
//! Checks run in a fixed order and the first failure wins: empty tag, unknown tag,
//! slash placement, attributes on a closing tag, stray content, then each attribute.
use crate::error::{ErrorDetail, ParseError};
use crate::types::{Attribute, TagState, TagToken};
use crate::vocabulary::Vocabulary;
use memchr::{memchr, memchr2};

#[derive(Clone, Debug, Default)]
pub struct TokenizerConfig {
    pub vocabulary: Vocabulary,
}

/// Cursor over a whole input; token offsets are absolute.
pub struct Tokenizer<'a> {
    input: &'a str,
    cursor: usize,
    vocabulary: &'a Vocabulary,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, config: &'a TokenizerConfig) -> Self {
        Self {
            input,
            cursor: 0,
            vocabulary: &config.vocabulary,
        }
    }

    /// Returns `Ok(None)` once no further tag exists. On error the cursor stays on the
    /// offending tag.
    pub fn next_tag(&mut self) -> Result<Option<TagToken<'a>>, ParseError> {
        let base = self.cursor;
        let (token, rest) = next_tag(self.remaining(), self.vocabulary)
            .map_err(|err| ParseError::new(base + err.position, err.detail))?;
        let Some(mut token) = token else {
            self.cursor = self.input.len();
            return Ok(None);
        };
        token.offset += base;
        self.cursor = self.input.len() - rest.len();
        log::trace!(
            target: "html.tokenizer",
            "tag {:?} at {} -> {:?}",
            token.raw,
            token.offset,
            token.state
        );
        Ok(Some(token))
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }

    pub fn position(&self) -> usize {
        self.cursor
    }
}

/// Scans `text` for its first tag.
///
/// Returns the token and the text after it, or `(None, "")` when `text` holds no tag.
/// Error positions are relative to `text`.
pub fn next_tag<'a>(
    text: &'a str,
    vocabulary: &Vocabulary,
) -> Result<(Option<TagToken<'a>>, &'a str), ParseError> {
    let Some((start, end)) = find_tag(text) else {
        return Ok((None, ""));
    };
    let raw = &text[start..end];
    let scanned = scan_tag(raw, vocabulary).map_err(|detail| ParseError::new(start, detail))?;
    let token = TagToken {
        name: scanned.name,
        raw,
        state: scanned.state,
        attributes: scanned.attributes,
        text_before: &text[..start],
        offset: start,
    };
    Ok((Some(token), &text[end..]))
}

/// Tokenizes the whole input, stopping at the first invalid tag.
pub fn tokenize<'a>(
    input: &'a str,
    config: &'a TokenizerConfig,
) -> Result<Vec<TagToken<'a>>, ParseError> {
    let mut tokenizer = Tokenizer::new(input, config);
    let mut out = Vec::new();
    while let Some(token) = tokenizer.next_tag()? {
        out.push(token);
    }
    Ok(out)
}

/// Classifies a matched tag by its slashes. Error positions are relative to `raw`.
pub fn classify_state(raw: &str) -> Result<TagState, ParseError> {
    tag_state(raw).map_err(|detail| ParseError::new(0, detail))
}

// Byte range of the leftmost `<[^<>]+>`. `<` and `>` are ASCII, so both ends are char
// boundaries.
fn find_tag(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while let Some(rel) = memchr(b'<', &bytes[i..]) {
        let open = i + rel;
        let interior = open + 1;
        let rel = memchr2(b'<', b'>', &bytes[interior..])?;
        let stop = interior + rel;
        if bytes[stop] == b'>' && stop > interior {
            return Some((open, stop + 1));
        }
        i = interior;
    }
    None
}

struct ScannedTag {
    name: String,
    state: TagState,
    attributes: Vec<Attribute>,
}

fn scan_tag(raw: &str, vocabulary: &Vocabulary) -> Result<ScannedTag, ErrorDetail> {
    let content: String = raw
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '/' | '\\'))
        .collect();
    let Some((name_start, name_end)) = first_word(&content) else {
        return Err(ErrorDetail::EmptyTag {
            tag: raw.to_string(),
        });
    };
    let name = &content[name_start..name_end];
    if !vocabulary.is_known(name) {
        return Err(ErrorDetail::UnknownTag {
            name: name.to_string(),
            tag: raw.to_string(),
        });
    }
    let state = tag_state(raw)?;

    let rest = &content[name_end..];
    let spans = attribute_spans(rest);
    if !spans.is_empty() && state == TagState::Closed {
        return Err(ErrorDetail::AttributesOnClosingTag {
            tag_name: name.to_string(),
        });
    }
    let leftover = leftover_content(rest, &spans);
    if !leftover.is_empty() {
        return Err(ErrorDetail::UnexpectedTagContent {
            tag: raw.to_string(),
            content: leftover,
        });
    }
    let attributes = spans
        .iter()
        .map(|&(start, end)| parse_attribute(name, &rest[start..end], vocabulary))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScannedTag {
        name: name.to_string(),
        state,
        attributes,
    })
}

fn tag_state(raw: &str) -> Result<TagState, ErrorDetail> {
    let slashes = raw.bytes().filter(|&b| b == b'/').count();
    match slashes {
        0 => Ok(TagState::Opened),
        1 if raw.contains("</") => Ok(TagState::Closed),
        1 if raw.contains("/>") => Ok(TagState::SelfClosed),
        1 => Err(ErrorDetail::InvalidSlashPosition {
            tag: raw.to_string(),
        }),
        _ => Err(ErrorDetail::TooManySlashes {
            tag: raw.to_string(),
        }),
    }
}

fn is_tag_space(c: char) -> bool {
    c.is_whitespace()
}

fn first_word(content: &str) -> Option<(usize, usize)> {
    let start = content.find(|c: char| !is_tag_space(c))?;
    let end = content[start..]
        .find(is_tag_space)
        .map_or(content.len(), |rel| start + rel);
    Some((start, end))
}

/// Non-overlapping `[^\s]+="[^"]*"` matches, leftmost first, greedy on the name part.
fn attribute_spans(content: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;
    while let Some(rel) = content[i..].find(|c: char| !is_tag_space(c)) {
        i += rel;
        let run_end = content[i..]
            .find(is_tag_space)
            .map_or(content.len(), |rel| i + rel);
        match attribute_end(content.as_bytes(), i, run_end) {
            Some(end) => {
                spans.push((i, end));
                i = end;
            }
            None => i = run_end,
        }
    }
    spans
}

// The name part is greedy, so the last `="` of the run wins as long as a closing quote
// follows it somewhere (the value may span whitespace).
fn attribute_end(bytes: &[u8], start: usize, run_end: usize) -> Option<usize> {
    let mut p = run_end.checked_sub(2)?;
    while p > start {
        if bytes[p] == b'=' && bytes[p + 1] == b'"' {
            if let Some(rel) = memchr(b'"', &bytes[p + 2..]) {
                return Some(p + 2 + rel + 1);
            }
        }
        p -= 1;
    }
    None
}

fn leftover_content(content: &str, spans: &[(usize, usize)]) -> String {
    let mut out = String::new();
    let mut last = 0;
    let tail = (content.len(), content.len());
    for &(start, end) in spans.iter().chain(std::iter::once(&tail)) {
        out.extend(content[last..start].chars().filter(|&c| !is_tag_space(c)));
        last = end;
    }
    out
}

fn parse_attribute(
    tag_name: &str,
    candidate: &str,
    vocabulary: &Vocabulary,
) -> Result<Attribute, ErrorDetail> {
    let mut parts = candidate.split("=\"");
    let name = parts.next().unwrap_or_default();
    if !vocabulary.allows_attribute(tag_name, name) {
        return Err(ErrorDetail::InvalidAttribute {
            tag_name: tag_name.to_string(),
            attribute: name.to_string(),
        });
    }
    match parts.next().and_then(|value| value.strip_suffix('"')) {
        Some(value) => Ok(Attribute::new(name, value)),
        None => Err(ErrorDetail::MalformedAttribute {
            tag_name: tag_name.to_string(),
            attribute: name.to_string(),
            raw: candidate.to_string(),
        }),
    }
}
