//! Parse errors for tokenization/tree-building.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorCode {
    EmptyTag,
    UnknownTag,
    TooManySlashes,
    InvalidSlashPosition,
    InvalidAttribute,
    MalformedAttribute,
    AttributesOnClosingTag,
    UnexpectedTagContent,
    UnmatchedClosingTag,
    UnclosedTag,
}

impl ParseErrorCode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EmptyTag => "empty tag",
            Self::UnknownTag => "unknown tag",
            Self::TooManySlashes => "too many slashes",
            Self::InvalidSlashPosition => "invalid slash position",
            Self::InvalidAttribute => "invalid attribute",
            Self::MalformedAttribute => "malformed attribute",
            Self::AttributesOnClosingTag => "attributes on closing tag",
            Self::UnexpectedTagContent => "unexpected tag content",
            Self::UnmatchedClosingTag => "unmatched closing tag",
            Self::UnclosedTag => "unclosed tag",
        }
    }
}

impl fmt::Display for ParseErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What went wrong, with enough context to build a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDetail {
    EmptyTag {
        tag: String,
    },
    UnknownTag {
        name: String,
        tag: String,
    },
    TooManySlashes {
        tag: String,
    },
    InvalidSlashPosition {
        tag: String,
    },
    InvalidAttribute {
        tag_name: String,
        attribute: String,
    },
    MalformedAttribute {
        tag_name: String,
        attribute: String,
        raw: String,
    },
    AttributesOnClosingTag {
        tag_name: String,
    },
    UnexpectedTagContent {
        tag: String,
        content: String,
    },
    /// `open` is `None` when no tag was open at all.
    UnmatchedClosingTag {
        name: String,
        open: Option<String>,
    },
    /// Open tags left at end of input, outermost first.
    UnclosedTag {
        open: Vec<String>,
    },
}

impl ErrorDetail {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            Self::EmptyTag { .. } => ParseErrorCode::EmptyTag,
            Self::UnknownTag { .. } => ParseErrorCode::UnknownTag,
            Self::TooManySlashes { .. } => ParseErrorCode::TooManySlashes,
            Self::InvalidSlashPosition { .. } => ParseErrorCode::InvalidSlashPosition,
            Self::InvalidAttribute { .. } => ParseErrorCode::InvalidAttribute,
            Self::MalformedAttribute { .. } => ParseErrorCode::MalformedAttribute,
            Self::AttributesOnClosingTag { .. } => ParseErrorCode::AttributesOnClosingTag,
            Self::UnexpectedTagContent { .. } => ParseErrorCode::UnexpectedTagContent,
            Self::UnmatchedClosingTag { .. } => ParseErrorCode::UnmatchedClosingTag,
            Self::UnclosedTag { .. } => ParseErrorCode::UnclosedTag,
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTag { tag } => write!(f, "tag {tag} is empty"),
            Self::UnknownTag { name, tag } => {
                write!(f, "tag <{name}> is not valid")?;
                if tag.as_str() != format!("<{name}>") {
                    write!(f, " (used as {tag})")?;
                }
                Ok(())
            }
            Self::TooManySlashes { tag } => write!(
                f,
                "invalid count of slashes in the tag {tag}; only one slash is allowed"
            ),
            Self::InvalidSlashPosition { tag } => {
                write!(f, "slash position in the tag {tag} is invalid")
            }
            Self::InvalidAttribute {
                tag_name,
                attribute,
            } => write!(f, "attribute \"{attribute}\" is not valid for <{tag_name}> tag"),
            Self::MalformedAttribute {
                tag_name,
                attribute,
                raw,
            } => write!(
                f,
                "incorrect \"{attribute}\" attribute {raw} in <{tag_name}> tag"
            ),
            Self::AttributesOnClosingTag { tag_name } => {
                write!(f, "attributes are not allowed on closing </{tag_name}> tag")
            }
            Self::UnexpectedTagContent { tag, content } => {
                write!(f, "tag content {content} in {tag} is invalid")
            }
            Self::UnmatchedClosingTag { name, open: None } => {
                write!(f, "opened <{name}> tag was not found")
            }
            Self::UnmatchedClosingTag {
                name,
                open: Some(open),
            } => write!(f, "closing </{name}> tag found instead of </{open}>"),
            Self::UnclosedTag { open } => {
                f.write_str("closing tag not found for ")?;
                for (i, name) in open.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "<{name}>")?;
                }
                Ok(())
            }
        }
    }
}

/// A failed tokenize or parse call. No partial tree accompanies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset in the input of the tag that caused the failure.
    pub position: usize,
    pub detail: ErrorDetail,
}

impl ParseError {
    pub fn new(position: usize, detail: ErrorDetail) -> Self {
        Self { position, detail }
    }

    pub fn code(&self) -> ParseErrorCode {
        self.detail.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at byte {})", self.detail, self.position)
    }
}

impl std::error::Error for ParseError {}
