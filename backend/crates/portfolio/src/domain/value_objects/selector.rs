//! Selector Value Object
//!
//! The subset of CSS selectors the page wiring needs:
//! - type selectors (`a`, `section`) and the universal selector `*`
//! - `.class` and `#id`
//! - attribute selectors `[attr]`, `[attr=v]`, `[attr^=v]`, `[attr$=v]`,
//!   `[attr*=v]` with quoted or bare values
//! - the descendant combinator (whitespace)
//! - selector lists separated by `,`
//!
//! ## Examples
//! ```rust
//! use portfolio::domain::value_objects::selector::Selector;
//!
//! let selector = Selector::parse(r##"a[href^="#"]"##).unwrap();
//! assert_eq!(selector.as_str(), r##"a[href^="#"]"##);
//!
//! assert!(Selector::parse("#").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use kernel::id::NodeId;

use crate::domain::document::Document;

/// Selector parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector")]
    Empty,

    #[error("Unexpected character '{ch}' at offset {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("Expected identifier at offset {pos}")]
    ExpectedIdent { pos: usize },

    #[error("Unterminated attribute selector starting at offset {pos}")]
    UnterminatedAttribute { pos: usize },
}

/// Parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Complex>,
}

/// Compounds joined by descendant combinators, outermost first
#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeMatcher>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttributeMatcher {
    name: String,
    op: AttributeOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeOp {
    Exists,
    Equals(String),
    Prefix(String),
    Suffix(String),
    Contains(String),
}

impl AttributeOp {
    fn test(&self, value: &str) -> bool {
        match self {
            AttributeOp::Exists => true,
            AttributeOp::Equals(v) => value == v,
            // Empty operands never match for the substring operators.
            AttributeOp::Prefix(v) => !v.is_empty() && value.starts_with(v.as_str()),
            AttributeOp::Suffix(v) => !v.is_empty() && value.ends_with(v.as_str()),
            AttributeOp::Contains(v) => !v.is_empty() && value.contains(v.as_str()),
        }
    }
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let alternatives = Parser::new(input).parse_list()?;
        Ok(Self {
            source: input.trim().to_string(),
            alternatives,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `node` matches any alternative of this list
    pub fn matches<D: Document + ?Sized>(&self, doc: &D, node: NodeId) -> bool {
        self.alternatives.iter().any(|c| c.matches(doc, node))
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Complex {
    fn matches<D: Document + ?Sized>(&self, doc: &D, node: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(doc, node) {
            return false;
        }

        // Descendant-only chains: nearest matching ancestor is always a
        // valid choice, so a single greedy walk suffices.
        let mut cursor = doc.parent(node);
        for compound in ancestors.iter().rev() {
            loop {
                match cursor {
                    None => return false,
                    Some(candidate) => {
                        cursor = doc.parent(candidate);
                        if compound.matches(doc, candidate) {
                            break;
                        }
                    }
                }
            }
        }
        true
    }
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.ids.is_empty()
            && self.classes.is_empty()
            && self.attributes.is_empty()
    }

    fn matches<D: Document + ?Sized>(&self, doc: &D, node: NodeId) -> bool {
        if let Some(tag) = &self.tag {
            if tag != "*" && !doc.tag_name(node).eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if !self
            .ids
            .iter()
            .all(|id| doc.attribute(node, "id") == Some(id.as_str()))
        {
            return false;
        }
        if !self.classes.iter().all(|class| doc.has_class(node, class)) {
            return false;
        }
        self.attributes.iter().all(|matcher| {
            doc.attribute(node, &matcher.name)
                .is_some_and(|value| matcher.op.test(value))
        })
    }
}

// ============================================================================
// Parser
// ============================================================================

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn unexpected(&self) -> SelectorError {
        match self.peek() {
            Some(ch) => SelectorError::UnexpectedChar { ch, pos: self.pos },
            None => SelectorError::ExpectedIdent { pos: self.pos },
        }
    }

    fn parse_list(&mut self) -> Result<Vec<Complex>, SelectorError> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(SelectorError::Empty);
        }

        let mut alternatives = vec![self.parse_complex()?];
        while self.peek() == Some(',') {
            self.bump();
            alternatives.push(self.parse_complex()?);
        }
        match self.peek() {
            None => Ok(alternatives),
            Some(_) => Err(self.unexpected()),
        }
    }

    fn parse_complex(&mut self) -> Result<Complex, SelectorError> {
        self.skip_whitespace();
        let mut compounds = vec![self.parse_compound()?];
        loop {
            let had_space = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some(_) if had_space => compounds.push(self.parse_compound()?),
                Some(_) => return Err(self.unexpected()),
            }
        }
        Ok(Complex { compounds })
    }

    fn parse_compound(&mut self) -> Result<Compound, SelectorError> {
        let mut compound = Compound::default();

        if self.peek() == Some('*') {
            self.bump();
            compound.tag = Some("*".to_string());
        } else if self.peek().is_some_and(is_ident_start) {
            compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
        }

        loop {
            match self.peek() {
                Some('.') => {
                    self.bump();
                    compound.classes.push(self.parse_ident()?);
                }
                Some('#') => {
                    self.bump();
                    compound.ids.push(self.parse_ident()?);
                }
                Some('[') => compound.attributes.push(self.parse_attribute()?),
                _ => break,
            }
        }

        if compound.is_empty() {
            return Err(self.unexpected());
        }
        Ok(compound)
    }

    fn parse_ident(&mut self) -> Result<String, SelectorError> {
        let start = self.pos;
        if !self.peek().is_some_and(is_ident_start) {
            return Err(SelectorError::ExpectedIdent { pos: start });
        }
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn parse_attribute(&mut self) -> Result<AttributeMatcher, SelectorError> {
        let open = self.pos;
        let unterminated = SelectorError::UnterminatedAttribute { pos: open };
        self.bump();
        self.skip_whitespace();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let op: fn(String) -> AttributeOp = match self.bump() {
            Some(']') => {
                return Ok(AttributeMatcher {
                    name,
                    op: AttributeOp::Exists,
                });
            }
            Some('=') => AttributeOp::Equals,
            Some(prefix @ ('^' | '$' | '*')) => {
                match self.bump() {
                    Some('=') => {}
                    Some(ch) => {
                        return Err(SelectorError::UnexpectedChar {
                            ch,
                            pos: self.pos - 1,
                        });
                    }
                    None => return Err(unterminated),
                }
                match prefix {
                    '^' => AttributeOp::Prefix,
                    '$' => AttributeOp::Suffix,
                    _ => AttributeOp::Contains,
                }
            }
            Some(ch) => {
                return Err(SelectorError::UnexpectedChar {
                    ch,
                    pos: self.pos - 1,
                });
            }
            None => return Err(unterminated),
        };

        self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let start = self.pos;
                while self.peek().is_some_and(|ch| ch != quote) {
                    self.pos += 1;
                }
                if self.peek().is_none() {
                    return Err(unterminated);
                }
                let value: String = self.chars[start..self.pos].iter().collect();
                self.bump();
                value
            }
            Some(_) => self.parse_ident()?,
            None => return Err(unterminated),
        };

        self.skip_whitespace();
        match self.bump() {
            Some(']') => Ok(AttributeMatcher {
                name,
                op: op(value),
            }),
            Some(ch) => Err(SelectorError::UnexpectedChar {
                ch,
                pos: self.pos - 1,
            }),
            None => Err(unterminated),
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '-' || !ch.is_ascii()
}

fn is_ident_char(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}
