//! CSS Selectors
//!
//! Supported grammar: comma-separated lists of compound selectors joined by
//! the descendant combinator. A compound is an optional tag (or `*`) followed
//! by any number of `#id`, `.class`, `[attr]` and `[attr=value]` parts.
//! That covers `.carousel-wrapper`, `#modal`, `.arrow.left` and
//! `.item[data-id="1"]`.

use crate::{DomError, DomTree, ElementData, NodeId};

/// Attribute selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrSelector {
    pub name: String,
    /// `None` matches on presence only
    pub value: Option<String>,
}

/// Compound selector (no combinators)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrSelector>,
}

impl CompoundSelector {
    /// Check an element against every part
    pub fn matches(&self, elem: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !elem.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if elem.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let class_attr = elem.get_attr("class").unwrap_or("");
            let has = |c: &String| class_attr.split_whitespace().any(|t| t == c);
            if !self.classes.iter().all(has) {
                return false;
            }
        }
        self.attrs.iter().all(|a| match (&a.value, elem.get_attr(&a.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(want), Some(got)) => want == got,
        })
    }
}

/// Parsed selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Each alternative is a descendant chain, outermost first
    alternatives: Vec<Vec<CompoundSelector>>,
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let mut alternatives = Vec::new();
        for group in input.split(',') {
            let chain = group
                .split_whitespace()
                .map(|part| parse_compound(part).map_err(|message| DomError::InvalidSelector {
                    selector: input.to_string(),
                    message,
                }))
                .collect::<Result<Vec<_>, _>>()?;
            if chain.is_empty() {
                return Err(DomError::InvalidSelector {
                    selector: input.to_string(),
                    message: "empty selector".to_string(),
                });
            }
            alternatives.push(chain);
        }
        Ok(Self { alternatives })
    }

    /// Check whether `node` matches any alternative
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.alternatives.iter().any(|chain| matches_chain(chain, tree, node))
    }
}

fn element(tree: &DomTree, node: NodeId) -> Option<&ElementData> {
    tree.get(node).and_then(|n| n.as_element())
}

fn matches_chain(chain: &[CompoundSelector], tree: &DomTree, node: NodeId) -> bool {
    let Some((last, rest)) = chain.split_last() else { return false };
    if !element(tree, node).is_some_and(|e| last.matches(e)) {
        return false;
    }

    // Descendant-only chains can be matched greedily against ancestors
    let mut remaining = rest.iter().rev().peekable();
    for ancestor in tree.ancestors(node) {
        let Some(compound) = remaining.peek() else { break };
        if element(tree, ancestor).is_some_and(|e| compound.matches(e)) {
            remaining.next();
        }
    }
    remaining.peek().is_none()
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn take_ident(chars: &[char], pos: &mut usize) -> Result<String, String> {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    if start == *pos {
        return Err(format!("expected identifier at offset {start}"));
    }
    Ok(chars[start..*pos].iter().collect())
}

fn parse_compound(part: &str) -> Result<CompoundSelector, String> {
    let chars: Vec<char> = part.chars().collect();
    let mut pos = 0;
    let mut compound = CompoundSelector::default();

    if chars.first() == Some(&'*') {
        pos = 1;
    } else if chars.first().is_some_and(|&c| is_ident_char(c)) {
        compound.tag = Some(take_ident(&chars, &mut pos)?.to_ascii_lowercase());
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                compound.id = Some(take_ident(&chars, &mut pos)?);
            }
            '.' => {
                pos += 1;
                compound.classes.push(take_ident(&chars, &mut pos)?);
            }
            '[' => {
                pos += 1;
                compound.attrs.push(parse_attr(&chars, &mut pos)?);
            }
            c => return Err(format!("unexpected {c:?} at offset {pos}")),
        }
    }
    Ok(compound)
}

fn parse_attr(chars: &[char], pos: &mut usize) -> Result<AttrSelector, String> {
    let name = take_ident(chars, pos)?;
    match chars.get(*pos) {
        Some(']') => {
            *pos += 1;
            return Ok(AttrSelector { name, value: None });
        }
        Some('=') => *pos += 1,
        _ => return Err(format!("unterminated attribute selector [{name}")),
    }

    let value = match chars.get(*pos) {
        Some(&quote @ ('"' | '\'')) => {
            *pos += 1;
            let start = *pos;
            while *pos < chars.len() && chars[*pos] != quote {
                *pos += 1;
            }
            if *pos == chars.len() {
                return Err("unterminated string".to_string());
            }
            let value: String = chars[start..*pos].iter().collect();
            *pos += 1;
            value
        }
        _ => take_ident(chars, pos)?,
    };

    if chars.get(*pos) != Some(&']') {
        return Err(format!("expected ']' after [{name}={value}"));
    }
    *pos += 1;
    Ok(AttrSelector { name, value: Some(value) })
}
