//! DOMTokenList (classList)
//!
//! The list is a parsed view of the `class` attribute; `Document` writes it
//! back after every mutation so the attribute stays the source of truth.

/// Space-separated token set, order preserved, duplicates dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMTokenList {
    tokens: Vec<String>,
}

impl DOMTokenList {
    /// Parse from a `class` attribute value
    pub fn parse(value: &str) -> Self {
        let mut list = Self::default();
        for token in value.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token; returns false if it was already present or empty
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; returns false if it was absent
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        before != self.tokens.len()
    }

    /// Toggle token, returns new state
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let present = match force {
            Some(state) => state,
            None => !self.contains(token),
        };
        if present {
            self.add(token);
        } else {
            self.remove(token);
        }
        present
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl std::fmt::Display for DOMTokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dedupes() {
        let list = DOMTokenList::parse("modal  hidden modal");
        assert_eq!(list.len(), 2);
        assert_eq!(list.value(), "modal hidden");
    }

    #[test]
    fn test_add_remove() {
        let mut list = DOMTokenList::default();
        assert!(list.add("arrow"));
        assert!(!list.add("arrow"));
        assert!(!list.add(""));

        assert!(list.remove("arrow"));
        assert!(!list.remove("arrow"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut list = DOMTokenList::parse("modal");

        assert!(list.toggle("hidden", None));
        assert!(list.contains("hidden"));
        assert!(!list.toggle("hidden", None));
        assert!(list.toggle("hidden", Some(true)));
        assert!(list.toggle("hidden", Some(true)));
        assert_eq!(list.value(), "modal hidden");
        assert!(!list.toggle("hidden", Some(false)));
        assert_eq!(list.to_string(), "modal");
    }
}
