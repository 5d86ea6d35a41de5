//! DOMStringMap (dataset) key mapping
//!
//! `dataset.itemId` lives in the `data-item-id` attribute. The map itself is
//! not stored; `Document::dataset_*` translate keys and go through the
//! attribute bag.

/// Convert a camelCase dataset key to its `data-*` attribute name
pub fn to_attribute_name(key: &str) -> String {
    format!("data-{}", to_kebab_case(key))
}

/// Convert kebab-case to camelCase
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '-' && !capitalize_next {
            capitalize_next = true;
        } else if capitalize_next && c.is_ascii_lowercase() {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            if capitalize_next {
                result.push('-');
                capitalize_next = false;
            }
            result.push(c);
        }
    }
    if capitalize_next {
        result.push('-');
    }

    result
}

/// Convert camelCase to kebab-case
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}
