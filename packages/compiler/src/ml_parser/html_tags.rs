//! HTML tag definitions.

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Void elements never take children and need no closing tag. Unknown tags
/// (custom components included) are treated as ordinary containers.
pub fn is_void_element(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    VOID_ELEMENTS.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_elements() {
        assert!(is_void_element("br"));
        assert!(is_void_element("IMG"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("my-widget"));
    }
}
