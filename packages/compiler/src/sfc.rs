//! Single-file component section splitting.
//!
//! Decomposes a `.vue` source unit into its script, template, and style
//! sections. The template block is kept with its enclosing tags so the
//! markup parser sees the `<template>` container the compiler treats as
//! transparent.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());
static STYLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<style[^>]*>(.*?)</style>").unwrap());
// Greedy body so nested <template> elements stay inside the outer block.
static TEMPLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<template[^>]*>.*</template>").unwrap());

/// The three sections of a component source unit. All optional; a missing
/// section degrades to empty output downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSfc {
    pub script: Option<String>,
    pub template: Option<String>,
    pub style: Option<String>,
}

/// Split a component source into its sections.
pub fn parse_sfc(source: &str) -> ParsedSfc {
    // Script and style blocks are cut out first so a <template> appearing
    // inside either cannot confuse the template match.
    let without_blocks = SCRIPT_RE.replace_all(source, "");
    let without_blocks = STYLE_RE.replace_all(&without_blocks, "");

    let script = SCRIPT_RE
        .captures(source)
        .map(|caps| caps.get(1).unwrap().as_str().to_string());

    let style = STYLE_RE
        .captures(source)
        .map(|caps| caps.get(1).unwrap().as_str().to_string());

    let template = TEMPLATE_RE
        .find(&without_blocks)
        .map(|m| m.as_str().to_string());

    ParsedSfc {
        script,
        template,
        style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_all_sections() {
        let source = r#"
<template>
  <div>hi</div>
</template>

<script>
export default { data() { return {}; } };
</script>

<style>
.a { color: red; }
</style>
"#;
        let parsed = parse_sfc(source);
        assert!(parsed.script.unwrap().contains("export default"));
        assert!(parsed.style.unwrap().contains("color: red"));
        let template = parsed.template.unwrap();
        assert!(template.starts_with("<template>"));
        assert!(template.ends_with("</template>"));
    }

    #[test]
    fn test_missing_sections_are_none() {
        let parsed = parse_sfc("<template><div /></template>");
        assert!(parsed.script.is_none());
        assert!(parsed.style.is_none());
        assert!(parsed.template.is_some());
    }

    #[test]
    fn test_nested_template_stays_inside() {
        let source = "<template><div><template>x</template></div></template>";
        let parsed = parse_sfc(source);
        assert_eq!(parsed.template.unwrap(), source);
    }
}
