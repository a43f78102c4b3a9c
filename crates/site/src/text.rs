// ABOUTME: Text cleaning pipeline for extracted markup fragments.
// ABOUTME: Drops script/style blocks, strips tags, and collapses whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap()
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Reduces a markup fragment to plain text.
///
/// Embedded script/style content is removed wholesale (stripping only the
/// tags would leave code in the output), remaining tags are dropped, and
/// whitespace runs collapse to single spaces.
pub fn clean(text: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(text, " ");
    let without_tags = TAG_RE.replace_all(&without_blocks, " ");
    without_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Optional variant: absent input passes through as absent, never an error.
pub fn clean_opt(text: Option<&str>) -> Option<String> {
    text.map(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(clean("<p>Hello</p>"), "Hello");
        assert_eq!(clean("<b>Bold</b> and <i>italic</i>"), "Bold and italic");
    }

    #[test]
    fn removes_script_and_style_bodies() {
        let html = "before<script type=\"text/javascript\">var x = 1;</script>after";
        assert_eq!(clean(html), "before after");
        assert_eq!(clean("<style>.a { color: red; }</style>text"), "text");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(clean("  Multiple   spaces\n\nand lines \t"), "Multiple spaces and lines");
        assert_eq!(clean("<p>Hello</p>\n\n<p>World</p>"), "Hello World");
    }

    #[test]
    fn absent_passes_through() {
        assert_eq!(clean_opt(None), None);
        assert_eq!(clean_opt(Some("<p>x</p>")), Some("x".to_string()));
    }

    #[test]
    fn output_has_no_tags_or_whitespace_runs() {
        let cleaned = clean("<div> a <span>b</span>\n c </div><script>d</script>");
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains("  "));
        assert_eq!(cleaned, "a b c");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean(""), "");
    }
}
