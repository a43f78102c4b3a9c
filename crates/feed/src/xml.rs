// ABOUTME: Minimal XML document index built with quick-xml.
// ABOUTME: Owns a lightweight element tree with name/attr/text lookups in document order.

//! A small document index for syndication XML.
//!
//! Feed markup needs raw access a higher-level feed model hides: qualified
//! names like `itunes:subtitle` and `content:encoded`, attribute presence
//! checks on enclosures, link text vs. `href`, and untouched date strings.
//! This index keeps qualified names exactly as written and matches them
//! case-insensitively; text and attribute values are entity-unescaped, CDATA
//! is taken raw.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::FeedError;

/// One element of the parsed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Qualified name exactly as written, e.g. `itunes:subtitle`.
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Direct text and CDATA content, concatenated.
    pub text: String,
}

impl Element {
    /// Case-insensitive qualified-name comparison.
    pub fn name_is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// First attribute with the given name, case-insensitive.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name_is(name))
    }

    /// Trimmed text of the first direct child with the given name,
    /// empty when absent.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name)
            .map(|c| c.text.trim().to_string())
            .unwrap_or_default()
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name_is(name))
    }

    /// Depth-first search for the first descendant with the given name.
    pub fn first_descendant(&self, name: &str) -> Option<&Element> {
        for child in &self.children {
            if child.name_is(name) {
                return Some(child);
            }
            if let Some(found) = child.first_descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// All descendants matching the predicate, in document order.
    pub fn descendants_where<'a>(&'a self, pred: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_descendants(pred, &mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if pred(child) {
                out.push(child);
            }
            child.collect_descendants(pred, out);
        }
    }

    /// All text in this subtree, the raw blob used by regex fallbacks.
    pub fn deep_text(&self) -> String {
        let mut out = String::new();
        self.append_deep_text(&mut out);
        out
    }

    fn append_deep_text(&self, out: &mut String) {
        if !self.text.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.text);
        }
        for child in &self.children {
            child.append_deep_text(out);
        }
    }
}

/// Parses a markup string into a document-level element whose children are
/// the top-level elements.
pub fn parse(xml: &str) -> Result<Element, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = vec![Element::default()];

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(element_from(e)),
            Ok(Event::Empty(ref e)) => {
                let element = element_from(e);
                attach(&mut stack, element);
            }
            Ok(Event::End(_)) => {
                if stack.len() > 1 {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, element);
                    }
                }
            }
            Ok(Event::Text(ref t)) => {
                let raw = t.decode().map(|s| s.into_owned()).unwrap_or_default();
                let text = unescape(&raw).map(|c| c.into_owned()).unwrap_or_else(|_| raw.clone());
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(t)) => {
                let raw = String::from_utf8_lossy(&t.into_inner()).into_owned();
                append_text(&mut stack, &raw);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(FeedError::parse(err)),
        }
    }

    // Unclosed elements in truncated documents still attach to their parent.
    while stack.len() > 1 {
        if let Some(element) = stack.pop() {
            attach(&mut stack, element);
        }
    }

    stack.pop().ok_or_else(|| FeedError::invalid("empty document"))
}

fn element_from(start: &BytesStart<'_>) -> Element {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let attrs = start
        .attributes()
        .flatten()
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let raw = String::from_utf8_lossy(&attr.value).into_owned();
            let value = unescape(&raw).map(|c| c.into_owned()).unwrap_or(raw);
            (key, value)
        })
        .collect();
    Element {
        name,
        attrs,
        ..Element::default()
    }
}

fn attach(stack: &mut Vec<Element>, element: Element) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    }
}

fn append_text(stack: &mut Vec<Element>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        if !current.text.is_empty() {
            current.text.push(' ');
        }
        current.text.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree_with_attrs() {
        let doc = parse(
            r#"<rss version="2.0"><channel><title>My Blog</title>
               <item><enclosure url="https://x/a.mp3" type="audio/mpeg" length="1"/></item>
               </channel></rss>"#,
        )
        .unwrap();

        let channel = doc.first_descendant("channel").unwrap();
        assert_eq!(channel.child_text("title"), "My Blog");

        let item = channel.child("item").unwrap();
        let enclosure = item.child("enclosure").unwrap();
        assert_eq!(enclosure.attr("type"), Some("audio/mpeg"));
        assert_eq!(enclosure.attr("length"), Some("1"));
    }

    #[test]
    fn qualified_names_are_kept_verbatim() {
        let doc = parse(
            r#"<feed><itunes:subtitle>Weekly notes</itunes:subtitle>
               <dc:creator>Jane</dc:creator></feed>"#,
        )
        .unwrap();
        let feed = doc.first_descendant("feed").unwrap();
        assert_eq!(feed.child_text("itunes:subtitle"), "Weekly notes");
        assert_eq!(feed.child_text("dc:creator"), "Jane");
        assert!(feed.child("subtitle").is_none());
    }

    #[test]
    fn text_is_unescaped_and_cdata_raw() {
        let doc = parse(
            r#"<item><description>&lt;p&gt;Tom &amp; Jerry&lt;/p&gt;</description>
               <content><![CDATA[<img src="https://x/pic.jpg">]]></content></item>"#,
        )
        .unwrap();
        let item = doc.first_descendant("item").unwrap();
        assert_eq!(item.child_text("description"), "<p>Tom & Jerry</p>");
        assert_eq!(item.child_text("content"), r#"<img src="https://x/pic.jpg">"#);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        let doc = parse("<channel><pubDate>now</pubDate></channel>").unwrap();
        let channel = doc.first_descendant("channel").unwrap();
        assert_eq!(channel.child_text("pubdate"), "now");
    }

    #[test]
    fn descendants_come_back_in_document_order() {
        let doc = parse(
            "<feed><entry><title>1</title></entry><entry><title>2</title></entry></feed>",
        )
        .unwrap();
        let feed = doc.first_descendant("feed").unwrap();
        let entries = feed.descendants_where(&|e| e.name_is("entry"));
        let titles: Vec<String> = entries.iter().map(|e| e.child_text("title")).collect();
        assert_eq!(titles, vec!["1", "2"]);
    }

    #[test]
    fn malformed_markup_is_a_parse_error() {
        assert!(parse("<rss><channel></chunnel></rss>").is_err());
    }

    #[test]
    fn deep_text_joins_subtree() {
        let doc = parse("<a>one<b>two</b><c>three</c></a>").unwrap();
        let a = doc.first_descendant("a").unwrap();
        assert_eq!(a.deep_text(), "one two three");
    }
}
