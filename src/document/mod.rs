//! Document Surface
//!
//! The page-level nodes the locale layer writes to: the root language
//! attribute, the title and named meta tags.

mod effects;

use std::fmt::Write as _;

pub use effects::*;

/// Writable page head
pub trait Document {
    fn lang(&self) -> &str;
    fn set_lang(&mut self, lang: &str);

    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str);

    /// Content of `<meta name="{name}">`, `None` when the tag does not exist
    fn meta_content(&self, name: &str) -> Option<&str>;

    /// Set the content of `<meta name="{name}">`, creating the tag if missing
    fn set_meta_content(&mut self, name: &str, content: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MetaTag {
    name: String,
    content: String,
}

/// In-memory document head
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDocument {
    lang: String,
    title: String,
    metas: Vec<MetaTag>,
}

impl HtmlDocument {
    /// A document whose root language attribute is `lang`
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..Self::default()
        }
    }

    /// Number of meta tags in the head
    pub fn meta_count(&self) -> usize {
        self.metas.len()
    }

    /// Serialize the root element and head
    pub fn render_head(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<html lang=\"{}\">", escape(&self.lang));
        let _ = writeln!(html, "<head>");
        let _ = writeln!(html, "  <title>{}</title>", escape(&self.title));
        for meta in &self.metas {
            let _ = writeln!(
                html,
                "  <meta name=\"{}\" content=\"{}\">",
                escape(&meta.name),
                escape(&meta.content)
            );
        }
        let _ = writeln!(html, "</head>");
        html
    }
}

impl Document for HtmlDocument {
    fn lang(&self) -> &str {
        &self.lang
    }

    fn set_lang(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn meta_content(&self, name: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|meta| meta.name == name)
            .map(|meta| meta.content.as_str())
    }

    fn set_meta_content(&mut self, name: &str, content: &str) {
        match self.metas.iter_mut().find(|meta| meta.name == name) {
            Some(meta) => meta.content = content.to_string(),
            None => self.metas.push(MetaTag {
                name: name.to_string(),
                content: content.to_string(),
            }),
        }
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_tag_created_once() {
        let mut doc = HtmlDocument::new("de");
        assert_eq!(doc.meta_content("description"), None);

        doc.set_meta_content("description", "first");
        doc.set_meta_content("description", "second");
        assert_eq!(doc.meta_content("description"), Some("second"));
        assert_eq!(doc.meta_count(), 1);
    }

    #[test]
    fn render_escapes_values() {
        let mut doc = HtmlDocument::new("en");
        doc.set_title("Tom & \"Jerry\"");
        doc.set_meta_content("description", "<b>");

        let head = doc.render_head();
        assert!(head.starts_with("<html lang=\"en\">"));
        assert!(head.contains("<title>Tom &amp; &quot;Jerry&quot;</title>"));
        assert!(head.contains("content=\"&lt;b&gt;\""));
    }
}
