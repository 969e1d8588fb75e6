//! Extraction of URL and anchor text from the HTML link fields Salesforce
//! rich-text formulas produce, e.g.
//! `<a href="https://system.netsuite.com/..." target="_blank">12345</a>`.

use std::sync::OnceLock;

use regex::Regex;

fn href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"href=["']([^"']+)["']"#).expect("valid regex"))
}

fn text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">([^<]+)<").expect("valid regex"))
}

/// Pull the `href` URL and the anchor text out of an HTML fragment.
/// Either part may be absent.
#[must_use]
pub fn extract_anchor(html: &str) -> (Option<String>, Option<String>) {
    let url = href_re()
        .captures(html)
        .map(|c| c[1].to_string())
        .filter(|u| !u.trim().is_empty());
    let text = text_re()
        .captures(html)
        .map(|c| c[1].to_string())
        .filter(|t| !t.trim().is_empty());
    (url, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_href_and_text() {
        let html = r#"<a href="https://system.netsuite.com/app/sub?id=42" target="_blank">42</a>"#;
        let (url, text) = extract_anchor(html);
        assert_eq!(url.as_deref(), Some("https://system.netsuite.com/app/sub?id=42"));
        assert_eq!(text.as_deref(), Some("42"));
    }

    #[test]
    fn single_quoted_href() {
        let html = "<a href='https://example.com/x'>label</a>";
        let (url, text) = extract_anchor(html);
        assert_eq!(url.as_deref(), Some("https://example.com/x"));
        assert_eq!(text.as_deref(), Some("label"));
    }

    #[test]
    fn plain_text_has_neither() {
        let (url, text) = extract_anchor("no markup here");
        assert_eq!(url, None);
        assert_eq!(text, None);
    }

    #[test]
    fn blank_href_is_none() {
        let (url, _) = extract_anchor(r#"<a href=" ">x</a>"#);
        assert_eq!(url, None);
    }
}
