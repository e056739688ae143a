//! Result rendering
//!
//! Pure formatting functions mapping flow outcomes to HTML fragments. No
//! logic beyond the label branch inside `Sentiment` itself.

use crate::sentiment::Sentiment;

/// Escape text for embedding in an HTML fragment
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Styled result card for one classified snippet
pub fn card(text: &str, sentiment: Sentiment) -> String {
    format!(
        concat!(
            r#"<div class="card" style="border: 2px solid {color}; background-color: #f9f9f9; "#,
            r#"border-radius: 12px; padding: 20px; margin: 15px 0; box-shadow: 0 4px 10px rgba(0,0,0,0.1);">"#,
            r#"<h4 style="color: {color}; margin-bottom: 10px;">{emoji} {label} Sentiment</h4>"#,
            r#"<p style="color: #333; font-size: 16px;">{text}</p>"#,
            "</div>"
        ),
        color = sentiment.color(),
        emoji = sentiment.emoji(),
        label = sentiment.label(),
        text = escape_html(text),
    )
}

/// Validation warning (blank input)
pub fn warning(message: &str) -> String {
    format!(
        r#"<div class="notice warning">{}</div>"#,
        escape_html(message)
    )
}

/// "No data" notice (empty or private account)
pub fn notice(message: &str) -> String {
    format!(r#"<div class="notice">{}</div>"#, escape_html(message))
}

/// Collaborator failure message
pub fn error_box(message: &str) -> String {
    format!(
        r#"<div class="notice error">{}</div>"#,
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_card_positive_styling() {
        let html = card("love it", Sentiment::Positive);
        assert!(html.contains("#4CAF50"));
        assert!(html.contains("\u{1F60A}"));
        assert!(html.contains("Positive Sentiment"));
        assert!(html.contains("love it"));
    }

    #[test]
    fn test_card_negative_styling() {
        let html = card("hate it", Sentiment::Negative);
        assert!(html.contains("#F44336"));
        assert!(html.contains("\u{1F61E}"));
        assert!(html.contains("Negative Sentiment"));
    }

    #[test]
    fn test_card_escapes_post_text() {
        let html = card("<script>alert(1)</script>", Sentiment::Positive);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_fragment_classes() {
        assert!(warning("w").contains("notice warning"));
        assert!(error_box("e").contains("notice error"));
        assert_eq!(notice("n"), r#"<div class="notice">n</div>"#);
    }
}
