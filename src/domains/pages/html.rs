//! Minimal HTML helpers shared by the page renderers.

/// Escape text for safe interpolation into HTML content and attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap page content in the shared document shell.
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"A collection of resources, tools and collaborative means useful for you and your team to speed up development and delivery of exceptional experiences.\">\n\
         </head>\n\
         <body>\n{}</body>\n\
         </html>\n",
        escape(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_passthrough() {
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn test_document_escapes_title() {
        let page = document("App <Pegboard>", "<main></main>");
        assert!(page.contains("App &lt;Pegboard&gt;"));
        assert!(page.contains("<main></main>"));
    }
}
