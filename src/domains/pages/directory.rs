//! Directory page: the searchable grid of tool cards.
//!
//! The search form submits back to `/app` with a `q` parameter, the
//! server-side rendition of the original keystroke filter. Every card shows
//! the record's name, category, website and tags, a "View" link built by
//! prefixing the website with `https://`, and a "Docs" link only when a
//! documentation link is present.

use crate::domains::catalog::{DirectoryView, Record};

use super::html::{document, escape};

/// Render the directory page for the current view state.
pub fn render(view: &DirectoryView) -> String {
    let cards: String = view.records().iter().map(render_card).collect();

    let body = format!(
        "<header>\n\
         <nav aria-label=\"Sidebar\">\n\
         <a href=\"/\"><strong>Pegboard</strong></a>\n\
         <a href=\"/\">Home</a>\n\
         <a href=\"/app\" aria-current=\"page\">Dashboard</a>\n\
         </nav>\n\
         <form action=\"/app\" method=\"GET\">\n\
         <label for=\"search-field\">Search</label>\n\
         <input id=\"search-field\" name=\"q\" type=\"search\" placeholder=\"Search\" value=\"{query}\">\n\
         </form>\n\
         </header>\n\
         <main>\n\
         <ul role=\"list\" class=\"cards\">\n{cards}</ul>\n\
         </main>\n",
        query = escape(view.query()),
        cards = cards,
    );

    document("App | Pegboard", &body)
}

/// Render one record as a card.
fn render_card(record: &Record) -> String {
    let name = escape(record.name.as_deref().unwrap_or(""));
    let category = escape(record.category.as_deref().unwrap_or(""));
    let website = escape(record.website.as_deref().unwrap_or(""));

    let tags: String = record
        .tags
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|tag| format!("<span class=\"tag\">{}</span>", escape(tag)))
        .collect();

    let docs_link = if record.has_documentation() {
        let docs = escape(record.documentation.as_deref().unwrap_or(""));
        format!("<a href=\"https://{}\">Docs</a>\n", docs)
    } else {
        String::new()
    };

    format!(
        "<li class=\"card\">\n\
         <div class=\"card-body\">\n\
         <h3>{name}</h3>\n\
         <span class=\"category\">{category}</span>\n\
         <p><a href=\"https://{website}\" target=\"_blank\" rel=\"noopener noreferrer\">{website}</a></p>\n\
         <div class=\"tags\">{tags}</div>\n\
         <img src=\"https://www.google.com/s2/favicons?domain={website}\" alt=\"{name}\">\n\
         </div>\n\
         <div class=\"card-actions\">\n\
         <a href=\"https://{website}\" target=\"_blank\" rel=\"noopener noreferrer\">View</a>\n\
         {docs_link}\
         </div>\n\
         </li>\n",
        name = name,
        category = category,
        website = website,
        tags = tags,
        docs_link = docs_link,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::catalog::Collection;

    fn record(name: &str, category: &str, website: &str) -> Record {
        Record {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            website: Some(website.to_string()),
            ..Record::default()
        }
    }

    #[test]
    fn test_docs_link_only_when_present() {
        let mut with_docs = record("Figma", "Design", "figma.com");
        with_docs.documentation = Some("help.figma.com".to_string());
        let card = render_card(&with_docs);
        assert!(card.contains("href=\"https://help.figma.com\""));
        assert!(card.contains(">Docs</a>"));

        let without_docs = record("GitHub", "DevTools", "github.com");
        let card = render_card(&without_docs);
        assert!(!card.contains(">Docs</a>"));
    }

    #[test]
    fn test_view_link_prefixes_scheme() {
        let card = render_card(&record("GitHub", "DevTools", "github.com"));
        assert!(card.contains("href=\"https://github.com\""));
        assert!(card.contains(">View</a>"));
    }

    #[test]
    fn test_tags_rendered_in_given_order() {
        let mut r = record("Figma", "Design", "figma.com");
        r.tags = Some(vec!["ui".to_string(), "collab".to_string()]);
        let card = render_card(&r);
        let ui = card.find("<span class=\"tag\">ui</span>").unwrap();
        let collab = card.find("<span class=\"tag\">collab</span>").unwrap();
        assert!(ui < collab);
    }

    #[test]
    fn test_record_text_is_escaped() {
        let card = render_card(&record("<Evil>", "R&D", "example.com"));
        assert!(card.contains("&lt;Evil&gt;"));
        assert!(card.contains("R&amp;D"));
        assert!(!card.contains("<Evil>"));
    }

    #[test]
    fn test_query_echoed_into_search_field() {
        let mut view = DirectoryView::new(Collection::new(vec![record(
            "Figma", "Design", "figma.com",
        )]));
        view.on_query_change("Fig\"ma");
        let page = render(&view);
        assert!(page.contains("value=\"Fig&quot;ma\""));
    }

    #[test]
    fn test_filtered_records_only() {
        let mut view = DirectoryView::new(Collection::new(vec![
            record("Figma", "Design", "figma.com"),
            record("GitHub", "DevTools", "github.com"),
        ]));
        view.on_query_change("Figma");
        let page = render(&view);
        assert!(page.contains("<h3>Figma</h3>"));
        assert!(!page.contains("<h3>GitHub</h3>"));
    }
}
