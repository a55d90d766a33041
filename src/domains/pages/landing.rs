//! Landing page: marketing copy plus the three derived counters.

use crate::domains::catalog::Summary;

use super::html::document;

/// Render the landing page with counters computed from the fetched collection.
pub fn render(summary: &Summary) -> String {
    let body = format!(
        "<header>\n\
         <nav aria-label=\"Global\">\n\
         <a href=\"/\"><strong>Pegboard</strong></a>\n\
         <a href=\"/app\" class=\"cta\">Use app</a>\n\
         </nav>\n\
         </header>\n\
         <main>\n\
         <section class=\"hero\">\n\
         <h1>Awesome tools to speed up your <span>development experience</span></h1>\n\
         <p>A collection of resources, tools and collaborative means useful for you and your team to speed up development and delivery of exceptional experiences.</p>\n\
         </section>\n\
         <section class=\"stats\">\n\
         <h2>Collecting loads of handy tools for your next project</h2>\n\
         <dl>\n\
         <div><dd>{count}</dd><dt>Apps</dt></div>\n\
         <div><dd>{doc_count}</dd><dt>Docs</dt></div>\n\
         <div><dd>{category_count}</dd><dt>Categories</dt></div>\n\
         </dl>\n\
         </section>\n\
         </main>\n\
         <footer>\n\
         <a href=\"https://danferg.com\">Website</a>\n\
         <a href=\"https://github.com/danielferguson/pegboard\">GitHub</a>\n\
         <p>&copy; 2021 danferg.com All rights reserved.</p>\n\
         </footer>\n",
        count = summary.count,
        doc_count = summary.doc_count,
        category_count = summary.category_count,
    );

    document("Awesome tools to speed up your development experience | Pegboard", &body)
}
