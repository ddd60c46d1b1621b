use std::fmt::Write;

use crate::frontmatter::{TransformedFrontmatter, DELIMITER};
use crate::text_utils::single_quoted;

/// Renders the header block, without a trailing line break.
/// `tags` is written as a JSON array, which is also a valid YAML flow sequence.
pub fn render_frontmatter(fm: &TransformedFrontmatter) -> String {
    let mut buf = String::new();

    let tags = serde_json::to_string(&fm.tags).unwrap_or_else(|_| "[]".to_string());

    let _ = writeln!(&mut buf, "{}", DELIMITER);
    let _ = writeln!(&mut buf, "title: {}", fm.title);
    let _ = writeln!(&mut buf, "published: {}", fm.published);
    let _ = writeln!(&mut buf, "description: {}", single_quoted(&fm.description));
    let _ = writeln!(&mut buf, "image: {}", single_quoted(&fm.image));
    let _ = writeln!(&mut buf, "tags: {}", tags);
    let _ = writeln!(&mut buf, "category: {}", single_quoted(&fm.category));
    let _ = writeln!(&mut buf, "draft: {}", fm.draft);
    let _ = write!(&mut buf, "{}", DELIMITER);
    buf
}

/// Header, one blank line, then the body
pub fn render_post(fm: &TransformedFrontmatter, body: &str) -> String {
    format!("{}\n\n{}", render_frontmatter(fm), body)
}
