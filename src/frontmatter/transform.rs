use crate::frontmatter::{FrontmatterMap, FrontmatterValue, TransformedFrontmatter};
use crate::text_utils::{strip_markdown, today_utc, truncate_chars};

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DESCRIPTION_MAX_CHARS: usize = 150;
const DESCRIPTION_MIN_CHARS: usize = 20;

/// Prefixes of lines that are never used as a description:
/// headings, lists, quotes, code fences and images.
const SKIPPED_PREFIXES: [&str; 6] = ["#", "*", "-", ">", "```", "!"];

/// Maps a legacy header to the new one. `published` falls back to today (UTC)
/// when the legacy header has neither `updated` nor `date`.
pub fn transform(old: &FrontmatterMap, body: &str) -> TransformedFrontmatter {
    transform_with_fallback_date(old, body, &today_utc())
}

pub fn transform_with_fallback_date(old: &FrontmatterMap, body: &str, fallback_date: &str) -> TransformedFrontmatter {
    let title = scalar(old, "title").unwrap_or(DEFAULT_TITLE).to_string();
    let published = scalar(old, "updated")
        .or_else(|| scalar(old, "date"))
        .unwrap_or(fallback_date)
        .to_string();
    let image = scalar(old, "headerImage").unwrap_or_default().to_string();

    let tags = match old.get("tags") {
        Some(FrontmatterValue::List(tags)) => tags.clone(),
        Some(FrontmatterValue::Scalar(tag)) => vec![tag.clone()],
        None => vec![],
    };
    let category = tags.first().cloned().unwrap_or_default();

    TransformedFrontmatter {
        title,
        published,
        description: derive_description(body),
        image,
        tags,
        category,
        draft: false,
    }
}

fn scalar<'a>(map: &'a FrontmatterMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(FrontmatterValue::as_scalar)
}

fn is_prose(line: &str) -> bool {
    !line.is_empty()
        && !SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p))
        && line.chars().count() > DESCRIPTION_MIN_CHARS
}

/// First prose line of the body, without markdown decoration
pub fn derive_description(body: &str) -> String {
    let Some(line) = body.lines().map(str::trim).find(|line| is_prose(line)) else {
        return String::new();
    };

    let stripped = strip_markdown(line);
    truncate_chars(&stripped, DESCRIPTION_MAX_CHARS).into_owned()
}

#[cfg(test)]
mod tests {
    use crate::frontmatter::parser::parse;
    use crate::test_data::{LEGACY_POST, PLAIN_POST};

    use super::*;

    #[test]
    fn test_plain_post() {
        let (old, body) = parse(PLAIN_POST);
        let new = transform(&old, body);

        assert_eq!(new.title, "My Post");
        assert_eq!(new.tags, ["tech", "life"]);
        assert_eq!(new.category, "tech");
        assert_eq!(new.image, "http://x/img.png");
        assert_eq!(new.description, "This is a sufficiently long first paragraph of the post for description.");
        assert!(!new.draft);
    }

    #[test]
    fn test_legacy_post() {
        let (old, body) = parse(LEGACY_POST);
        let new = transform_with_fallback_date(&old, body, "2030-01-01");

        assert_eq!(new.title, "记一次博客迁移");
        assert_eq!(new.published, "2018-06-12");
        assert_eq!(new.description, "这次把博客从 Jekyll 迁移到 Astro，顺便把 resources 目录里的图片都整理了一遍。");
        assert_eq!(new.image, "http://img.example.com/header.png");
        assert_eq!(new.category, "blog");
    }

    #[test]
    fn test_defaults() {
        let new = transform_with_fallback_date(&FrontmatterMap::new(), "", "2030-01-01");
        assert_eq!(new, TransformedFrontmatter {
            title: "Untitled".to_string(),
            published: "2030-01-01".to_string(),
            description: "".to_string(),
            image: "".to_string(),
            tags: vec![],
            category: "".to_string(),
            draft: false,
        });
    }

    #[test]
    fn test_published_prefers_updated_then_date() {
        let (old, body) = parse("---\ndate: 2019-01-01\n---\nbody");
        assert_eq!(transform_with_fallback_date(&old, body, "x").published, "2019-01-01");

        let (old, body) = parse("---\ndate: 2019-01-01\nupdated: 2019-02-02\n---\nbody");
        assert_eq!(transform_with_fallback_date(&old, body, "x").published, "2019-02-02");
    }

    #[test]
    fn test_scalar_tag() {
        let (old, body) = parse("---\ntags: rust\n---\n");
        let new = transform(&old, body);
        assert_eq!(new.tags, ["rust"]);
        assert_eq!(new.category, "rust");
    }

    #[test]
    fn test_empty_tag_list() {
        let (old, body) = parse("---\ntitle: x\ntags:\n---\n");
        let new = transform(&old, body);
        assert!(new.tags.is_empty());
        assert_eq!(new.category, "");
    }

    #[test]
    fn test_list_title_is_ignored() {
        let (old, body) = parse("---\ntitle:\n- a\n- b\n---\n");
        assert_eq!(transform(&old, body).title, DEFAULT_TITLE);
    }

    #[test]
    fn test_description_skips_markup() {
        let body = "## Title line that is long enough\n\
                    - list item that is long enough too\n\
                    > quote that is definitely long enough\n\
                    ```rust code fence long enough\n\
                    ![image alt that is long](x.png)\n\
                    short line\n\
                    \n\
                    Finally a __real__ paragraph with a [link](http://x.y).";
        assert_eq!(derive_description(body), "Finally a real paragraph with a link.");
    }

    #[test]
    fn test_description_min_length() {
        // exactly 20 characters is not enough
        assert_eq!(derive_description("12345678901234567890"), "");
        assert_eq!(derive_description("123456789012345678901"), "123456789012345678901");
    }

    #[test]
    fn test_description_length_bound() {
        let long = "word ".repeat(100);
        let desc = derive_description(&long);
        assert_eq!(desc.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(long.starts_with(&desc));

        let wide = "文".repeat(400);
        assert_eq!(derive_description(&wide).chars().count(), DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn test_description_is_stable() {
        let (_, body) = parse(LEGACY_POST);
        assert_eq!(derive_description(body), derive_description(body));
    }

    #[test]
    fn test_description_truncates_after_stripping() {
        let line = format!("[{}](http://example.com/a/very/long/url)", "a".repeat(149));
        assert_eq!(derive_description(&line), "a".repeat(149));
    }
}
