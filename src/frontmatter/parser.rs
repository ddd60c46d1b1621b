use crate::frontmatter::{FrontmatterMap, FrontmatterValue, DELIMITER};

enum ParseState {
    Idle,
    CollectingList { key: String, items: Vec<String> },
}

enum Line<'a> {
    Item(&'a str),
    Scalar(&'a str, &'a str),
    ListStart(&'a str),
    Other,
}

/// Splits a legacy post into its header and its body.
///
/// The header must open the text with `---` and be closed by the next line starting
/// with `---`. The body after the header is trimmed. Without a header, the map is
/// empty and the body is the whole text, untouched.
///
/// Example of a legacy header
/// ---
/// title: Moving to a new blog
/// date: 2019-03-02
/// tags:
/// - life
/// - tech
/// ---
pub fn parse(text: &str) -> (FrontmatterMap, &str) {
    let Some((block, body)) = split_block(text) else {
        return (FrontmatterMap::new(), text);
    };

    (parse_block(block), body.trim())
}

fn split_block(text: &str) -> Option<(&str, &str)> {
    let open = format!("{}\n", DELIMITER);
    let close = format!("\n{}", DELIMITER);

    let rest = text.strip_prefix(open.as_str())?;
    let end = rest.find(close.as_str())?;
    Some((&rest[..end], &rest[end + close.len()..]))
}

fn classify(line: &str, collecting: bool) -> Line<'_> {
    if collecting {
        if let Some(item) = line.strip_prefix("- ") {
            return Line::Item(item.trim());
        }
    }

    match line.find(':') {
        Some(idx) if idx > 0 => {
            let key = line[..idx].trim();
            let value = line[idx + 1..].trim();
            if value.is_empty() {
                Line::ListStart(key)
            } else {
                Line::Scalar(key, value)
            }
        }
        _ => Line::Other,
    }
}

/// Lists are only committed when at least one item was collected: a `key:` line
/// followed by no `- item` lines never reaches the map. Legacy posts rely on this,
/// so an empty `tags:` reads the same as no tags at all.
fn commit(map: &mut FrontmatterMap, key: String, items: Vec<String>) {
    if !items.is_empty() {
        map.insert(key, FrontmatterValue::List(items));
    }
}

fn parse_block(block: &str) -> FrontmatterMap {
    let mut map = FrontmatterMap::new();
    let mut state = ParseState::Idle;

    for raw_line in block.split('\n') {
        let line = raw_line.trim();
        let collecting = matches!(state, ParseState::CollectingList { .. });

        state = match (state, classify(line, collecting)) {
            (ParseState::CollectingList { key, mut items }, Line::Item(item)) => {
                items.push(item.to_string());
                ParseState::CollectingList { key, items }
            }
            (ParseState::CollectingList { key, items }, Line::Other) if items.is_empty() => {
                ParseState::CollectingList { key, items }
            }
            (previous, line) => {
                if let ParseState::CollectingList { key, items } = previous {
                    commit(&mut map, key, items);
                }
                match line {
                    Line::Scalar(key, value) => {
                        map.insert(key.to_string(), FrontmatterValue::Scalar(value.to_string()));
                        ParseState::Idle
                    }
                    Line::ListStart(key) => ParseState::CollectingList { key: key.to_string(), items: vec![] },
                    Line::Item(_) | Line::Other => ParseState::Idle,
                }
            }
        };
    }

    if let ParseState::CollectingList { key, items } = state {
        commit(&mut map, key, items);
    }

    map
}
