use indexmap::IndexMap;

pub mod parser;
pub mod transform;
pub mod writer;

pub const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FrontmatterValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FrontmatterValue::Scalar(s) => Some(s.as_str()),
            FrontmatterValue::List(_) => None,
        }
    }
}

/// Legacy header keys in the order they were first seen.
/// A repeated key overwrites the value but keeps its first position.
pub type FrontmatterMap = IndexMap<String, FrontmatterValue>;

/// Header of a migrated post, written in this field order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedFrontmatter {
    pub title: String,
    pub published: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub category: String,
    pub draft: bool,
}
