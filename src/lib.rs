pub mod config;
pub mod logger;
pub mod frontmatter;
pub mod images;
pub mod migrator;
pub mod batch;
pub mod new_post;
pub mod text_utils;
mod post_list;
mod test_data;
