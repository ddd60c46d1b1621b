use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use spdlog::info;

use crate::config::Config;
use crate::frontmatter::parser::parse;
use crate::frontmatter::transform::transform;
use crate::frontmatter::writer::render_post;
use crate::images::{find_local_images, ImageResolver};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedPost {
    pub file_name: String,
    pub post_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPost {
    pub file_name: String,
    pub error: String,
}

impl Display for FailedPost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.file_name, self.error)
    }
}

pub type MigrationResult = Result<MigratedPost, FailedPost>;

/// Migrates one legacy post into `<new_posts_dir>/<post id>/<index file>`
pub struct PostMigrator {
    old_posts_dir: PathBuf,
    new_posts_dir: PathBuf,
    content_extension: String,
    index_file_name: String,
    resolver: ImageResolver,
}

impl PostMigrator {
    pub fn new(config: &Config) -> Self {
        let paths = &config.paths;
        PostMigrator {
            old_posts_dir: paths.old_posts_dir.clone(),
            new_posts_dir: paths.new_posts_dir.clone(),
            content_extension: config.defaults.content_extension.clone(),
            index_file_name: config.defaults.index_file_name.clone(),
            resolver: ImageResolver::new(paths.old_resources_dir.clone(), paths.old_posts_dir.clone()),
        }
    }

    /// The post id is the file name without the content extension.
    /// A file named only `.md` keeps its full name, so every post gets its own directory.
    pub fn post_id(&self, file_name: &str) -> String {
        let suffix = format!(".{}", self.content_extension);
        match file_name.strip_suffix(suffix.as_str()) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => file_name.to_string(),
        }
    }

    pub fn post_dir(&self, post_id: &str) -> PathBuf {
        self.new_posts_dir.join(post_id)
    }

    /// A failure after the post directory was created leaves that directory behind.
    pub fn migrate(&self, file_name: &str) -> Result<MigratedPost> {
        info!("Processing: {}", file_name);

        let old_path = self.old_posts_dir.join(file_name);
        let content = fs::read_to_string(&old_path)
            .with_context(|| format!("Error reading {}", old_path.display()))?;

        let (old_frontmatter, body) = parse(&content);
        let frontmatter = transform(&old_frontmatter, body);

        let post_id = self.post_id(file_name);
        let post_dir = self.post_dir(&post_id);
        fs::create_dir_all(&post_dir)
            .with_context(|| format!("Error creating directory {}", post_dir.display()))?;

        let body = self.migrate_images(body, &post_dir);
        let new_content = render_post(&frontmatter, &body);

        let new_path = post_dir.join(&self.index_file_name);
        fs::write(&new_path, new_content)
            .with_context(|| format!("Error writing {}", new_path.display()))?;

        info!("  Migrated: {}/{}", post_id, self.index_file_name);

        Ok(MigratedPost {
            file_name: file_name.to_string(),
            post_id,
        })
    }

    fn migrate_images(&self, body: &str, post_dir: &Path) -> String {
        let images = find_local_images(body);
        if images.is_empty() {
            return body.to_string();
        }

        info!("  Found {} local images", images.len());
        self.resolver.rewrite_images(body, &images, post_dir)
    }
}
