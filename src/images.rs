use std::fs;
use std::path::{Component, Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use spdlog::{info, warn};

/// A markdown image pointing to a file of the legacy blog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImageRef {
    /// Whole `![alt](path)` token as found in the body
    pub original: String,
    pub alt: String,
    pub path: String,
}

impl LocalImageRef {
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.path).file_name().and_then(|name| name.to_str())
    }

    /// The path with any root or drive prefix removed, so that `/img/a.png` names
    /// `img/a.png` under whatever directory it is joined to
    fn relative_path(&self) -> PathBuf {
        Path::new(&self.path).components()
            .filter(|c| matches!(c, Component::Normal(_) | Component::CurDir | Component::ParentDir))
            .collect()
    }

    fn points_to_resources(&self) -> bool {
        self.path.contains("../resources/") || self.path.contains("..\\resources\\")
    }
}

fn is_remote(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

pub fn find_local_images(body: &str) -> Vec<LocalImageRef> {
    lazy_static! {
        static ref IMAGE_REGEX: Regex = Regex::new(r"!\[(?P<alt>[^\]]*)\]\((?P<path>[^)]+)\)").unwrap();
    }

    IMAGE_REGEX.captures_iter(body)
        .filter(|cap| !is_remote(&cap["path"]))
        .map(|cap| LocalImageRef {
            original: cap[0].to_string(),
            alt: cap["alt"].to_string(),
            path: cap["path"].to_string(),
        })
        .collect()
}

/// Finds legacy images and copies them next to the migrated post.
///
/// Images are looked up by file name in the shared resources directory first.
/// Paths that do not point into `../resources/` are then tried relative to the
/// legacy posts directory.
pub struct ImageResolver {
    resources_dir: PathBuf,
    posts_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(resources_dir: PathBuf, posts_dir: PathBuf) -> Self {
        ImageResolver { resources_dir, posts_dir }
    }

    pub fn locate(&self, image: &LocalImageRef) -> Option<PathBuf> {
        let file_name = image.file_name()?;

        let pooled = self.resources_dir.join(file_name);
        if pooled.is_file() {
            return Some(pooled);
        }

        if image.points_to_resources() {
            return None;
        }

        let relative = self.posts_dir.join(image.relative_path());
        if relative.is_file() {
            return Some(relative);
        }

        None
    }

    /// Copies the image into `dest_dir` and returns its file name there.
    /// Missing images and copy errors are logged and give `None`.
    pub fn resolve_and_copy(&self, image: &LocalImageRef, dest_dir: &Path) -> Option<String> {
        let Some(source) = self.locate(image) else {
            warn!("  Image not found: {}", image.path);
            return None;
        };

        let file_name = image.file_name()?.to_string();
        let target = dest_dir.join(&file_name);

        match fs::copy(&source, &target) {
            Ok(_) => {
                info!("  Copied image: {}", file_name);
                Some(file_name)
            }
            Err(e) => {
                warn!("  Error copying image {} - {}", file_name, e);
                None
            }
        }
    }

    /// Copies every image it can find and points its token to `./<file name>`.
    /// Tokens of images that could not be copied are left as they are.
    pub fn rewrite_images(&self, body: &str, images: &[LocalImageRef], dest_dir: &Path) -> String {
        let mut updated = body.to_string();

        for image in images {
            if let Some(file_name) = self.resolve_and_copy(image, dest_dir) {
                let replacement = format!("![{}](./{})", image.alt, file_name);
                updated = updated.replacen(&image.original, &replacement, 1);
            }
        }

        updated
    }
}
