use std::{fs, io};
use std::path::PathBuf;

/// Legacy posts: regular files in a flat directory with a given extension
pub struct PostList {
    pub root_dir: PathBuf,
    pub extension: String,
}

impl PostList {
    /// File names, sorted so every run visits the posts in the same order
    pub fn retrieve_files(&self) -> io::Result<Vec<String>> {
        let suffix = format!(".{}", self.extension);
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(file_name) = entry.file_name().to_str() {
                if file_name.ends_with(&suffix) {
                    posts.push(file_name.to_string());
                }
            }
        }
        posts.sort();
        Ok(posts)
    }
}
