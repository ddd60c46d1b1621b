use std::fmt::Write;
use std::fs::{create_dir_all, File};
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::frontmatter::TransformedFrontmatter;
use crate::frontmatter::writer::render_frontmatter;
use crate::text_utils::today_local;

pub struct NewPost {
    pub seed: String,
    pub image_url: String,
    pub file_path: PathBuf,
}

/// Hyphen-less UUID, used as the post directory name and the image seed
pub fn generate_seed() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn image_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{}/1920/1080", seed)
}

pub fn render_header(title: &str, date: &str, image_url: &str) -> String {
    let header = TransformedFrontmatter {
        title: title.to_string(),
        published: date.to_string(),
        description: String::new(),
        image: image_url.to_string(),
        tags: vec![],
        category: String::new(),
        draft: false,
    };

    let mut buf = render_frontmatter(&header);
    let _ = writeln!(&mut buf);
    buf
}

/// Creates `<posts_dir>/<seed>/<index_file_name>`. Fails if the directory is
/// already there.
pub fn create_post(posts_dir: &Path, index_file_name: &str, title: &str, seed: &str) -> io::Result<NewPost> {
    use std::io::Write;

    let post_dir = posts_dir.join(seed);
    if post_dir.exists() {
        return Err(io::Error::new(ErrorKind::AlreadyExists, format!("Directory {} already exists", post_dir.display())));
    }
    create_dir_all(&post_dir)?;

    let image_url = image_url(seed);
    let header = render_header(title, &today_local(), &image_url);

    let file_path = post_dir.join(index_file_name);
    let mut file = File::create(&file_path)?;
    file.write_all(header.as_bytes())?;

    Ok(NewPost {
        seed: seed.to_string(),
        image_url,
        file_path,
    })
}
