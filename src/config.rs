use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use spdlog::info;

pub const CFG_FILE_NAME: &str = "blog-migrate.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    /// Flat directory with one legacy post per file
    pub old_posts_dir: PathBuf,
    /// Flat pool of images shared by every legacy post
    pub old_resources_dir: PathBuf,
    /// Root where one directory per post is created
    pub new_posts_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            old_posts_dir: PathBuf::from("../Kilien.github.io/blog/p"),
            old_resources_dir: PathBuf::from("../Kilien.github.io/blog/resources"),
            new_posts_dir: PathBuf::from("src/content/posts"),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
    pub content_extension: String,
    pub index_file_name: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            content_extension: "md".to_string(),
            index_file_name: "index.md".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default = "default_log_to_console")]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

fn default_log_to_console() -> bool {
    true
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().ok_or_else(|| {
        io::Error::new(ErrorKind::NotFound, "Executable has no parent directory")
    })?;
    let rest = path.strip_prefix("${exe_dir}")
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;

    Ok(exe_dir.join(rest))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    let paths = Paths {
        old_posts_dir: parse_path(cfg.paths.old_posts_dir)?,
        old_resources_dir: parse_path(cfg.paths.old_resources_dir)?,
        new_posts_dir: parse_path(cfg.paths.new_posts_dir)?,
    };

    let log = match cfg.log {
        Some(log) => Some(Log {
            location: log.location.map(parse_path).transpose()?,
            ..log
        }),
        None => None,
    };

    Ok(Config { paths, log, ..cfg })
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

fn find_config_path() -> Option<PathBuf> {
    let mut candidates = vec![];
    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        candidates.push(exe_dir);
    }
    if let Ok(cur_dir) = env::current_dir() {
        candidates.push(cur_dir);
    }
    if let Some(cfg_dir) = dirs::config_dir() {
        candidates.push(cfg_dir);
    }

    candidates.into_iter()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// Reads `cfg_path` when given, otherwise the first `blog-migrate.toml` found next
/// to the executable, in the current directory or in the user config directory.
/// Built-in defaults are used when there is no file at all.
pub fn open_config(cfg_path: Option<PathBuf>) -> io::Result<Config> {
    match cfg_path.or_else(find_config_path) {
        Some(path) => {
            info!("Reading config from {}", path.display());
            read_config(&path)
        }
        None => {
            info!("No {} found, using default paths", CFG_FILE_NAME);
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r##"
[paths]
old_posts_dir = "/old/blog/p"
old_resources_dir = "/old/blog/resources"
new_posts_dir = "/new/src/content/posts"

[defaults]
content_extension = "markdown"
index_file_name = "post.md"

[log]
level = "Debug"
log_to_console = false
location = "/tmp/migrate.log"
"##).unwrap();

        assert_eq!(cfg.paths.old_posts_dir, PathBuf::from("/old/blog/p"));
        assert_eq!(cfg.paths.old_resources_dir, PathBuf::from("/old/blog/resources"));
        assert_eq!(cfg.paths.new_posts_dir, PathBuf::from("/new/src/content/posts"));
        assert_eq!(cfg.defaults.content_extension, "markdown");
        assert_eq!(cfg.defaults.index_file_name, "post.md");

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(!log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/migrate.log")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.defaults.content_extension, "md");
        assert_eq!(cfg.paths.new_posts_dir, PathBuf::from("src/content/posts"));
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_partial_paths() {
        let cfg = parse_config(r##"
[paths]
new_posts_dir = "out"
"##).unwrap();
        assert_eq!(cfg.paths.new_posts_dir, PathBuf::from("out"));
        assert_eq!(cfg.paths.old_posts_dir, Paths::default().old_posts_dir);
    }

    #[test]
    fn test_exe_dir_expansion() {
        let cfg = parse_config(r##"
[paths]
old_posts_dir = "${exe_dir}/posts"
"##).unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(cfg.paths.old_posts_dir, exe_dir.join("posts"));
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths\nold_posts_dir = 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_config_file() {
        let err = read_config(Path::new("/definitely/not/here/blog-migrate.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("blog-migrate.toml"));
    }

    #[test]
    fn test_open_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CFG_FILE_NAME);
        fs::write(&path, "[defaults]\nindex_file_name = \"post.md\"\n").unwrap();

        let cfg = open_config(Some(path)).unwrap();
        assert_eq!(cfg.defaults.index_file_name, "post.md");
        assert_eq!(cfg.defaults.content_extension, "md");
    }
}
