use std::fmt::{Display, Formatter};
use std::io;
use std::io::ErrorKind;
use std::path::Path;

use spdlog::{error, info};

use crate::config::Config;
use crate::migrator::{FailedPost, MigratedPost, MigrationResult, PostMigrator};
use crate::post_list::PostList;

#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<MigratedPost>,
    pub failed: Vec<FailedPost>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    fn record(&mut self, result: MigrationResult) {
        match result {
            Ok(post) => self.succeeded.push(post),
            Err(failed) => self.failed.push(failed),
        }
    }
}

impl Display for BatchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Succeeded: {}", self.success_count())?;
        write!(f, "Failed: {}", self.failure_count())?;
        if !self.failed.is_empty() {
            write!(f, "\n\nFailed posts:")?;
            for failed in &self.failed {
                write!(f, "\n  - {}", failed)?;
            }
        }
        Ok(())
    }
}

fn require_dir(dir: &Path, what: &str) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    Err(io::Error::new(ErrorKind::NotFound, format!("{} does not exist: {}", what, dir.display())))
}

/// Both roots must exist before anything is touched
pub fn validate_paths(config: &Config) -> io::Result<()> {
    require_dir(&config.paths.old_posts_dir, "Old posts directory")?;
    require_dir(&config.paths.new_posts_dir, "New posts directory")?;
    info!("Paths validated");
    Ok(())
}

pub struct BatchDriver<'a> {
    config: &'a Config,
    migrator: PostMigrator,
}

impl<'a> BatchDriver<'a> {
    pub fn new(config: &'a Config) -> Self {
        BatchDriver {
            config,
            migrator: PostMigrator::new(config),
        }
    }

    /// Migrates every legacy post. Only a missing root directory or an unreadable
    /// posts directory fails the run; a failing post is recorded in the report.
    pub fn run(&self) -> io::Result<BatchReport> {
        validate_paths(self.config)?;

        let post_list = PostList {
            root_dir: self.config.paths.old_posts_dir.clone(),
            extension: self.config.defaults.content_extension.clone(),
        };
        let files = post_list.retrieve_files()?;
        info!("Found {} posts to migrate", files.len());

        let mut report = BatchReport::default();
        for file_name in files {
            report.record(self.migrate_one(&file_name));
        }

        Ok(report)
    }

    fn migrate_one(&self, file_name: &str) -> MigrationResult {
        self.migrator.migrate(file_name).map_err(|e| {
            let failed = FailedPost {
                file_name: file_name.to_string(),
                error: format!("{:#}", e),
            };
            error!("  Migration failed: {}", failed);
            failed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let mut report = BatchReport::default();
        report.record(Ok(MigratedPost { file_name: "a.md".to_string(), post_id: "a".to_string() }));
        report.record(Err(FailedPost { file_name: "b.md".to_string(), error: "bad".to_string() }));
        report.record(Ok(MigratedPost { file_name: "c.md".to_string(), post_id: "c".to_string() }));

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.to_string(), "Succeeded: 2\nFailed: 1\n\nFailed posts:\n  - b.md: bad");
    }

    #[test]
    fn test_empty_report_display() {
        assert_eq!(BatchReport::default().to_string(), "Succeeded: 0\nFailed: 0");
    }

    #[test]
    fn test_validate_missing_paths() {
        let mut config = Config::default();
        config.paths.old_posts_dir = "/no/such/old".into();
        let err = validate_paths(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("/no/such/old"));
    }
}
