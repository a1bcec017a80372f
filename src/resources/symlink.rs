//! Symlink-with-backup resource.
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::{fs, Resource, ResourceChange, ResourceState};
use crate::error::ResourceError;

/// A symlink from a home-directory target back to a repository source.
///
/// Applying follows the backup-then-replace contract:
///
/// - target already the correct symlink → no-op
/// - target is a regular file or directory → renamed to `<target>.backup`,
///   then the symlink is created
/// - target is a symlink pointing elsewhere (including broken) → replaced
///   unconditionally, no backup
/// - target absent → parent directories created, then the symlink
#[derive(Debug, Clone)]
pub struct SymlinkResource {
    /// The repository file/directory the symlink points to.
    pub source: PathBuf,
    /// Where the symlink is created.
    pub target: PathBuf,
}

impl SymlinkResource {
    /// Create a new symlink resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }

    /// Classify what currently occupies the target path.
    fn occupant(&self) -> Occupant {
        match std::fs::read_link(&self.target) {
            Ok(existing) if existing == self.source => Occupant::CorrectLink,
            Ok(existing) => Occupant::OtherLink(existing),
            Err(_) => match self.target.symlink_metadata() {
                Ok(meta) if meta.is_dir() => Occupant::Directory,
                Ok(_) => Occupant::File,
                Err(_) => Occupant::Absent,
            },
        }
    }
}

/// What currently lives at a symlink target.
enum Occupant {
    Absent,
    CorrectLink,
    OtherLink(PathBuf),
    File,
    Directory,
}

impl Resource for SymlinkResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.source.exists() {
            return Ok(ResourceState::Invalid {
                reason: format!("source does not exist: {}", self.source.display()),
            });
        }

        Ok(match self.occupant() {
            Occupant::CorrectLink => ResourceState::Correct,
            Occupant::OtherLink(existing) => ResourceState::Incorrect {
                current: format!("points to {}", existing.display()),
            },
            Occupant::File => ResourceState::Incorrect {
                current: "target is a regular file".to_string(),
            },
            Occupant::Directory => ResourceState::Incorrect {
                current: "target is a directory".to_string(),
            },
            Occupant::Absent => ResourceState::Missing,
        })
    }

    fn apply(&self) -> Result<ResourceChange> {
        if !self.source.exists() {
            return Ok(ResourceChange::Skipped {
                reason: format!("source does not exist: {}", self.source.display()),
            });
        }

        fs::ensure_parent_dir(&self.target)?;

        let backup = match self.occupant() {
            Occupant::CorrectLink => return Ok(ResourceChange::AlreadyCorrect),
            // A wrong symlink is replaced unconditionally; only real files
            // and directories carry user data worth preserving.
            Occupant::OtherLink(_) => {
                fs::remove_existing(&self.target)?;
                None
            }
            Occupant::File | Occupant::Directory => Some(fs::backup_existing(&self.target)?),
            Occupant::Absent => None,
        };

        create_symlink(&self.source, &self.target)?;

        Ok(match backup {
            Some(backup) => ResourceChange::BackedUp { backup },
            None => ResourceChange::Applied,
        })
    }
}

/// Create a symlink at `target` pointing to `source`.
fn create_symlink(source: &Path, target: &Path) -> Result<(), ResourceError> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(source, target).map_err(|source| ResourceError::Symlink {
            target: target.to_path_buf(),
            source,
        })
    }
    #[cfg(not(unix))]
    {
        let _ = source;
        Err(ResourceError::Symlink {
            target: target.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "symlinks are only supported on unix platforms",
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let target = dir.path().join("target");
        std::fs::write(&source, "repo content").unwrap();
        (dir, source, target)
    }

    #[test]
    fn description_contains_both_paths() {
        let resource = SymlinkResource::new(PathBuf::from("/source"), PathBuf::from("/target"));
        assert!(resource.description().contains("/source"));
        assert!(resource.description().contains("/target"));
    }

    #[test]
    fn invalid_when_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let resource = SymlinkResource::new(
            dir.path().join("nonexistent"),
            dir.path().join("target"),
        );
        let state = resource.current_state().unwrap();
        assert!(matches!(state, ResourceState::Invalid { .. }));
    }

    #[test]
    fn missing_when_target_absent() {
        let (_dir, source, target) = fixture();
        let resource = SymlinkResource::new(source, target);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);
    }

    #[test]
    fn correct_when_link_points_to_source() {
        let (_dir, source, target) = fixture();
        std::os::unix::fs::symlink(&source, &target).unwrap();
        let resource = SymlinkResource::new(source, target);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn incorrect_when_link_points_elsewhere() {
        let (dir, source, target) = fixture();
        let other = dir.path().join("other");
        std::fs::write(&other, "other").unwrap();
        std::os::unix::fs::symlink(&other, &target).unwrap();
        let resource = SymlinkResource::new(source, target);
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect { .. }
        ));
    }

    #[test]
    fn incorrect_when_target_is_regular_file() {
        let (_dir, source, target) = fixture();
        std::fs::write(&target, "user content").unwrap();
        let resource = SymlinkResource::new(source, target);
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Incorrect { .. }
        ));
    }

    #[test]
    fn apply_creates_link_when_target_absent() {
        let (_dir, source, target) = fixture();
        let resource = SymlinkResource::new(source.clone(), target.clone());

        let change = resource.apply().unwrap();

        assert_eq!(change, ResourceChange::Applied);
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn apply_creates_parent_directories() {
        let (dir, source, _) = fixture();
        let target = dir.path().join("nested").join("dir").join("target");
        let resource = SymlinkResource::new(source.clone(), target.clone());

        resource.apply().unwrap();

        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn apply_is_noop_when_already_correct() {
        let (_dir, source, target) = fixture();
        std::os::unix::fs::symlink(&source, &target).unwrap();
        let resource = SymlinkResource::new(source, target.clone());

        let change = resource.apply().unwrap();

        assert_eq!(change, ResourceChange::AlreadyCorrect);
        assert!(fs::backup_path(&target).symlink_metadata().is_err());
    }

    #[test]
    fn apply_backs_up_regular_file() {
        let (_dir, source, target) = fixture();
        std::fs::write(&target, "user content").unwrap();
        let resource = SymlinkResource::new(source.clone(), target.clone());

        let change = resource.apply().unwrap();

        let backup = fs::backup_path(&target);
        assert_eq!(
            change,
            ResourceChange::BackedUp {
                backup: backup.clone()
            }
        );
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "user content");
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn apply_backs_up_directory() {
        let (dir, source, _) = fixture();
        let target = dir.path().join("agents");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("note.md"), "mine").unwrap();
        let resource = SymlinkResource::new(source.clone(), target.clone());

        let change = resource.apply().unwrap();

        let backup = fs::backup_path(&target);
        assert!(matches!(change, ResourceChange::BackedUp { .. }));
        assert!(backup.is_dir());
        assert_eq!(
            std::fs::read_to_string(backup.join("note.md")).unwrap(),
            "mine"
        );
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn apply_replaces_wrong_link_without_backup() {
        let (dir, source, target) = fixture();
        let other = dir.path().join("other");
        std::fs::write(&other, "other").unwrap();
        std::os::unix::fs::symlink(&other, &target).unwrap();
        let resource = SymlinkResource::new(source.clone(), target.clone());

        let change = resource.apply().unwrap();

        assert_eq!(change, ResourceChange::Applied);
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
        assert!(
            fs::backup_path(&target).symlink_metadata().is_err(),
            "replacing a wrong symlink must not create a backup"
        );
    }

    #[test]
    fn apply_replaces_broken_link_without_backup() {
        let (dir, source, target) = fixture();
        std::os::unix::fs::symlink(dir.path().join("gone"), &target).unwrap();
        let resource = SymlinkResource::new(source.clone(), target.clone());

        let change = resource.apply().unwrap();

        assert_eq!(change, ResourceChange::Applied);
        assert_eq!(std::fs::read_link(&target).unwrap(), source);
    }

    #[test]
    fn apply_skips_when_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let resource = SymlinkResource::new(
            dir.path().join("nonexistent"),
            dir.path().join("target"),
        );
        let change = resource.apply().unwrap();
        assert!(matches!(change, ResourceChange::Skipped { .. }));
    }

    /// Applying twice must converge: the second apply performs no mutation.
    #[test]
    fn apply_twice_is_idempotent() {
        let (_dir, source, target) = fixture();
        std::fs::write(&target, "user content").unwrap();
        let resource = SymlinkResource::new(source, target.clone());

        let first = resource.apply().unwrap();
        let second = resource.apply().unwrap();

        assert!(matches!(first, ResourceChange::BackedUp { .. }));
        assert_eq!(second, ResourceChange::AlreadyCorrect);
        assert_eq!(
            std::fs::read_to_string(fs::backup_path(&target)).unwrap(),
            "user content",
            "second run must not touch the backup"
        );
    }
}
