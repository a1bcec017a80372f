//! Copy-if-absent template resource.
use std::path::PathBuf;

use anyhow::Result;

use super::{fs, Resource, ResourceChange, ResourceState};
use crate::error::ResourceError;

/// A machine-specific file seeded from a repository template.
///
/// The target is created once by copying the source byte-for-byte; after
/// that it belongs to the user. Any pre-existing target (regular file,
/// directory, symlink, even a broken one) counts as present and is never
/// overwritten, and no backup is ever made.
#[derive(Debug, Clone)]
pub struct TemplateResource {
    /// Template file in the repository.
    pub source: PathBuf,
    /// Destination in the home directory.
    pub target: PathBuf,
}

impl TemplateResource {
    /// Create a new template resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

impl Resource for TemplateResource {
    fn description(&self) -> String {
        format!(
            "{} (from {})",
            self.target.display(),
            self.source.display()
        )
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.source.exists() {
            return Ok(ResourceState::Invalid {
                reason: format!("template does not exist: {}", self.source.display()),
            });
        }

        // symlink_metadata (not exists) so that a broken symlink still
        // counts as present and is left alone.
        if self.target.symlink_metadata().is_ok() {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        if !self.source.exists() {
            return Ok(ResourceChange::Skipped {
                reason: format!("template does not exist: {}", self.source.display()),
            });
        }

        if self.target.symlink_metadata().is_ok() {
            return Ok(ResourceChange::AlreadyCorrect);
        }

        fs::ensure_parent_dir(&self.target)?;

        std::fs::copy(&self.source, &self.target).map_err(|source| {
            ResourceError::TemplateCopy {
                target: self.target.clone(),
                source,
            }
        })?;

        Ok(ResourceChange::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join(".zshrc.local.template");
        let target = dir.path().join(".zshrc.local");
        std::fs::write(&source, "# customize me\n").unwrap();
        (dir, source, target)
    }

    #[test]
    fn invalid_when_template_missing() {
        let dir = tempfile::tempdir().unwrap();
        let resource = TemplateResource::new(
            dir.path().join("nonexistent"),
            dir.path().join("target"),
        );
        assert!(matches!(
            resource.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));
    }

    #[test]
    fn missing_when_target_absent() {
        let (_dir, source, target) = fixture();
        let resource = TemplateResource::new(source, target);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Missing);
    }

    #[test]
    fn correct_when_target_exists() {
        let (_dir, source, target) = fixture();
        std::fs::write(&target, "user edits").unwrap();
        let resource = TemplateResource::new(source, target);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[cfg(unix)]
    #[test]
    fn correct_even_when_target_is_broken_symlink() {
        let (dir, source, target) = fixture();
        std::os::unix::fs::symlink(dir.path().join("gone"), &target).unwrap();
        let resource = TemplateResource::new(source, target);
        assert_eq!(resource.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn apply_copies_template_byte_for_byte() {
        let (_dir, source, target) = fixture();
        let resource = TemplateResource::new(source.clone(), target.clone());

        let change = resource.apply().unwrap();

        assert_eq!(change, ResourceChange::Applied);
        assert_eq!(
            std::fs::read(&target).unwrap(),
            std::fs::read(&source).unwrap()
        );
        let meta = target.symlink_metadata().unwrap();
        assert!(meta.is_file(), "target should be a real file, not a link");
    }

    #[test]
    fn apply_never_overwrites_existing_target() {
        let (_dir, source, target) = fixture();
        std::fs::write(&target, "user edits").unwrap();
        let resource = TemplateResource::new(source, target.clone());

        let change = resource.apply().unwrap();

        assert_eq!(change, ResourceChange::AlreadyCorrect);
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "user edits");
        assert!(
            fs::backup_path(&target).symlink_metadata().is_err(),
            "copy-if-absent must never create a backup"
        );
    }

    #[test]
    fn apply_creates_parent_directories() {
        let (dir, source, _) = fixture();
        let target = dir.path().join("nested").join(".gitconfig.local");
        let resource = TemplateResource::new(source, target.clone());

        resource.apply().unwrap();

        assert!(target.is_file());
    }

    #[test]
    fn apply_skips_when_template_missing() {
        let dir = tempfile::tempdir().unwrap();
        let resource = TemplateResource::new(
            dir.path().join("nonexistent"),
            dir.path().join("target"),
        );
        assert!(matches!(
            resource.apply().unwrap(),
            ResourceChange::Skipped { .. }
        ));
    }

    #[test]
    fn apply_twice_is_idempotent() {
        let (_dir, source, target) = fixture();
        let resource = TemplateResource::new(source, target.clone());

        assert_eq!(resource.apply().unwrap(), ResourceChange::Applied);
        std::fs::write(&target, "user edits after install").unwrap();
        assert_eq!(resource.apply().unwrap(), ResourceChange::AlreadyCorrect);
        assert_eq!(
            std::fs::read_to_string(&target).unwrap(),
            "user edits after install"
        );
    }
}
