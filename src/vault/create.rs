//! Note creation: template resolution, folder setup, placeholder expansion.

use crate::domain::Period;
use crate::infra::fs::{copy_file, ensure_dir, read_to_string, write_atomic};
use crate::infra::{FsError, NoteContext, expand};
use crate::vault::PathSchema;
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The kind of note to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewNote {
    /// A unique note stamped with the given creation time.
    Unique(NaiveDateTime),
    /// A periodic note for the given period and date.
    Periodic(Period, NaiveDate),
}

/// Errors from a note-creation attempt.
///
/// Creation is fail-fast: the first failing step aborts the operation and
/// nothing later runs. Folders created before the failure are not rolled
/// back.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("no template for {kind} notes (expected {path})")]
    TemplateMissing { kind: String, path: PathBuf },

    #[error("note already exists: {path}")]
    TargetExists { path: PathBuf },

    #[error("a file occupies the folder path: {path}")]
    FolderConflict { path: PathBuf },

    #[error("template expansion failed for {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Creates notes from per-period template files.
///
/// Templates live in the vault's templates folder as `<period>.md`
/// (`unique.md` for unique notes). Creation copies the template to the
/// target path and then runs the placeholder substitution pass over the
/// new file's content.
pub struct NoteCreator {
    vault_dir: PathBuf,
    schema: PathSchema,
    templates_folder: PathBuf,
}

impl NoteCreator {
    /// Creates a creator for a vault.
    ///
    /// `templates_folder` is vault-relative.
    pub fn new(
        vault_dir: impl Into<PathBuf>,
        schema: PathSchema,
        templates_folder: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vault_dir: vault_dir.into(),
            schema,
            templates_folder: templates_folder.into(),
        }
    }

    fn template_path(&self, kind: &str) -> PathBuf {
        self.vault_dir
            .join(&self.templates_folder)
            .join(format!("{kind}.md"))
    }

    /// Creates a new note, returning its vault-relative path.
    ///
    /// Steps, in order, each aborting the operation on failure:
    /// 1. resolve the template file ([`CreateError::TemplateMissing`]);
    /// 2. ensure the target's folders exist, creating them recursively
    ///    ([`CreateError::FolderConflict`] when a file is in the way);
    /// 3. refuse an occupied target ([`CreateError::TargetExists`] — no
    ///    overwrite, the existing file is left untouched);
    /// 4. copy the template, then substitute placeholders in the copy.
    pub fn create(&self, new: NewNote) -> Result<PathBuf, CreateError> {
        let (kind, rel_target, ctx) = match new {
            NewNote::Periodic(period, date) => {
                let rel = self.schema.format_path(period, date);
                let title = rel
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
                let datetime = date.and_time(chrono::NaiveTime::MIN);
                (
                    period.name().to_string(),
                    rel,
                    NoteContext {
                        period: period.name().to_string(),
                        title,
                        datetime,
                    },
                )
            }
            NewNote::Unique(stamp) => {
                let basename = stamp.format("%Y%m%d-%H%M%S").to_string();
                (
                    "unique".to_string(),
                    PathBuf::from(format!("{basename}.md")),
                    NoteContext {
                        period: "unique".to_string(),
                        title: basename,
                        datetime: stamp,
                    },
                )
            }
        };

        let template = self.template_path(&kind);
        if !template.is_file() {
            return Err(CreateError::TemplateMissing {
                kind,
                path: template,
            });
        }

        let target = self.vault_dir.join(&rel_target);
        if let Some(parent) = target.parent() {
            ensure_dir(parent).map_err(|e| match e {
                FsError::FolderConflict { path } => CreateError::FolderConflict { path },
                other => CreateError::Fs(other),
            })?;
        }

        if target.exists() {
            return Err(CreateError::TargetExists { path: rel_target });
        }

        copy_file(&template, &target)?;

        let content = read_to_string(&target)?;
        let expanded = expand(&content, &ctx).map_err(|source| CreateError::Template {
            path: rel_target.clone(),
            source,
        })?;
        write_atomic(&target, &expanded)?;

        Ok(rel_target)
    }

    /// Returns the vault root this creator writes into.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn setup() -> (TempDir, NoteCreator) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("_templates")).unwrap();
        fs::write(
            dir.path().join("_templates/date.md"),
            "# {{ title }}\n\n- [ ] plan the day\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("_templates/unique.md"),
            "created {{ datetime }}\n",
        )
        .unwrap();

        let creator = NoteCreator::new(
            dir.path(),
            PathSchema::new("periodic", true),
            "_templates",
        );
        (dir, creator)
    }

    // ===========================================
    // Happy path
    // ===========================================

    #[test]
    fn creates_periodic_note_from_template() {
        let (dir, creator) = setup();

        let rel = creator.create(NewNote::Periodic(Period::Date, jan15())).unwrap();
        assert_eq!(rel, PathBuf::from("periodic/2024/20240115.md"));

        let content = fs::read_to_string(dir.path().join(&rel)).unwrap();
        assert_eq!(content, "# 20240115\n\n- [ ] plan the day\n");
    }

    #[test]
    fn creates_unique_note_at_vault_root() {
        let (dir, creator) = setup();
        let stamp = jan15().and_hms_opt(9, 30, 0).unwrap();

        let rel = creator.create(NewNote::Unique(stamp)).unwrap();
        assert_eq!(rel, PathBuf::from("20240115-093000.md"));

        let content = fs::read_to_string(dir.path().join(&rel)).unwrap();
        assert_eq!(content, "created 2024-01-15 09:30:00\n");
    }

    #[test]
    fn creates_missing_year_folder() {
        let (dir, creator) = setup();
        creator.create(NewNote::Periodic(Period::Date, jan15())).unwrap();
        assert!(dir.path().join("periodic/2024").is_dir());
    }

    // ===========================================
    // Failure modes
    // ===========================================

    #[test]
    fn missing_template_fails() {
        let (_dir, creator) = setup();
        let err = creator
            .create(NewNote::Periodic(Period::Week, jan15()))
            .unwrap_err();
        assert!(matches!(err, CreateError::TemplateMissing { .. }));
    }

    #[test]
    fn second_create_fails_and_leaves_first_untouched() {
        let (dir, creator) = setup();

        let rel = creator.create(NewNote::Periodic(Period::Date, jan15())).unwrap();
        let original = fs::read_to_string(dir.path().join(&rel)).unwrap();

        let err = creator
            .create(NewNote::Periodic(Period::Date, jan15()))
            .unwrap_err();
        assert!(matches!(err, CreateError::TargetExists { .. }));

        let after = fs::read_to_string(dir.path().join(&rel)).unwrap();
        assert_eq!(after, original);
    }

    #[test]
    fn file_blocking_folder_path_fails() {
        let (dir, creator) = setup();
        fs::write(dir.path().join("periodic"), "not a folder").unwrap();

        let err = creator
            .create(NewNote::Periodic(Period::Date, jan15()))
            .unwrap_err();
        assert!(matches!(err, CreateError::FolderConflict { .. }));
    }

    #[test]
    fn broken_template_reports_template_error() {
        let (dir, creator) = setup();
        fs::write(dir.path().join("_templates/date.md"), "{{ unclosed").unwrap();

        let err = creator
            .create(NewNote::Periodic(Period::Date, jan15()))
            .unwrap_err();
        assert!(matches!(err, CreateError::Template { .. }));
    }
}
