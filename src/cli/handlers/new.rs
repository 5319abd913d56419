//! New note command handler.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;

use crate::cli::config::Config;
use crate::cli::{NewArgs, NewKind};
use crate::domain::Period;
use crate::vault::{NewNote, NoteCreator};

/// Resolves CLI arguments to the note to create (pure, for testability).
///
/// A periodic kind takes any date inside the period it should cover; the
/// path schema normalizes it to the period's key date. Unique notes are
/// stamped with the current local time and ignore the date argument.
pub fn resolve_new_note(
    kind: NewKind,
    date_arg: Option<&str>,
    today: NaiveDate,
    now: chrono::NaiveDateTime,
) -> Result<NewNote> {
    let date = match date_arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{s}': expected YYYY-MM-DD"))?,
        None => today,
    };

    Ok(match kind {
        NewKind::Unique => NewNote::Unique(now),
        NewKind::Date => NewNote::Periodic(Period::Date, date),
        NewKind::Week => NewNote::Periodic(Period::Week, date),
        NewKind::Month => NewNote::Periodic(Period::Month, date),
        NewKind::Quarter => NewNote::Periodic(Period::Quarter, date),
        NewKind::Year => NewNote::Periodic(Period::Year, date),
    })
}

pub fn handle_new(args: &NewArgs, vault_dir: &Path, config: &Config) -> Result<()> {
    let now = Local::now().naive_local();
    let new = resolve_new_note(args.kind, args.date.as_deref(), now.date(), now)?;

    let creator = NoteCreator::new(vault_dir, config.schema(), &config.templates_folder);
    let path = creator.create(new).context("failed to create note")?;

    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn explicit_date_is_parsed() {
        let new = resolve_new_note(NewKind::Week, Some("2024-01-17"), now().date(), now()).unwrap();
        assert_eq!(
            new,
            NewNote::Periodic(Period::Week, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap())
        );
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let new = resolve_new_note(NewKind::Date, None, now().date(), now()).unwrap();
        assert_eq!(new, NewNote::Periodic(Period::Date, now().date()));
    }

    #[test]
    fn unique_uses_current_time() {
        let new = resolve_new_note(NewKind::Unique, Some("2030-01-01"), now().date(), now()).unwrap();
        assert_eq!(new, NewNote::Unique(now()));
    }

    #[test]
    fn malformed_date_errors() {
        assert!(resolve_new_note(NewKind::Date, Some("2024/01/15"), now().date(), now()).is_err());
    }
}
