//! Placeholder substitution for freshly created notes.

use chrono::NaiveDateTime;
use minijinja::{Environment, context};

/// Values available to note templates.
///
/// Templates are plain markdown with `{{ ... }}` placeholders:
/// `{{ title }}`, `{{ period }}`, `{{ date }}` (ISO date),
/// `{{ datetime }}` (ISO date and time).
#[derive(Debug, Clone)]
pub struct NoteContext {
    /// Period name (`date`, `week`, ... or `unique`).
    pub period: String,
    /// Human-readable heading for the note.
    pub title: String,
    /// The note's key timestamp.
    pub datetime: NaiveDateTime,
}

/// Renders a template with the placeholder values for a new note.
///
/// # Errors
///
/// Returns the underlying minijinja error for syntactically invalid
/// templates.
pub fn expand(template: &str, ctx: &NoteContext) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("note", template)?;
    let tmpl = env.get_template("note")?;

    tmpl.render(context! {
        period => ctx.period,
        title => ctx.title,
        date => ctx.datetime.format("%Y-%m-%d").to_string(),
        datetime => ctx.datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}
