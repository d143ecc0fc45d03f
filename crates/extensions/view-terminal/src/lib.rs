//! Plain text renderer for the Switcher widget.
//!
//! Roster entries are numbered from 1 so a shell can refer to them.

use std::io::Write;

use switcher_protocols::{RenderError, Renderer, View};

/// Renderer writing a text listing to any writer.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

/// Replace control characters so usernames cannot drive the terminal.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

/// Render a view as text lines.
pub fn to_text(view: &View) -> String {
    let mut text = String::new();
    match view {
        View::Profile(profile) => {
            text.push_str(&format!("Signed in as {}\n", sanitize(&profile.username)));
            let buttons: Vec<String> = profile
                .actions
                .iter()
                .map(|a| format!("[{}]", a.label()))
                .collect();
            text.push_str(&format!("  {}\n", buttons.join("  ")));
        }
        View::Roster { entries } if entries.is_empty() => {
            text.push_str("No accounts yet.\n");
            text.push_str("Add account form is open.\n");
        }
        View::Roster { entries } => {
            text.push_str("Accounts:\n");
            let width = entries
                .iter()
                .map(|e| sanitize(&e.username).chars().count())
                .max()
                .unwrap_or(0);
            for (i, entry) in entries.iter().enumerate() {
                text.push_str(&format!(
                    "  {}) {:<width$}  [{}]\n",
                    i + 1,
                    sanitize(&entry.username),
                    entry.action.label(),
                    width = width
                ));
            }
            text.push_str("Add account form is open.\n");
        }
    }
    text
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn id(&self) -> &str {
        "terminal"
    }

    fn render(&mut self, view: &View) -> Result<(), RenderError> {
        self.out.write_all(to_text(view).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
