//! Interactive page session.
//!
//! Stands in for the browser page: the renderer draws the widget, the
//! shell turns typed commands into form submissions and rendered actions.

use std::io::{self, BufRead, Write};

use tracing::debug;

use switcher_core::Page;
use switcher_protocols::{Action, CookieJar, Renderer};

const HELP: &str = "\
Commands:
  add [username [password]]  register an account and sign in (prompts for missing fields)
  login <n>                  sign in as entry n of the list
  logout                     sign out, keeping the account
  remove                     delete the signed-in account
  show                       draw the widget again
  help                       show this help
  quit                       end the session
";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Add {
        username: Option<String>,
        password: Option<String>,
    },
    Login(usize),
    Logout,
    Remove,
    Show,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub(crate) fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Command::Empty;
    };
    let args: Vec<&str> = words.collect();

    match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("add", []) => Command::Add {
            username: None,
            password: None,
        },
        ("add", [username]) => Command::Add {
            username: Some(username.to_string()),
            password: None,
        },
        ("add", [username, password]) => Command::Add {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        },
        ("add", _) => Command::Invalid(
            "add takes at most a username and a password; use the prompts for values with spaces"
                .to_string(),
        ),
        ("login", [number]) => match number.parse() {
            Ok(n) => Command::Login(n),
            Err(_) => Command::Invalid(format!("'{}' is not an entry number", number)),
        },
        ("login", _) => Command::Invalid("usage: login <n>".to_string()),
        ("logout", []) => Command::Logout,
        ("remove", []) => Command::Remove,
        ("show", []) => Command::Show,
        ("help" | "?", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => Command::Invalid(format!("unknown command '{}'", other)),
    }
}

/// Read one line without its line ending. `None` on end of input.
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, label: &str) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(Some(trimmed.to_string()))
}

/// Run commands until `quit` or end of input.
pub(crate) fn run<J, R, I, O>(page: &mut Page<J, R>, input: &mut I, out: &mut O) -> io::Result<()>
where
    J: CookieJar,
    R: Renderer,
    I: BufRead,
    O: Write,
{
    writeln!(out, "Type 'help' for commands.")?;

    loop {
        let Some(line) = prompt(input, out, "> ")? else {
            break;
        };
        let command = parse_command(&line);
        debug!("Shell command {:?}", std::mem::discriminant(&command));

        match command {
            Command::Add { username, password } => {
                let username = match username {
                    Some(username) => username,
                    None => match prompt(input, out, "Username: ")? {
                        Some(username) => username,
                        None => break,
                    },
                };
                let password = match password {
                    Some(password) => password,
                    None => match prompt(input, out, "Password: ")? {
                        Some(password) => password,
                        None => break,
                    },
                };
                page.form_mut().fill(username, password);
                page.submit();
            }
            Command::Login(number) => match page.store().view().entry(number).map(|e| e.action) {
                Some(action) => page.dispatch(action),
                None => writeln!(out, "No entry {} in the list.", number)?,
            },
            Command::Logout | Command::Remove if page.store().active_account().is_none() => {
                writeln!(out, "Nobody is signed in.")?;
            }
            Command::Logout => page.dispatch(Action::LogOut),
            Command::Remove => page.dispatch(Action::Remove),
            Command::Show => page.store_mut().refresh(),
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => break,
            Command::Empty => {}
            Command::Invalid(message) => {
                writeln!(out, "{}", message)?;
                write!(out, "{}", HELP)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
