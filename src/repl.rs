//! Interactive prompt

use std::io::Write;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use skycast_weather::{WeatherSession, WeatherSource};

use crate::report::{render, render_list};

const HELP: &str = "\
Commands:
  <location> | search <location>   look up the weather
  search                           repeat the last lookup
  unit                             switch between Fahrenheit and Celsius
  show                             print the last result again
  fav [location]                   save a favorite (defaults to the last location)
  unfav <location>                 remove a favorite
  favs                             list favorites
  history                          list search history
  clear                            clear search history
  open <n> | open fav <n>          look up entry n from history or favorites
  help                             show this help
  quit                             exit

A location starting with a command word (e.g. \"Fav Town\") needs the
`search` prefix.";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Refresh,
    ToggleUnit,
    Show,
    AddFavorite(Option<String>),
    RemoveFavorite(String),
    Favorites,
    History,
    ClearHistory,
    OpenHistory(usize),
    OpenFavorite(usize),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("", _) => Self::Empty,
            ("quit" | "exit", "") => Self::Quit,
            ("help" | "?", "") => Self::Help,
            ("unit", "") => Self::ToggleUnit,
            ("show", "") => Self::Show,
            ("favs" | "favorites", "") => Self::Favorites,
            ("history", "") => Self::History,
            ("clear", "") => Self::ClearHistory,
            ("search", "") => Self::Refresh,
            ("search", query) => Self::Search(query.to_string()),
            ("fav", "") => Self::AddFavorite(None),
            ("fav", query) => Self::AddFavorite(Some(query.to_string())),
            ("unfav", "") => Self::Invalid("Usage: unfav <location>".to_string()),
            ("unfav", query) => Self::RemoveFavorite(query.to_string()),
            ("open", "") => Self::Invalid("Usage: open <n> | open fav <n>".to_string()),
            ("open", arg) => Self::parse_open(line, arg),
            _ => Self::Search(line.to_string()),
        }
    }

    /// `open <n>` / `open fav <n>`; anything that isn't a number is a place name
    fn parse_open(line: &str, arg: &str) -> Self {
        let (index, favorite) = match arg.strip_prefix("fav") {
            Some(n) => (n.trim(), true),
            None => (arg, false),
        };

        match index.parse::<usize>() {
            Ok(0) => Self::Invalid("List entries start at 1".to_string()),
            Ok(n) if favorite => Self::OpenFavorite(n - 1),
            Ok(n) => Self::OpenHistory(n - 1),
            Err(_) => Self::Search(line.to_string()),
        }
    }
}

/// Whether the prompt should keep going
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

pub async fn run<S: WeatherSource>(session: &mut WeatherSession<S>) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut stdout = std::io::stdout();

    println!("SkyCast - type a location, or `help` for commands.");
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let command = Command::parse(&line);
                if command != Command::Empty {
                    let _ = rl.add_history_entry(line.trim());
                }

                if execute(session, command, &mut stdout).await? == Flow::Stop {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Bye!");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    tracing::debug!("Interactive session ended");
    Ok(())
}

async fn execute<S: WeatherSource, W: Write>(
    session: &mut WeatherSession<S>,
    command: Command,
    out: &mut W,
) -> std::io::Result<Flow> {
    match command {
        Command::Empty => {}
        Command::Quit => return Ok(Flow::Stop),
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Invalid(message) => writeln!(out, "{}", message)?,
        Command::Search(query) => lookup(session, LookupKind::Search(&query), out).await?,
        Command::Refresh => lookup(session, LookupKind::Refresh, out).await?,
        Command::OpenHistory(index) => match session.history().get(index).map(str::to_string) {
            Some(query) => lookup(session, LookupKind::Select(&query), out).await?,
            None => writeln!(out, "No history entry {}", index + 1)?,
        },
        Command::OpenFavorite(index) => match session.favorites().get(index).map(str::to_string) {
            Some(query) => lookup(session, LookupKind::Select(&query), out).await?,
            None => writeln!(out, "No favorite {}", index + 1)?,
        },
        Command::ToggleUnit => {
            let unit = session.toggle_unit();
            writeln!(out, "Showing temperatures in {}", unit.name())?;
            if let Some(report) = render(session) {
                writeln!(out, "{}", report)?;
            }
        }
        Command::Show => match render(session) {
            Some(report) => writeln!(out, "{}", report)?,
            None => writeln!(out, "Nothing to show yet.")?,
        },
        Command::AddFavorite(query) => {
            let query = query.unwrap_or_else(|| session.query().to_string());
            match session.add_favorite(&query) {
                Ok(notice) => writeln!(out, "{}", notice)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        Command::RemoveFavorite(query) => {
            if session.remove_favorite(&query) {
                writeln!(out, "Removed {} from favorites.", query)?;
            }
        }
        Command::Favorites => writeln!(
            out,
            "{}",
            render_list("Favorite Locations", session.favorites().entries(), "none yet")
        )?,
        Command::History => writeln!(
            out,
            "{}",
            render_list("Search History", session.history().entries(), "empty")
        )?,
        Command::ClearHistory => writeln!(out, "{}", session.clear_history())?,
    }
    Ok(Flow::Continue)
}

enum LookupKind<'a> {
    Search(&'a str),
    Select(&'a str),
    Refresh,
}

async fn lookup<S: WeatherSource, W: Write>(
    session: &mut WeatherSession<S>,
    kind: LookupKind<'_>,
    out: &mut W,
) -> std::io::Result<()> {
    let outcome = match kind {
        LookupKind::Search(query) => session.submit(query).await.map(|_| ()),
        LookupKind::Select(query) => session.select(query).await.map(|_| ()),
        LookupKind::Refresh => session.refresh().await.map(|_| ()),
    };

    match outcome {
        Ok(()) => {
            if let Some(report) = render(session) {
                writeln!(out, "{}", report)?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}
