use crate::core::controller::{Command, NavTarget};
use crate::core::pipeline::{ClassFilter, SortKey};
use crate::domain::model::ChampionId;
use crate::utils::error::{CatalogError, Result};

pub const HELP: &str = "\
Commands:
  home                  show the landing page
  items                 browse the item catalog
  champions             browse the champion list
  sort <key>            name-asc | name-desc | cost-asc | cost-desc (cost keys: items only)
  filter <all|Tag>      filter champions by class, e.g. filter Tank
  open <ChampionId>     open a champion's detail page, e.g. open Garen
  back                  return from a champion page to the list
  click <element-id>    activate a clickable element of the current page
  show                  print the current page summary again
  help                  show this help
  quit                  leave immediately";

/// One line of user input, before it is resolved against the current section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Applies to whichever list is on screen.
    Sort(SortKey),
    Filter(ClassFilter),
    Click(String),
    Show,
    Help,
    Quit,
}

fn argument<'a>(verb: &str, rest: Option<&'a str>) -> Result<&'a str> {
    match rest.map(str::trim) {
        Some(arg) if !arg.is_empty() => Ok(arg),
        _ => Err(CatalogError::command(format!(
            "'{}' needs an argument. Type 'help' for usage.",
            verb
        ))),
    }
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Result<Option<Input>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (line, None),
    };

    let input = match verb.to_ascii_lowercase().as_str() {
        "home" | "landing" => Input::Command(Command::Show(NavTarget::Landing)),
        "items" => Input::Command(Command::Show(NavTarget::Items)),
        "champions" => Input::Command(Command::Show(NavTarget::Champions)),
        "sort" => Input::Sort(argument(verb, rest)?.parse()?),
        "filter" => Input::Filter(argument(verb, rest)?.parse()?),
        "open" => Input::Command(Command::OpenChampion(ChampionId::from(argument(verb, rest)?))),
        "back" => Input::Command(Command::Back),
        "click" => Input::Click(argument(verb, rest)?.to_string()),
        "show" => Input::Show,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => {
            return Err(CatalogError::command(format!(
                "Unknown command '{}'. Type 'help' for the list of commands.",
                other
            )))
        }
    };

    Ok(Some(input))
}
