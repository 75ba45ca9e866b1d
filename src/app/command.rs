//! Parsing of terminal input lines into coordinator intents.

use crate::domain::{ContactId, SearchField, ValidationError};
use crate::models::ContactDraft;
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A new value of the search box; goes through the debouncer
    Search(String),
    /// Immediate search against an explicit field
    Find(SearchField, String),
    List,
    New,
    Edit(ContactId),
    Save(ContactDraft),
    Cancel,
    Delete(ContactId),
    Status,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(#[from] ValidationError),
}

pub const HELP: &str = "\
Commands:
  search <text>            type into the search box (empty text shows everything)
  find name|phone <text>   search a specific field right away
  list                     reload all contacts
  new                      open the form for a new entry
  edit <id>                open the form for an existing entry
  save <name> | <phone> [| <email>]
                           submit the open form
  cancel                   close the form
  delete <id>              delete an entry (asks for confirmation)
  status                   show connection and form state
  help                     show this help
  quit                     exit";

impl Command {
    /// Parse a single input line.
    ///
    /// The search text is kept verbatim after the single separating space,
    /// so `search` and `search ` both mean "cleared search box".
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        if line.trim().is_empty() {
            return Ok(Command::Nothing);
        }

        let trimmed = line.trim_start();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "find" => {
                let rest = rest.trim();
                let (field, text) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("find name|phone <text>"))?;
                let text = text.trim();
                if text.is_empty() {
                    return Err(CommandError::Usage("find name|phone <text>"));
                }
                Ok(Command::Find(field.parse()?, text.to_string()))
            }
            "list" | "ls" => Ok(Command::List),
            "new" | "add" => Ok(Command::New),
            "edit" => Ok(Command::Edit(rest.parse()?)),
            "save" => Self::parse_draft(rest).map(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => Ok(Command::Delete(rest.parse()?)),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    fn parse_draft(rest: &str) -> Result<ContactDraft, CommandError> {
        const USAGE: &str = "save <name> | <phone> [| <email>]";

        let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
        match parts.as_slice() {
            [name, phone] => Ok(ContactDraft::new(*name, *phone)),
            [name, phone, email] => Ok(ContactDraft::new(*name, *phone).with_email(*email)),
            _ => Err(CommandError::Usage(USAGE)),
        }
    }
}
