//! Interactive terminal front end.
//!
//! Reads commands line by line and feeds them to the [`RequestCoordinator`].
//! The line source is shared with the view so delete confirmations read
//! from the same input.

mod command;

pub use command::{Command, CommandError, HELP};

use crate::coordinator::RequestCoordinator;
use crate::formatter::status_label;
use crate::view::SharedLines;
use anyhow::Result;
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{debug, info};

/// Run the command loop until `quit` or end of input.
///
/// The full list is loaded once before the first command is read. On end of
/// input a pending search is resolved immediately instead of being dropped.
pub async fn run<R, W>(coordinator: RequestCoordinator, input: SharedLines<R>, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write,
{
    coordinator.load_all().await;

    loop {
        let line = {
            let mut lines = input.lock().await;
            lines.next_line().await?
        };

        let Some(line) = line else {
            debug!("End of input");
            if let Some(outcome) = coordinator.flush_search().await {
                debug!(?outcome, "Resolved pending search at end of input");
            }
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => dispatch(&coordinator, command, out).await?,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    info!("Command loop finished");
    Ok(())
}

async fn dispatch<W: Write>(coordinator: &RequestCoordinator, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Search(text) => coordinator.on_search_input(&text),
        Command::Find(field, text) => {
            coordinator.search_by(field, &text).await;
        }
        Command::List => {
            coordinator.load_all().await;
        }
        Command::New => coordinator.open_new(),
        Command::Edit(id) => {
            coordinator.open_edit(id).await;
        }
        Command::Save(draft) => {
            if !coordinator.session().is_open() {
                writeln!(out, "No form is open; use `new` or `edit <id>` first")?;
            } else {
                coordinator.save(draft).await;
            }
        }
        Command::Cancel => coordinator.close_form(),
        Command::Delete(id) => {
            coordinator.remove(id).await;
        }
        Command::Status => {
            let session = coordinator.session();
            let form = match session.current_id() {
                Some(id) => format!("editing #{}", id),
                None if session.is_open() => "new entry".to_string(),
                None => "closed".to_string(),
            };
            writeln!(
                out,
                "{} | form: {} | search: {:?} ({:?})",
                status_label(coordinator.status()),
                form,
                coordinator.latest_query(),
                coordinator.debounce_state()
            )?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit | Command::Nothing => {}
    }
    Ok(())
}
