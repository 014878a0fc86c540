use std::io::{BufRead, Write};

use thiserror::Error;

use crate::directory::{DirectoryEvent, DirectoryState, RosterStats, StatusFilter};
use crate::display::Clock;
use crate::output::Renderer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseCommand {
    Event(DirectoryEvent),
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrowseError {
    #[error("unknown command '{command}', type 'help' for the list of commands")]
    UnknownCommand { command: String },

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid status '{value}', expected all, active, inactive or pending")]
    InvalidStatus { value: String },

    #[error("invalid page number '{value}'")]
    InvalidPage { value: String },
}

pub const HELP: &str = "commands:
  search <term>     search by name, email or phone (empty term clears)
  status <filter>   all | active | inactive | pending
  page <n>          go to page n
  next | prev       move one page forward or back
  view <id>         open the detail view of a patient
  close             close the detail view
  stats             show patient counts
  add | edit <id> | delete <id> | export
  help              show this help
  quit              leave the session
";

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, BrowseError> {
    if rest.is_empty() {
        return Err(BrowseError::MissingArgument { command, expected });
    }
    Ok(rest)
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>, BrowseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_lowercase().as_str() {
        "search" | "s" => BrowseCommand::Event(DirectoryEvent::Search(rest.to_string())),
        "status" | "filter" => {
            let value = required(rest, "status", "a status filter")?;
            let filter = StatusFilter::parse(value).ok_or_else(|| BrowseError::InvalidStatus {
                value: value.to_string(),
            })?;
            BrowseCommand::Event(DirectoryEvent::FilterStatus(filter))
        }
        "page" | "p" => {
            let value = required(rest, "page", "a page number")?;
            let page = value
                .parse::<usize>()
                .map_err(|_| BrowseError::InvalidPage {
                    value: value.to_string(),
                })?;
            BrowseCommand::Event(DirectoryEvent::GoToPage(page))
        }
        "next" | "n" => BrowseCommand::Event(DirectoryEvent::NextPage),
        "prev" | "previous" => BrowseCommand::Event(DirectoryEvent::PreviousPage),
        "view" | "v" => {
            let id = required(rest, "view", "a patient id")?;
            BrowseCommand::Event(DirectoryEvent::View(id.to_string()))
        }
        "close" | "c" => BrowseCommand::Event(DirectoryEvent::Close),
        "add" => BrowseCommand::Event(DirectoryEvent::Add),
        "edit" => {
            let id = required(rest, "edit", "a patient id")?;
            BrowseCommand::Event(DirectoryEvent::Edit(id.to_string()))
        }
        "delete" => {
            let id = required(rest, "delete", "a patient id")?;
            BrowseCommand::Event(DirectoryEvent::Delete(id.to_string()))
        }
        "export" => BrowseCommand::Event(DirectoryEvent::Export),
        "stats" => BrowseCommand::Stats,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => {
            return Err(BrowseError::UnknownCommand {
                command: other.to_string(),
            })
        }
    };
    Ok(Some(command))
}

fn format_stats(stats: &RosterStats) -> String {
    format!(
        "Total Patients: {} | Active Patients: {} | Pending: {} | Inactive: {}\n",
        stats.total, stats.active, stats.pending, stats.inactive
    )
}

/// Runs an interactive session until `quit` or end of input.
///
/// The view is rendered once up front and again after every accepted event.
/// Rejected input is reported on `output` and the session continues.
pub fn run_session<R, W>(
    state: &mut DirectoryState,
    renderer: &dyn Renderer,
    clock: &dyn Clock,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: BufRead,
    W: Write,
{
    output.write_all(renderer.render_view(&state.view(clock.today())).as_bytes())?;
    output.write_all(b"> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(BrowseCommand::Quit)) => break,
            Ok(Some(BrowseCommand::Help)) => output.write_all(HELP.as_bytes())?,
            Ok(Some(BrowseCommand::Stats)) => {
                let view = state.view(clock.today());
                output.write_all(format_stats(&view.stats).as_bytes())?;
            }
            Ok(Some(BrowseCommand::Event(event))) => match state.apply(event) {
                Ok(()) => {
                    let rendered = renderer.render_view(&state.view(clock.today()));
                    output.write_all(rendered.as_bytes())?;
                }
                Err(e) => {
                    tracing::info!(error = %e, "event rejected");
                    writeln!(output, "error: {e}")?;
                }
            },
            Err(e) => writeln!(output, "error: {e}")?,
        }
        output.write_all(b"> ")?;
        output.flush()?;
    }
    output.write_all(b"\n")?;
    output.flush()
}
