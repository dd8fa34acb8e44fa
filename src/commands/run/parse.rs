//! Session command parsing

use interviewer_core::bail_usage;
use interviewer_core::error::{InterviewError, Result};
use interviewer_core::scoring::Score;

/// One line of session input
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Track(String),
    Tracks,
    Status,
    Blocks,
    Block(String),
    Next,
    Ask(Option<String>),
    Note(String),
    Notes(String),
    Score { criterion: String, score: Score },
    Evidence { criterion: String, text: String },
    Flag { reference: String, flagged: bool },
    Rubric,
    Help,
    Finish,
    Quit,
}

/// Split off the first word, returning it and the trimmed remainder
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn require<'a>(value: &'a str, usage: &str) -> Result<&'a str> {
    if value.is_empty() {
        bail_usage!(format!("usage: {usage}"));
    }
    Ok(value)
}

/// Parse `flag <label|number> [on|off]`; a missing switch means on
fn parse_flag(rest: &str) -> Result<SessionCommand> {
    let rest = require(rest, "flag <label|number> [on|off]")?;
    let (reference, flagged) = match rest.rsplit_once(char::is_whitespace) {
        Some((head, "on")) => (head.trim(), true),
        Some((head, "off")) => (head.trim(), false),
        _ => (rest, true),
    };
    Ok(SessionCommand::Flag {
        reference: reference.to_string(),
        flagged,
    })
}

/// Parse one non-empty input line
pub fn parse_line(line: &str) -> Result<SessionCommand> {
    let (word, rest) = split_word(line);
    let command = match word.to_lowercase().as_str() {
        "track" => SessionCommand::Track(require(rest, "track <id>")?.to_string()),
        "tracks" => SessionCommand::Tracks,
        "status" => SessionCommand::Status,
        "blocks" => SessionCommand::Blocks,
        "block" => SessionCommand::Block(require(rest, "block <number|id>")?.to_string()),
        "next" => SessionCommand::Next,
        "ask" => SessionCommand::Ask((!rest.is_empty()).then(|| rest.to_string())),
        "note" => SessionCommand::Note(require(rest, "note <text>")?.to_string()),
        "notes" => SessionCommand::Notes(rest.to_string()),
        "score" => {
            let (criterion, value) = split_word(rest);
            let criterion = require(criterion, "score <criterion> <0-3>")?;
            let value = require(value, "score <criterion> <0-3>")?;
            SessionCommand::Score {
                criterion: criterion.to_string(),
                score: value.parse()?,
            }
        }
        "evidence" => {
            let (criterion, text) = split_word(rest);
            SessionCommand::Evidence {
                criterion: require(criterion, "evidence <criterion> <text>")?.to_string(),
                text: text.to_string(),
            }
        }
        "flag" => parse_flag(rest)?,
        "rubric" => SessionCommand::Rubric,
        "help" | "?" => SessionCommand::Help,
        "finish" => SessionCommand::Finish,
        "quit" | "exit" => SessionCommand::Quit,
        other => {
            return Err(InterviewError::UsageError(format!(
                "unknown command `{other}`; type `help` for the list"
            )))
        }
    };
    Ok(command)
}
