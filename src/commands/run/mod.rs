//! `interviewer run` command - the interview session
//!
//! Commands are read line by line from stdin or `--script`. Errors inside the
//! session are reported and the session carries on; only `finish` hands the
//! interview off. Running out of input without `finish` abandons it.

mod parse;
mod view;

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use crate::cli::args::RunArgs;
use crate::cli::format::output_by_format;
use crate::cli::paths::resolve_against;
use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json_status, print_records_data, print_records_header};
use crate::commands::{summary, tracks};
use interviewer_core::bank::Language;
use interviewer_core::error::{InterviewError, Result};
use interviewer_core::handoff::{Handoff, MemoryHandoff};
use interviewer_core::session::{Action, ActiveInterview, Session};
use interviewer_core::snapshot::Snapshot;
use interviewer_core::summary::Summary;
use interviewer_core::track::InterviewTrack;
use interviewer_core::workspace::Workspace;
use parse::{parse_line, SessionCommand};

const PROMPT: &str = "interviewer> ";

/// Where a finished interview goes
enum Destination {
    /// Print the summary in-process
    Memory,
    /// Leave it in the workspace for `summary` / `export`
    Workspace(Workspace),
}

/// How the session ended
enum Outcome {
    Finished(Snapshot),
    Quit,
    EndOfInput,
}

enum Flow {
    Continue,
    Finish(Snapshot),
    Quit,
}

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let (destination, config) = if args.summary {
        let config = ctx.config()?;
        (Destination::Memory, config)
    } else {
        let workspace = ctx.workspace()?;
        let config = workspace.config().clone();
        (Destination::Workspace(workspace), config)
    };
    let language = args.lang.unwrap_or(config.language);

    let interactive = args.script.is_none() && io::stdin().is_terminal();
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(open_script(&resolve_against(ctx.root, path))?),
        None => Box::new(io::stdin().lock()),
    };

    let mut repl = Repl::new(ctx.cli, language, config.duration_label, interactive);
    repl.select_initial_track(args.track.as_deref())?;

    match repl.run(input)? {
        Outcome::Finished(snapshot) => deliver(ctx.cli, destination, snapshot),
        Outcome::Quit => report_abandoned(ctx.cli, "quit"),
        Outcome::EndOfInput => {
            if !ctx.cli.quiet {
                eprintln!(
                    "warning: input ended before `finish`; the interview was abandoned and nothing was saved"
                );
            }
            report_abandoned(ctx.cli, "end of input")
        }
    }
}

fn open_script(path: &Path) -> Result<BufReader<File>> {
    let file =
        File::open(path).map_err(|e| InterviewError::io_operation("open", path.display(), e))?;
    Ok(BufReader::new(file))
}

/// Hand the snapshot to its destination and report it
fn deliver(cli: &Cli, destination: Destination, snapshot: Snapshot) -> Result<()> {
    match destination {
        Destination::Memory => {
            let mut channel = MemoryHandoff::new();
            channel.put(snapshot)?;
            match channel.take()? {
                Some(snapshot) => summary::render(cli, &Summary::from_snapshot(snapshot), None),
                None => summary::print_no_summary(cli),
            }
        }
        Destination::Workspace(workspace) => {
            let assessment = snapshot.assessment();
            let track = snapshot.track;
            let mut channel = workspace.handoff();
            channel.put(snapshot)?;
            info!(track = %track, path = %channel.path().display(), "interview_handed_off");

            let handoff = channel.path().display().to_string();
            output_by_format!(cli.format,
                json => print_json_status(
                    "finished",
                    Some("Interview finished"),
                    &[
                        ("track", json!(track)),
                        ("handoff", json!(handoff)),
                        ("verdict", json!(assessment.verdict.label())),
                        ("total_score", json!(assessment.total_score)),
                        ("max_score", json!(assessment.max_score)),
                    ],
                ),
                human => {
                    println!(
                        "Interview finished: {} ({}/{}).",
                        assessment.verdict, assessment.total_score, assessment.max_score
                    );
                    if !cli.quiet {
                        println!(
                            "Run `interviewer summary` to review it or `interviewer export` to save it."
                        );
                    }
                },
                records => {
                    print_records_header("run", &[("track", track.as_str()), ("status", "finished")]);
                    print_records_data("handoff", &handoff);
                }
            )
        }
    }
}

fn report_abandoned(cli: &Cli, reason: &str) -> Result<()> {
    info!(reason, "interview_abandoned");
    output_by_format!(cli.format,
        json => print_json_status(
            "abandoned",
            Some("Interview abandoned; nothing was saved"),
            &[("reason", json!(reason))],
        ),
        human => {
            if !cli.quiet {
                println!("Interview abandoned; nothing was saved.");
            }
        },
        records => {
            print_records_header("run", &[("status", "abandoned")]);
        }
    )
}

/// Line-driven session over a [`Session`]
struct Repl<'a> {
    cli: &'a Cli,
    session: Session,
    language: Language,
    duration_label: String,
    interactive: bool,
    started_at: Option<Instant>,
}

impl<'a> Repl<'a> {
    fn new(cli: &'a Cli, language: Language, duration_label: String, interactive: bool) -> Self {
        Self {
            cli,
            session: Session::new(),
            language,
            duration_label,
            interactive,
            started_at: None,
        }
    }

    /// Transcript output is for humans only; json and records print the
    /// outcome alone
    fn human(&self) -> bool {
        self.cli.format == OutputFormat::Human
    }

    fn select_initial_track(&mut self, track: Option<&str>) -> Result<()> {
        match track {
            Some(id) => self.select_track(id),
            None => {
                if self.human() && !self.cli.quiet {
                    println!("Choose a track with `track <id>`:");
                    tracks::print_track_list();
                }
                Ok(())
            }
        }
    }

    fn run(&mut self, input: Box<dyn BufRead>) -> Result<Outcome> {
        self.prompt();
        for line in input.lines() {
            let line = line.map_err(|e| InterviewError::io_operation("read", "session input", e))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                self.prompt();
                continue;
            }

            match parse_line(line).and_then(|command| self.handle(command)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Finish(snapshot)) => return Ok(Outcome::Finished(snapshot)),
                Ok(Flow::Quit) => return Ok(Outcome::Quit),
                Err(e) => self.report(&e),
            }
            self.prompt();
        }
        Ok(Outcome::EndOfInput)
    }

    fn prompt(&self) {
        if self.interactive && self.human() {
            print!("{}", PROMPT);
            // A failed flush only delays the prompt.
            let _ = io::stdout().flush();
        }
    }

    /// Report a command error without ending the session
    fn report(&self, error: &InterviewError) {
        debug!(error = %error, "session_command_failed");
        if self.cli.format == OutputFormat::Json {
            eprintln!("{}", error.to_json());
        } else {
            eprintln!("error: {}", error);
        }
    }

    fn elapsed_minutes(&self) -> u32 {
        self.started_at
            .map(|start| u32::try_from(start.elapsed().as_secs() / 60).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }

    /// The active interview, or an error naming what was attempted
    fn active(&self, attempted: &str) -> Result<&ActiveInterview> {
        self.session
            .active()
            .ok_or_else(|| InterviewError::invalid_transition(attempted, self.session.state_name()))
    }

    fn handle(&mut self, command: SessionCommand) -> Result<Flow> {
        match command {
            SessionCommand::Track(id) => self.select_track(&id)?,
            SessionCommand::Tracks => {
                if self.human() {
                    tracks::print_track_list();
                }
            }
            SessionCommand::Status => {
                let active = self.active("show the status")?;
                if self.human() {
                    view::print_status(active, self.language, self.elapsed_minutes());
                }
            }
            SessionCommand::Blocks => {
                let active = self.active("list blocks")?;
                if self.human() {
                    view::print_blocks(active);
                }
            }
            SessionCommand::Block(reference) => self.select_block(&reference)?,
            SessionCommand::Next => self.advance_block()?,
            SessionCommand::Ask(id) => {
                self.session.apply(Action::SelectQuestion(id))?;
                if let (true, Some(active)) = (self.human(), self.session.active()) {
                    view::print_selected_question(active, self.language);
                }
            }
            SessionCommand::Note(line) => self.apply_quietly(Action::AppendNote(line), "Noted.")?,
            SessionCommand::Notes(text) => {
                self.apply_quietly(Action::SetNotes(text), "Notes replaced.")?
            }
            SessionCommand::Score { criterion, score } => {
                self.session.apply(Action::SetScore {
                    criterion: criterion.clone(),
                    score,
                })?;
                self.confirm_score(&criterion);
            }
            SessionCommand::Evidence { criterion, text } => self.apply_quietly(
                Action::SetEvidence { criterion, text },
                "Evidence recorded.",
            )?,
            SessionCommand::Flag { reference, flagged } => self.toggle_flag(&reference, flagged)?,
            SessionCommand::Rubric => {
                let active = self.active("show the rubric")?;
                if self.human() {
                    view::print_rubric(active);
                }
            }
            SessionCommand::Help => {
                if self.human() {
                    println!("{}", view::HELP);
                }
            }
            SessionCommand::Finish => return self.finish(),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Track selection. An unknown id before the interview starts sends the
    /// interviewer back to the track list instead of failing.
    fn select_track(&mut self, id: &str) -> Result<()> {
        let track = match id.parse::<InterviewTrack>() {
            Ok(track) => track,
            Err(e) if matches!(self.session, Session::Unstarted) => {
                debug!(error = %e, "track_redirect");
                if self.human() {
                    println!("Unknown track `{}`. Choose one of:", id.trim());
                    tracks::print_track_list();
                }
                return Ok(());
            }
            Err(_) => {
                return Err(InterviewError::invalid_transition(
                    "select a track",
                    self.session.state_name(),
                ))
            }
        };

        self.session.apply(Action::SelectTrack(track))?;
        self.started_at = Some(Instant::now());
        if let (true, Some(active)) = (self.human(), self.session.active()) {
            view::print_started(active, self.language);
        }
        Ok(())
    }

    fn select_block(&mut self, reference: &str) -> Result<()> {
        let plan = self.active("select a block")?.plan();
        let index = match plan.find_block(reference) {
            Some(index) => index,
            None => {
                return Err(match reference.trim().parse::<usize>() {
                    Ok(number) => InterviewError::BlockOutOfRange {
                        number,
                        len: plan.blocks.len(),
                    },
                    Err(_) => InterviewError::invalid_value("block", reference),
                })
            }
        };
        self.session.apply(Action::SelectBlock(index))?;
        self.show_current_block();
        Ok(())
    }

    fn advance_block(&mut self) -> Result<()> {
        let was_last = self.active("advance to the next block")?.is_last_block();
        self.session.apply(Action::AdvanceBlock)?;
        if was_last {
            if self.human() {
                println!("Already at the last block. Use `finish` to end the interview.");
            }
        } else {
            self.show_current_block();
        }
        Ok(())
    }

    fn show_current_block(&self) {
        if let (true, Some(active)) = (self.human(), self.session.active()) {
            view::print_current_block(active, self.language, None);
        }
    }

    fn apply_quietly(&mut self, action: Action, confirmation: &str) -> Result<()> {
        self.session.apply(action)?;
        if self.human() && !self.cli.quiet {
            println!("{}", confirmation);
        }
        Ok(())
    }

    fn confirm_score(&self, criterion: &str) {
        if !self.human() || self.cli.quiet {
            return;
        }
        if let Some(active) = self.session.active() {
            let running = view::running_assessment(active);
            let score = active.scores().get(criterion).map(|s| s.value()).unwrap_or(0);
            println!(
                "{} = {} (running total {}/{})",
                criterion, score, running.total_score, running.max_score
            );
        }
    }

    fn toggle_flag(&mut self, reference: &str, flagged: bool) -> Result<()> {
        let label = self
            .active("toggle a red flag")?
            .plan()
            .rubric
            .resolve_red_flag(reference)
            .ok_or_else(|| InterviewError::UnknownRedFlag {
                label: reference.to_string(),
            })?;
        self.session.apply(Action::ToggleRedFlag {
            label: label.to_string(),
            flagged,
        })?;
        if self.human() && !self.cli.quiet {
            let state = if flagged { "raised" } else { "cleared" };
            println!("Red flag {}: {}", state, label);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<Flow> {
        let action = Action::Finish {
            at: Utc::now(),
            duration: self.duration_label.clone(),
        };
        match self.session.apply(action)? {
            Some(snapshot) => Ok(Flow::Finish(snapshot)),
            None => Err(InterviewError::Other(
                "finishing the interview produced no snapshot".to_string(),
            )),
        }
    }
}
