//! Human rendering of session state

use interviewer_core::bank::{InterviewBlock, Language};
use interviewer_core::scoring::{compute_verdict, Assessment, MAX_CRITERION_SCORE};
use interviewer_core::session::ActiveInterview;

pub const HELP: &str = "\
Commands:
  track <id>                   choose frontend, backend or fullstack
  tracks                       list tracks
  status                       current block, question and running score
  blocks                       list blocks
  block <number|id>            jump to a block
  next                         move to the next block
  ask [question-id]            select a question in the current block, or clear
  note <text>                  append a line to the notes
  notes [text]                 replace the notes (empty clears them)
  score <criterion> <0-3>      score a rubric criterion
  evidence <criterion> <text>  record evidence for a criterion
  flag <label|number> [on|off] raise or clear a red flag
  rubric                       show criteria, scores and red flags
  finish                       end the interview and hand off the summary
  quit                         abandon the interview";

pub fn print_started(active: &ActiveInterview, language: Language) {
    let plan = active.plan();
    println!(
        "Started {} interview: {} blocks, {} min.",
        active.track().label(),
        plan.blocks.len(),
        plan.total_minutes()
    );
    print_current_block(active, language, None);
}

/// Current block with its questions; `elapsed` adds the time read-out
pub fn print_current_block(active: &ActiveInterview, language: Language, elapsed: Option<u32>) {
    let block = active.current_block();
    println!(
        "Block {}/{}: {} [{}]",
        active.block_index() + 1,
        active.plan().blocks.len(),
        block.title,
        block.time_range
    );
    if let Some(elapsed) = elapsed {
        let schedule = if block.is_current_at(elapsed) {
            "on schedule"
        } else if elapsed < block.start_minute {
            "ahead of schedule"
        } else {
            "behind schedule"
        };
        println!(
            "  {} min elapsed, {} min left in this block ({})",
            elapsed,
            block.minutes_left(elapsed),
            schedule
        );
    }
    println!("  Goal: {}", block.goal);
    print_questions(block, active, language);
}

fn print_questions(block: &InterviewBlock, active: &ActiveInterview, language: Language) {
    let selected = active.selected_question().map(|q| q.id.as_str());
    for question in &block.questions {
        let marker = if Some(question.id.as_str()) == selected {
            '*'
        } else {
            '-'
        };
        println!("  {} {}  {}", marker, question.id, question.text.get(language));
    }
}

pub fn print_selected_question(active: &ActiveInterview, language: Language) {
    let Some(question) = active.selected_question() else {
        println!("Question cleared.");
        return;
    };
    println!("{}", question.text.get(language));
    for prompt in &question.prompts {
        println!("  > {}", prompt);
    }
    if let Some(direction) = &question.expected_direction {
        println!("  Expected: {}", direction);
    }
}

pub fn print_status(active: &ActiveInterview, language: Language, elapsed: u32) {
    print_current_block(active, language, Some(elapsed));
    let assessment = running_assessment(active);
    println!(
        "  Score so far: {}/{} ({} of {} criteria scored)",
        assessment.total_score,
        assessment.max_score,
        active.scores().len(),
        active.plan().rubric.criteria.len()
    );
    let raised = active.red_flags().values().filter(|f| **f).count();
    if raised > 0 {
        println!("  Red flags raised: {}", raised);
    }
    let note_lines = active.notes().lines().count();
    if note_lines > 0 {
        println!("  Notes: {} line(s)", note_lines);
    }
}

pub fn print_blocks(active: &ActiveInterview) {
    for (index, block) in active.plan().blocks.iter().enumerate() {
        let marker = if index == active.block_index() {
            '>'
        } else {
            ' '
        };
        println!(
            "{} {}. {:<40} {:>10}  ({})",
            marker,
            index + 1,
            block.title,
            block.time_range,
            block.id
        );
    }
}

pub fn print_rubric(active: &ActiveInterview) {
    let rubric = &active.plan().rubric;
    println!("Criteria:");
    for criterion in &rubric.criteria {
        let score = active
            .scores()
            .get(&criterion.id)
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let has_evidence = active
            .evidence()
            .get(&criterion.id)
            .is_some_and(|text| !text.trim().is_empty());
        let evidence = if has_evidence {
            " (evidence)"
        } else {
            ""
        };
        println!(
            "  {:<26} {}/{}  {}{}",
            criterion.id, score, MAX_CRITERION_SCORE, criterion.name, evidence
        );
    }
    println!("Red flags:");
    for (i, label) in rubric.red_flags.iter().enumerate() {
        let raised = active.red_flags().get(label).copied().unwrap_or(false);
        println!("  {}. [{}] {}", i + 1, if raised { 'x' } else { ' ' }, label);
    }
}

/// Totals as they would stand if the interview finished now
pub fn running_assessment(active: &ActiveInterview) -> Assessment {
    compute_verdict(active.scores(), &active.plan().rubric, active.red_flags())
}
