//! `interviewer plan` command - show a track's interview plan

use crate::cli::args::PlanArgs;
use crate::cli::format::output_by_format;
use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json, print_records_header};
use interviewer_core::bank::{InterviewBlock, InterviewPlan, Language, Question};
use interviewer_core::error::{InterviewError, Result};
use interviewer_core::format::quote_record;
use interviewer_core::plan;
use interviewer_core::scoring::MAX_CRITERION_SCORE;

/// Execute the plan command
pub fn execute(ctx: &CommandContext, args: &PlanArgs) -> Result<()> {
    let plan = plan::resolve_id(&args.track)?;
    let language = match args.lang {
        Some(language) => language,
        None => ctx.config()?.language,
    };

    let selected: Vec<(usize, &InterviewBlock)> = match &args.block {
        Some(reference) => {
            let index = plan
                .find_block(reference)
                .ok_or_else(|| InterviewError::invalid_value("block", reference))?;
            vec![(index, &plan.blocks[index])]
        }
        None => plan.blocks.iter().enumerate().collect(),
    };

    output_by_format!(ctx.cli.format,
        json => match selected.as_slice() {
            [(_, block)] if args.block.is_some() => print_json(block),
            _ => print_json(plan),
        },
        human => {
            if args.block.is_none() {
                print_plan_header(plan);
            }
            for (index, block) in &selected {
                print_block(*index, block, language, args.details);
            }
            if args.block.is_none() {
                print_rubric(plan);
            }
        },
        records => {
            print_records(plan, &selected, language);
        }
    )
}

fn print_plan_header(plan: &InterviewPlan) {
    println!("{}", plan.title);
    println!(
        "{} min, {} blocks, {} questions",
        plan.total_minutes(),
        plan.blocks.len(),
        plan.question_count()
    );
    println!();
}

/// Human rendering of one block; `index` is 0-based, shown 1-based
fn print_block(index: usize, block: &InterviewBlock, language: Language, details: bool) {
    println!(
        "{}. {} [{}, {}]",
        index + 1,
        block.title,
        block.time_range,
        block.duration
    );
    println!("   Goal: {}", block.goal);
    for question in &block.questions {
        print_question(question, language, details);
    }
    println!();
}

fn print_question(question: &Question, language: Language, details: bool) {
    println!("   - {}  {}", question.id, question.text.get(language));
    if !details {
        return;
    }
    for prompt in &question.prompts {
        println!("       > {}", prompt);
    }
    if let Some(direction) = &question.expected_direction {
        println!("       Expected: {}", direction);
    }
}

fn print_rubric(plan: &InterviewPlan) {
    let max = plan.rubric.criteria.len() * usize::from(MAX_CRITERION_SCORE);
    println!("Rubric (0-{} per criterion, max {}):", MAX_CRITERION_SCORE, max);
    for criterion in &plan.rubric.criteria {
        println!(
            "  {:<26} {} - {}",
            criterion.id, criterion.name, criterion.description
        );
    }
    println!();
    println!("Red flags:");
    for (i, label) in plan.rubric.red_flags.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }
}

fn print_records(plan: &InterviewPlan, selected: &[(usize, &InterviewBlock)], language: Language) {
    let blocks = selected.len().to_string();
    let lang = language.to_string();
    print_records_header(
        "plan",
        &[
            ("track", plan.track.as_str()),
            ("blocks", blocks.as_str()),
            ("lang", lang.as_str()),
        ],
    );
    for (index, block) in selected {
        println!(
            "B {} {} {} range={} goal={}",
            index + 1,
            block.id,
            quote_record(&block.title),
            quote_record(&block.time_range),
            quote_record(&block.goal)
        );
        for question in &block.questions {
            println!(
                "Q {} {} {}",
                block.id,
                question.id,
                quote_record(question.text.get(language))
            );
        }
    }
    for criterion in &plan.rubric.criteria {
        println!("C {} {}", criterion.id, quote_record(&criterion.name));
    }
    for (i, label) in plan.rubric.red_flags.iter().enumerate() {
        println!("F {} {}", i + 1, quote_record(label));
    }
}
