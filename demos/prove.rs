//! Builds a natural deduction proof from the command line.
//!
//! Each step is `RULE`, `RULE:IDS` or `RULE:IDS=INPUT`, where IDS is a comma-separated list
//! of step ids (possibly empty).
//!
//! Run with: `cargo run --example prove`
//! With options: `cargo run --example prove -- -p "p -> q" -p "q -> r" -g "p -> r" assume=p mp:3,1 mp:4,2 impl_intro`
//! Or from a bundled exercise: `cargo run --example prove -- --kb "modus ponens" mp:1,2`

use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use fitch_rs::engine::{applicable_rules, apply_rule};
use fitch_rs::knowledge::{knowledge_bases, KnowledgeBase};
use fitch_rs::proof::ProofState;
use fitch_rs::rules::Rule;
use fitch_rs::types::StepId;

#[derive(Parser, Debug)]
#[command(name = "prove")]
#[command(about = "Apply natural deduction rules step by step")]
struct Args {
    /// Premise (repeatable)
    #[arg(short, long = "premise")]
    premises: Vec<String>,

    /// Goal formula
    #[arg(short, long)]
    goal: Option<String>,

    /// Start from a bundled knowledge base instead
    #[arg(long)]
    kb: Option<String>,

    /// List the bundled knowledge bases and exit
    #[arg(long)]
    list: bool,

    /// Steps to apply, in order
    steps: Vec<String>,
}

struct Command {
    rule: &'static Rule,
    selected: Vec<StepId>,
    input: Option<String>,
}

fn parse_command(s: &str) -> color_eyre::Result<Command> {
    let (head, input) = match s.split_once('=') {
        Some((head, input)) => (head, Some(input.to_string())),
        None => (s, None),
    };
    let (id, ids) = head.split_once(':').unwrap_or((head, ""));
    let rule = Rule::by_id(id.trim()).ok_or_else(|| eyre!("unknown rule {:?}", id))?;
    let mut selected = Vec::new();
    for part in ids.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let n: u32 = part.parse()?;
        if n == 0 {
            bail!("step ids start at 1");
        }
        selected.push(StepId::new(n));
    }
    Ok(Command { rule, selected, input })
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    if args.list {
        for kb in knowledge_bases() {
            println!("{}: {:?} |- {:?}", kb.name, kb.premises, kb.goals);
        }
        return Ok(());
    }

    let mut state = if let Some(name) = &args.kb {
        let kb = KnowledgeBase::find(name).ok_or_else(|| eyre!("no knowledge base named {:?}", name))?;
        match &args.goal {
            Some(goal) => kb.start(goal),
            None => kb.start_goal(0).ok_or_else(|| eyre!("{} has no goals", kb.name))?,
        }
    } else if args.premises.is_empty() && args.goal.is_none() {
        // Default walk-through.
        ProofState::new("p -> r", ["p -> q", "q -> r"])
    } else {
        let goal = args.goal.clone().ok_or_else(|| eyre!("--goal is required"))?;
        ProofState::new(goal, args.premises.clone())
    };

    let steps = if args.steps.is_empty() && args.kb.is_none() && args.premises.is_empty() {
        vec!["assume=p".to_string(), "mp:3,1".to_string(), "mp:4,2".to_string(), "impl_intro".to_string()]
    } else {
        args.steps.clone()
    };

    print!("{}", state);
    for s in &steps {
        let command = parse_command(s)?;
        println!("----------------------------------");
        println!("> {}", s);
        match apply_rule(command.rule, &state, &command.selected, command.input.as_deref()) {
            Some(step) => {
                println!("{}", step);
                state.push_step(step);
            }
            None => {
                println!("{} does not apply here", command.rule.kind.name());
            }
        }
    }

    println!("----------------------------------");
    print!("{}", state);
    println!();
    println!("Available rules:");
    for entry in applicable_rules(&state) {
        match &entry.applicability.reason {
            None => println!("  {:<14} ok", entry.rule.id()),
            Some(reason) => println!("  {:<14} {}", entry.rule.id(), reason),
        }
    }
    println!();
    if state.mark_complete() {
        println!("Proof of {} is complete.", state.goal);
    } else {
        println!("Proof of {} is not complete.", state.goal);
    }

    Ok(())
}
