//! Prints the truth table of a formula.
//!
//! Run with: `cargo run --example truth-table -- "p -> q"`
//! With options: `cargo run --example truth-table -- --models "(p -> q) ^ p"`

use std::time::Instant;

use clap::Parser;
use fitch_rs::formula::Formula;
use fitch_rs::truth_table::TruthTable;

#[derive(Parser, Debug)]
#[command(name = "truth-table")]
#[command(about = "Print the truth table of a propositional formula")]
struct Args {
    /// Formula to evaluate
    formula: String,

    /// Also list the satisfying assignments
    #[arg(short, long)]
    models: bool,

    /// Log level
    #[arg(long, default_value_t = simplelog::LevelFilter::Info)]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let formula: Formula = args.formula.parse()?;
    println!("formula = {}", formula);

    let start = Instant::now();
    let table = TruthTable::new(&formula)?;
    let elapsed = start.elapsed();

    println!();
    print!("{}", table);
    println!();
    println!("rows = {} ({:.2?})", table.num_rows(), elapsed);
    println!("classification = {}", table.classify());

    if args.models {
        println!();
        for (i, model) in table.models().enumerate() {
            println!("model {}: {:?}", i + 1, model);
        }
    }

    Ok(())
}
