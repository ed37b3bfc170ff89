use fitch_rs::debug::formula_tree;
use fitch_rs::formula::Formula;
use fitch_rs::parser::parse_formula;
use fitch_rs::render::{Notation, RenderConfig};
use fitch_rs::truth_table::equivalent;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let inputs = ["p -> q -> r", "(p -> q) -> r", "!(a && b) <-> !a || !b", "p ∧ ¬q → ⊥", "p @ q", "(p ^ q"];
    for input in inputs {
        println!("----------------------------------");
        println!("input = {:?}", input);
        let parsed = parse_formula(input);
        if let Some(error) = &parsed.error {
            println!("error = {}", error);
            continue;
        }
        println!("latex = {}", parsed.display);

        let f: Formula = input.parse()?;
        println!("ascii = {}", f);
        println!("unicode = {}", f.to_display_with(&RenderConfig::default().with_notation(Notation::Unicode)));
        println!("variables = {:?}", f.variables());
        println!("size = {}, depth = {}", f.size(), f.depth());
        print!("{}", formula_tree(&f));
    }

    let lhs: Formula = "~(p ^ q)".parse()?;
    let rhs: Formula = "~p | ~q".parse()?;
    println!("----------------------------------");
    println!("{} == {}: {}", lhs, rhs, equivalent(&lhs, &rhs)?);

    Ok(())
}
