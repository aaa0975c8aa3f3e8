//! Formline - Flatten spreadsheet formulas and make their references indirect

mod cli;
mod config;
mod prompt;

use anyhow::Context;
use formline_core::{FormulaSource, convert, read_formula_source};
use std::io;

fn run(args: cli::Args) -> anyhow::Result<String> {
    let (config, warnings) = if args.no_config {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(args.config_file.as_ref())
    };
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mode = if args.flat {
        None
    } else {
        args.mode()?.or_else(|| config.implied_mode())
    };
    let indirect = prompt::Indirect::from_choice(args.flat, mode);

    match args.source {
        Some(source) => {
            let raw = read_formula_source(&source).with_context(|| match &source {
                FormulaSource::File(path) => format!("Failed to read {}", path.display()),
                FormulaSource::Stdin => "Failed to read stdin".to_string(),
                FormulaSource::Inline(_) => "Failed to read formula".to_string(),
            })?;
            Ok(convert(&raw, mode))
        }
        None => {
            let stdin = io::stdin();
            let mut walkthrough =
                prompt::Walkthrough::new(stdin.lock(), io::stdout(), config.default_mode)
                    .with_indirect(indirect);
            Ok(walkthrough.run()?)
        }
    }
}

fn main() {
    let args = match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };
    if args.help {
        println!("{}", cli::USAGE);
        return;
    }

    match run(args) {
        Ok(formula) => println!("{}", formula),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
