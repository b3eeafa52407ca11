//! filesift CLI binary entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use filesift::{ActionKind, CombineMode, FileSift, RunConfig};

/// Count, copy, move, print or delete files selected by a wildcard name
/// pattern and content search terms.
#[derive(Parser)]
#[command(name = "filesift")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print invocation examples
    #[arg(long, exclusive = true)]
    example: bool,

    /// Print the copyright notice
    #[arg(long, exclusive = true)]
    copyright: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Count matching files
    Count(SelectArgs),

    /// Copy matching files into an output directory
    Cp(TransferArgs),

    /// Move matching files into an output directory
    Mv(TransferArgs),

    /// Print the names of matching files
    Print(SelectArgs),

    /// Delete matching files
    Rm(SelectArgs),
}

#[derive(Args)]
struct SelectArgs {
    /// Input directory; its final component may carry a `*` name filter
    input: String,

    /// Content terms the file body must contain
    terms: Vec<String>,

    #[command(flatten)]
    options: CommonOptions,
}

#[derive(Args)]
struct TransferArgs {
    /// Input directory; its final component may carry a `*` name filter
    input: String,

    /// Output directory
    output: PathBuf,

    /// Content terms the file body must contain
    terms: Vec<String>,

    #[command(flatten)]
    options: CommonOptions,
}

#[derive(Args)]
struct CommonOptions {
    /// Iterate files recursively
    #[arg(short, long)]
    recursive: bool,

    /// Combine content terms with OR instead of AND
    #[arg(short = 'o', long = "or")]
    any_term: bool,

    /// Don't output warnings to screen when reading files
    #[arg(short, long)]
    silent: bool,
}

impl CommonOptions {
    fn combine(&self) -> CombineMode {
        if self.any_term {
            CombineMode::Any
        } else {
            CombineMode::All
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.example {
        print_example();
        return ExitCode::SUCCESS;
    }
    if cli.copyright {
        print_copyright();
        return ExitCode::SUCCESS;
    }

    let Some(command) = cli.command else {
        println!("Run 'filesift --help' for usage.");
        return ExitCode::SUCCESS;
    };

    let config = match command {
        Command::Count(args) => select_config(ActionKind::Count, args),
        Command::Print(args) => select_config(ActionKind::Print, args),
        Command::Rm(args) => select_config(ActionKind::Remove, args),
        Command::Cp(args) => transfer_config(ActionKind::Copy, args),
        Command::Mv(args) => transfer_config(ActionKind::Move, args),
    };

    match FileSift::run(config) {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            println!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn select_config(action: ActionKind, args: SelectArgs) -> RunConfig {
    RunConfig::builder(action, &args.input)
        .recursive(args.options.recursive)
        .combine(args.options.combine())
        .silent(args.options.silent)
        .terms(args.terms)
        .build()
}

fn transfer_config(action: ActionKind, args: TransferArgs) -> RunConfig {
    RunConfig::builder(action, &args.input)
        .output_dir(args.output)
        .recursive(args.options.recursive)
        .combine(args.options.combine())
        .silent(args.options.silent)
        .terms(args.terms)
        .build()
}

fn print_example() {
    println!("\nEXAMPLES");
    println!("   filesift cp ./ ../bak bob alice");
    println!("   filesift mv \"./*.txt\" ../bak bob alice");
    println!("   filesift rm \"./*.txt\" bob alice -r");
}

fn print_copyright() {
    println!("Distributed under the MIT license or the Apache License, Version 2.0.");
}
