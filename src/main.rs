use std::{fs, process::ExitCode};

use clap::Parser;
use erl::{
    interpreter::{console::StdConsole, evaluator::core::Context},
    repl,
};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `ERL_LOG=debug`.
const LOG_ENV: &str = "ERL_LOG";

/// erl runs programs written in ERL, a small line-oriented teaching language.
///
/// Without CONTENTS an interactive shell starts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells erl to read CONTENTS as a file path instead of program text.
    #[arg(short, long)]
    file: bool,

    /// Echo the value of every top-level expression statement.
    #[arg(short, long)]
    echo: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let Some(contents) = args.contents else {
        return match repl::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Terminal error: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let lines: Vec<&str> = script.lines().collect();
    let mut context = Context::with_console(StdConsole).with_echo(args.echo);

    match context.run(&lines) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.report(&lines));
            ExitCode::FAILURE
        },
    }
}
