use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use linecalc::render;

/// linecalc evaluates integer arithmetic expressions, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the parsed expression tree next to each result.
    #[arg(short, long)]
    tree: bool,

    /// Prompt printed before each line in interactive mode.
    #[arg(short, long, default_value = ">> ")]
    prompt: String,

    /// Evaluates this expression once instead of reading from standard input.
    expression: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = &args.expression {
        return match render(expression, args.tree) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if let Err(e) = repl(&args) {
        eprintln!("Failed to read standard input: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Reads lines until end of input, printing one result or error per line.
fn repl(args: &Args) -> io::Result<()> {
    let mut input = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut buffer = String::new();

    loop {
        write!(stdout, "{}", args.prompt)?;
        stdout.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(stdout, "quitting...")?;
            return Ok(());
        }

        let line = buffer.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            continue;
        }

        match render(line, args.tree) {
            Ok(output) => writeln!(stdout, "{output}")?,
            Err(e) => {
                if let Some(offset) = e.offset() {
                    let column = line.get(..offset).map_or(offset, |s| s.chars().count());
                    writeln!(stdout, "{}^", " ".repeat(args.prompt.chars().count() + column))?;
                }
                writeln!(stdout, "error: {e}")?;
            },
        }
    }
}
