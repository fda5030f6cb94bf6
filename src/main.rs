use clap::Parser;
use organpipe::io_utils::stdin_cli_error;
use organpipe::{strip_terminator, try_organ_pipe};
use std::io::{self, BufRead, BufWriter, Write};

/// Rewrite a most-to-least-frequent LBA sequence from standard input into
/// organ-pipe order on standard output.
#[derive(Parser)]
#[command(version)]
struct Args {}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // No options are defined; parsing still answers --help/--version and
    // rejects stray arguments.
    let _args = Args::parse();

    let stdin = io::stdin();
    let tokens = try_organ_pipe(
        stdin
            .lock()
            .split(b'\n')
            .map(|line| line.map(strip_terminator)),
    )
    .map_err(stdin_cli_error)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for token in &tokens {
        out.write_all(token)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
