use clap::Parser;
use organpipe::io_utils::{io_cli_error, simple_cli_error, stdin_cli_error};
use organpipe::stats::RankStats;
use organpipe::FreqTable;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Count LBA frequencies in a trace and print them most to least frequent.
///
/// The default output is one bare LBA per line, ready to pipe into
/// `organpipe`.
#[derive(Parser)]
struct Args {
    /// Input trace file, one LBA per line. Reads standard input when omitted.
    input: Option<PathBuf>,
    /// Only print the N most frequent LBAs
    #[arg(long)]
    top: Option<usize>,
    /// Append the access count to each printed line
    #[arg(long)]
    counts: bool,
    /// Optional CSV output path for the full ranking
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Optional JSON output path for the full ranking
    #[arg(long)]
    json: Option<PathBuf>,
    /// Report progress to stderr every N lines (0 disables)
    #[arg(long, default_value_t = 0)]
    status: u64,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut table = FreqTable::new();
    let mut stats = RankStats::new();
    match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| io_cli_error("opening trace", path, e))?;
            scan(BufReader::new(file), &mut table, &mut stats, args.status)
                .map_err(|e| io_cli_error("reading trace", path, e))?;
        }
        None => {
            let stdin = io::stdin();
            scan(stdin.lock(), &mut table, &mut stats, args.status).map_err(stdin_cli_error)?;
        }
    }
    if args.status > 0 {
        stats.report();
    }

    let ranked = table.ranked();

    if let Some(path) = &args.csv {
        let file = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        let mut wtr = csv::Writer::from_writer(file);
        for row in &ranked {
            wtr.serialize(row)
                .map_err(|e| simple_cli_error(&format!("writing csv: {e}")))?;
        }
        wtr.flush().map_err(|e| io_cli_error("writing csv", path, e))?;
    }

    if let Some(path) = &args.json {
        let data = serde_json::to_string_pretty(&ranked)?;
        fs::write(path, data).map_err(|e| io_cli_error("writing json", path, e))?;
    }

    let printed = match args.top {
        Some(n) => &ranked[..n.min(ranked.len())],
        None => &ranked[..],
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for row in printed {
        if args.counts {
            writeln!(out, "{}\t{}", row.lba, row.count)?;
        } else {
            writeln!(out, "{}", row.lba)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn scan(
    reader: impl BufRead,
    table: &mut FreqTable,
    stats: &mut RankStats,
    status: u64,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let token = line.trim_end();
        if token.is_empty() {
            continue;
        }
        let is_new = table.insert(token);
        stats.tick_line(is_new);
        if status > 0 && stats.lines % status == 0 {
            stats.report();
        }
    }
    Ok(())
}
