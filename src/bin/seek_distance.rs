use clap::Parser;
use organpipe::io_utils::{io_cli_error, organpipe_cli_error};
use organpipe::{read_lbas, Trace};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Replay a block trace against a modeled 1-D disk and report the total
/// seek distance of its layout.
///
/// With --layout the listed LBAs (organ-pipe output, typically) are first
/// packed into consecutive slots so the reordered layout can be compared
/// against the first-touch baseline.
#[derive(Parser)]
struct Args {
    /// Trace file, one LBA per line
    trace: PathBuf,
    /// File listing LBAs to pack into consecutive slots, one per line
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Slot where the packed run begins; defaults to the disk center
    #[arg(long)]
    start: Option<usize>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file =
        File::open(&args.trace).map_err(|e| io_cli_error("opening trace", &args.trace, e))?;
    let mut trace = Trace::read_from(BufReader::new(file))
        .map_err(|e| organpipe_cli_error("loading trace", e))?;

    let mut packed = None;
    if let Some(path) = &args.layout {
        let file = File::open(path).map_err(|e| io_cli_error("opening layout", path, e))?;
        let run = read_lbas(BufReader::new(file))
            .map_err(|e| organpipe_cli_error("loading layout", e))?;
        let outside = trace.unique_lbas().saturating_sub(run.len());
        let start = args.start.unwrap_or(outside / 2);
        trace
            .apply_layout(&run, start)
            .map_err(|e| organpipe_cli_error("applying layout", e))?;
        packed = Some((run.len(), start));
    }

    let distance = trace.total_seek_distance();
    if args.json {
        let report = serde_json::json!({
            "accesses": trace.accesses(),
            "unique_lbas": trace.unique_lbas(),
            "total_seek_distance": distance,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some((len, start)) = packed {
            eprintln!("Packed {len} LBAs starting at slot {start}");
        }
        println!("Accesses: {}", trace.accesses());
        println!("Distinct LBAs: {}", trace.unique_lbas());
        println!("Total seek distance: {}", distance);
    }
    Ok(())
}
