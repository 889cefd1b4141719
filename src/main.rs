use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hanoi::builder::{BuildError, PuzzleBuilder};
use hanoi::core::Tower;
use hanoi::solver::SolveError;
use hanoi::transcript::{self, Transcript};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print the moves that solve the Tower of Hanoi.
#[derive(Parser, Debug)]
#[command(name = "hanoi", version, about)]
struct Args {
    /// Number of disks. Prompts on stdin when omitted.
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    disks: Option<i64>,

    /// Label of the peg the disks start on
    #[arg(long, default_value_t = 'X')]
    source: char,

    /// Label of the auxiliary peg
    #[arg(long, default_value_t = 'Y')]
    helper: char,

    /// Label of the peg the disks end on
    #[arg(long, default_value_t = 'Z')]
    destination: char,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Replay the moves on a simulated tower before printing
    #[arg(long)]
    verify: bool,

    /// Exit with a failure status on an illegal disk count
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Exit status for a run that completed normally.
const STATUS_OK: u8 = 0;
/// Exit status for an illegal disk count under `--strict`.
const STATUS_ILLEGAL: u8 = 1;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hanoi=warn")),
        )
        .init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let status = run(
        Args::parse(),
        io::stdin().lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(ExitCode::from(status))
}

/// Run one solve against the given handles and return the exit status.
fn run<R, W, E>(args: Args, input: R, out: &mut W, err: &mut E) -> Result<u8>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let disks = match args.disks {
        Some(disks) => disks,
        None => {
            if args.format == Format::Text {
                write!(out, "{}", transcript::PROMPT)?;
                out.flush()?;
            }
            transcript::read_disk_count(input).context("failed to read the number of disks")?
        }
    };

    let built = PuzzleBuilder::new()
        .source(args.source)
        .helper(args.helper)
        .destination(args.destination)
        .disks(disks)
        .build();

    let solution = match built {
        Ok(solution) => solution,
        Err(BuildError::Solve(SolveError::InvalidDiskCount { disks })) => {
            debug!(disks, "illegal disk count");
            if args.format == Format::Text {
                transcript::write_header(out, disks)?;
                transcript::write_illegal_entry(out)?;
            } else {
                transcript::write_illegal_entry(err)?;
            }
            out.flush()?;
            return Ok(if args.strict { STATUS_ILLEGAL } else { STATUS_OK });
        }
        Err(other) => return Err(other.into()),
    };

    if args.verify {
        Tower::replay(&solution).context("generated moves failed verification")?;
        info!(disks = solution.disks(), moves = solution.len(), "solution verified");
    }

    match args.format {
        Format::Text => {
            transcript::write_header(out, disks)?;
            transcript::write_moves(out, &solution)?;
        }
        Format::Json => transcript::write_json(out, &Transcript::new(&solution))?,
    }
    out.flush()?;

    Ok(STATUS_OK)
}
