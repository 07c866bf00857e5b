use anyhow::{bail, Context, Result};
use bitscan::timing::{compare_scans, BenchConfig};
use bitscan::{clz, ctz, parse_u64, SetBits};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bitscan", about = "Bit-scan primitives over 64-bit masks")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the lowest set-bit index of each value (-1 for 0).
    Ctz {
        /// Values in decimal or 0x/0b/0o form.
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print the highest set-bit index of each value (-1 for 0).
    Clz {
        /// Values in decimal or 0x/0b/0o form.
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print `value ctz clz popcount` for each value.
    Scan {
        /// Values in decimal or 0x/0b/0o form.
        #[arg(required = true)]
        values: Vec<String>,
        /// Also list every set-bit index.
        #[arg(long)]
        bits: bool,
    },
    /// Time intrinsic against portable scans.
    Bench {
        /// Calls of each scan per variant.
        #[arg(long, default_value_t = BenchConfig::default().iterations)]
        iterations: u64,
        /// Mask to scan (default: 1 << 37).
        #[arg(long)]
        value: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(command = ?cli.command, "dispatching");
    match cli.command {
        Commands::Ctz { values } => {
            for value in parse_values(&values)? {
                println!("{}", ctz(value));
            }
        }
        Commands::Clz { values } => {
            for value in parse_values(&values)? {
                println!("{}", clz(value));
            }
        }
        Commands::Scan { values, bits } => run_scan(&values, bits)?,
        Commands::Bench { iterations, value } => run_bench(iterations, value)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_values(values: &[String]) -> Result<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            parse_u64(raw).with_context(|| format!("argument {} ({raw:?})", idx + 1))
        })
        .collect()
}

fn run_scan(values: &[String], list_bits: bool) -> Result<()> {
    for value in parse_values(values)? {
        let mut line = format!(
            "{value:#x}\t{}\t{}\t{}",
            ctz(value),
            clz(value),
            value.count_ones()
        );
        if list_bits {
            let squares: Vec<String> = SetBits::new(value).map(|sq| sq.to_string()).collect();
            line.push('\t');
            line.push_str(&squares.join(","));
        }
        println!("{line}");
    }
    Ok(())
}

fn run_bench(iterations: u64, value: Option<String>) -> Result<()> {
    let mut config = BenchConfig {
        iterations,
        ..BenchConfig::default()
    };
    if let Some(raw) = value {
        config.value = parse_u64(&raw).with_context(|| format!("--value ({raw:?})"))?;
    }

    let Some(report) = compare_scans(&config) else {
        bail!("intrinsic and portable scans disagree on {:#x}", config.value);
    };
    info!(
        iterations = config.iterations,
        speedup = report.speedup(),
        "bench complete"
    );

    println!(
        "value={:#x}\tctz={}\tclz={}",
        config.value, report.results.0, report.results.1
    );
    println!("[portable]  {:.6}", report.portable.as_secs_f64());
    println!("[intrinsic] {:.6}", report.intrinsic.as_secs_f64());
    Ok(())
}
