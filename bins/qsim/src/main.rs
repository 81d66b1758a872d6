use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use quantum::{gates::parse_steps, Oracle, QuantumResult};
use simulator::{
    benchmark, deutsch_jozsa_shots, gate_shots, grover_shots, write_counts_csv, Tally,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset; covers every crate that logs at info.
const DEFAULT_LOG_FILTER: &str = "qsim=info,simulator=info";

/// State-vector quantum simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Algorithm to run
    #[arg(long, value_enum, default_value_t = Algorithm::Grover)]
    algorithm: Algorithm,

    /// Register size (position 1 is the ancilla for deutsch-jozsa / grover)
    #[arg(long, default_value_t = 3)]
    qubits: usize,

    /// Oracle for deutsch-jozsa
    #[arg(long, value_enum, default_value_t = OracleKind::Balanced)]
    oracle: OracleKind,

    /// Input value marked by the grover oracle
    #[arg(long, default_value_t = 3)]
    marked: usize,

    /// Gate program for the `gates` algorithm, e.g. "x1,h,qft"
    #[arg(long, default_value = "h")]
    ops: String,

    /// Number of shots
    #[arg(long, default_value_t = 1)]
    shots: usize,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Write the outcome histogram to this CSV file
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the amplitudes left after a `gates` program
    #[arg(long)]
    show_state: bool,

    /// Run the gate/QFT timing benchmark instead
    #[arg(long)]
    benchmark: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    DeutschJozsa,
    Grover,
    Gates,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OracleKind {
    /// f(x) = 0
    Zero,
    /// f(x) = 1
    One,
    /// f(x) = top input bit
    Balanced,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.threads > 0 {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
        {
            error!("failed to build rayon thread pool: {}", err);
            process::exit(1);
        }
    }

    if args.shots == 0 {
        error!("shots must be > 0");
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> QuantumResult<()> {
    if args.benchmark {
        let elapsed = benchmark(args.qubits, 4 * args.qubits)?;
        println!(
            "Benchmark: n={}, depth={} → {:.3} s",
            args.qubits,
            4 * args.qubits,
            elapsed.as_secs_f64()
        );
        return Ok(());
    }

    let tally = match args.algorithm {
        Algorithm::DeutschJozsa => {
            let oracle = match args.oracle {
                OracleKind::Zero => Oracle::constant(args.qubits, false)?,
                OracleKind::One => Oracle::constant(args.qubits, true)?,
                OracleKind::Balanced => Oracle::balanced(args.qubits)?,
            };
            info!(qubits = args.qubits, oracle = ?args.oracle, "running deutsch-jozsa");

            let run = deutsch_jozsa_shots(args.qubits, &oracle, args.shots, &args.seed)?;
            let verdict = if run.balanced >= run.constant {
                "balanced"
            } else {
                "constant"
            };
            println!("Function is {}", verdict);
            if args.shots > 1 {
                println!("constant: {}, balanced: {}", run.constant, run.balanced);
            }
            run.tally
        }
        Algorithm::Grover => {
            let oracle = Oracle::marking(args.qubits, args.marked)?;
            info!(qubits = args.qubits, marked = args.marked, "running grover search");

            let run = grover_shots(args.qubits, &oracle, args.shots, &args.seed)?;
            if let Some((bits, _)) = run.tally.most_common() {
                println!("{}", bits);
            }
            println!(
                "iterations: {}, success rate: {:.3}",
                run.iterations,
                run.success_rate(args.marked)
            );
            run.tally
        }
        Algorithm::Gates => {
            let steps = parse_steps(&args.ops)?;
            info!(qubits = args.qubits, ops = %args.ops, "running gate program");

            let (reg, tally) = gate_shots(args.qubits, &steps, args.shots, &args.seed)?;
            if args.show_state {
                print!("{}", reg);
            }
            tally
        }
    };

    print_counts(&tally);

    if let Some(path) = &args.out {
        match write_counts_csv(path, &tally) {
            Ok(()) => info!(path = %path.display(), "counts written"),
            Err(err) => error!("failed to write CSV to {}: {}", path.display(), err),
        }
    }
    Ok(())
}

fn print_counts(tally: &Tally) {
    if tally.shots <= 1 {
        return;
    }
    for (bits, count) in &tally.counts {
        println!("{} {:>6} {:.4}", bits, count, tally.frequency(bits));
    }
}
