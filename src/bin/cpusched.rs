use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use u_cpusched::history::{ComparisonEntry, ResultStore};
use u_cpusched::input::{format_processes, read_processes};
use u_cpusched::models::{Algorithm, AlgorithmKind, Process, SimulationResult};
use u_cpusched::report::{render_comparison, render_table};
use u_cpusched::scheduler::{simulate, simulate_all};
use u_cpusched::workload::WorkloadGenerator;

/// CPU scheduling simulator.
///
/// Runs First-Come-First-Served, Shortest-Job-First and Round-Robin over a
/// batch of processes and reports waiting time, turnaround time and CPU
/// utilization.
#[derive(Debug, Parser)]
#[clap(name = "cpusched", version)]
struct Opts {
    /// Process file, one "process_id arrival_time burst_time" per line.
    #[clap(short = 'i', long, default_value = "data.txt", global = true)]
    input: PathBuf,

    /// Enable verbose output. Specify multiple times to increase verbosity.
    #[clap(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one algorithm and print its report.
    Run {
        #[clap(value_enum)]
        algorithm: AlgorithmArg,

        /// Round-Robin time quantum.
        #[clap(short = 'q', long, allow_negative_numbers = true)]
        quantum: Option<i64>,
    },
    /// Run all algorithms and print a comparison.
    Compare {
        /// Round-Robin time quantum.
        #[clap(short = 'q', long, default_value = "2", allow_negative_numbers = true)]
        quantum: i64,
    },
    /// Print a random workload in process file format.
    Generate {
        /// Number of processes.
        #[clap(long, default_value = "5")]
        count: usize,

        /// RNG seed.
        #[clap(long, default_value = "0")]
        seed: u64,

        /// Largest arrival time.
        #[clap(long, default_value = "10")]
        max_arrival: i64,

        /// Largest burst time.
        #[clap(long, default_value = "10")]
        max_burst: i64,
    },
    /// Interactive menu.
    Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Fcfs,
    Sjf,
    Rr,
}

impl AlgorithmArg {
    fn algorithm(self, quantum: Option<i64>) -> Result<Algorithm> {
        Ok(match self {
            AlgorithmArg::Fcfs => Algorithm::Fcfs,
            AlgorithmArg::Sjf => Algorithm::Sjf,
            AlgorithmArg::Rr => match quantum {
                Some(quantum) => Algorithm::RoundRobin { quantum },
                None => bail!("Round-Robin requires a time quantum (--quantum)"),
            },
        })
    }
}

fn load(opts: &Opts) -> Result<Vec<Process>> {
    let processes = read_processes(&opts.input)
        .with_context(|| format!("Failed to load processes from {}", opts.input.display()))?;
    info!("Loaded {} processes from {}", processes.len(), opts.input.display());
    Ok(processes)
}

fn banner(kind: AlgorithmKind) -> String {
    let title = format!("{} SCHEDULING:", kind.title().to_uppercase());
    let rule = "-".repeat(title.len() + 2);
    format!("\n\t\t {rule}\n\t\t  {title}\n\t\t {rule}")
}

fn print_result(result: &SimulationResult) {
    println!("{}", banner(result.algorithm.kind()));
    println!("{result}");
}

fn run_and_record(algorithm: Algorithm, processes: &[Process], store: &mut ResultStore) {
    match simulate(algorithm, processes) {
        Ok(result) => {
            print_result(&result);
            store.record(result);
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn prompt<I>(lines: &mut I, text: &str) -> Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("Failed to read from stdin")?)),
        None => Ok(None),
    }
}

fn view_instances<I>(lines: &mut I, store: &ResultStore) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    if store.is_empty() {
        println!("\nNo results yet. Run an algorithm first.");
        return Ok(());
    }

    println!("\nResults for all instances:\n");
    println!("1. View all instances");
    println!("2. View a specific instance");

    let Some(choice) = prompt(lines, "Enter your choice: ")? else {
        return Ok(());
    };

    match choice.trim().parse::<u32>() {
        Ok(1) => {
            for kind in AlgorithmKind::ALL {
                println!("\n{} Results:", kind.label());
                for (idx, instance) in store.instances(kind).iter().enumerate() {
                    println!("Instance {}:\n{}", idx + 1, render_table(instance));
                }
            }
            print!("{}", render_comparison(store.comparison()));
        }
        Ok(2) => {
            println!("1. FCFS");
            println!("2. SJF");
            println!("3. RR");
            let Some(algo) = prompt(lines, "Enter algorithm type: ")? else {
                return Ok(());
            };
            let Some(number) = prompt(lines, "Enter instance number: ")? else {
                return Ok(());
            };

            let kind = match algo.trim().parse::<usize>() {
                Ok(n @ 1..=3) => AlgorithmKind::ALL[n - 1],
                Ok(_) => {
                    println!("Invalid option.");
                    return Ok(());
                }
                Err(_) => {
                    println!("Error: Invalid input.");
                    return Ok(());
                }
            };
            let Ok(number) = number.trim().parse::<usize>() else {
                println!("Error: Invalid input.");
                return Ok(());
            };

            match store.instance(kind, number) {
                Some(instance) => {
                    println!("{} Instance {number}:\n{}", kind.label(), render_table(instance));
                    print!("{}", render_comparison(&[ComparisonEntry::from(instance)]));
                }
                None => println!("Instance out of range."),
            }
        }
        _ => println!("Error: Invalid choice."),
    }
    Ok(())
}

fn shell(processes: &[Process]) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut store = ResultStore::new();

    loop {
        println!("\nSelect a CPU Scheduling Algorithm:");
        println!("1. First-Come-First-Serve (FCFS)");
        println!("2. Shortest Job First (SJF)");
        println!("3. Round Robin (RR)");
        println!("4. Comparative Analysis");
        println!("5. Exit");

        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            break;
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => run_and_record(Algorithm::Fcfs, processes, &mut store),
            Ok(2) => run_and_record(Algorithm::Sjf, processes, &mut store),
            Ok(3) => {
                let Some(quantum) = prompt(&mut lines, "Enter Time Quantum: ")? else {
                    break;
                };
                match quantum.trim().parse::<i64>() {
                    Ok(quantum) => {
                        run_and_record(Algorithm::RoundRobin { quantum }, processes, &mut store)
                    }
                    Err(_) => {
                        println!("Invalid input for Time Quantum. Please enter a valid integer.")
                    }
                }
            }
            Ok(4) => view_instances(&mut lines, &store)?,
            Ok(5) => {
                println!("Exiting the program.");
                break;
            }
            Ok(_) => println!("Invalid choice. Please select a number between 1 and 5."),
            Err(_) => println!("Invalid input. Please enter a number between 1 and 5."),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let llv = match opts.verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    match &opts.command {
        Command::Run {
            algorithm,
            quantum,
        } => {
            let algorithm = algorithm.algorithm(*quantum)?;
            let processes = load(&opts)?;
            let result = simulate(algorithm, &processes)
                .with_context(|| format!("{algorithm} simulation failed"))?;
            print_result(&result);
        }
        Command::Compare { quantum } => {
            let processes = load(&opts)?;
            let results =
                simulate_all(&processes, *quantum).context("Comparative simulation failed")?;
            let mut store = ResultStore::new();
            for result in results {
                print_result(&result);
                store.record(result);
            }
            println!();
            print!("{}", render_comparison(store.comparison()));
        }
        Command::Generate {
            count,
            seed,
            max_arrival,
            max_burst,
        } => {
            let processes = WorkloadGenerator::new(*seed)
                .with_count(*count)
                .with_max_arrival(*max_arrival)
                .with_max_burst(*max_burst)
                .generate()
                .context("Failed to generate workload")?;
            print!("{}", format_processes(&processes));
        }
        Command::Shell => {
            let processes = load(&opts)?;
            if processes.is_empty() {
                bail!("{} contains no processes", opts.input.display());
            }
            shell(&processes)?;
        }
    }

    Ok(())
}
