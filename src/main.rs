//! bfvm CLI: compile and execute a tape-language program.

use std::env;
use std::path::Path;
use std::process;

use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};

use bfvm::vm::EofBehavior;
use bfvm::RunOptions;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI command to execute.
enum Command {
    /// Run a source file
    Run { file: String },
    /// Run source given on the command line
    Eval { code: String },
}

/// CLI options parsed from arguments.
struct Options {
    command: Command,
    run: RunOptions,
    verbose: bool,
}

fn print_usage() {
    eprintln!("bfvm {} - tape language compiler and VM", VERSION);
    eprintln!();
    eprintln!("Usage: bfvm [options] <file>");
    eprintln!("       bfvm [options] -e <code>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e <code>          Run the given source text");
    eprintln!("  -d, --disassemble  Print the compiled program before running it");
    eprintln!("  --eof <mode>       Cell value on end of input: zero (default), unchanged, 255");
    eprintln!("  --max-steps N      Abort after executing N instructions");
    eprintln!("  -v, --verbose      Enable debug logging (RUST_LOG overrides)");
    eprintln!("  -V, --version      Print version");
    eprintln!("  -h, --help         Show this help message");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    eprintln!();
    print_usage();
    process::exit(1);
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut command = None;
    let mut run = RunOptions::default();
    let mut verbose = false;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("bfvm {}", VERSION);
                process::exit(0);
            }
            "--disassemble" | "-d" => run.disassemble = true,
            "--verbose" | "-v" => verbose = true,
            "--eof" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    usage_error("--eof requires a mode");
                };
                match value.parse::<EofBehavior>() {
                    Ok(eof) => run.vm.eof = eof,
                    Err(e) => usage_error(&e),
                }
            }
            "--max-steps" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    usage_error("--max-steps requires a number");
                };
                match value.parse::<u64>() {
                    Ok(n) => run.vm.max_steps = Some(n),
                    Err(_) => usage_error(&format!("Invalid step count '{}'", value)),
                }
            }
            "-e" => {
                i += 1;
                let Some(code) = args.get(i) else {
                    usage_error("-e requires a code argument");
                };
                command = Some(Command::Eval { code: code.clone() });
            }
            _ if arg.starts_with('-') => usage_error(&format!("Unknown option: {}", arg)),
            _ => {
                if command.is_some() {
                    usage_error("Only one program can be specified");
                }
                command = Some(Command::Run { file: arg.clone() });
            }
        }
        i += 1;
    }

    let Some(command) = command else {
        usage_error("Expected argument: file");
    };

    Options {
        command,
        run,
        verbose,
    }
}

/// Initialize logging to stderr. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose { "bfvm=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let options = parse_args();
    init_logging(options.verbose);

    let result = match &options.command {
        Command::Run { file } => bfvm::run_file(Path::new(file), &options.run),
        Command::Eval { code } => bfvm::run_with_options(code.as_bytes(), &options.run),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}
