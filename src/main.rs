use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use arithc::driver::{CompileOptions, ErrorPolicy, compile_file};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// arithc compiles a file of arithmetic expressions, one per line, into a
/// Python program that evaluates them and prints the results as a list.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression file to compile. Prompted for when omitted.
    input: Option<PathBuf>,

    /// Where to write the generated program, `-` for standard output.
    /// Prompted for when omitted.
    output: Option<PathBuf>,

    /// Report lines that fail to compile and leave them out, instead of
    /// stopping at the first one.
    #[arg(short, long)]
    skip_invalid: bool,

    /// Compile lines in parallel. Output order is unaffected.
    #[arg(short, long)]
    parallel: bool,

    /// Log more details; repeat for more (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = args.input.unwrap_or_else(|| prompt_path("Expression file to compile: "));
    let output = args.output.unwrap_or_else(|| prompt_path("Output Python file: "));

    let options = CompileOptions { error_policy: if args.skip_invalid {
                                       ErrorPolicy::Skip
                                   } else {
                                       ErrorPolicy::Abort
                                   },
                                   parallel:     args.parallel, };

    match compile_file(&input, &output, &options) {
        Ok(report) => {
            if !report.diagnostics.is_empty() {
                eprintln!("Skipped {} invalid line(s).", report.diagnostics.len());
            }
            if output.as_os_str() != "-" {
                println!("Generated Python program: {}", output.display());
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                        EnvFilter::new(format!("arithc={level},warn"))
                                                    });

    fmt().with_env_filter(filter)
         .with_target(false)
         .with_writer(io::stderr)
         .init();
}

/// Asks for a path on standard input, exiting if none can be read.
fn prompt_path(label: &str) -> PathBuf {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(read) if read > 0 && !answer.trim().is_empty() => PathBuf::from(answer.trim()),
        _ => {
            eprintln!("No file name given.");
            std::process::exit(1);
        },
    }
}
