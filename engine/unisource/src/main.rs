//! Unisource CLI
//!
//! Scans source files for Trojan Source attacks.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use unisource::commands::{explain_code, parse_check_options, run_check};

/// Exit status for usage and I/O errors.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    unisource::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(EXIT_USAGE);
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let options = match parse_check_options(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!();
                    eprintln!("Usage: unisource check [options] <path>...");
                    eprintln!("Run `unisource help` for the list of options.");
                    return ExitCode::from(EXIT_USAGE);
                }
            };

            let stdout = io::stdout();
            let is_tty = stdout.is_terminal();
            match run_check(&options, stdout.lock(), is_tty) {
                Ok(counts) if counts.errors > 0 => ExitCode::FAILURE,
                Ok(_) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::from(EXIT_USAGE)
                }
            }
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: unisource explain <CODE>");
                eprintln!("Example: unisource explain U1001");
                return ExitCode::from(EXIT_USAGE);
            }
            match explain_code(&args[2]) {
                Ok(doc) => {
                    println!("{doc}");
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    ExitCode::from(EXIT_USAGE)
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("unisource {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn print_usage() {
    println!("unisource: detect Trojan Source attacks in source code");
    println!();
    println!("Usage: unisource <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <path>...      Scan files and directories");
    println!("  explain <code>       Explain a finding code (e.g., U1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --format=<fmt>       Output: terminal (default), json, sarif");
    println!("  --color=<when>       Color: auto (default), always, never");
    println!("  --no-bidi            Skip bidirectional control checks");
    println!("  --no-invisible       Skip invisible character checks");
    println!("  --no-homoglyph       Skip homoglyph checks");
    println!("  --hide-balanced      Do not report balanced bidi controls");
    println!();
    println!("Exit status:");
    println!("  0  no error-severity findings");
    println!("  1  at least one error-severity finding");
    println!("  2  usage or I/O error");
    println!();
    println!("Environment:");
    println!("  UNISOURCE_LOG        Log filter for stderr diagnostics (e.g., debug)");
    println!();
    println!("Examples:");
    println!("  unisource check src/");
    println!("  unisource check --format=sarif . > results.sarif");
    println!("  unisource check --no-homoglyph --hide-balanced lib.py");
    println!("  unisource explain U1001");
}
