//! lox: The rlox scanner CLI.
//!
//! Usage:
//!   lox [script]
//!
//! With a script path, scans the whole file and prints one token per line.
//! With no arguments, runs an interactive prompt that scans each input line
//! with a fresh scanner.

use clap::Parser as ClapParser;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use rlox_diagnostics::DiagnosticCollection;
use rlox_scanner::Scanner;

#[derive(ClapParser, Debug)]
#[command(name = "lox", about = "rlox - A Lox scanner written in Rust", disable_version_flag = true)]
struct Cli {
    /// Lox script to scan.
    #[arg(value_name = "SCRIPT")]
    script: Option<String>,

    /// Print the scanner version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

// sysexits-style codes: data error and I/O error.
const EXIT_DATA_ERR: i32 = 65;
const EXIT_IO_ERR: i32 = 74;

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("lox Version 0.1.0");
        return;
    }

    match cli.script {
        Some(path) => {
            let exit_code = run_file(&path);
            process::exit(exit_code);
        }
        None => run_prompt(),
    }
}

/// Scan a whole file and print its tokens. Returns the process exit code:
/// 65 when any scan error was reported, 74 when the file is unreadable.
fn run_file(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            print_error(&format!("Could not read '{}': {}", path, err));
            return EXIT_IO_ERR;
        }
    };

    let diagnostics = run(&source);
    if diagnostics.has_errors() {
        EXIT_DATA_ERR
    } else {
        0
    }
}

/// Read-scan-print loop. Each line gets a fresh scanner, and errors never
/// end the session.
fn run_prompt() {
    println!("Welcome to rlox.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                run(line.trim_end_matches(['\r', '\n']));
            }
        }
    }
}

/// Scan one source text, print the tokens to stdout and the diagnostics to
/// stderr, and hand the diagnostics back to the caller.
fn run(source: &str) -> DiagnosticCollection {
    let (tokens, diagnostics) = Scanner::new(source).scan_tokens();

    for token in &tokens {
        println!("{}", token);
    }
    for diagnostic in diagnostics.diagnostics() {
        eprintln!("{}{}{}", RED, diagnostic, RESET);
    }

    diagnostics
}

fn print_error(message: &str) {
    eprintln!("{}{}error{}: {}", RED, BOLD, RESET, message);
}
