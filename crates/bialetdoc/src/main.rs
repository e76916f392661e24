//! Bialet documentation CLI.

use bialetdoc::commands::{lex_file, run_highlight, show_config, CommandError};
use bialetdoc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: bialetdoc lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "highlight" => {
            if args.len() < 3 || args[2] == "--help" || args[2] == "-h" {
                print_highlight_help();
                std::process::exit(if args.len() < 3 { 1 } else { 0 });
            }
            run_highlight(&args[2..])
        }
        "config" => show_config(args.get(2).map(String::as_str)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("bialetdoc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        if matches!(e, CommandError::Usage(_)) {
            eprintln!("Run 'bialetdoc help' for usage");
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Bialet documentation tools");
    println!();
    println!("Usage: bialetdoc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>                 Show the raw classifier spans of a file");
    println!("  highlight [opts] <paths>   Highlight files or directories");
    println!("  config [<file>]            Print the resolved configuration as JSON");
    println!("  help                       Show this message");
    println!("  version                    Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic logging.");
}

fn print_highlight_help() {
    println!("Usage: bialetdoc highlight [options] <paths...>");
    println!();
    println!("Paths may be files or directories. Directories are searched for *.wren");
    println!("files, skipping hidden entries, target/ and exclude_patterns.");
    println!();
    println!("Options:");
    println!("  --format=<fmt>    Output format: html (default), json, spans");
    println!("  --config=<file>   Configuration file (default: ./bialetdoc.toml if present)");
    println!("  --lang=<name>     Language for every file, instead of detecting by name");
}
