//! Command-line interface for pastemark
//! This binary compiles pastemark files into HTML fragments and exposes the
//! compiler's intermediate token stream for inspection.
//!
//! Usage:
//!   pastemark compile `<path>`                       - Compile a file to an HTML fragment
//!   pastemark tokens `<path>` [--format `<format>`]    - Dump the raw token stream
//!   pastemark list-formats                         - List all available output formats

use clap::{Arg, Command};
use pastemark::markdown::processor::{process_file, OutputFormat};

fn main() {
    let matches = Command::new("pastemark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for the pastemark markup dialect")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile a pastemark file to an HTML fragment")
                .arg(
                    Arg::new("path")
                        .help("Path to the pastemark file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Dump the raw token stream of a pastemark file")
                .arg(
                    Arg::new("path")
                        .help("Path to the pastemark file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'tokens-simple', 'tokens-json')")
                        .default_value("tokens-simple"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let path = compile_matches.get_one::<String>("path").unwrap();
            handle_process_command(path, "html");
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_process_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the compile and tokens commands
fn handle_process_command(path: &str, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let output = process_file(path, &format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::available_formats() {
        println!("  {}", format);
    }
}
