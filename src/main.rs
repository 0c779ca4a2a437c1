use std::fs;
use std::io::{self, Read};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ora_ddl::transpiler::SqlTranspiler;

/// Converts MySQL CREATE TABLE / DROP TABLE scripts into Oracle DDL
#[derive(Parser)]
#[command(name = "ora-ddl")]
#[command(about = "Convert MySQL table DDL into Oracle-compatible DDL")]
struct Cli {
    /// Path to the MySQL script (reads standard input if omitted or '-')
    source_file: Option<String>,

    /// Output file (if not specified, prints to console)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Log skipped statements to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) if path != "-" => fs::read_to_string(path),
        _ => {
            let mut sql = String::new();
            io::stdin().read_to_string(&mut sql)?;
            Ok(sql)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read source script
    let sql = match read_source(cli.source_file.as_deref()) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "Error reading '{}': {}",
                cli.source_file.as_deref().unwrap_or("<stdin>"),
                e
            );
            process::exit(1);
        }
    };

    // Convert
    let output = match SqlTranspiler::new().convert(&sql) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Write output
    match cli.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Error writing '{}': {}", path, e);
                process::exit(1);
            }
            tracing::info!(path = %path, "wrote Oracle DDL");
        }
        None => {
            println!("{}", output);
        }
    }
}
