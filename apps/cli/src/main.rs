//! # compras
//!
//! Entry point for the `compras` command-line tool. The actual work lives in
//! the library (`lib.rs`) so it can be tested without a process boundary.

use std::process::ExitCode;

use clap::Parser;
use compras_cli::{init_tracing, run, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    init_tracing();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            if json {
                match serde_json::to_string(&err) {
                    Ok(body) => eprintln!("{}", body),
                    Err(_) => eprintln!("Error: {}", err),
                }
            } else {
                eprintln!("Error: {}", err);
            }
            ExitCode::from(err.code.exit_code())
        }
    }
}
