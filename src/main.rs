mod cli;
mod cmd;
mod log;
mod time;

use clap::Parser;

use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = log::init_logger(&cli) {
        eprintln!("Failed to initialize logger: {:#}", e);
    }

    let result = match cli.command {
        Command::Probe(args) => cmd::probe::run(args, cli.json, cli.no_stdout, cli.output).await,
        Command::Status(args) => cmd::status::run(args, cli.json, cli.no_stdout, cli.output).await,
    };

    if let Err(e) = result {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
