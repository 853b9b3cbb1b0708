use clap::Parser;

use tumbler::cli::{check, run, status, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Status(args) => status::execute(args.port).await,
        Commands::Check(command) => match command {
            CheckCommand::Config(args) => {
                check::execute_config(&args.config);
                Ok(())
            }
            CheckCommand::Connection(args) => check::execute_connection(&args.config).await,
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
