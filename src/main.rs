use clap::Parser;
use std::process::ExitCode;
use tempi::commands::Cli;
use tempi::libs::{config::Config, error::TempiError, messages::Message};
use tempi::{msg_error, msg_info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match Config::from_env().load_activity_codes() {
        Ok(config) => cli.run(&config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            if e.downcast_ref::<TempiError>().is_some_and(TempiError::is_approved_period) {
                msg_info!(Message::ApprovedPeriodHint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG wins over the verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("tempi=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
