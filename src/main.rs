mod dlq;
mod domain;
mod engine;
mod ingestion;
mod output_repository;

use tracing_subscriber::EnvFilter;

use crate::dlq::StdErrDLQ;
use crate::domain::{Account, Error};
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::output_repository::StdOutOutput;

const DEMO_ACCOUNT_ID: &str = "ACC-123";

const DEMO_SCRIPT: &str = "\
type,amount
deposit,500
withdraw,200
";

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Error> {
    // Logs go to stderr; stdout carries only the operation results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Running account demo...");

    let account = Account::create(DEMO_ACCOUNT_ID);
    tracing::info!(
        account = account.id(),
        balance = %account.balance(),
        status = account.status(),
        "account opened"
    );

    let ingestion = CsvReader::new(DEMO_SCRIPT.as_bytes());
    let mut engine = Engine::new(account, ingestion, StdOutOutput::new(), StdErrDLQ::default());

    engine.process().await?;
    engine.flush()?;

    tracing::info!(balance = %engine.account().balance(), "demo finished");

    Ok(())
}
