use crate::domain::Amount;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    // Display text is part of the printed output contract.
    #[error("Insufficient Funds")]
    InsufficientFunds { requested: Amount, balance: Amount },
}
