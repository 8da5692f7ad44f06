pub mod account;
pub mod amount;
pub mod error;
pub mod operation;
pub mod traits;

pub use account::Account;
pub use amount::Amount;
pub use error::Error;
pub use operation::Operation;
pub use traits::{DeadLetterQueue, OperationStream, OutputRepository};
