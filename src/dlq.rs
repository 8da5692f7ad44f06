use crate::domain::{DeadLetterQueue, Error};

/// Logs rejected operations at error level; the subscriber routes them to stderr.
#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error) {
        tracing::error!(%error, "operation rejected");
    }
}
