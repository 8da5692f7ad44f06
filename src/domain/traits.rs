use futures::Stream;

use crate::domain::{Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait OutputRepository {
    fn report(&mut self, line: String);

    fn flush(&mut self) -> Result<(), Error>;
}
