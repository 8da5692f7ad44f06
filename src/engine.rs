use crate::domain::{
    Account, DeadLetterQueue, Error, Operation, OperationStream, OutputRepository,
};

use futures::StreamExt;

#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    account: Account,
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(account: Account, ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            account,
            ingestion,
            output_repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut ops = self.ingestion.stream();

        while let Some(op) = ops.next().await {
            match op {
                Ok(op) => {
                    let line = self.apply_operation(op);
                    self.output_repository.report(line);
                }
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> String {
        tracing::debug!(account = self.account.id(), %op, "applying operation");

        match op {
            Operation::Deposit { amount } => self.account.deposit(amount),
            Operation::Withdraw { amount } => self.account.withdraw(amount),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.output_repository.flush()
    }
}
