use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::{Amount, Error, Operation, OperationStream};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    amount: Option<Amount>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        match (row.kind.trim().to_ascii_lowercase().as_str(), row.amount) {
            ("deposit", Some(amount)) => Ok(Operation::Deposit { amount }),
            ("withdraw", Some(amount)) => Ok(Operation::Withdraw { amount }),
            (kind @ ("deposit" | "withdraw"), None) => Err(Error::Ingestion(
                format!("Missing amount for {} operation", kind),
            )),
            (other, _) => Err(Error::Ingestion(format!(
                "Invalid operation type: {}",
                other
            ))),
        }
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Already consumed readers yield nothing.
        let Some(reader) = self.reader.take() else {
            return Box::pin(stream::empty::<Result<Operation, Error>>());
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
