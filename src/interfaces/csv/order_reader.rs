use crate::application::create_order::RequestedItem;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads requested order items from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<RequestedItem>`. It handles whitespace trimming and flexible record
/// lengths automatically. Expected header: `id, quantity`.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requested items.
    pub fn items(self) -> impl Iterator<Item = Result<RequestedItem>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
