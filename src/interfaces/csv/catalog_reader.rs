use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::error::Result;
use std::io::Read;

/// Reads catalog seed data (customers and products) from CSV sources.
///
/// Customer header: `id, name, email`. Product header:
/// `id, name, price, quantity`. Rows are trimmed; a malformed row fails the
/// whole read, since a partially seeded catalog is not useful.
pub struct CatalogReader;

impl CatalogReader {
    pub fn customers<R: Read>(source: R) -> Result<Vec<Customer>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        reader
            .deserialize()
            .map(|row| row.map_err(Into::into))
            .collect()
    }

    pub fn products<R: Read>(source: R) -> Result<Vec<Product>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        reader
            .deserialize()
            .map(|row| row.map_err(Into::into))
            .collect()
    }
}
