use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn write_customers_csv(path: &Path, rows: &[(&str, &str, &str)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "name", "email"])?;
    for (id, name, email) in rows.iter().copied() {
        wtr.write_record([id, name, email])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_products_csv(path: &Path, rows: &[(&str, &str, &str, u32)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "name", "price", "quantity"])?;
    for (id, name, price, quantity) in rows.iter().copied() {
        let quantity = quantity.to_string();
        wtr.write_record([id, name, price, quantity.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_order_csv(path: &Path, rows: &[(&str, u32)]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "quantity"])?;
    for (id, quantity) in rows.iter().copied() {
        let quantity = quantity.to_string();
        wtr.write_record([id, quantity.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
