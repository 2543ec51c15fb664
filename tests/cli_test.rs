use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("tests/fixtures/order.csv")
        .arg("--customers")
        .arg("tests/fixtures/customers.csv")
        .arg("--products")
        .arg("tests/fixtures/products.csv")
        .arg("--customer")
        .arg("c1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"product_id\": \"keyboard\""))
        .stdout(predicate::str::contains("\"quantity\": 2"))
        .stdout(predicate::str::contains("\"price\": \"10.0\""))
        .stdout(predicate::str::contains("\"product_id\": \"mouse\""))
        .stdout(predicate::str::contains("ada@example.com"));

    Ok(())
}

#[test]
fn test_cli_reports_insufficient_stock() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let customers = dir.path().join("customers.csv");
    let products = dir.path().join("products.csv");
    let order = dir.path().join("order.csv");

    common::write_customers_csv(&customers, &[("c1", "Ada", "ada@example.com")])?;
    common::write_products_csv(&products, &[("keyboard", "Keyboard", "10.0", 5)])?;
    common::write_order_csv(&order, &[("keyboard", 99)])?;

    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg(&order)
        .arg("--customers")
        .arg(&customers)
        .arg("--products")
        .arg(&products)
        .arg("--customer")
        .arg("c1");

    cmd.assert().failure().stderr(predicate::str::contains(
        "The quantity is not available to Ids keyboard (Quantity: 99)",
    ));

    Ok(())
}

#[test]
fn test_cli_reports_missing_customer() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("tests/fixtures/order.csv")
        .arg("--customers")
        .arg("tests/fixtures/customers.csv")
        .arg("--products")
        .arg("tests/fixtures/products.csv")
        .arg("--customer")
        .arg("c999");

    cmd.assert().failure().stderr(predicate::str::contains(
        "Could not find any customer with the given id",
    ));

    Ok(())
}
