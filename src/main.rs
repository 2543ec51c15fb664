use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use storefront::application::create_order::CreateOrder;
use storefront::infrastructure::in_memory::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use storefront::interfaces::csv::catalog_reader::CatalogReader;
use storefront::interfaces::csv::order_reader::OrderReader;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Order request CSV file (header: id, quantity)
    order: PathBuf,

    /// Customer catalog CSV file (header: id, name, email)
    #[arg(long)]
    customers: PathBuf,

    /// Product catalog CSV file (header: id, name, price, quantity)
    #[arg(long)]
    products: PathBuf,

    /// Id of the customer placing the order
    #[arg(long)]
    customer: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Seed the in-memory repositories from the catalog files.
    let customer_repo = InMemoryCustomerRepository::new();
    let customers_file = File::open(&cli.customers).into_diagnostic()?;
    for customer in CatalogReader::customers(customers_file).into_diagnostic()? {
        customer_repo.insert(customer).await;
    }

    let product_repo = InMemoryProductRepository::new();
    let products_file = File::open(&cli.products).into_diagnostic()?;
    for product in CatalogReader::products(products_file).into_diagnostic()? {
        product_repo.insert(product).await;
    }

    let order_file = File::open(&cli.order).into_diagnostic()?;
    let mut requested = Vec::new();
    for item in OrderReader::new(order_file).items() {
        requested.push(item.into_diagnostic()?);
    }

    let workflow = CreateOrder::new(
        Box::new(customer_repo),
        Box::new(product_repo),
        Box::new(InMemoryOrderRepository::new()),
    );
    let order = workflow
        .execute(&cli.customer, requested)
        .await
        .into_diagnostic()?;

    println!(
        "{}",
        serde_json::to_string_pretty(&order).into_diagnostic()?
    );

    Ok(())
}
