//! LifePlus SDK demo CLI
//!
//! Walks the SDK through real call sequences against a LifePlus API
//! deployment: an unauthenticated browse across the public catalog, and an
//! authenticated login-to-order flow.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lifeplus_api_client::endpoints::cart::AddCartItemRequest;
use lifeplus_api_client::endpoints::doctors::ListDoctorsParams;
use lifeplus_api_client::endpoints::hospitals::ListHospitalsParams;
use lifeplus_api_client::endpoints::orders::CreateOrderRequest;
use lifeplus_api_client::endpoints::packages::ListPackagesParams;
use lifeplus_api_client::endpoints::products::ListProductsParams;
use lifeplus_api_client::LifePlusClient;
use lifeplus_core::coalesce::{number_or_zero, string_or_empty};
use lifeplus_core::format::format_price;
use lifeplus_core::phone::{format_phone, is_valid_phone};
use owo_colors::OwoColorize;

/// Example programs for the LifePlus Rust SDK
#[derive(Parser)]
#[command(name = "lifeplus-demo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the API
    #[arg(
        long,
        global = true,
        default_value = "https://api.lifeplusbd.com/api/v2"
    )]
    base_url: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the public catalog without authentication
    Browse {
        /// Search term for the product search step
        #[arg(long, default_value = "paracetamol")]
        search: String,
    },

    /// Login and walk the cart-to-order flow
    Order {
        /// Phone number to login with
        #[arg(long)]
        phone: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Product to order
        #[arg(long)]
        product_id: i64,

        /// Quantity to order
        #[arg(long, default_value = "1")]
        quantity: u32,

        /// Delivery address ID
        #[arg(long)]
        address_id: String,

        /// Payment method code
        #[arg(long, default_value = "cash_on_delivery")]
        payment_method: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let client = LifePlusClient::new(cli.base_url.clone())
        .context("failed to construct API client")?;

    match cli.command {
        Commands::Browse { search } => browse(client, &search).await,
        Commands::Order {
            phone,
            password,
            product_id,
            quantity,
            address_id,
            payment_method,
        } => {
            order(
                client,
                &phone,
                &password,
                product_id,
                quantity,
                &address_id,
                &payment_method,
            )
            .await
        }
    }
}

/// Unauthenticated walkthrough of the public catalog.
async fn browse(mut client: LifePlusClient, search: &str) -> anyhow::Result<()> {
    println!("{}", "=== LifePlus Rust SDK Demo ===".bold());
    println!();

    println!("{}", "1. Listing products...".cyan());
    let params = ListProductsParams::new().with_page(1).with_per_page(5);
    let products = client.products().list(&params).await?;
    println!("{} Found {} products:", "✓".green(), products.len());
    for (i, product) in products.iter().enumerate() {
        let name = string_or_empty(product.name.as_deref());
        let price = number_or_zero(product.price);
        println!("  {}. {} - {}", i + 1, name, format_price(price, true));
    }
    println!();

    println!("{}", "2. Searching products...".cyan());
    let params = ListProductsParams::new()
        .with_search_key(search)
        .with_per_page(3);
    let results = client.products().list(&params).await?;
    println!("{} Search found {} results", "✓".green(), results.len());
    println!();

    println!("{}", "3. Getting lifestyle categories...".cyan());
    let categories = client.products().lifestyle_categories().await?;
    println!("{} Found {} categories", "✓".green(), categories.len());
    println!();

    println!("{}", "4. Listing doctors...".cyan());
    let params = ListDoctorsParams::new().with_page(1).with_per_page(3);
    let doctors = client.doctors().list(&params).await?;
    println!("{} Found {} doctors:", "✓".green(), doctors.len());
    for (i, doctor) in doctors.iter().enumerate() {
        let name = string_or_empty(doctor.name.as_deref());
        let specialty = string_or_empty(doctor.specialty_name.as_deref());
        let fee = number_or_zero(doctor.consultation_fee);
        println!(
            "  {}. Dr. {name} - {specialty} ({})",
            i + 1,
            format_price(fee, true)
        );
    }
    println!();

    println!("{}", "5. Getting specialties...".cyan());
    let specialties = client.lookup().specialties().await?;
    println!("{} Found {} specialties", "✓".green(), specialties.len());
    println!();

    println!("{}", "6. Listing hospitals...".cyan());
    let params = ListHospitalsParams::new().with_page(1).with_per_page(3);
    let hospitals = client.hospitals().list(&params).await?;
    println!("{} Found {} hospitals:", "✓".green(), hospitals.len());
    for (i, hospital) in hospitals.iter().enumerate() {
        println!(
            "  {}. {}",
            i + 1,
            string_or_empty(hospital.name.as_deref())
        );
        println!(
            "     Location: {}",
            string_or_empty(hospital.address.as_deref())
        );
    }
    println!();

    println!("{}", "7. Listing healthcare packages...".cyan());
    let params = ListPackagesParams {
        page: Some(1),
        per_page: Some(3),
        ..Default::default()
    };
    let packages = client.packages().list(&params).await?;
    println!("{} Found {} packages:", "✓".green(), packages.len());
    for (i, package) in packages.iter().enumerate() {
        let name = string_or_empty(package.name.as_deref());
        let price = number_or_zero(package.price);
        println!("  {}. {name} - {}", i + 1, format_price(price, true));
    }
    println!();

    println!("{} Demo completed!", "✓".green().bold());
    println!("Note: login with real credentials to exercise authenticated endpoints.");

    Ok(())
}

/// Authenticated login, cart, and order flow.
#[allow(clippy::too_many_arguments)]
async fn order(
    mut client: LifePlusClient,
    phone: &str,
    password: &str,
    product_id: i64,
    quantity: u32,
    address_id: &str,
    payment_method: &str,
) -> anyhow::Result<()> {
    anyhow::ensure!(
        is_valid_phone(phone),
        "{} is not a valid Bangladeshi mobile number",
        phone
    );
    let phone = format_phone(phone);

    println!("{}", "=== Logging in ===".bold());
    let session = client.login(&phone, password).await?;
    let user = session.data.and_then(|d| d.user);
    println!(
        "{} Logged in as {}",
        "✓".green(),
        string_or_empty(user.and_then(|u| u.name).as_deref())
    );

    println!("{}", "=== Getting profile ===".bold());
    let profile = client.auth().profile().await?;
    println!(
        "{} User: {} ({})",
        "✓".green(),
        string_or_empty(profile.name.as_deref()),
        string_or_empty(profile.email.as_deref())
    );

    println!("{}", "=== Adding to cart ===".bold());
    let item = client
        .cart()
        .add_item(&AddCartItemRequest {
            product_id,
            quantity,
        })
        .await?;
    println!("{} Added to cart: {}", "✓".green(), item.id);

    println!("{}", "=== Getting cart ===".bold());
    let cart = client.cart().get().await?;
    println!(
        "{} Cart total: {}",
        "✓".green(),
        format_price(number_or_zero(cart.total), true)
    );
    println!("  Items: {}", cart.items.len());

    println!("{}", "=== Placing order ===".bold());
    let order = client
        .orders()
        .create(&CreateOrderRequest {
            cart_id: cart.id,
            address_id: address_id.to_string(),
            payment_method: payment_method.to_string(),
        })
        .await?;
    println!("{} Order placed: {}", "✓".green(), order.id);
    println!("  Status: {}", string_or_empty(order.status.as_deref()));

    client.logout().await?;
    println!("{} Logged out", "✓".green());

    Ok(())
}
