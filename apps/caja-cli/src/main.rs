//! # Caja CLI Entry Point
//!
//! A terminal driver over the form session, for development and support:
//! run a scripted demo sale, or feed an ad-hoc item list and payment and
//! see the exact frame the browser form would paint.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments
//! 3. Drive a `SaleFormModel` and print the resulting frame as JSON

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use caja_core::ledger::LineField;
use caja_form::{FormConfig, ProductPayload, SaleFormModel, SelectOption};

/// Sale-form session driver.
#[derive(Debug, Parser)]
#[command(name = "caja", about = "Drive a Caja sale-form session from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs a scripted demo session and prints each resulting frame.
    Simulate,

    /// Builds a one-shot session from arguments and prints its frame.
    Preview {
        /// JSON array of quick-add payloads,
        /// e.g. '[{"sku":"P001","description":"Café","price":25.0,"tax_rate":0.16}]'
        #[arg(long)]
        items: String,

        /// Payment method label ("cash", "efectivo", "card", …).
        #[arg(long, default_value = "cash")]
        method: String,

        /// Amount tendered, as typed into the field.
        #[arg(long, default_value = "0")]
        tendered: String,

        /// Partial-apply amount; enables partial apply when present.
        #[arg(long)]
        partial: Option<String>,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate => simulate(),
        Command::Preview {
            items,
            method,
            tendered,
            partial,
        } => preview(&items, &method, &tendered, partial.as_deref()),
    }
}

/// The scripted counter sale: a couple of catalog picks, a cash tender,
/// and a submit, printing the frame after each step.
fn simulate() {
    info!("starting scripted session");

    let mut model = SaleFormModel::new(FormConfig::from_env());
    model.on_render(|frame| {
        println!(
            "lines={} subtotal={} tax={} total={} change={} balance={}",
            frame.lines.len(),
            frame.subtotal,
            frame.tax,
            frame.total,
            frame.change,
            frame.balance
        );
    });

    model.set_seller_options(vec![SelectOption::new("1", "Caja Mostrador")]);
    model.set_customer_options(vec![
        SelectOption::new("", "Seleccione…").disabled(),
        SelectOption::new("7", "Juan Pérez").with_enrollment("M-0042"),
    ]);

    let coffee = model.add_product_json(
        r#"{"sku":"P001","description":"Café Americano 12oz","price":25.0,"tax_rate":0.16}"#,
    );
    model.add_product_json(r#"{"sku":"","description":"Servicio especial","price":50.0,"tax_rate":0.0}"#);
    model.edit_line(&coffee, LineField::Quantity, "2");

    model.set_payment_method("efectivo");
    model.set_amount_tendered("120");

    match model.submit() {
        Ok(frame) => match serde_json::to_string_pretty(&frame) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("could not serialize frame: {err}"),
        },
        Err(err) => eprintln!("submit rejected: {err}"),
    }
}

/// One-shot preview from command-line inputs.
fn preview(items: &str, method: &str, tendered: &str, partial: Option<&str>) {
    let payloads: Vec<ProductPayload> = match serde_json::from_str(items) {
        Ok(payloads) => payloads,
        Err(err) => {
            eprintln!("--items is not a JSON array of products: {err}");
            std::process::exit(2);
        }
    };

    let mut model = SaleFormModel::new(FormConfig::from_env());
    for payload in payloads {
        model.add_product(payload);
    }
    model.set_payment_method(method);
    model.set_amount_tendered(tendered);
    if let Some(amount) = partial {
        model.set_partial_apply(true);
        model.set_partial_amount(amount);
    }

    match serde_json::to_string_pretty(&model.frame()) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("could not serialize frame: {err}");
            std::process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=caja=trace` - Show trace for caja crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
