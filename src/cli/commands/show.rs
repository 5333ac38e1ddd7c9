//! Show command - print cart contents

use crate::cart::{CartContext, LineItem};
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::CartResult;
use console::style;

/// Execute the show command
pub async fn execute(args: ShowArgs, ctx: &CartContext, config: &Config) -> CartResult<()> {
    let store = ctx.store()?;
    let products = store.products();

    if products.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => println!("Cart is empty"),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&products, store.total(), config),
        OutputFormat::Json => print_json(&products)?,
        OutputFormat::Plain => print_plain(&products),
    }

    Ok(())
}

fn print_table(products: &[LineItem], total: f64, config: &Config) {
    let currency = &config.general.currency;

    println!(
        "{:<16} {:<28} {:>10} {:>6} {:>10}",
        style("ID").bold(),
        style("TITLE").bold(),
        style("PRICE").bold(),
        style("QTY").bold(),
        style("SUBTOTAL").bold()
    );
    println!("{}", "-".repeat(74));

    for item in products {
        println!(
            "{:<16} {:<28} {:>10} {:>6} {:>10}",
            item.id,
            item.title,
            format!("{currency}{:.2}", item.price),
            item.quantity,
            format!("{currency}{:.2}", item.subtotal())
        );
    }

    println!();
    println!(
        "{} item(s), total {}",
        products.len(),
        style(format!("{currency}{total:.2}")).green().bold()
    );
}

fn print_json(products: &[LineItem]) -> CartResult<()> {
    println!("{}", serde_json::to_string_pretty(products)?);
    Ok(())
}

fn print_plain(products: &[LineItem]) {
    for item in products {
        println!("{}\t{}\t{}", item.id, item.quantity, item.title);
    }
}
