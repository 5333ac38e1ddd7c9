//! Decrement command - one unit less of a product

use crate::cart::CartContext;
use crate::cli::args::IdArgs;
use crate::config::Config;
use crate::error::CartResult;
use console::style;

/// Execute the decrement command
pub async fn execute(args: IdArgs, ctx: &CartContext, _config: &Config) -> CartResult<()> {
    let store = ctx.store()?;

    let known = store.products().iter().any(|p| p.id == args.id);
    store.decrement(&args.id).await?;

    if !known {
        println!("{} {} is not in the cart", style("Skipped:").yellow(), args.id);
        return Ok(());
    }

    match store.products().iter().find(|p| p.id == args.id) {
        Some(item) => println!(
            "{} {} ({} in cart)",
            style("Decremented").green().bold(),
            args.id,
            item.quantity
        ),
        None => println!(
            "{} {} from cart",
            style("Removed").green().bold(),
            args.id
        ),
    }

    Ok(())
}
