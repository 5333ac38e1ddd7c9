//! Add command - put one unit of a product in the cart

use crate::cart::{CartContext, LineItem};
use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::error::CartResult;
use console::style;
use tracing::info;

/// Execute the add command
pub async fn execute(args: AddArgs, ctx: &CartContext, _config: &Config) -> CartResult<()> {
    let store = ctx.store()?;

    let item = LineItem::single(&args.id, &args.title, &args.image_url, args.price);
    store.add_to_cart(&item).await?;

    let quantity = store
        .products()
        .iter()
        .find(|p| p.id == args.id)
        .map(|p| p.quantity)
        .unwrap_or(0);

    info!("Added {} to cart", args.id);
    println!(
        "{} {} ({} in cart)",
        style("Added").green().bold(),
        args.title,
        quantity
    );

    Ok(())
}
