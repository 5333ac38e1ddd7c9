//! Increment command - one more unit of a product

use crate::cart::CartContext;
use crate::cli::args::IdArgs;
use crate::config::Config;
use crate::error::CartResult;
use console::style;

/// Execute the increment command
pub async fn execute(args: IdArgs, ctx: &CartContext, _config: &Config) -> CartResult<()> {
    let store = ctx.store()?;

    let known = store.products().iter().any(|p| p.id == args.id);
    store.increment(&args.id).await?;

    if known {
        let quantity = store
            .products()
            .iter()
            .find(|p| p.id == args.id)
            .map(|p| p.quantity)
            .unwrap_or(0);
        println!(
            "{} {} ({} in cart)",
            style("Incremented").green().bold(),
            args.id,
            quantity
        );
    } else {
        // Unknown ids are a no-op by contract, tell the user anyway
        println!("{} {} is not in the cart", style("Skipped:").yellow(), args.id);
    }

    Ok(())
}
