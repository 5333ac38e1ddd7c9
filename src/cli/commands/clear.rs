//! Clear command - empty the cart

use crate::cart::CartContext;
use crate::config::Config;
use crate::error::CartResult;
use console::style;

/// Execute the clear command
pub async fn execute(ctx: &CartContext, _config: &Config) -> CartResult<()> {
    let store = ctx.store()?;

    let count = store.products().len();
    store.clear().await?;

    println!(
        "{} {} item(s) removed",
        style("Cart cleared:").green().bold(),
        count
    );

    Ok(())
}
