//! Remove a product from the cart.

use anyhow::Result;

use super::RemoveArgs;
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    let cart = store.remove_product(args.id).await?;
    ctx.output.success(&format!("Removed product {}", args.id));
    ctx.output.cart(&cart);

    Ok(())
}
