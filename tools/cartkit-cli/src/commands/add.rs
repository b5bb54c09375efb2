//! Add one unit of a product.

use anyhow::Result;

use super::AddArgs;
use crate::context::Context;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    let spinner = ctx.output.spinner(&format!("Adding product {}", args.id));
    let result = store.add_product(args.id).await;
    spinner.finish_and_clear();

    let cart = result?;
    ctx.output.success(&format!(
        "Product {} in cart ({} total)",
        args.id,
        cart.amount_of(args.id).unwrap_or_default()
    ));
    ctx.output.cart(&cart);

    Ok(())
}
