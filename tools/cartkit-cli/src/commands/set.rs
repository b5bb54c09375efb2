//! Set the amount of a product already in the cart.

use anyhow::Result;
use cartkit_store::UpdateProductAmount;

use super::SetArgs;
use crate::context::Context;

/// Run the set command.
pub async fn run(args: SetArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    if args.amount <= 0 {
        ctx.output
            .warn(&format!("Ignoring amount {}; amounts start at 1", args.amount));
    }

    let spinner = ctx.output.spinner(&format!("Checking stock for {}", args.id));
    let result = store
        .update_product_amount(UpdateProductAmount::new(args.id, args.amount))
        .await;
    spinner.finish_and_clear();

    let cart = result?;
    if args.amount > 0 {
        ctx.output
            .success(&format!("Product {} set to {}", args.id, args.amount));
    }
    ctx.output.cart(&cart);

    Ok(())
}
