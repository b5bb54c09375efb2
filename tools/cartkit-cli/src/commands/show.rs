//! Print the cart.

use anyhow::Result;

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;

    if args.count {
        let count = store.item_count();
        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "count": count }));
        } else {
            println!("{}", count);
        }
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart(&store.cart());

    Ok(())
}
