//! Increment and decrement commands - adjust an item's quantity

use crate::cart::CartStore;
use crate::cli::args::ItemArgs;
use crate::config::Config;
use crate::error::CartResult;
use crate::persistence::PendingSave;
use crate::ui::{self, UiContext};

/// Execute the increment command
pub async fn increment(args: ItemArgs, config: &Config) -> CartResult<()> {
    adjust(args, config, CartStore::increment).await
}

/// Execute the decrement command
pub async fn decrement(args: ItemArgs, config: &Config) -> CartResult<()> {
    adjust(args, config, CartStore::decrement).await
}

async fn adjust(
    args: ItemArgs,
    config: &Config,
    mutate: fn(&mut CartStore, &str) -> CartResult<PendingSave>,
) -> CartResult<()> {
    let ctx = UiContext::detect();
    let mut store = super::open_store(config).await?;

    let known = store.state().contains(&args.id);
    mutate(&mut store, &args.id)?.wait().await?;

    if !known {
        ui::step_warn_hint(
            &ctx,
            &format!("{} is not in the cart", args.id),
            "Cart unchanged",
        );
        return Ok(());
    }

    match store.state().get(&args.id) {
        Some(item) => ui::step_ok_detail(
            &ctx,
            &format!("Updated {}", args.id),
            &format!("quantity {}", item.quantity),
        ),
        None => ui::step_ok(&ctx, &format!("Removed {}", args.id)),
    }

    Ok(())
}
