//! Add command - put a product in the cart

use crate::cart::NewLineItem;
use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};

/// Execute the add command
pub async fn execute(args: AddArgs, config: &Config) -> CartResult<()> {
    let ctx = UiContext::detect();
    let mut store = super::open_store(config).await?;

    let candidate = NewLineItem::new(args.id, args.title, args.image_url, args.price);
    let id = candidate.id.clone();
    store.add_to_cart(candidate)?.wait().await?;

    let quantity = store.state().get(&id).map_or(0, |item| item.quantity);
    ui::step_ok_detail(&ctx, &format!("Added {}", id), &format!("quantity {}", quantity));
    Ok(())
}
