//! List command - show cart contents

use crate::cart::{CartState, LineItem};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::CartResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> CartResult<()> {
    let store = super::open_store(config).await?;
    let state = store.state();

    if state.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "Cart is empty");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(state),
        OutputFormat::Json => print_json(state.items())?,
        OutputFormat::Plain => print_plain(state.items()),
    }

    Ok(())
}

fn print_table(state: &CartState) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Cart");

    println!(
        "{:<16} {:<30} {:>10} {:>5}",
        style("ID").bold(),
        style("TITLE").bold(),
        style("PRICE").bold(),
        style("QTY").bold()
    );
    println!("{}", "-".repeat(64));

    for item in state {
        println!(
            "{:<16} {:<30} {:>10.2} {:>5}",
            item.id, item.title, item.price, item.quantity
        );
    }

    println!();
    println!(
        "{} item(s), {} unit(s)",
        state.len(),
        state.total_quantity()
    );
}

fn print_json(items: &[LineItem]) -> CartResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(items: &[LineItem]) {
    for item in items {
        println!("{}\t{}", item.id, item.quantity);
    }
}
