//! Terminal output helpers
//!
//! Uses `cliclack` log lines in an interactive terminal and falls back to
//! plain prefixed lines in CI or when output is piped.
//!
//! # Example
//!
//! ```rust,ignore
//! use marketcart::ui::{self, UiContext};
//!
//! let ctx = UiContext::detect();
//! ui::step_ok_detail(&ctx, "Added apple", "quantity 2");
//! ui::step_warn_hint(&ctx, "pear is not in the cart", "Cart unchanged");
//! ```

mod context;
mod output;

pub use context::UiContext;
pub use output::{intro, remark, step_error_detail, step_info, step_ok, step_ok_detail, step_warn_hint};
