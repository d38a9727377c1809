//! Picker options command.

use anyhow::Result;
use product_list_commerce::quantity::{picker_options, FREE_TEXT_THRESHOLD};

use super::OptionsArgs;
use crate::context::Context;

/// Run the options command.
pub fn run(args: OptionsArgs, ctx: &Context) -> Result<()> {
    let options = picker_options(args.max);

    if ctx.output.is_json() {
        ctx.output.json(&options);
        return Ok(());
    }

    ctx.output.picker_options(args.max, &options);
    if args.max >= FREE_TEXT_THRESHOLD {
        ctx.output.debug(&format!(
            "choosing {}+ switches to the free-text field",
            FREE_TEXT_THRESHOLD
        ));
    }

    Ok(())
}
