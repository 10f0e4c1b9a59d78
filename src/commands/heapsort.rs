//! `waypath heapsort` command - sort integers by draining the binary heap

use crate::cli::HeapsortArgs;
use crate::commands::dispatch::CommandContext;
use waypath_core::error::Result;
use waypath_core::format::OutputFormat;
use waypath_core::heap::heap_sort;

/// Execute the heapsort command
pub fn execute(ctx: &CommandContext, args: &HeapsortArgs) -> Result<()> {
    let sorted = heap_sort(args.values.clone(), args.order);

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "order": args.order,
                "sorted": sorted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let rendered: Vec<String> = sorted.iter().map(i64::to_string).collect();
            println!("{}", rendered.join(" "));
        }
    }

    Ok(())
}
