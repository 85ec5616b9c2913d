// crates/reservemate-cli/src/commands/list.rs - Print the stored reservations
use anyhow::Result;

use crate::context::Context;
use crate::render;

/// Print every reservation in book order
///
/// - Human-readable: numbered cards
/// - Machine-readable: a JSON array for scripting
pub fn handle(ctx: &Context, json: bool) -> Result<()> {
    let reservations = ctx.logic().reserve_mate().reservations();

    if json {
        let json_reservations: Vec<_> = reservations
            .iter()
            .enumerate()
            .map(|(i, reservation)| render::reservation_json(i + 1, reservation))
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_reservations)?);
    } else {
        println!("{}", render::reservation_list(reservations));
    }

    Ok(())
}
