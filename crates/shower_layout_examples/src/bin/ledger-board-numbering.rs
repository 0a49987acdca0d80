use shower_layout::prelude::*;
use shower_layout_examples::{init_tracing, render_shower_layout_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let params = ShowerParams::new(48.0, 84.0, 32.0)
        .with_tile(4.0, 12.0)
        .with_grout_spacing(0.0625)
        .with_pattern(Pattern::Brick33)
        .with_ledger_board(true);
    let result = compute_shower_layout(&params)?;

    for wall in result.walls() {
        println!("{} wall:", wall.wall);
        for (tile, info) in result.install_plan.ordered(wall).into_iter().take(12) {
            let wrap = info
                .corner_pair_wall
                .map(|w| format!(" (wraps to {w})"))
                .unwrap_or_default();
            println!(
                "  #{:<4} {} x {} at ({}, {}){}",
                info.mark.to_string(),
                to_fractional_inches(tile.width),
                to_fractional_inches(tile.height),
                to_fractional_inches(tile.x),
                to_fractional_inches(tile.y),
                wrap
            );
        }
    }
    println!(
        "{} numbered tiles, {} on the ledger track.",
        result.install_plan.sequence_count(),
        result.install_plan.ledger_count()
    );

    render_shower_layout_to_png(
        &result,
        &RenderConfig::default().with_pixels_per_inch(6.0),
        "ledger-board-numbering.png",
    )?;
    Ok(())
}
