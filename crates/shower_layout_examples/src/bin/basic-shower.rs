use shower_layout::prelude::*;
use shower_layout_examples::{
    format_report, init_tracing, render_shower_layout_to_png, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    // 60" x 72" alcove, 36" deep, 12x24 tile laid horizontally in running bond
    let params = ShowerParams::default();
    let result = compute_shower_layout(&params)?;

    print!("{}", format_report(&result));

    let estimate = result.boxes_needed(8)?;
    println!(
        "Order {} boxes of 8 ({} tiles).",
        estimate.boxes, estimate.tiles
    );

    render_shower_layout_to_png(&result, &RenderConfig::default(), "basic-shower.png")?;
    Ok(())
}
