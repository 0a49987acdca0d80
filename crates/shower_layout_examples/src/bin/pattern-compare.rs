use shower_layout::prelude::*;
use shower_layout_examples::{init_tracing, render_shower_layout_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let base = ShowerParams::new(60.0, 96.0, 34.0)
        .with_tile(3.0, 6.0)
        .with_grout_spacing(0.0625);

    // Same walls and tile, one run per course pattern
    for pattern in Pattern::ALL {
        let result = compute_shower_layout(&base.clone().with_pattern(pattern))?;
        println!(
            "{:>9}: {:>4} placements, {:>4} cut, {:>3} corner wraps, buy {}",
            pattern.as_str(),
            result.total_tiles,
            result.cut_tiles,
            result.corner_pairs.len(),
            result.recommended_purchase
        );
        render_shower_layout_to_png(
            &result,
            &RenderConfig::default().with_pixels_per_inch(4.0),
            format!("pattern-compare-{pattern}.png"),
        )?;
    }
    Ok(())
}
