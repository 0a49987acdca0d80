use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use image::{Rgb, RgbImage};
use shower_layout::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Colors and scale used when drawing a shower layout.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub pixels_per_inch: f64,
    pub margin_px: u32,
    /// Horizontal gap between the unfolded walls.
    pub wall_gap_px: u32,
    pub background: [u8; 3],
    pub grout: [u8; 3],
    pub full_tile: [u8; 3],
    pub cut_tile: [u8; 3],
    pub corner_tile: [u8; 3],
    pub ledger_tile: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pixels_per_inch: 8.0,
            margin_px: 16,
            wall_gap_px: 12,
            background: [250, 250, 248],
            grout: [170, 170, 165],
            full_tile: [225, 232, 240],
            cut_tile: [245, 205, 160],
            corner_tile: [220, 120, 110],
            ledger_tile: [150, 190, 150],
        }
    }
}

impl RenderConfig {
    pub fn with_pixels_per_inch(mut self, pixels_per_inch: f64) -> Self {
        self.pixels_per_inch = pixels_per_inch;
        self
    }
}

/// Draws left, back and right walls side by side, as seen standing in the shower.
pub fn render_shower_layout_to_png(
    result: &ShowerLayoutResult,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let ppi = config.pixels_per_inch;
    anyhow::ensure!(ppi > 0.0, "pixels_per_inch must be > 0");

    let panels = [&result.left, &result.back, &result.right];
    let panel_widths: Vec<u32> = panels
        .iter()
        .map(|w| (w.wall_width * ppi).ceil() as u32)
        .collect();
    let panel_height = (result.back.wall_height * ppi).ceil() as u32;

    let width = config.margin_px * 2
        + panel_widths.iter().sum::<u32>()
        + config.wall_gap_px * (panels.len() as u32 - 1);
    let height = config.margin_px * 2 + panel_height;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    let mut cursor_x = config.margin_px;
    for (wall, panel_width) in panels.iter().zip(&panel_widths) {
        let origin = DVec2::new(f64::from(cursor_x), f64::from(config.margin_px));
        fill_rect(
            &mut img,
            origin,
            DVec2::new(f64::from(*panel_width), f64::from(panel_height)),
            config.grout,
        );

        for tile in &wall.tiles {
            let info = result.install_plan.get(&tile.id);
            let color = match info {
                Some(i) if i.corner_pair_wall.is_some() => config.corner_tile,
                Some(i) if i.mark.is_ledger() => config.ledger_tile,
                _ if tile.is_cut() => config.cut_tile,
                _ => config.full_tile,
            };
            fill_rect(&mut img, origin + tile.origin() * ppi, tile.size() * ppi, color);
        }

        cursor_x += panel_width + config.wall_gap_px;
    }

    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote {} ({}x{} px).", path.display(), width, height);
    Ok(())
}

fn fill_rect(img: &mut RgbImage, origin: DVec2, size: DVec2, color: [u8; 3]) {
    let x0 = origin.x.round().max(0.0) as u32;
    let y0 = origin.y.round().max(0.0) as u32;
    let x1 = ((origin.x + size.x).round().max(0.0) as u32).min(img.width());
    let y1 = ((origin.y + size.y).round().max(0.0) as u32).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}
