use anyhow::Result;
use log::{debug, info, warn};
use ripplefx::app::App;
use ripplefx::config::Config;
use ripplefx::effect::EffectOutputs;
use ripplefx::gfx::math::Vec2;
use ripplefx::gfx::uniforms::{named_uniforms, UniformBlock};
use std::time::{Duration, Instant};

const PREVIEW_COLUMNS: usize = 48;
const PREVIEW_ROWS: usize = 16;

fn main() -> Result<()> {
    env_logger::init();
    println!("Starting ripplefx...");

    // Load config
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Falling back to default config: {}", e);
        Config::default()
    });
    let mut app = App::new(config)?;
    let frame_budget = Duration::from_secs_f32(app.frame_interval());

    app.play();
    let mut last_frame = Instant::now();

    while !app.is_finished() {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        if let Some(outputs) = app.update(dt) {
            let block = UniformBlock::from(&outputs);
            debug!("frame {}: {} uniform bytes", app.frames, block.as_bytes().len());
            for (name, value) in named_uniforms(&outputs) {
                debug!("  {} = {:?}", name, value);
            }
        }

        // Sleep off the rest of the frame
        if let Some(rest) = frame_budget.checked_sub(now.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    if let Some(outputs) = app.last_outputs() {
        info!(
            "Final size {:?}, blur {:.3}, fades ({:.2}, {:.2}, {:.2})",
            outputs.size, outputs.blur, outputs.fade_sparkle, outputs.fade_ring, outputs.fade_fill
        );
        if outputs.battery.is_some() {
            println!("{}", border_preview(outputs));
        }
    }

    Ok(())
}

/// Coarse text rendering of the lit part of the battery border.
fn border_preview(outputs: &EffectOutputs) -> String {
    let (Some(geometry), Some(battery)) = (outputs.border_geometry(), outputs.battery) else {
        return String::new();
    };

    let mut text = String::with_capacity((PREVIEW_COLUMNS + 1) * PREVIEW_ROWS);
    for row in 0..PREVIEW_ROWS {
        for col in 0..PREVIEW_COLUMNS {
            let p = Vec2::new(
                (col as f32 + 0.5) / PREVIEW_COLUMNS as f32 * geometry.width,
                (row as f32 + 0.5) / PREVIEW_ROWS as f32 * geometry.height,
            );
            let ch = if geometry.perimeter_position(p) < 0.0 {
                ' '
            } else if geometry.fill_fraction(p, battery) > 0.0 {
                '#'
            } else {
                '.'
            };
            text.push(ch);
        }
        text.push('\n');
    }
    text
}
