//! Run with: cargo run -p sunpo --example showcase
//!
//! Walks the simulated device presets, printing screen facts and token
//! scales for each, then drives rotation and runtime reconfiguration
//! through the live facade.

use std::sync::Arc;

use sunpo::{ConfigOverrides, Metrics, SimHost};

fn main() -> serde_json::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("sunpo=debug")
        .init();

    for (name, host) in [
        ("phone", SimHost::phone()),
        ("notch phone", SimHost::notch_phone()),
        ("island phone", SimHost::island_phone()),
        ("tablet", SimHost::tablet()),
        ("android phone", SimHost::android_phone()),
    ] {
        print_device(name, &Metrics::new(Arc::new(host)))?;
    }

    rotation_demo();
    reconfigure_demo();
    Ok(())
}

fn print_device(name: &str, metrics: &Metrics) -> serde_json::Result<()> {
    let screen = metrics.screen();
    println!("== {name} ==");
    println!(
        "  window: {}x{} @{}x  tablet: {}  status bar: {}",
        screen.width,
        screen.height,
        screen.pixel_density,
        screen.is_tablet,
        metrics.status_bar_height(),
    );
    println!(
        "  scale_width(100): {:.2}  scaled_font_size(16): {}  width_percent(50): {}",
        metrics.scale_width(100.0),
        metrics.scaled_font_size(16.0),
        metrics.width_percent(50.0),
    );
    println!("  breakpoint: {:?}", metrics.breakpoint());
    println!("  tokens: {}", serde_json::to_string_pretty(&metrics.resolve_tokens())?);
    println!();
    Ok(())
}

fn rotation_demo() {
    println!("== rotation ==");
    let host = SimHost::phone();
    let live = Metrics::new(Arc::new(host.clone())).live();

    let layout = live.orientation();
    println!("  portrait: {:?} {}x{}", layout.direction, layout.width, layout.height);

    host.rotate();
    let layout = live.orientation();
    println!("  rotated:  {:?} {}x{}", layout.direction, layout.width, layout.height);
    println!("  spacing.md stays {} either way", live.spacing().md());
    println!();
}

fn reconfigure_demo() {
    println!("== reconfiguration ==");
    let metrics = Metrics::new(Arc::new(SimHost::phone()));
    println!("  spacing.md default: {}", metrics.spacing().md());

    metrics.init(ConfigOverrides {
        spacing_base: Some(8.0),
        scaling_factor: Some(1.0),
        ..Default::default()
    });
    println!("  spacing.md with an 8pt unit: {}", metrics.spacing().md());

    // Rejected inputs warn and substitute fallbacks; the counters keep score.
    let _ = metrics.width_percent(150.0);
    let _ = metrics.scaled_font_size(-1.0);
    println!("  degraded calls so far: {:?}", metrics.stats());
}
