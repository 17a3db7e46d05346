use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;

use prettytable::{cell, row, Table};

use rusty_reflections::config::RenderConfig;
use rusty_reflections::presets::{self, Preset};
use rusty_reflections::renderer::Renderer;

fn select_config(arg: Option<&str>) -> RenderConfig {
    match arg {
        Some("preview") => RenderConfig::preview(),
        Some("hq") => RenderConfig::high_quality(),
        Some("normals") => RenderConfig::debug_normals(),
        Some("single") => RenderConfig::default().single_threaded(),
        _ => RenderConfig::default(),
    }
}

/// Usage: rusty_reflections [preview|hq|normals|single] [scene]
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let config = select_config(args.get(1).map(String::as_str));
    let scenes: Vec<Preset> = match args.get(2) {
        Some(name) => match presets::find(name)? {
            Some(preset) => vec![preset],
            None => return Err(format!("Unknown scene {}", name).into()),
        },
        None => presets::all()?,
    };

    let root_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let save_path = root_path.join("results");
    if !save_path.exists() {
        std::fs::create_dir_all(&save_path)?;
    }

    let mut renderer = Renderer::new();
    let mut info_table = Table::new();
    info_table.add_row(row!["scene", "size", "samples", "bounces", "time", "Msamples/s"]);
    for preset in scenes {
        tracing::info!("Rendering {}...", preset.name);
        let scene = Arc::new(preset.scene);
        let stats = renderer.render(&scene, &preset.environment, &preset.camera, &config)?;
        info_table.add_row(row![
            preset.name,
            format!("{}x{}", config.width, config.height),
            stats.samples,
            stats.bounces,
            format!("{:#.2?}", stats.duration),
            format!("{:.2}", stats.msps())
        ]);

        let image_path = save_path.join(format!("{}.png", preset.name));
        renderer.save_image(&image_path)?;
        tracing::info!("Saved {}", image_path.display());
    }

    let timing_path = save_path.join(Local::now().format("render_%F_%H%M%S.txt").to_string());
    let mut timing_file = File::create(timing_path)?;
    info_table.printstd();
    info_table.print(&mut timing_file)?;
    Ok(())
}
