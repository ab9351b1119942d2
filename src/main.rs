use affdraw::config::DemoConfig;
use affdraw::demo_ui;
use affdraw::error::DemoError;
use affdraw::sketch::{Sketch, verification_dump};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DemoError> {
    // Usage: affdraw [--headless] [config.json]
    let mut headless = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--headless" => headless = true,
            _ => config_path = Some(arg),
        }
    }

    let cfg = match &config_path {
        Some(path) => {
            log::info!("loading config from {path}");
            DemoConfig::load(path)?
        }
        None => {
            log::info!("no config given, using defaults");
            DemoConfig::default()
        }
    };

    // Sample constructions, handy for checking the matrices by eye.
    let dump = verification_dump(&cfg.params);
    log::info!("{}", serde_json::to_string_pretty(&dump)?);

    if headless || !demo_ui::AVAILABLE {
        return run_headless(&cfg);
    }
    demo_ui::run("affdraw", &cfg)
}

fn run_headless(cfg: &DemoConfig) -> Result<(), DemoError> {
    let mut sketch = Sketch::new(cfg);
    let reports = sketch.replay(&cfg.stroke, &cfg.params)?;
    log::info!("replayed {} stroke points", reports.len());
    if let Some(last) = reports.last() {
        log::info!("last drag: {}", serde_json::to_string(last)?);
    }

    save_outputs(cfg, &sketch)
}

#[cfg(feature = "im-io")]
fn save_outputs(cfg: &DemoConfig, sketch: &Sketch) -> Result<(), DemoError> {
    for (path, (canvas, label)) in [(&cfg.out_a, sketch.view(false)), (&cfg.out_b, sketch.view(true))] {
        if let Some(path) = path {
            canvas.im().save_png(path)?;
            log::info!("saved {label} to {}", path.display());
        }
    }
    Ok(())
}

#[cfg(not(feature = "im-io"))]
fn save_outputs(cfg: &DemoConfig, _sketch: &Sketch) -> Result<(), DemoError> {
    if cfg.out_a.is_some() || cfg.out_b.is_some() {
        log::warn!("out_a/out_b ignored: built without the `im-io` feature");
    }
    Ok(())
}
