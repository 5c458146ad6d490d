use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use starfield_engine::{
    DeviceSignals, FrameClock, HeadlessBackend, RaycastOutcome, Starfield, StarfieldConfig, Viewport,
};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

struct RunnerArgs {
    config_path: PathBuf,
    frames: u64,
    signals: DeviceSignals,
}

fn parse_args() -> Result<RunnerArgs> {
    let mut config_path = PathBuf::from("config.json");
    let mut frames = 600;
    let mut signals = DeviceSignals::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args.next().ok_or_else(|| anyhow!("--frames needs a value"))?;
                frames = value.parse().with_context(|| format!("bad frame count '{}'", value))?;
            }
            "--user-agent" => {
                let value = args.next().ok_or_else(|| anyhow!("--user-agent needs a value"))?;
                signals = signals.with_user_agent(value);
            }
            "--pixel-ratio" => {
                let value = args.next().ok_or_else(|| anyhow!("--pixel-ratio needs a value"))?;
                signals.device_pixel_ratio =
                    value.parse().with_context(|| format!("bad pixel ratio '{}'", value))?;
            }
            "--reduced-motion" => signals = signals.with_reduced_motion(true),
            flag if flag.starts_with("--") => bail!("unknown flag {}", flag),
            path => config_path = PathBuf::from(path),
        }
    }

    Ok(RunnerArgs {
        config_path,
        frames,
        signals,
    })
}

fn run(args: RunnerArgs) -> Result<()> {
    let config = StarfieldConfig::load(&args.config_path)
        .with_context(|| format!("starfield not started, config {}", args.config_path.display()))?;

    let viewport = Viewport::new(1280, 720);
    let mut backend = HeadlessBackend::new();
    let mut starfield = Starfield::initialize(config, &args.signals, viewport, &mut backend)
        .context("starfield not started")?;
    let mut clock = FrameClock::new();
    let mut explosions = 0usize;

    for frame in 0..args.frames {
        // Sweep the pointer across the middle of the screen
        let x = (frame * 7 % viewport.width as u64) as f32;
        starfield.on_pointer_move(x, viewport.height as f32 / 2.0);

        let dt = clock.delta().as_secs_f32();
        let now = clock.now_ms();
        if let RaycastOutcome::Exploded(_) = starfield.tick(dt, now, &mut backend) {
            explosions += 1;
        }

        if frame % 60 == 0 {
            let (normal, falling, exploded) = starfield.stars().state_counts();
            log::info!(
                "frame {}: {} normal, {} falling, {} exploded",
                frame,
                normal,
                falling,
                exploded
            );
        }

        std::thread::sleep(FRAME_INTERVAL);
    }

    println!(
        "Rendered {} frames of {} stars, {} pointer explosions",
        backend.frames_rendered,
        starfield.stars().len(),
        explosions
    );
    Ok(())
}

fn main() {
    env_logger::init();
    println!("Starting Starfield Engine...");

    let result = parse_args().and_then(run);
    if let Err(e) = result {
        log::error!("Starfield error: {:#}", e);
        std::process::exit(1);
    }
}
