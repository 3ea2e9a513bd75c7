mod shader;
mod window;

use confetti::{duration_from_millis, ConfettiConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = ConfettiConfig::default();
    if let Some(arg) = std::env::args().nth(1) {
        let ms: i64 = arg.parse()?;
        config = config.with_duration(duration_from_millis(ms)?);
    }
    config.validate()?;

    tracing::info!(
        duration_ms = config.duration.as_millis() as u64,
        "click or press space for confetti"
    );

    // Frames are only requested while confetti is on screen
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = window::App::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_error() {
        return Err(e.into());
    }
    Ok(())
}
