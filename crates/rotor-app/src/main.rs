use anyhow::{bail, Result};
use winit::dpi::LogicalSize;

use rotor_app::shapes::{self, Shape};
use rotor_app::FrameRenderer;
use rotor_engine::device::GpuInit;
use rotor_engine::logging::{init_logging, LoggingConfig};
use rotor_engine::window::{Runtime, RuntimeConfig};

/// Selects the spinning shape; `triangle` when unset.
const SHAPE_VAR: &str = "ROTOR_SHAPE";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let shape = pick_shape()?;
    log::info!("starting with shape {}", shape.name());

    let config = RuntimeConfig {
        title: "My First 3D Game".to_string(),
        initial_size: LogicalSize::new(1280.0, 720.0),
    };

    Runtime::run(config, GpuInit::default(), FrameRenderer::new(shape))
}

fn pick_shape() -> Result<Box<dyn Shape>> {
    let name = std::env::var(SHAPE_VAR).unwrap_or_else(|_| "triangle".to_string());
    match shapes::by_name(&name) {
        Some(shape) => Ok(shape),
        None => bail!("unknown {SHAPE_VAR} value {name:?} (expected one of {:?})", shapes::NAMES),
    }
}
