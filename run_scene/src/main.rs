use optics2d::{OpticSystem, TraceConfig};
use std::{error::Error, io::Write};

fn run_scene(path: &str, max_steps: Option<usize>) -> Result<OpticSystem, Box<dyn Error>> {
    let config = max_steps.map_or_else(TraceConfig::new, |steps| {
        TraceConfig::new().max_steps(steps)
    });

    let mut system = OpticSystem::with_config(config);
    system.extend(optics2d_scene::load_scene(path)?);

    log::info!(
        "tracing {} rays through {} optics",
        system.rays().len(),
        system.optics().len()
    );

    system.run();

    Ok(system)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let file_path = args
        .next()
        .ok_or("expected a scene file path as a first argument.")?;

    let max_steps = args
        .next()
        .map(|arg| arg.parse())
        .transpose()
        .map_err(|e| format!("expected a number of steps as second argument: {e}"))?;

    let system = run_scene(&file_path, max_steps)?;

    let mut out = std::io::stdout().lock();

    for (i, ray) in system.rays().iter().enumerate() {
        let status = if ray.has_escaped() { "escaped" } else { "bouncing" };
        writeln!(out, "ray {i} ({status}):")?;

        for p in ray.path() {
            writeln!(out, "  {} {}", p.x, p.y)?;
        }
    }

    Ok(())
}
