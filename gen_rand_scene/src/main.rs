use optics2d::OpticSystem;
use optics2d_random::{rand, random_scene};
use optics2d_scene::{serde_json, serialize_system};
use std::{env, error::Error, fs::File};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);

    let file_path = args
        .next()
        .ok_or("please provide a path to write the scene json data to")?;

    let num_optics = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(12);

    let num_rays = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(4);

    let system: OpticSystem = random_scene(&mut rand::thread_rng(), num_optics, num_rays)
        .into_iter()
        .collect();

    serde_json::to_writer_pretty(File::create(&file_path)?, &serialize_system(&system))?;

    log::info!("wrote {num_optics} optics and {num_rays} rays to {file_path}");

    Ok(())
}
