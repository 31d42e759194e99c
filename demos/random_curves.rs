//! Writes the default scene (400 random cubics on a 1920 x 1080 canvas) as SVG to stdout.
//!
//! Usage: `cargo run --example random_curves -- [seed] [--chain] > curves.svg`
//! Set `RUST_LOG=debug` to see what is generated.

use std::env;
use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use bezplot::render::render_scene;
use bezplot::scene::{chained_curves, random_curves};
use bezplot::RenderConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let seed = args
        .iter()
        .find_map(|arg| arg.parse::<u64>().ok())
        .unwrap_or(4040);
    let chain = args.iter().any(|arg| arg == "--chain");

    let config = RenderConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let curves = if chain {
        chained_curves(&mut rng, config.curve_count, config.degree)?
    } else {
        random_curves(&mut rng, config.curve_count, config.degree)?
    };

    let svg = render_scene(&curves, &config)?;
    io::Write::write_all(&mut io::stdout().lock(), svg.as_bytes())?;
    Ok(())
}
