//! Shapeyard - Entry Point
//!
//! Builds a randomly populated shape scene, classifies it into per-variant
//! collections, reports the counts, and proves the subset handles keep
//! their shapes alive after the primary collection is cleared.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shapeyard::core::error::Result;
use shapeyard::scene::{self, SceneConfig};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("shapeyard=debug")
        .init();

    tracing::info!("Shapeyard starting...");

    let config = SceneConfig::default();
    let mut rng = ChaCha8Rng::from_entropy();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scene::run(&config, &mut rng, &mut out)?;

    tracing::info!("Shapeyard finished");
    Ok(())
}
