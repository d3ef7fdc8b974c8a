//! Scene assembly and the demo driver
//!
//! The driver runs one fixed sequence: populate, classify into per-variant
//! subsets, report counts, clear the population, render the surviving
//! circles, clear the subsets.

pub mod classify;
pub mod generation;

pub use classify::{select_kind, select_kind_into};
pub use generation::{populate, SceneConfig};

use std::io::Write;

use rand_chacha::ChaCha8Rng;

use crate::core::error::Result;
use crate::shape::{ShapeCollection, ShapeKind};

/// Run the full scene flow, writing the report and render lines to `out`.
pub fn run(config: &SceneConfig, rng: &mut ChaCha8Rng, out: &mut dyn Write) -> Result<()> {
    let mut population = ShapeCollection::new();
    populate(&mut population, config, rng);

    let mut circles = select_kind(&population, ShapeKind::Circle);
    let mut squares = select_kind(&population, ShapeKind::Square);

    writeln!(out, "There are:")?;
    writeln!(out, "Number of shapes: {}", population.len())?;
    writeln!(out, "Number of circles: {}", circles.len())?;
    writeln!(out, "Number of squares: {}", squares.len())?;

    // Every shape here is also held by exactly one subset, so clearing the
    // population releases the primary handles without dropping any shape.
    population.clear();
    tracing::debug!(survivors = circles.len(), "population cleared, rendering circles");

    for shape in &circles {
        shape.render(out)?;
    }

    circles.clear();
    squares.clear();

    Ok(())
}
