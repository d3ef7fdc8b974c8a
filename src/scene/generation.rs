//! Random scene population

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::types::Point;
use crate::shape::{spawn, ShapeCollection, ShapeKind};

/// Scene parameters. The defaults are the fixed demo constants; the binary
/// exposes no way to override them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneConfig {
    pub shape_count: usize,
    pub center_min: f32,
    pub center_max: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape_count: 100,
            center_min: 10.0,
            center_max: 12.0,
        }
    }
}

/// Append `config.shape_count` randomly generated shapes to `collection`.
///
/// Each shape's variant is a fair coin flip and its center coordinates are
/// drawn independently and uniformly from `[center_min, center_max)`.
/// Existing contents of the collection are left in place.
pub fn populate(collection: &mut ShapeCollection, config: &SceneConfig, rng: &mut ChaCha8Rng) {
    for _ in 0..config.shape_count {
        let kind = if rng.gen_bool(0.5) {
            ShapeKind::Circle
        } else {
            ShapeKind::Square
        };
        let x = rng.gen_range(config.center_min..config.center_max);
        let y = rng.gen_range(config.center_min..config.center_max);
        collection.push(spawn(kind, Point::new(x, y)));
    }

    tracing::debug!(
        shapes = collection.len(),
        circles = collection.count_of(ShapeKind::Circle),
        squares = collection.count_of(ShapeKind::Square),
        "populated scene"
    );
}
