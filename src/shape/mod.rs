//! Shape variants and shared-handle collections
//!
//! Shapes are held through `Rc` handles so that several collections can
//! reference the same instance; a shape is dropped when the last collection
//! holding a handle to it releases it. Each shape carries an explicit
//! `ShapeKind` tag set at construction, and classification filters on that
//! tag rather than on runtime type identity.

use std::io::{self, Write};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Closed set of shape variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Square];
}

/// Polymorphic shape capability: a variant tag, a position, and a
/// variant-specific render side effect.
pub trait Shape {
    fn kind(&self) -> ShapeKind;

    fn center(&self) -> Point;

    /// Write the variant-specific render line to `out`.
    fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct Circle {
    center: Point,
}

impl Circle {
    pub fn new(center: Point) -> Self {
        Self { center }
    }
}

impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn center(&self) -> Point {
        self.center
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I will draw a circle!")
    }
}

#[derive(Debug, Clone)]
pub struct Square {
    center: Point,
}

impl Square {
    pub fn new(center: Point) -> Self {
        Self { center }
    }
}

impl Shape for Square {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn center(&self) -> Point {
        self.center
    }

    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "I will draw a squaaaare!")
    }
}

/// Shared-ownership handle to a shape
pub type ShapeHandle = Rc<dyn Shape>;

/// Construct a shape of the given kind at the given center.
///
/// The match is exhaustive, so adding a variant without updating every
/// per-kind site is a compile error rather than a silent partition break.
pub fn spawn(kind: ShapeKind, center: Point) -> ShapeHandle {
    match kind {
        ShapeKind::Circle => Rc::new(Circle::new(center)),
        ShapeKind::Square => Rc::new(Square::new(center)),
    }
}

/// Ordered sequence of shape handles. Iteration order is push order.
#[derive(Default)]
pub struct ShapeCollection {
    handles: Vec<ShapeHandle>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: ShapeHandle) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShapeHandle> {
        self.handles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShapeHandle> {
        self.handles.iter()
    }

    /// Release all handles. Shapes still referenced by another collection
    /// stay alive; the rest are dropped here.
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Count handles carrying the given variant tag
    pub fn count_of(&self, kind: ShapeKind) -> usize {
        self.handles.iter().filter(|h| h.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a ShapeHandle;
    type IntoIter = std::slice::Iter<'a, ShapeHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.handles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines_per_variant() {
        let circle = Circle::new(Point::new(10.5, 11.5));
        let mut buf = Vec::new();
        circle.render(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "I will draw a circle!\n");

        let square = Square::new(Point::new(10.5, 11.5));
        let mut buf = Vec::new();
        square.render(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "I will draw a squaaaare!\n");
    }

    #[test]
    fn test_spawn_sets_tag_and_center() {
        for kind in ShapeKind::ALL {
            let shape = spawn(kind, Point::new(11.0, 10.25));
            assert_eq!(shape.kind(), kind);
            assert_eq!(shape.center(), Point::new(11.0, 10.25));
        }
    }

    #[test]
    fn test_collection_preserves_push_order() {
        let mut collection = ShapeCollection::new();
        collection.push(spawn(ShapeKind::Square, Point::default()));
        collection.push(spawn(ShapeKind::Circle, Point::default()));
        collection.push(spawn(ShapeKind::Square, Point::default()));

        let kinds: Vec<ShapeKind> = collection.iter().map(|h| h.kind()).collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Square, ShapeKind::Circle, ShapeKind::Square]
        );
        assert_eq!(collection.count_of(ShapeKind::Square), 2);
        assert_eq!(collection.count_of(ShapeKind::Circle), 1);
    }

    #[test]
    fn test_clear_is_idempotent_on_empty() {
        let mut collection = ShapeCollection::new();
        collection.clear();
        assert!(collection.is_empty());
        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }

    #[test]
    fn test_shared_handles_keep_shape_alive() {
        let mut primary = ShapeCollection::new();
        let mut secondary = ShapeCollection::new();

        let shape = spawn(ShapeKind::Circle, Point::new(10.0, 12.0));
        primary.push(Rc::clone(&shape));
        secondary.push(Rc::clone(&shape));

        // local binding + two collections
        assert_eq!(Rc::strong_count(&shape), 3);

        primary.clear();
        assert_eq!(Rc::strong_count(&shape), 2);

        // Still renderable through the surviving collection
        let mut buf = Vec::new();
        secondary.get(0).unwrap().render(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "I will draw a circle!\n");

        secondary.clear();
        assert_eq!(Rc::strong_count(&shape), 1);
    }
}
