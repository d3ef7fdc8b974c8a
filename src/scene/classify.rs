//! Tag-based shape classification

use std::rc::Rc;

use crate::shape::{ShapeCollection, ShapeKind};

/// Collect the handles from `source` whose variant tag equals `kind`,
/// preserving source order. The source is not modified.
pub fn select_kind(source: &ShapeCollection, kind: ShapeKind) -> ShapeCollection {
    let mut selected = ShapeCollection::new();
    select_kind_into(source, kind, &mut selected);
    selected
}

/// Append-style variant of [`select_kind`] for filling an existing collection.
pub fn select_kind_into(source: &ShapeCollection, kind: ShapeKind, out: &mut ShapeCollection) {
    for handle in source {
        if handle.kind() == kind {
            out.push(Rc::clone(handle));
        }
    }
}
