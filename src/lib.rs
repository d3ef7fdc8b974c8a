//! Shapeyard - Polymorphic Shape Scene Demo

pub mod core;
pub mod scene;
pub mod shape;
