//! CPU rendering: the raster surface, per-pixel paint primitives, and the
//! per-frame compositor.

/// Per-frame draw orchestration over the particle field.
pub mod compositor;
/// Premultiplied RGBA8 surface and per-pixel paint primitives.
pub mod raster;
