//! Engine-level drawables built on the GDI wrappers

mod texture;

pub use texture::Texture;
