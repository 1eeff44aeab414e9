//! Placeholder game: two textures drawn every frame.

use std::path::PathBuf;

use super::Game;
use crate::error::{AppResult, GdiResult};
use crate::gdi::{Color, DeviceContext};
use crate::graphics::Texture;
use crate::platform::SharedGdi;

pub const CREATED_TEXTURE_SIZE: i32 = 100;
pub const CREATED_TEXTURE_COLOR: Color = Color::new(255, 0, 0);
/// Where the filled texture is drawn; the loaded sprite goes to the origin
pub const CREATED_TEXTURE_POSITION: (i32, i32) = (100, 100);

#[derive(Debug)]
pub struct SandboxGame {
    sprite_path: Option<PathBuf>,
    loaded_texture: Texture,
    created_texture: Texture,
}

impl SandboxGame {
    /// `sprite_path` is an optional bitmap drawn at the top-left corner
    pub fn new(gdi: &SharedGdi, sprite_path: Option<PathBuf>) -> Self {
        Self {
            sprite_path,
            loaded_texture: Texture::empty(gdi),
            created_texture: Texture::empty(gdi),
        }
    }

    pub fn loaded_texture(&self) -> &Texture {
        &self.loaded_texture
    }

    pub fn created_texture(&self) -> &Texture {
        &self.created_texture
    }
}

impl Game for SandboxGame {
    fn on_create(&mut self) -> AppResult<()> {
        if let Some(path) = &self.sprite_path {
            self.loaded_texture.reinitialize_from_file(path, true)?;
        }
        self.created_texture.reinitialize_from_color(
            CREATED_TEXTURE_SIZE,
            CREATED_TEXTURE_SIZE,
            CREATED_TEXTURE_COLOR,
            false,
        )?;
        log::info!(
            "Sandbox created ({}x{} filled texture, sprite: {:?})",
            self.created_texture.width(),
            self.created_texture.height(),
            self.sprite_path
        );
        Ok(())
    }

    fn on_render(&mut self, device_context: &DeviceContext) -> GdiResult<()> {
        if self.loaded_texture.bitmap().is_initialized() {
            self.loaded_texture.render(device_context, 0, 0)?;
        }
        let (x, y) = CREATED_TEXTURE_POSITION;
        self.created_texture.render(device_context, x, y)
    }
}
