//! Game lifecycle interface
//!
//! The engine drives exactly one [`Game`] through these hooks. Every hook
//! except [`Game::on_render`] defaults to doing nothing.

pub mod sandbox;

pub use sandbox::SandboxGame;

use crate::error::{AppResult, GdiResult};
use crate::gdi::DeviceContext;
use crate::input::MouseButton;
use crate::math::Vector2;

pub trait Game {
    /// Acquire the game's resources; an error aborts start-up
    fn on_create(&mut self) -> AppResult<()> {
        Ok(())
    }

    fn on_start(&mut self) {}

    fn on_resume(&mut self) {}

    fn on_key_input(&mut self) {}

    fn on_mouse_move(&mut self, _position: Vector2<i32>) {}

    fn on_mouse_button_down(&mut self, _position: Vector2<i32>, _button: MouseButton) {}

    fn on_mouse_button_up(&mut self, _position: Vector2<i32>, _button: MouseButton) {}

    fn on_update(&mut self) {}

    /// Draw one frame onto `device_context`
    fn on_render(&mut self, device_context: &DeviceContext) -> GdiResult<()>;

    fn on_pause(&mut self) {}

    fn on_stop(&mut self) {}

    fn on_destroy(&mut self) {}
}
