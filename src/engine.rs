//! Engine: forwards host callbacks to the one game it owns.
//!
//! The host (window procedure and message loop) owns an `Engine` and calls
//! the `on_*` methods as window messages arrive. Rendering errors stop at
//! this boundary: a failed frame is logged and the next one is tried.

use crate::config::Config;
use crate::error::AppResult;
use crate::game::Game;
use crate::gdi::DeviceContext;
use crate::input::{MouseButton, MouseEvent};
use crate::math::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Paused,
    Running,
}

#[derive(Debug)]
pub struct Engine<G: Game> {
    config: Config,
    game: G,
    state: EngineState,
}

impl<G: Game> Engine<G> {
    pub fn new(config: Config, game: G) -> Self {
        Self {
            config,
            game,
            state: EngineState::Paused,
        }
    }

    pub fn on_create(&mut self) -> AppResult<()> {
        log::info!("Creating \"{}\"", self.config.window.title);
        self.game.on_create()
    }

    pub fn on_start(&mut self) {
        self.game.on_start();
    }

    pub fn on_resume(&mut self) {
        self.game.on_resume();
        self.state = EngineState::Running;
    }

    pub fn on_handle_key_input(&mut self) {
        self.game.on_key_input();
    }

    pub fn on_handle_mouse_input(&mut self, x: i32, y: i32, event: MouseEvent) {
        let position = Vector2::new(x, y);
        match event {
            MouseEvent::Move => self.game.on_mouse_move(position),
            MouseEvent::LeftButtonUp => self.game.on_mouse_button_up(position, MouseButton::Left),
            MouseEvent::LeftButtonDown => {
                self.game.on_mouse_button_down(position, MouseButton::Left)
            }
            MouseEvent::RightButtonUp => {
                self.game.on_mouse_button_up(position, MouseButton::Right)
            }
            MouseEvent::RightButtonDown => {
                self.game.on_mouse_button_down(position, MouseButton::Right)
            }
        }
    }

    pub fn on_update(&mut self) {
        self.game.on_update();
    }

    /// Render one frame; errors are logged, never returned
    pub fn on_render(&mut self, device_context: &DeviceContext) {
        if let Err(err) = self.game.on_render(device_context) {
            log::warn!("Render error: {err}");
        }
    }

    pub fn on_pause(&mut self) {
        self.game.on_pause();
        self.state = EngineState::Paused;
    }

    pub fn on_stop(&mut self) {
        self.game.on_stop();
    }

    pub fn on_destroy(&mut self) {
        self.game.on_destroy();
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::{GdiError, GdiResult};
    use crate::platform::{MemoryGdi, SharedGdi};

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
        fail_render: bool,
    }

    impl Game for Recorder {
        fn on_resume(&mut self) {
            self.events.push("resume".into());
        }

        fn on_mouse_move(&mut self, position: Vector2<i32>) {
            self.events.push(format!("move {} {}", position.x, position.y));
        }

        fn on_mouse_button_down(&mut self, position: Vector2<i32>, button: MouseButton) {
            self.events
                .push(format!("down {:?} {} {}", button, position.x, position.y));
        }

        fn on_mouse_button_up(&mut self, position: Vector2<i32>, button: MouseButton) {
            self.events
                .push(format!("up {:?} {} {}", button, position.x, position.y));
        }

        fn on_render(&mut self, _device_context: &DeviceContext) -> GdiResult<()> {
            self.events.push("render".into());
            if self.fail_render {
                Err(GdiError::Blit)
            } else {
                Ok(())
            }
        }

        fn on_pause(&mut self) {
            self.events.push("pause".into());
        }
    }

    #[test]
    fn starts_paused_and_follows_resume_and_pause() {
        let mut engine = Engine::new(Config::default(), Recorder::default());
        assert_eq!(engine.state(), EngineState::Paused);

        engine.on_resume();
        assert_eq!(engine.state(), EngineState::Running);
        engine.on_pause();
        assert_eq!(engine.state(), EngineState::Paused);
        assert_eq!(engine.game().events, ["resume", "pause"]);
    }

    #[test]
    fn mouse_events_map_to_buttons() {
        let mut engine = Engine::new(Config::default(), Recorder::default());
        engine.on_handle_mouse_input(1, 2, MouseEvent::Move);
        engine.on_handle_mouse_input(3, 4, MouseEvent::LeftButtonDown);
        engine.on_handle_mouse_input(3, 4, MouseEvent::LeftButtonUp);
        engine.on_handle_mouse_input(5, 6, MouseEvent::RightButtonDown);
        engine.on_handle_mouse_input(5, 6, MouseEvent::RightButtonUp);

        assert_eq!(
            engine.game().events,
            [
                "move 1 2",
                "down Left 3 4",
                "up Left 3 4",
                "down Right 5 6",
                "up Right 5 6",
            ]
        );
    }

    #[test]
    fn render_errors_do_not_escape() {
        let gdi: SharedGdi = Rc::new(MemoryGdi::new(4, 4));
        let screen = DeviceContext::acquire(&gdi).unwrap();
        let mut engine = Engine::new(Config::default(), Recorder::default());
        engine.game_mut().fail_render = true;

        engine.on_render(&screen);
        engine.on_render(&screen);
        assert_eq!(engine.game().events, ["render", "render"]);
    }
}
