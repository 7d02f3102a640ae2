//! Hop -- a one-sprite gravity demo: main loop and entry point.
//!
//! winit drives the loop via `ApplicationHandler`. Pending events drain into
//! `InputState` (and the viewport, for resizes) as they arrive; each
//! `RedrawRequested` then runs one frame:
//!
//!   1. quit check -- close request or the quit key ends the loop before any
//!      further simulation or rendering
//!   2. sample the frame clock for this frame's dt
//!   3. fold the accumulated input intent into the body, integrate under
//!      gravity against the floor
//!   4. draw the sprite and present -- Fifo present mode paces the loop
//!
//! The window opens at 16:9; on resize the viewport re-letterboxes itself
//! from the new width.

mod sprite;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use hop_core::input::{Action, InputState};
use hop_core::physics::{KinematicBody, PhysicsConfig};
use hop_core::time::FrameClock;
use hop_platform::window::PlatformConfig;
use hop_render::{GpuContext, SpriteRenderer, Viewport};
use sprite::load_sprite_from_path;

const SPRITE_PATH: &str = "assets/sprites/guy.png";

struct GameState {
    window: Arc<Window>,
    gpu: GpuContext,
    renderer: SpriteRenderer,
    viewport: Viewport,
    clock: FrameClock,
    input: InputState,
    body: KinematicBody,
    physics: PhysicsConfig,
}

impl GameState {
    fn new(window: Arc<Window>) -> Self {
        let gpu = GpuContext::new(window.clone());
        let mut renderer = SpriteRenderer::new(&gpu);

        let sprite = load_sprite_from_path(SPRITE_PATH.as_ref()).unwrap_or_else(|err| {
            panic!("Failed to load sprite '{SPRITE_PATH}': {err}");
        });
        log::info!(
            "Sprite loaded: {}x{} ({} source channels)",
            sprite.width,
            sprite.height,
            sprite.channels
        );
        renderer.upload_sprite(&gpu, &sprite.pixels, sprite.width, sprite.height);

        let physics = PhysicsConfig::default();
        Self {
            viewport: Viewport::new(gpu.size.0, gpu.size.1),
            clock: FrameClock::new(),
            input: InputState::new(physics.move_speed),
            body: KinematicBody::new(&physics),
            window,
            gpu,
            renderer,
            physics,
        }
    }
}

struct App {
    config: PlatformConfig,
    state: Option<GameState>,
}

impl App {
    fn new() -> Self {
        Self {
            config: PlatformConfig::default(),
            state: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window = hop_platform::window::create_window(event_loop, &self.config);
        self.state = Some(GameState::new(window));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match self.state.as_mut() {
            Some(s) => s,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested.");
                state.input.action_pressed(Action::Quit);
            }

            WindowEvent::Resized(physical_size) => {
                let w = physical_size.width;
                let h = physical_size.height;
                if w > 0 && h > 0 {
                    state.gpu.resize(w, h);
                    if state.viewport.handle_resize(w, h) {
                        log::info!(
                            "Viewport now {}x{}, letterbox y offset {}",
                            state.viewport.width,
                            state.viewport.height,
                            state.viewport.y_origin
                        );
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                // Autorepeat is not a fresh press; a held jump key stays one jump.
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(action) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => state.input.action_pressed(action),
                            ElementState::Released => state.input.action_released(action),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if state.input.quit {
                    log::info!("Quit requested, exiting.");
                    event_loop.exit();
                    return;
                }
                if state.gpu.size.0 == 0 || state.gpu.size.1 == 0 {
                    return;
                }

                let dt = state.clock.tick();
                state.body.apply_intent(&mut state.input, &state.physics);
                state
                    .body
                    .integrate(dt, state.viewport.height as f32, &state.physics);

                state.renderer.render(
                    &state.gpu,
                    &state.viewport,
                    state.body.position,
                    state.physics.player_width,
                    state.physics.player_height,
                );
            }

            _ => {}
        }
    }
}

fn map_key(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(Action::Left),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(Action::Right),
        KeyCode::KeyW | KeyCode::Space | KeyCode::ArrowUp => Some(Action::Jump),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(Action::FastFall),
        KeyCode::KeyQ | KeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Hop starting...");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
