//! Duo Pong entry point and frame loop
//!
//! winit drives the loop via `ApplicationHandler`: queued input events are
//! dispatched to the simulation's key mapper, then each `RedrawRequested`
//! runs exactly one simulation tick and presents one frame. Vsync paces the
//! whole thing; there is no separate timestep. The quit flag is checked
//! once per iteration, so a quit event takes effect after the in-flight
//! tick and render complete.

use std::sync::Arc;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use duo_pong::config::Config;
use duo_pong::consts::*;
use duo_pong::renderer::{shapes, vertex::colors, RenderState, Vertex};
use duo_pong::sim::{self, Ball, GameState, Orientation, Paddle};

/// Window plus GPU state, created once the event loop is running.
struct Display {
    window: Arc<Window>,
    renderer: RenderState,
}

struct App {
    config: Config,
    game: GameState,
    display: Option<Display>,
}

impl App {
    fn new(config: Config, game: GameState) -> Self {
        Self {
            config,
            game,
            display: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }
        let window = duo_pong::platform::create_window(event_loop, &self.config);
        log::info!(
            "Window created: {}x{}",
            self.config.width,
            self.config.height
        );
        let renderer = RenderState::new(window.clone(), self.game.bounds);
        self.display = Some(Display { window, renderer });
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(display) = &self.display {
            display.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(display) = self.display.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                self.game.should_run = false;
            }

            WindowEvent::Resized(physical_size) => {
                display
                    .renderer
                    .resize(physical_size.width, physical_size.height);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => sim::key_down(&mut self.game, key),
                            ElementState::Released => sim::key_up(&mut self.game, key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.game.should_run {
                    log::info!("Quit requested, exiting.");
                    event_loop.exit();
                    return;
                }

                sim::tick(&mut self.game);

                let vertices = scene_vertices(&self.game);
                match display.renderer.render(&vertices) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = display.renderer.size;
                        display.renderer.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("GPU out of memory");
                    }
                    Err(err) => log::warn!("Render error: {err:?}"),
                }
            }

            _ => {}
        }
    }
}

/// Rebuild the frame's triangle list from the session state.
fn scene_vertices(game: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for paddle in &game.players {
        vertices.extend(shapes::rect(paddle.pos, paddle.size, colors::PADDLE));
    }
    if let Some(ball) = &game.ball {
        vertices.extend(shapes::circle(ball.pos, ball.radius, colors::BALL, 32));
    }
    vertices
}

fn map_key(key_code: KeyCode) -> Option<sim::Key> {
    match key_code {
        KeyCode::KeyW => Some(sim::Key::W),
        KeyCode::KeyS => Some(sim::Key::S),
        KeyCode::ArrowUp => Some(sim::Key::Up),
        KeyCode::ArrowDown => Some(sim::Key::Down),
        KeyCode::Escape => Some(sim::Key::Escape),
        KeyCode::KeyQ => Some(sim::Key::Q),
        _ => None,
    }
}

/// Build the session: two paddles and a centered ball, sized and anchored
/// from the window dimensions.
fn new_session(config: &Config) -> GameState {
    let bounds = Vec2::new(config.width as f32, config.height as f32);
    let mut game = GameState::new(bounds);

    let paddle_height = bounds.y * PADDLE_HEIGHT_FRAC;
    game.add_player(Paddle::new(
        Vec2::new(
            bounds.x * LEFT_PADDLE_X_FRAC,
            bounds.y / 2.0 - paddle_height,
        ),
        config.left_name.clone(),
        Orientation::Left,
        bounds,
    ));
    game.add_player(Paddle::new(
        Vec2::new(
            bounds.x * RIGHT_PADDLE_X_FRAC,
            bounds.y / 2.0 - paddle_height,
        ),
        config.right_name.clone(),
        Orientation::Right,
        bounds,
    ));
    game.set_ball(Ball::new(bounds / 2.0 - Vec2::splat(BALL_RADIUS)));

    game
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    let game = new_session(&config);

    if let Err(err) = game.ensure_ready() {
        log::error!("Cannot start: {err}");
        return;
    }

    log::info!(
        "Duo Pong starting ({} vs {})",
        config.left_name,
        config.right_name
    );

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, game);
    event_loop.run_app(&mut app).expect("Event loop error");
}
