//! ApplicationHandler and window management
//!
//! Translates winit window events into core messages, executes the commands
//! the update fold returns, and plays the role of the frame-synchronized
//! timer: while a glide is in flight, `about_to_wait` delivers one tick per
//! frame interval and keeps the event loop waking up.

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::Window;

use swipe::commands::Cmd;
use swipe::config::CarouselConfig;
use swipe::messages::Msg;
use swipe::model::AppModel;
use swipe::theme::Theme;
use swipe::update::update;

use crate::view::Renderer;

/// Tick cadence while a glide is in flight (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    model: AppModel,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    renderer: Option<Renderer>,
    window_size: (u32, u32),
    mouse_position: Option<(f64, f64)>,
    last_frame: Instant,
}

impl App {
    pub fn new(window_width: u32, window_height: u32, theme: Theme, config: CarouselConfig) -> Self {
        let model = AppModel::new(f64::from(window_width), theme, config);

        Self {
            model,
            window: None,
            context: None,
            renderer: None,
            window_size: (window_width, window_height),
            mouse_position: None,
            last_frame: Instant::now(),
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let renderer = Renderer::new(window, context)?;
        self.renderer = Some(renderer);
        Ok(())
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::error!("Surface resize failed: {}", e);
                    }
                }
                update(&mut self.model, Msg::resized(f64::from(size.width)))
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                // The core drops moves without a session itself; gating here
                // just avoids flooding the update loop while hovering.
                if self.model.drag.is_active() {
                    update(&mut self.model, Msg::moved(position.x))
                } else {
                    None
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, _) = self.mouse_position?;
                update(&mut self.model, Msg::pressed(x))
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                // The drop resolver ignores the release position; the final
                // displacement comes from the last move of the session.
                let x = self.mouse_position.map_or(0.0, |(x, _)| x);
                update(&mut self.model, Msg::released(x))
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    eprintln!("Render error: {}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title("Swipe")
                .with_inner_size(LogicalSize::new(self.window_size.0, self.window_size.1));

            let window = Rc::new(event_loop.create_window(window_attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();

            self.init_renderer(Rc::clone(&window), &context).unwrap();

            // Seed the width signal with the actual mount-time size, which
            // may differ from the requested logical size on scaled displays.
            let size = window.inner_size();
            update(&mut self.model, Msg::resized(f64::from(size.width)));

            window.request_redraw();
            self.window = Some(window);
            self.context = Some(context);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                self.handle_event(&event)
                    .is_some_and(|cmd| cmd.needs_redraw())
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.model.is_animating() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_frame) >= FRAME_INTERVAL {
            self.last_frame = now;
            if let Some(cmd) = update(&mut self.model, Msg::tick(now)) {
                if cmd.needs_redraw() {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_frame + FRAME_INTERVAL));
    }
}
