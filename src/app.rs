use crate::context::{self, Context};
use crate::error::Result;
use crate::renderer::Renderer;
use crate::variant::Variant;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

pub const EXIT_KEY: VirtualKeyCode = VirtualKeyCode::R;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closing,
}

impl Default for LoopState {
    fn default() -> Self {
        LoopState::Running
    }
}

impl LoopState {
    /// Returns true when this key press moved the loop into `Closing`.
    pub fn on_key(&mut self, key: Option<VirtualKeyCode>, state: ElementState) -> bool {
        if *self == LoopState::Running
            && key == Some(EXIT_KEY)
            && state == ElementState::Pressed
        {
            *self = LoopState::Closing;
            return true;
        }
        false
    }

    pub fn on_close_requested(&mut self) {
        *self = LoopState::Closing;
    }

    pub fn should_close(self) -> bool {
        self == LoopState::Closing
    }
}

pub struct App {
    event_loop: EventLoop<()>,
    context: Context,
    renderer: Renderer,
}

impl App {
    pub fn new(variant: &Variant) -> Result<Self> {
        let event_loop = EventLoop::new();
        let context = context::create(variant, &event_loop)?;
        context::load_gl_from(&context)?;

        let mut renderer = Renderer::new(variant)?;
        let size = context.window().inner_size();
        renderer.resize(size.width, size.height);

        Ok(App {
            event_loop,
            context,
            renderer,
        })
    }

    /// Runs until the window closes, then exits the process with status 0.
    pub fn run(self) -> ! {
        let App {
            event_loop,
            context,
            renderer,
        } = self;
        let mut renderer = Some(renderer);
        let mut state = LoopState::default();

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        log::debug!("close requested");
                        state.on_close_requested();
                    }
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode,
                                state: key_state,
                                ..
                            },
                        ..
                    } => {
                        if state.on_key(virtual_keycode, key_state) {
                            println!("R pressed, closing window...");
                        }
                    }
                    WindowEvent::Resized(size) => {
                        context.resize(size);
                        if let Some(renderer) = renderer.as_mut() {
                            renderer.resize(size.width, size.height);
                        }
                    }
                    _ => {}
                },
                Event::MainEventsCleared => {
                    if state.should_close() {
                        *control_flow = ControlFlow::Exit;
                    } else {
                        context.window().request_redraw();
                    }
                }
                Event::RedrawRequested(_) => {
                    if let Some(renderer) = renderer.as_mut() {
                        renderer.render();
                    }
                    if let Err(err) = context.swap_buffers() {
                        log::error!("failed to swap buffers: {}", err);
                        state.on_close_requested();
                    }
                }
                Event::LoopDestroyed => {
                    // GL objects go while the context is still current
                    drop(renderer.take());
                    log::info!("closed");
                }
                _ => {}
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert_eq!(LoopState::default(), LoopState::Running);
        assert!(!LoopState::default().should_close());
    }

    #[test]
    fn exit_key_press_closes_once() {
        let mut state = LoopState::Running;
        assert!(state.on_key(Some(VirtualKeyCode::R), ElementState::Pressed));
        assert!(state.should_close());
        assert!(!state.on_key(Some(VirtualKeyCode::R), ElementState::Pressed));
        assert_eq!(state, LoopState::Closing);
    }

    #[test]
    fn other_input_is_ignored() {
        let mut state = LoopState::Running;
        assert!(!state.on_key(Some(VirtualKeyCode::Escape), ElementState::Pressed));
        assert!(!state.on_key(Some(VirtualKeyCode::R), ElementState::Released));
        assert!(!state.on_key(None, ElementState::Pressed));
        assert_eq!(state, LoopState::Running);
    }

    #[test]
    fn close_button_closes_without_key() {
        let mut state = LoopState::Running;
        state.on_close_requested();
        assert!(state.should_close());
        assert!(!state.on_key(Some(VirtualKeyCode::R), ElementState::Pressed));
    }
}
