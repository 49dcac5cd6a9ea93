//! Native winit shell presenting the board through a CPU framebuffer.

use gridslide_core::{
    DragController, ElementId, GestureEvent, InputUnifier, RenderSink, StaticLayout,
};
use gridslide_widgets::lane_color;
use kurbo::{Point, Size, Vec2};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

/// Matrix dimensions for the demo board.
const BOARD_ROWS: u32 = 5;
const BOARD_COLS: u32 = 8;
const CELL_W: u32 = 48;
const CELL_H: u32 = 36;

const PANEL_W: u32 = BOARD_COLS * CELL_W;
const PANEL_H: u32 = BOARD_ROWS * CELL_H;

const BACKGROUND: [u8; 4] = [248, 250, 252, 255];
const PANEL_BG: [u8; 4] = [255, 255, 255, 255];
const GRID_LINE: [u8; 4] = [226, 232, 240, 255];
const BORDER: [u8; 4] = [203, 213, 225, 255];
const ACCENT: [u8; 4] = [59, 130, 246, 255];

/// Sink that stores the applied offset and marks the frame dirty.
#[derive(Debug, Default)]
struct PanelSink {
    offset: Vec2,
    dirty: bool,
}

impl RenderSink for PanelSink {
    fn apply_offset(&mut self, element: ElementId, x: f64, y: f64) {
        log::trace!("element {element}: offset ({x}, {y})");
        self.offset = Vec2::new(x, y);
        self.dirty = true;
    }
}

struct WindowState {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    /// Current surface size in physical pixels.
    size: (u32, u32),
    controller: DragController,
    unifier: InputUnifier,
    sink: PanelSink,
}

impl WindowState {
    /// Geometry is read fresh per event so window resizes are picked up.
    fn layout(&self) -> StaticLayout {
        StaticLayout::new(
            Size::new(self.size.0 as f64, self.size.1 as f64),
            Size::new(PANEL_W as f64, PANEL_H as f64),
        )
    }

    fn process(&mut self, event: Option<GestureEvent>) {
        let Some(event) = event else {
            return;
        };
        let layout = self.layout();
        self.controller.handle_event(event, &layout, &mut self.sink);
        if self.sink.dirty {
            self.sink.dirty = false;
            self.window.request_redraw();
        }
    }

    fn on_touch(&mut self, touch: Touch) {
        let point = Some(Point::new(touch.location.x, touch.location.y));
        let event = match touch.phase {
            TouchPhase::Started => self.unifier.touch_started(touch.id, point),
            TouchPhase::Moved => self.unifier.touch_moved(touch.id, point),
            TouchPhase::Ended | TouchPhase::Cancelled => self.unifier.touch_ended(touch.id, point),
        };
        self.process(event);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::error!("surface resize failed: {err}");
            return;
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            log::error!("buffer resize failed: {err}");
            return;
        }
        self.size = (width, height);
        self.window.request_redraw();
    }

    fn draw(&mut self) {
        let (width, height) = self.size;
        let offset = self.controller.offset();
        // The panel rests at the container's bottom-right corner; the
        // clamped offset translates it from there.
        let panel_x = width as f64 - PANEL_W as f64 + offset.x;
        let panel_y = height as f64 - PANEL_H as f64 + offset.y;
        let active = self.controller.is_active();

        let frame = self.pixels.frame_mut();
        for (i, pixel) in frame.chunks_exact_mut(4).enumerate() {
            let x = (i as u32 % width) as f64;
            let y = (i as u32 / width) as f64;
            pixel.copy_from_slice(&shade(x - panel_x, y - panel_y, active));
        }

        if let Err(err) = self.pixels.render() {
            log::error!("render failed: {err}");
        }
    }
}

/// Color of one framebuffer pixel, in panel-local coordinates.
fn shade(px: f64, py: f64, active: bool) -> [u8; 4] {
    if px < 0.0 || py < 0.0 || px >= PANEL_W as f64 || py >= PANEL_H as f64 {
        return BACKGROUND;
    }

    let edge = px < 2.0 || py < 2.0 || px >= PANEL_W as f64 - 2.0 || py >= PANEL_H as f64 - 2.0;
    if edge {
        return if active { ACCENT } else { BORDER };
    }

    if px as u32 % CELL_W == 0 || py as u32 % CELL_H == 0 {
        return GRID_LINE;
    }

    let row = (py as u32 / CELL_H) as usize;
    let cx = px as u32 % CELL_W;
    let cy = py as u32 % CELL_H;
    if cx < 3 || cy < 3 || cx >= CELL_W - 3 || cy >= CELL_H - 3 {
        return PANEL_BG;
    }

    let fill = lane_color(row).fill;
    [fill.r(), fill.g(), fill.b(), 255]
}

pub struct DemoApp {
    width: u32,
    height: u32,
    state: Option<WindowState>,
}

/// Run the windowed demo.
pub fn run(width: u32, height: u32) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = DemoApp {
        width,
        height,
        state: None,
    };
    event_loop.run_app(&mut app).expect("Event loop error");
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        let window_attrs = Window::default_attributes()
            .with_title("GridSlide")
            .with_inner_size(LogicalSize::new(self.width, self.height));
        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create framebuffer");

        let mut sink = PanelSink::default();
        let controller = DragController::new(&mut sink);

        log::info!("GridSlide initialized - {}x{}", size.width, size.height);
        log::info!("Drag the board with the mouse or a finger; it stays inside the window");

        self.state = Some(WindowState {
            window: window.clone(),
            pixels,
            size: (size.width, size.height),
            controller,
            unifier: InputUnifier::new(),
            sink,
        });

        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                state.controller.cancel();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                state.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                state.draw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = state
                    .unifier
                    .mouse_moved(Point::new(position.x, position.y));
                state.process(event);
            }

            WindowEvent::CursorLeft { .. } => {
                let event = state.unifier.mouse_left();
                state.process(event);
            }

            WindowEvent::MouseInput {
                state: button_state,
                button: MouseButton::Left,
                ..
            } => {
                let event = match button_state {
                    ElementState::Pressed => state.unifier.mouse_pressed(),
                    ElementState::Released => state.unifier.mouse_released(),
                };
                state.process(event);
            }

            WindowEvent::Touch(touch) => {
                state.on_touch(touch);
            }

            _ => {}
        }
    }
}
