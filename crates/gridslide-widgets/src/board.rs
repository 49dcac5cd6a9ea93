//! Draggable matrix board widget.

use egui::{
    CornerRadius, CursorIcon, Rect, Sense, Stroke, StrokeKind, Ui, Vec2, vec2,
};
use gridslide_core::{
    DragController, DragPhase, ElementId, GestureEvent, InputUnifier, RenderSink, StaticLayout,
};
use kurbo::{Point, Size};

use crate::{colors, sizing, theme};

/// Offset captured from the controller's sink calls, in board-local px.
#[derive(Debug, Default)]
struct AppliedOffset {
    offset: kurbo::Vec2,
}

impl RenderSink for AppliedOffset {
    fn apply_offset(&mut self, _element: ElementId, x: f64, y: f64) {
        self.offset = kurbo::Vec2::new(x, y);
    }
}

/// Persistent state for one draggable board: the controller plus its input
/// unifier. Owned by the host app and handed to [`DraggableBoard`] each
/// frame.
#[derive(Debug)]
pub struct BoardState {
    controller: DragController,
    unifier: InputUnifier,
    applied: AppliedOffset,
}

impl BoardState {
    pub fn new() -> Self {
        let mut applied = AppliedOffset::default();
        let controller = DragController::new(&mut applied);
        Self {
            controller,
            unifier: InputUnifier::new(),
            applied,
        }
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Call when the board leaves the UI so no session dangles.
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    fn feed(&mut self, event: Option<GestureEvent>, layout: &StaticLayout) {
        if let Some(event) = event {
            self.controller.handle_event(event, layout, &mut self.applied);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// A scheduling-matrix panel that can be dragged inside a clipped viewport.
///
/// The panel rests at the viewport's bottom-right corner; the controller's
/// clamped offset translates it from there, so the full legal range keeps
/// the panel inside the viewport.
pub struct DraggableBoard<'a> {
    state: &'a mut BoardState,
    viewport: Vec2,
    rows: usize,
    cols: usize,
    cell: Vec2,
}

impl<'a> DraggableBoard<'a> {
    pub fn new(state: &'a mut BoardState) -> Self {
        Self {
            state,
            viewport: vec2(480.0, 320.0),
            rows: 4,
            cols: 6,
            cell: vec2(sizing::CELL_W, sizing::CELL_H),
        }
    }

    /// Set the viewport (container) size.
    pub fn viewport(mut self, size: Vec2) -> Self {
        self.viewport = size;
        self
    }

    /// Set the matrix dimensions.
    pub fn grid(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn cell_size(mut self, cell: Vec2) -> Self {
        self.cell = cell;
        self
    }

    fn panel_size(&self) -> Vec2 {
        vec2(
            self.cols as f32 * self.cell.x,
            self.rows as f32 * self.cell.y,
        )
    }

    /// Show the board and return the viewport response.
    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.viewport, Sense::drag());

        let panel = self.panel_size();
        let layout = StaticLayout::new(
            Size::new(rect.width() as f64, rect.height() as f64),
            Size::new(panel.x as f64, panel.y as f64),
        );

        let state = self.state;

        // egui pre-unifies platform pointers, so its stream feeds the mouse
        // lane of the unifier.
        if let Some(pos) = response.interact_pointer_pos() {
            let point = Point::new((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64);
            if response.drag_started() {
                let moved = state.unifier.mouse_moved(point);
                state.feed(moved, &layout);
                let pressed = state.unifier.mouse_pressed();
                state.feed(pressed, &layout);
            } else if response.dragged() {
                let moved = state.unifier.mouse_moved(point);
                state.feed(moved, &layout);
            }
        }
        if response.drag_stopped() {
            let released = state.unifier.mouse_released();
            state.feed(released, &layout);
        } else if state.controller.phase() == DragPhase::Dragging
            && !ui.rect_contains_pointer(rect)
        {
            // Pointer left the viewport mid-drag.
            let left = state.unifier.mouse_left();
            state.feed(left, &layout);
        }

        if ui.is_rect_visible(rect) {
            paint_board(ui, rect, panel, self.rows, self.cols, self.cell, state);
        }

        let cursor = if state.controller.is_active() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        };
        response.clone().on_hover_cursor(cursor);
        response
    }
}

fn paint_board(
    ui: &Ui,
    rect: Rect,
    panel: Vec2,
    rows: usize,
    cols: usize,
    cell: Vec2,
    state: &BoardState,
) {
    let painter = ui.painter().with_clip_rect(rect);

    painter.rect_filled(rect, CornerRadius::ZERO, theme::VIEWPORT_BG);
    painter.rect_stroke(
        rect,
        CornerRadius::ZERO,
        Stroke::new(1.0, theme::BORDER),
        StrokeKind::Inside,
    );

    let offset = state.applied.offset;
    let origin = rect.right_bottom() - panel + vec2(offset.x as f32, offset.y as f32);
    let panel_rect = Rect::from_min_size(origin, panel);

    painter.rect_filled(
        panel_rect,
        CornerRadius::same(sizing::PANEL_RADIUS),
        theme::PANEL_BG,
    );

    for row in 0..rows {
        let tint = colors::lane_color(row);
        for col in 0..cols {
            let cell_rect = Rect::from_min_size(
                origin + vec2(col as f32 * cell.x, row as f32 * cell.y),
                cell,
            )
            .shrink(2.0);
            painter.rect_filled(cell_rect, CornerRadius::same(2), tint.fill);
            painter.rect_stroke(
                cell_rect,
                CornerRadius::same(2),
                Stroke::new(1.0, tint.edge),
                StrokeKind::Inside,
            );
        }
    }

    // Grid lines over the cells
    for row in 1..rows {
        let y = origin.y + row as f32 * cell.y;
        painter.hline(
            panel_rect.x_range(),
            y,
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }
    for col in 1..cols {
        let x = origin.x + col as f32 * cell.x;
        painter.vline(
            x,
            panel_rect.y_range(),
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }

    let border = if state.controller.is_active() {
        Stroke::new(2.0, theme::ACCENT)
    } else {
        Stroke::new(1.0, theme::BORDER)
    };
    painter.rect_stroke(
        panel_rect,
        CornerRadius::same(sizing::PANEL_RADIUS),
        border,
        StrokeKind::Inside,
    );
}
