//! Interaction controller: pointer, wheel and keyboard input mapped onto
//! canvas-store mutations.
//!
//! The rendering layer resolves native events against the canvas element
//! and forwards them here as plain records in screen space. Records with a
//! missing pointer position (stale stage reference during a re-render) are
//! ignored, never an error. All handlers are synchronous; nothing here
//! blocks or suspends.

use uuid::Uuid;

use agvmap_core::constants::{DRAG_THRESHOLD, DUPLICATE_OFFSET, WHEEL_ZOOM_STEP};

use crate::canvas::{CanvasStore, Selection};
use crate::geometry::Point;
use crate::model::CanvasNode;
use crate::node_transform::NodeInit;
use crate::viewport::ViewportPatch;

/// What the pointer hit, as resolved by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas (the stage itself).
    Background,
    Node(Uuid),
    Path(Uuid),
}

/// Mouse button of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Pointer press/release/click record, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Pointer position; `None` when the stage could not resolve one.
    pub position: Option<Point>,
    pub button: MouseButton,
    pub ctrl: bool,
    pub shift: bool,
    /// What was under the pointer.
    pub target: HitTarget,
}

/// Pointer move record, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveInput {
    pub position: Option<Point>,
}

/// Wheel record, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub position: Option<Point>,
    /// Positive when scrolling down (zoom out).
    pub delta_y: f64,
}

/// Key identity, pre-decoded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

/// Keyboard record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub ctrl: bool,
    /// True when an editable element (input, textarea) has focus; shortcuts
    /// must not fire then.
    pub from_text_input: bool,
}

/// Translates raw input into canvas mutations: panning, zoom-to-pointer,
/// click selection, and the keyboard shortcuts (delete, duplicate, nudge).
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    panning: bool,
    /// Set once the pointer travels past the drag threshold; a click that
    /// follows a real drag is swallowed.
    moved: bool,
    last_pointer: Point,
    press_position: Point,
    /// Pointer position in canvas coordinates, for the status readout.
    mouse_position: Point,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a canvas pan is in progress.
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Whether the current press travelled past the drag threshold.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Last pointer position, in canvas coordinates.
    pub fn mouse_position(&self) -> Point {
        self.mouse_position
    }

    /// Wheel zoom centered on the pointer: the canvas position under the
    /// cursor stays fixed while the scale steps by the wheel factor,
    /// clamped to the shared scale bounds.
    pub fn handle_wheel(&mut self, canvas: &mut CanvasStore, input: &WheelInput) {
        let Some(pointer) = input.position else {
            return;
        };

        let mut viewport = canvas.viewport();
        let old_scale = viewport.scale;
        let new_scale = if input.delta_y < 0.0 {
            old_scale * WHEEL_ZOOM_STEP
        } else {
            old_scale / WHEEL_ZOOM_STEP
        };
        viewport.zoom_at(pointer, new_scale);
        canvas.set_viewport(ViewportPatch {
            x: Some(viewport.x),
            y: Some(viewport.y),
            scale: Some(viewport.scale),
        });
    }

    /// Ctrl + left button starts a canvas pan.
    pub fn handle_mouse_down(&mut self, input: &PointerInput) {
        let Some(pointer) = input.position else {
            return;
        };
        if input.button == MouseButton::Left && input.ctrl {
            self.panning = true;
            self.moved = false;
            self.last_pointer = pointer;
            self.press_position = pointer;
        }
    }

    /// Tracks the pointer, updates the canvas-space readout, and pans the
    /// viewport once the drag threshold is passed.
    pub fn handle_mouse_move(&mut self, canvas: &mut CanvasStore, input: &MoveInput) {
        let Some(pointer) = input.position else {
            return;
        };

        let viewport = canvas.viewport();
        self.mouse_position = viewport.screen_to_canvas(pointer.x, pointer.y);

        if !self.panning {
            return;
        }

        if !self.moved {
            let dx = (pointer.x - self.press_position.x).abs();
            let dy = (pointer.y - self.press_position.y).abs();
            if dx > DRAG_THRESHOLD || dy > DRAG_THRESHOLD {
                self.moved = true;
            }
        }

        if self.moved {
            let dx = pointer.x - self.last_pointer.x;
            let dy = pointer.y - self.last_pointer.y;
            canvas.set_viewport(ViewportPatch {
                x: Some(viewport.x + dx),
                y: Some(viewport.y + dy),
                scale: None,
            });
        }

        self.last_pointer = pointer;
    }

    /// Ends a pan.
    pub fn handle_mouse_up(&mut self) {
        self.panning = false;
        self.moved = false;
    }

    /// Click selection. Swallowed after a real drag. Background clears the
    /// selection; nodes select (Ctrl/Shift toggles membership); paths
    /// select exclusively.
    pub fn handle_click(&mut self, canvas: &mut CanvasStore, input: &PointerInput) {
        if self.moved {
            return;
        }
        match input.target {
            HitTarget::Background => canvas.clear_selection(),
            HitTarget::Node(id) => canvas.select_node(id, input.ctrl || input.shift),
            HitTarget::Path(id) => canvas.select_path(id),
        }
    }

    /// Keyboard shortcuts: Delete/Backspace removes the selection, Ctrl+D
    /// duplicates the selected nodes, arrow keys nudge them. Ignored while
    /// a text input has focus.
    pub fn handle_key_down(&mut self, canvas: &mut CanvasStore, input: &KeyInput) {
        if input.from_text_input {
            return;
        }

        match input.key {
            Key::Delete | Key::Backspace => match canvas.selection().clone() {
                Selection::Nodes(_) => canvas.delete_selected_nodes(),
                Selection::Path(id) => canvas.delete_path_line(id),
                Selection::None => {}
            },
            Key::Char('d') | Key::Char('D') if input.ctrl => {
                self.duplicate_selected_nodes(canvas);
            }
            Key::ArrowUp => self.nudge_selection(canvas, 0.0, 1.0),
            Key::ArrowDown => self.nudge_selection(canvas, 0.0, -1.0),
            Key::ArrowLeft => self.nudge_selection(canvas, -1.0, 0.0),
            Key::ArrowRight => self.nudge_selection(canvas, 1.0, 0.0),
            _ => {}
        }
    }

    /// Duplicates every selected node with a fixed canvas-space offset.
    /// Copies get fresh ids and business numbers, inherit the other
    /// business fields, and replace the selection.
    pub fn duplicate_selected_nodes(&mut self, canvas: &mut CanvasStore) {
        let sources: Vec<CanvasNode> = canvas
            .selection()
            .node_ids()
            .iter()
            .filter_map(|id| canvas.node(*id).cloned())
            .collect();
        if sources.is_empty() {
            return;
        }

        let mut new_ids = Vec::with_capacity(sources.len());
        for source in &sources {
            let init = NodeInit::from_existing(
                &source.data,
                source.data.x + DUPLICATE_OFFSET,
                source.data.y + DUPLICATE_OFFSET,
            );
            let copy = canvas.add_node_from_data(init);
            new_ids.push(copy.id);
        }

        canvas.clear_selection();
        for id in new_ids {
            canvas.select_node(id, true);
        }
    }

    /// Moves every selected node by one step in the given direction. The
    /// step is the grid pitch while snapping is on, else one canvas unit.
    /// Goes through `update_node`, so incident path distances stay
    /// consistent.
    fn nudge_selection(&self, canvas: &mut CanvasStore, dx: f64, dy: f64) {
        let grid = canvas.grid();
        let step = if grid.snap_to_grid { grid.size } else { 1.0 };

        let targets: Vec<(Uuid, f64, f64)> = canvas
            .selection()
            .node_ids()
            .iter()
            .filter_map(|id| canvas.node(*id).map(|n| (n.id, n.data.x, n.data.y)))
            .collect();
        for (id, x, y) in targets {
            canvas.update_node(
                id,
                crate::canvas::NodeUpdate::position(x + dx * step, y + dy * step),
            );
        }
    }
}
