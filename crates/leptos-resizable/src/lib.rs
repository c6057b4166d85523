//! Leptos Resizable Utilities
//!
//! Corner-handle resizing for Leptos using mouse events.
//! One set of document listeners serves every box; boxes are told apart by key.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Min/max size a box may be dragged to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeConstraints {
    pub min: (f64, f64),
    pub max: (f64, f64),
}

impl SizeConstraints {
    pub const fn new(min: (f64, f64), max: (f64, f64)) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, (width, height): (f64, f64)) -> (f64, f64) {
        (
            width.clamp(self.min.0, self.max.0),
            height.clamp(self.min.1, self.max.1),
        )
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self::new((100.0, 100.0), (500.0, 400.0))
    }
}

/// Resize state signals
#[derive(Clone, Copy)]
pub struct ResizeSignals {
    /// Key of the box being resized
    pub active_key_read: ReadSignal<Option<usize>>,
    pub active_key_write: WriteSignal<Option<usize>>,
    /// Pointer position at mousedown
    pub start_pointer_read: ReadSignal<(i32, i32)>,
    pub start_pointer_write: WriteSignal<(i32, i32)>,
    /// Box size at mousedown
    pub start_size_read: ReadSignal<(f64, f64)>,
    pub start_size_write: WriteSignal<(f64, f64)>,
    pub constraints: SizeConstraints,
}

pub fn create_resize_signals(constraints: SizeConstraints) -> ResizeSignals {
    let (active_key_read, active_key_write) = signal(None::<usize>);
    let (start_pointer_read, start_pointer_write) = signal((0i32, 0i32));
    let (start_size_read, start_size_write) = signal((0f64, 0f64));
    ResizeSignals {
        active_key_read,
        active_key_write,
        start_pointer_read,
        start_pointer_write,
        start_size_read,
        start_size_write,
        constraints,
    }
}

/// Size for a pointer that moved from `start_pointer` to `pointer`,
/// clamped into `constraints`
pub fn next_size(
    start_size: (f64, f64),
    start_pointer: (i32, i32),
    pointer: (i32, i32),
    constraints: &SizeConstraints,
) -> (f64, f64) {
    let dx = f64::from(pointer.0 - start_pointer.0);
    let dy = f64::from(pointer.1 - start_pointer.1);
    constraints.clamp((start_size.0 + dx, start_size.1 + dy))
}

/// End resize operation
pub fn end_resize(rs: &ResizeSignals) {
    rs.active_key_write.set(None);
}

/// Create mousedown handler for a resize handle.
/// Records the starting pointer position and the box's current size.
pub fn make_on_handle_mousedown(
    rs: ResizeSignals,
    key: usize,
    size: Signal<(f64, f64)>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        rs.start_pointer_write.set((ev.client_x(), ev.client_y()));
        rs.start_size_write.set(size.get_untracked());
        rs.active_key_write.set(Some(key));
    }
}

/// Bind document mousemove/mouseup handlers.
/// `on_resize` fires with the clamped size on every move of an active resize.
pub fn bind_global_resize_handlers<F>(rs: ResizeSignals, on_resize: F)
where
    F: Fn(usize, (f64, f64)) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(key) = rs.active_key_read.get_untracked() else {
            return;
        };
        // Keep the browser from selecting text while dragging
        ev.prevent_default();
        let size = next_size(
            rs.start_size_read.get_untracked(),
            rs.start_pointer_read.get_untracked(),
            (ev.client_x(), ev.client_y()),
            &rs.constraints,
        );
        on_resize(key, size);
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if rs.active_key_read.get_untracked().is_some() {
            end_resize(&rs);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// Box with a bottom-right resize handle, sized from `size`
#[component]
pub fn Resizable(
    rs: ResizeSignals,
    box_key: usize,
    size: Signal<(f64, f64)>,
    children: Children,
) -> impl IntoView {
    let on_mousedown = make_on_handle_mousedown(rs, box_key, size);
    let is_active = move || rs.active_key_read.get() == Some(box_key);

    view! {
        <div
            class=move || if is_active() { "resizable-box resizing" } else { "resizable-box" }
            style=move || {
                let (width, height) = size.get();
                format!("width: {}px; height: {}px;", width, height)
            }
        >
            {children()}
            <span class="resize-handle" on:mousedown=on_mousedown></span>
        </div>
    }
}
