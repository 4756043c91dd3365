use crate::constants::{DRAG_THRESHOLD_PX, ORBIT_RADIANS_PER_PX, WHEEL_DOLLY_PER_UNIT};
use crate::dom;
use crate::frame::Shared;
use crate::input;
use web_sys as web;

/// Orbit drag, wheel dolly and click-to-view on the canvas.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, shared: &Shared) {
    let target: &web::EventTarget = canvas.as_ref();
    wire_pointermove(target, canvas, shared);
    wire_pointerdown(target, canvas, shared);
    wire_pointerup(target, shared);

    let s = shared.clone();
    dom::add_listener(target, "pointerleave", move |_ev: web::PointerEvent| {
        s.mouse.borrow_mut().leave();
    });

    let s = shared.clone();
    dom::add_listener(target, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let factor = (ev.delta_y() as f32 * WHEEL_DOLLY_PER_UNIT).exp();
        s.orbit.borrow_mut().dolly(factor);
    });
}

fn wire_pointermove(target: &web::EventTarget, canvas: &web::HtmlCanvasElement, shared: &Shared) {
    let canvas = canvas.clone();
    let s = shared.clone();
    dom::add_listener(target, "pointermove", move |ev: web::PointerEvent| {
        let (pos, ndc) = input::pointer_canvas_css(&ev, &canvas);
        let (delta, dragging) = {
            let mut ms = s.mouse.borrow_mut();
            let delta = ms.move_to(pos, ndc, DRAG_THRESHOLD_PX);
            (delta, ms.down && ms.dragged)
        };
        if dragging {
            s.orbit
                .borrow_mut()
                .orbit(delta.x * ORBIT_RADIANS_PER_PX, delta.y * ORBIT_RADIANS_PER_PX);
        }
    });
}

fn wire_pointerdown(target: &web::EventTarget, canvas: &web::HtmlCanvasElement, shared: &Shared) {
    let canvas = canvas.clone();
    let s = shared.clone();
    dom::add_listener(target, "pointerdown", move |ev: web::PointerEvent| {
        let (pos, _) = input::pointer_canvas_css(&ev, &canvas);
        s.mouse.borrow_mut().press(pos);
        _ = canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointerup(target: &web::EventTarget, shared: &Shared) {
    let s = shared.clone();
    dom::add_listener(target, "pointerup", move |_ev: web::PointerEvent| {
        let click = s.mouse.borrow_mut().release();
        if !click || *s.viewer_open.borrow() {
            return;
        }
        let hovered = s.galaxy.borrow().hovered();
        if let Some(index) = hovered {
            super::open_viewer(&s, index);
        }
    });
}
