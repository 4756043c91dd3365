use crate::dom;
use crate::frame::Shared;
use crate::keymap;
use crate::ui;
use web_sys as web;

/// Escape closes the viewer; digits 1-6 switch layout.
pub fn wire_keyboard(window: &web::Window, shared: &Shared) {
    let s = shared.clone();
    dom::add_listener(window.as_ref(), "keydown", move |ev: web::KeyboardEvent| {
        let Some(document) = dom::window_document() else {
            return;
        };
        let key = ev.key();
        if keymap::is_close_key(&key) {
            super::close_viewer(&document, &s);
            return;
        }
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(mode) = keymap::layout_for_key(&key) {
            if s.galaxy.borrow_mut().set_mode(mode) {
                log::info!("[layout] {} (key {})", mode, key);
            }
            ui::sync_layout_buttons(&document, mode);
        }
    });
}
