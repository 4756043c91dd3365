mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer;

use crate::frame::Shared;
use crate::overlay;
use web_sys as web;

/// Open the full-size photo for card `index`; orbit controls pause meanwhile.
pub fn open_viewer(shared: &Shared, index: usize) {
    let url = match shared.galaxy.borrow().click(index) {
        Some(url) => url.to_owned(),
        None => return,
    };
    let Some(document) = crate::dom::window_document() else {
        return;
    };
    overlay::open_viewer(&document, &url);
    *shared.viewer_open.borrow_mut() = true;
    shared.orbit.borrow_mut().enabled = false;
    shared.galaxy.borrow_mut().set_hovered(None);
}

pub fn close_viewer(document: &web::Document, shared: &Shared) {
    if !*shared.viewer_open.borrow() {
        return;
    }
    overlay::close_viewer(document);
    *shared.viewer_open.borrow_mut() = false;
    shared.orbit.borrow_mut().enabled = true;
    log::debug!("[viewer] closed");
}
