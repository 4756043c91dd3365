use crate::dom;
use web_sys as web;

const START_OVERLAY: &str = "start-overlay";
const START_STATUS: &str = "start-status";
const VIEWER: &str = "viewer";
const VIEWER_IMG: &str = "viewer-img";
const TITLE: &str = "title";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Status line under the begin button (empty clears it).
pub fn set_start_status(document: &web::Document, text: &str) {
    dom::set_text(document, START_STATUS, text);
}

/// Show the full-size photo and fade the title.
pub fn open_viewer(document: &web::Document, url: &str) {
    if let Some(img) = document.get_element_by_id(VIEWER_IMG) {
        _ = img.set_attribute("src", url);
    }
    if let Some(el) = document.get_element_by_id(VIEWER) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
    dom::set_style(document, TITLE, "opacity", "0");
}

pub fn close_viewer(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(VIEWER) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
    dom::set_style(document, TITLE, "opacity", "0.8");
}
