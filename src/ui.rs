use crate::dom;
use crate::frame::Shared;
use galaxy_core::{GalaxyConfig, LayoutMode};
use wasm_bindgen::JsCast;
use web_sys as web;

const COUNT_SLIDER: &str = "count-slider";
const COUNT_LABEL: &str = "count-label";
const VIEWER: &str = "viewer";
const VIEWER_CLOSE: &str = "viewer-close";

fn layout_button_id(mode: LayoutMode) -> String {
    format!("layout-{}", mode.name())
}

/// Mark the button for `mode` active and clear the others.
pub fn sync_layout_buttons(document: &web::Document, mode: LayoutMode) {
    for m in LayoutMode::ALL {
        if let Some(el) = document.get_element_by_id(&layout_button_id(m)) {
            _ = el.class_list().toggle_with_force("active", m == mode);
        }
    }
}

pub fn set_count_label(document: &web::Document, count: usize) {
    dom::set_text(document, COUNT_LABEL, &format!("MEMORIES: {}", count));
}

pub fn wire_layout_buttons(document: &web::Document, shared: &Shared) {
    for mode in LayoutMode::ALL {
        let s = shared.clone();
        dom::add_click_listener(document, &layout_button_id(mode), move || {
            if s.galaxy.borrow_mut().set_mode(mode) {
                log::info!("[layout] {}", mode);
            }
            if let Some(d) = dom::window_document() {
                sync_layout_buttons(&d, mode);
            }
        });
    }
    sync_layout_buttons(document, shared.galaxy.borrow().mode());
}

pub fn wire_count_slider(document: &web::Document, shared: &Shared) {
    let count = shared.galaxy.borrow().count();
    set_count_label(document, count);
    let Some(slider) = document
        .get_element_by_id(COUNT_SLIDER)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing #{}", COUNT_SLIDER);
        return;
    };
    slider.set_value(&count.to_string());

    let s = shared.clone();
    let input = slider.clone();
    dom::add_listener(slider.as_ref(), "input", move |_ev: web::Event| {
        let Ok(raw) = input.value().parse::<usize>() else {
            log::warn!("[ui] ignoring slider value {:?}", input.value());
            return;
        };
        let count = GalaxyConfig::clamp_count(raw);
        if s.galaxy.borrow_mut().set_count(count) {
            log::info!("[layout] count {}", count);
        }
        if let Some(d) = dom::window_document() {
            set_count_label(&d, count);
        }
    });
}

/// Close button and a click on the dimmed backdrop both dismiss the viewer.
pub fn wire_viewer(document: &web::Document, shared: &Shared) {
    let s = shared.clone();
    dom::add_click_listener(document, VIEWER_CLOSE, move || {
        if let Some(d) = dom::window_document() {
            crate::events::close_viewer(&d, &s);
        }
    });

    let Some(backdrop) = document.get_element_by_id(VIEWER) else {
        log::warn!("[dom] missing #{}", VIEWER);
        return;
    };
    let s = shared.clone();
    dom::add_listener(backdrop.as_ref(), "click", move |ev: web::MouseEvent| {
        // Clicks on the photo itself bubble up with a different target
        if ev.target() != ev.current_target() {
            return;
        }
        if let Some(d) = dom::window_document() {
            crate::events::close_viewer(&d, &s);
        }
    });
}
