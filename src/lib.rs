#![cfg(target_arch = "wasm32")]
use galaxy_core::{
    stars, Galaxy, GalaxyConfig, Gallery, OrbitCamera, ParallaxRig, STAR_COUNT, STAR_DEPTH,
    STAR_RADIUS,
};
use instant::Instant;
use rand::{rngs::StdRng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod atlas;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod keymap;
mod overlay;
mod render;
mod ui;

const CANVAS_ID: &str = "app-canvas";
const BEGIN_BUTTON: &str = "begin-btn";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Defaults overridden by `?layout=heart&count=600&...` in the page URL.
fn config_from_location(window: &web::Window) -> GalaxyConfig {
    let mut config = GalaxyConfig::default();
    let search = window.location().search().unwrap_or_default();
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        return config;
    };
    let pairs: Vec<(&str, String)> = GalaxyConfig::KEYS
        .iter()
        .filter_map(|&k| params.get(k).map(|v| (k, v)))
        .collect();
    config.apply_params(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    config
}

/// Begin button: start the music on the user gesture, retryable on failure.
fn wire_begin_button(document: &web::Document, shared: &frame::Shared, audio_url: String) {
    let hub = shared.audio.clone();
    dom::add_click_listener(document, BEGIN_BUTTON, move || {
        if let Err(e) = hub.borrow_mut().lifecycle.begin() {
            log::debug!("[audio] {}", e);
            return;
        }
        if let Some(d) = dom::window_document() {
            overlay::set_start_status(&d, "Starting...");
        }
        let hub = hub.clone();
        let url = audio_url.clone();
        spawn_local(async move {
            let result = audio::start(&url).await;
            let Some(d) = dom::window_document() else {
                return;
            };
            match result {
                Ok(handles) => {
                    hub.borrow_mut().install(handles);
                    overlay::set_start_status(&d, "");
                    overlay::hide(&d);
                }
                Err(e) => {
                    let msg = hub.borrow_mut().lifecycle.fail(format!("{:#}", e)).to_string();
                    overlay::set_start_status(&d, &format!("{} (click to retry)", msg));
                }
            }
        });
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("photo galaxy starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let config = config_from_location(&window);
    let gallery = Gallery::from_manifest(&canvas.get_attribute("data-photos").unwrap_or_default());
    let seed: u64 = rand::random();
    let galaxy = Galaxy::new(gallery.clone(), &config, seed);
    log::info!(
        "[layout] {} cards from {} photos, mode={} radius={}",
        galaxy.len(),
        gallery.len(),
        galaxy.mode(),
        galaxy.radius()
    );

    let shared = frame::Shared {
        galaxy: Rc::new(RefCell::new(galaxy)),
        audio: Rc::new(RefCell::new(audio::AudioHub::default())),
        orbit: Rc::new(RefCell::new(OrbitCamera::default())),
        mouse: Rc::new(RefCell::new(input::MouseState::default())),
        viewer_open: Rc::new(RefCell::new(false)),
        pending_atlas: Rc::new(RefCell::new(None)),
    };

    overlay::show(&document);
    wire_begin_button(&document, &shared, config.audio_url.clone());
    ui::wire_layout_buttons(&document, &shared);
    ui::wire_count_slider(&document, &shared);
    ui::wire_viewer(&document, &shared);
    events::wire_pointer(&canvas, &shared);
    events::wire_keyboard(&window, &shared);

    {
        let pending = shared.pending_atlas.clone();
        spawn_local(async move {
            match atlas::build(&gallery).await {
                Ok(a) => *pending.borrow_mut() = Some(a),
                Err(e) => log::warn!("[atlas] build failed: {:?}", e),
            }
        });
    }

    let mut star_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let star_positions = stars::star_field(STAR_COUNT, STAR_RADIUS, STAR_DEPTH, &mut star_rng);
    let star_brightness = stars::star_brightness(STAR_COUNT, &mut star_rng);

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        shared,
        canvas,
        document,
        gpu,
        stars: frame::star_instances(&star_positions, &star_brightness),
        amplitudes: galaxy_core::AmplitudeBuffer::new(),
        rig: ParallaxRig::default(),
        atlas: None,
        last_instant: Instant::now(),
        cursor_pointer: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
