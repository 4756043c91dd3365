use crate::atlas::Atlas;
use crate::audio::AudioHub;
use crate::constants::*;
use crate::dom;
use crate::input::{self, MouseState};
use crate::render::{self, CardInstance, SceneView};
use galaxy_core::{
    AmplitudeBuffer, Galaxy, OrbitCamera, ParallaxRig, CARD_HEIGHT, CARD_OPACITY, CARD_WIDTH,
};
use glam::{Mat4, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (background tab) would otherwise snap every animation at once.
const MAX_FRAME_DELTA: f32 = 0.25;

/// State shared between the frame loop and DOM event handlers.
#[derive(Clone)]
pub struct Shared {
    pub galaxy: Rc<RefCell<Galaxy>>,
    pub audio: Rc<RefCell<AudioHub>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub mouse: Rc<RefCell<MouseState>>,
    pub viewer_open: Rc<RefCell<bool>>,
    /// Filled once the photo atlas finishes building; taken by the next frame.
    pub pending_atlas: Rc<RefCell<Option<Atlas>>>,
}

pub struct FrameContext<'a> {
    pub shared: Shared,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub stars: Vec<CardInstance>,
    pub amplitudes: AmplitudeBuffer,
    pub rig: ParallaxRig,
    pub atlas: Option<Atlas>,
    pub last_instant: Instant,
    pub cursor_pointer: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DELTA);
        self.last_instant = now;

        self.take_pending_atlas();

        let audio_live = self.shared.audio.borrow().sampler.sample(&mut self.amplitudes);
        if let Some(g) = &mut self.gpu {
            g.set_ambient(if audio_live {
                self.amplitudes.level(AMBIENT_BINS)
            } else {
                0.0
            });
        }

        let smoothing = {
            let mut galaxy = self.shared.galaxy.borrow_mut();
            galaxy.tick(dt, &self.amplitudes);
            galaxy.smoothing()
        };
        let (pointer_ndc, can_hover) = {
            let ms = self.shared.mouse.borrow();
            (ms.ndc, ms.can_hover())
        };
        self.rig.update(pointer_ndc, dt, smoothing);

        let width = self.canvas.width();
        let height = self.canvas.height();
        let aspect = width as f32 / height.max(1) as f32;
        let camera = self.shared.orbit.borrow().camera(aspect);
        let group = self.rig.matrix();

        let viewer_open = *self.shared.viewer_open.borrow();
        let hovered = if can_hover && !viewer_open {
            let (ro, rd) = camera.ray_from_ndc(pointer_ndc);
            pick(&self.shared.galaxy.borrow(), group, ro, rd)
        } else {
            None
        };
        self.shared.galaxy.borrow_mut().set_hovered(hovered);
        let want_pointer = hovered.is_some();
        if want_pointer != self.cursor_pointer {
            self.cursor_pointer = want_pointer;
            dom::set_cursor(&self.document, if want_pointer { "pointer" } else { "auto" });
        }

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.resize_if_needed(width, height);

        let view = camera.view_matrix();
        let mut instances = Vec::with_capacity(self.stars.len() + self.shared.galaxy.borrow().len());
        instances.extend_from_slice(&self.stars);
        instances.extend(card_instances(
            &self.shared.galaxy.borrow(),
            self.atlas.as_ref(),
            group,
            camera.eye,
        ));
        let scene = SceneView {
            view_proj: camera.view_proj(),
            group,
            cam_right: view.row(0).truncate(),
            cam_up: view.row(1).truncate(),
        };
        match gpu.render(&scene, &instances, dt) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }

    fn take_pending_atlas(&mut self) {
        let Some(mut atlas) = self.shared.pending_atlas.borrow_mut().take() else {
            return;
        };
        if let Some(g) = &mut self.gpu {
            g.upload_atlas(&atlas);
        }
        // Pixels live on the GPU now; keep only the UV rects
        atlas.pixels = Vec::new();
        self.atlas = Some(atlas);
    }
}

/// Nearest card under the ray, testing rig-transformed centres.
fn pick(galaxy: &Galaxy, group: Mat4, ray_origin: Vec3, ray_dir: Vec3) -> Option<usize> {
    input::nearest_hit(
        ray_origin,
        ray_dir,
        galaxy.transforms().map(|t| {
            (
                group.transform_point3(t.position),
                PICK_RADIUS_FACTOR * CARD_HEIGHT * t.scale,
            )
        }),
    )
}

/// Card billboards sorted back-to-front for alpha blending.
fn card_instances(
    galaxy: &Galaxy,
    atlas: Option<&Atlas>,
    group: Mat4,
    eye: Vec3,
) -> Vec<CardInstance> {
    let mut cards: Vec<(f32, CardInstance)> = galaxy
        .cards()
        .iter()
        .map(|card| {
            let t = card.transform();
            let uv = galaxy
                .gallery()
                .source_index(card.index())
                .zip(atlas)
                .and_then(|(src, atlas)| atlas.rect_for_source(src));
            let (uv_rect, tint) = match uv {
                Some(rect) => (rect, [1.0, 1.0, 1.0, CARD_OPACITY]),
                None => ([0.0, 0.0, 1.0, 1.0], PLACEHOLDER_TINT),
            };
            let depth = group.transform_point3(t.position).distance_squared(eye);
            (
                depth,
                CardInstance {
                    center: t.position.to_array(),
                    scale: t.scale,
                    uv_rect,
                    tint,
                    size: [CARD_WIDTH, CARD_HEIGHT],
                    textured: 1.0,
                    rigged: 1.0,
                },
            )
        })
        .collect();
    cards.sort_by(|a, b| b.0.total_cmp(&a.0));
    cards.into_iter().map(|(_, c)| c).collect()
}

/// Static star billboards; not affected by the parallax rig.
pub fn star_instances(positions: &[Vec3], brightness: &[f32]) -> Vec<CardInstance> {
    positions
        .iter()
        .zip(brightness)
        .map(|(p, &b)| CardInstance {
            center: p.to_array(),
            scale: 1.0,
            uv_rect: [0.0; 4],
            tint: [b, b, b, b],
            size: [STAR_SIZE, STAR_SIZE],
            textured: 0.0,
            rigged: 0.0,
        })
        .collect()
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
