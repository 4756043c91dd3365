use glam::{Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    /// Pointer position in CSS pixels relative to the canvas.
    pub x: f32,
    pub y: f32,
    /// Same position in normalized coordinates, +y up.
    pub ndc: Vec2,
    pub down: bool,
    /// Set once a press has travelled past the drag threshold.
    pub dragged: bool,
    pub press_x: f32,
    pub press_y: f32,
    /// Pointer is over the canvas.
    pub inside: bool,
}

impl MouseState {
    pub fn press(&mut self, pos: Vec2) {
        self.down = true;
        self.dragged = false;
        self.press_x = pos.x;
        self.press_y = pos.y;
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Record a move and return the delta since the previous position.
    pub fn move_to(&mut self, pos: Vec2, ndc: Vec2, drag_threshold: f32) -> Vec2 {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        self.ndc = ndc;
        self.inside = true;
        if self.down {
            let travel = Vec2::new(pos.x - self.press_x, pos.y - self.press_y).length();
            if travel > drag_threshold {
                self.dragged = true;
            }
        }
        delta
    }

    /// End a press; returns `true` when it was a click rather than a drag.
    pub fn release(&mut self) -> bool {
        let click = self.down && !self.dragged;
        self.down = false;
        self.dragged = false;
        click
    }

    pub fn leave(&mut self) {
        self.inside = false;
    }

    /// Hover picking only runs while the pointer rests over the canvas.
    pub fn can_hover(&self) -> bool {
        self.inside && !self.dragged
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the closest sphere hit along the ray, if any.
pub fn nearest_hit<I>(ray_origin: Vec3, ray_dir: Vec3, spheres: I) -> Option<usize>
where
    I: IntoIterator<Item = (Vec3, f32)>,
{
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

#[inline]
pub fn css_to_ndc(pos: Vec2, width: f32, height: f32) -> Vec2 {
    if width > 0.0 && height > 0.0 {
        Vec2::new(
            (pos.x / width) * 2.0 - 1.0,
            1.0 - (pos.y / height) * 2.0,
        )
    } else {
        Vec2::ZERO
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let pos = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    let ndc = css_to_ndc(pos, rect.width() as f32, rect.height() as f32);
    (pos, ndc)
}
