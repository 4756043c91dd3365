//! Packs the gallery photos into one RGBA atlas via a 2D canvas.
//!
//! Each unique URL gets one 4:3 cell, cropped "cover" style from the photo
//! centre. Photos that fail to load become flat placeholder cells.

use crate::constants::{ATLAS_CELL_WIDTH, ATLAS_MAX_SIZE};
use fnv::FnvHashMap;
use galaxy_core::Gallery;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct Atlas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    /// UV rect `[u, v, w, h]` per atlas cell.
    rects: Vec<[f32; 4]>,
    /// Atlas cell for each gallery source index.
    cell_of_source: Vec<usize>,
}

impl Atlas {
    pub fn rect_for_source(&self, source_index: usize) -> Option<[f32; 4]> {
        self.cell_of_source
            .get(source_index)
            .and_then(|&c| self.rects.get(c))
            .copied()
    }
}

struct Grid {
    cols: u32,
    rows: u32,
    cell_w: u32,
    cell_h: u32,
}

fn grid_for(cells: usize) -> Grid {
    let n = cells.max(1) as u32;
    let cols = (n as f32).sqrt().ceil().max(1.0) as u32;
    let rows = n.div_ceil(cols);
    let cell_w = ATLAS_CELL_WIDTH
        .min(ATLAS_MAX_SIZE / cols)
        .min(ATLAS_MAX_SIZE * 4 / 3 / rows)
        .max(4);
    let cell_h = (cell_w * 3 / 4).max(3);
    Grid {
        cols,
        rows,
        cell_w,
        cell_h,
    }
}

async fn load_image(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|_| anyhow::anyhow!("failed to load {}", url))?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}

/// Source crop `(sx, sy, sw, sh)` that fills a 4:3 cell without stretching.
fn cover_crop(img_w: f64, img_h: f64) -> (f64, f64, f64, f64) {
    let target = 4.0 / 3.0;
    if img_w <= 0.0 || img_h <= 0.0 {
        return (0.0, 0.0, img_w.max(1.0), img_h.max(1.0));
    }
    if img_w / img_h > target {
        let sw = img_h * target;
        ((img_w - sw) * 0.5, 0.0, sw, img_h)
    } else {
        let sh = img_w / target;
        (0.0, (img_h - sh) * 0.5, img_w, sh)
    }
}

pub async fn build(gallery: &Gallery) -> anyhow::Result<Atlas> {
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut cell_by_url: FnvHashMap<&str, usize> = FnvHashMap::default();
    let mut unique: Vec<&str> = Vec::new();
    let cell_of_source: Vec<usize> = gallery
        .sources()
        .iter()
        .map(|url| {
            *cell_by_url.entry(url.as_str()).or_insert_with(|| {
                unique.push(url.as_str());
                unique.len() - 1
            })
        })
        .collect();

    let grid = grid_for(unique.len());
    let width = grid.cols * grid.cell_w;
    let height = grid.rows * grid.cell_h;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let mut rects = Vec::with_capacity(unique.len());
    for (cell, url) in unique.iter().enumerate() {
        let col = cell as u32 % grid.cols;
        let row = cell as u32 / grid.cols;
        let dx = (col * grid.cell_w) as f64;
        let dy = (row * grid.cell_h) as f64;
        let (dw, dh) = (grid.cell_w as f64, grid.cell_h as f64);
        match load_image(url).await {
            Ok(img) => {
                let (sx, sy, sw, sh) =
                    cover_crop(img.natural_width() as f64, img.natural_height() as f64);
                _ = ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    &img, sx, sy, sw, sh, dx, dy, dw, dh,
                );
            }
            Err(e) => {
                log::warn!("[atlas] {}", e);
                ctx.set_fill_style_str("#334");
                ctx.fill_rect(dx, dy, dw, dh);
            }
        }
        // Inset half a texel so linear filtering does not bleed across cells
        rects.push([
            (dx as f32 + 0.5) / width as f32,
            (dy as f32 + 0.5) / height as f32,
            (dw as f32 - 1.0) / width as f32,
            (dh as f32 - 1.0) / height as f32,
        ]);
    }

    let pixels = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .data()
        .0;
    log::info!(
        "[atlas] {} photos in {}x{} ({}x{} cells)",
        unique.len(),
        width,
        height,
        grid.cols,
        grid.rows
    );
    Ok(Atlas {
        width,
        height,
        pixels,
        rects,
        cell_of_source,
    })
}
