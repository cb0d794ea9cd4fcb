/// Framebuffer for software rendering
/// Stores straight-alpha ARGB pixels and implements the canvas-style surface
///
/// Fills blend source-over, polygons use the non-zero winding rule sampled at
/// pixel centres and strokes are 1px DDA lines.
use super::surface::{RenderSurface, Rgba};
use glam::DVec2;
use log::debug;

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<u32>, // ARGB format
    fill_color: Rgba,
    stroke_color: Rgba,
    // Reused per polygon to avoid reallocating crossings every scanline
    crossings: Vec<(f64, i32)>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![Rgba::TRANSPARENT.to_argb(); width * height],
            fill_color: Rgba::BLACK,
            stroke_color: Rgba::BLACK,
            crossings: Vec::with_capacity(8),
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(Rgba::from_argb(self.color_buffer[y * self.width + x]))
        } else {
            None
        }
    }

    #[inline]
    pub fn fill_color(&self) -> Rgba {
        self.fill_color
    }

    #[inline]
    pub fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }

    /// Composite every pixel over an opaque `backdrop` into 0x00RRGGBB words,
    /// the layout window presenters expect.
    pub fn composite_into(&self, out: &mut [u32], backdrop: Rgba) {
        let base = backdrop.to_argb() | 0xFF00_0000;
        for (dst, &src) in out.iter_mut().zip(&self.color_buffer) {
            *dst = blend_over(base, Rgba::from_argb(src)) & 0x00FF_FFFF;
        }
    }

    #[inline]
    fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = y as usize * self.width + x as usize;
        self.color_buffer[index] = blend_over(self.color_buffer[index], color);
    }

    fn fill_span(&mut self, y: i64, x_start: f64, x_end: f64, color: Rgba) {
        // Pixel x is covered when its centre x + 0.5 lies in [x_start, x_end)
        let first = (x_start - 0.5).ceil().max(0.0) as i64;
        let last = ((x_end - 0.5).ceil() as i64).min(self.width as i64);
        for x in first..last {
            self.blend_pixel(x, y, color);
        }
    }
}

/// Source-over composite of straight-alpha `src` onto ARGB `dst`
#[inline]
fn blend_over(dst: u32, src: Rgba) -> u32 {
    match src.a {
        255 => return src.to_argb(),
        0 => return dst,
        _ => {}
    }

    let dst = Rgba::from_argb(dst);
    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let channel = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Rgba {
        r: channel(src.r, dst.r),
        g: channel(src.g, dst.g),
        b: channel(src.b, dst.b),
        a: (out_a * 255.0).round() as u8,
    }
    .to_argb()
}

impl RenderSurface for Framebuffer {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, x1) = pixel_range(x, width, self.width);
        let (y0, y1) = pixel_range(y, height, self.height);
        let transparent = Rgba::TRANSPARENT.to_argb();
        for row in y0..y1 {
            self.color_buffer[row * self.width + x0..row * self.width + x1].fill(transparent);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let (x0, x1) = pixel_range(x, width, self.width);
        let (y0, y1) = pixel_range(y, height, self.height);
        let color = self.fill_color;
        for row in y0..y1 {
            for col in x0..x1 {
                self.blend_pixel(col as i64, row as i64, color);
            }
        }
    }

    fn set_fill_color(&mut self, color: &str) {
        match Rgba::parse_hex(color) {
            Some(parsed) => self.fill_color = parsed,
            None => debug!("ignoring unparsable fill colour {color:?}"),
        }
    }

    fn set_stroke_color(&mut self, color: &str) {
        match Rgba::parse_hex(color) {
            Some(parsed) => self.stroke_color = parsed,
            None => debug!("ignoring unparsable stroke colour {color:?}"),
        }
    }

    fn fill_polygon(&mut self, points: &[DVec2]) {
        if points.len() < 3 {
            return;
        }

        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        if !min_y.is_finite() || !max_y.is_finite() {
            return;
        }

        let first_row = (min_y - 0.5).ceil().max(0.0) as i64;
        let last_row = ((max_y - 0.5).ceil() as i64).min(self.height as i64);
        let color = self.fill_color;
        let mut crossings = std::mem::take(&mut self.crossings);

        for y in first_row..last_row {
            let sample_y = y as f64 + 0.5;
            crossings.clear();

            for i in 0..points.len() {
                let a = points[i];
                let b = points[(i + 1) % points.len()];
                if a.y == b.y {
                    continue;
                }
                let (lo, hi, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
                if sample_y < lo.y || sample_y >= hi.y {
                    continue;
                }
                let t = (sample_y - lo.y) / (hi.y - lo.y);
                crossings.push((lo.x + t * (hi.x - lo.x), winding));
            }

            crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding != 0 {
                    self.fill_span(y, pair[0].0, pair[1].0, color);
                }
            }
        }

        self.crossings = crossings;
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let bounds = DVec2::new(self.width as f64, self.height as f64);
        let Some((from, to)) = clip_segment(from, to, bounds) else {
            return;
        };
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
        let step = delta / steps;
        let color = self.stroke_color;
        let mut p = from;
        for _ in 0..=steps as usize {
            self.blend_pixel(p.x.floor() as i64, p.y.floor() as i64, color);
            p += step;
        }
    }
}

/// Liang-Barsky clip of `from..to` against the rectangle [0, max]
fn clip_segment(from: DVec2, to: DVec2, max: DVec2) -> Option<(DVec2, DVec2)> {
    let delta = to - from;
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-delta.x, from.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y),
        (delta.y, max.y - from.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge: either fully inside or fully outside it
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else if r < t0 {
            return None;
        } else {
            t1 = t1.min(r);
        }
    }

    Some((from + delta * t0, from + delta * t1))
}

/// Clamp [start, start + extent) to whole pixels inside 0..limit
#[inline]
fn pixel_range(start: f64, extent: f64, limit: usize) -> (usize, usize) {
    let (lo, hi) = if extent < 0.0 {
        (start + extent, start)
    } else {
        (start, start + extent)
    };
    let lo = lo.round().clamp(0.0, limit as f64) as usize;
    let hi = hi.round().clamp(0.0, limit as f64) as usize;
    (lo, hi.max(lo))
}
