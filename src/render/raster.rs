use crate::foundation::core::Point;
use crate::foundation::math::{SeededRng, mul_div255};
use crate::plan::model::Color;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by [`Surface::to_frame`] are opaque (the surface is
/// seeded with an opaque background fill), so premultiplied and straight
/// alpha coincide at the sink boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// The mutable raster surface one render session draws into.
///
/// Pixels are premultiplied RGBA8. The surface persists across frames of a
/// session; low-opacity background fills deliberately leave faint trails
/// of the previous frame.
#[derive(Clone, Debug)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a surface initialized to opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for px in data.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow the raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Snapshot the current pixels as a frame value.
    pub fn to_frame(&self) -> FrameRgba {
        FrameRgba {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    fn blend_px(&mut self, x: i64, y: i64, src: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let dst = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        let out = over(dst, src);
        self.data[i..i + 4].copy_from_slice(&out);
    }

    /// Blend `color` at `opacity` over the whole surface.
    pub fn fill(&mut self, color: Color, opacity: f32) {
        let src = color.premul(opacity);
        if src[3] == 0 {
            return;
        }
        for px in self.data.chunks_exact_mut(4) {
            let dst = [px[0], px[1], px[2], px[3]];
            px.copy_from_slice(&over(dst, src));
        }
    }

    /// Radial ambient glow: full `alpha` inside `r_inner`, fading linearly
    /// to transparent at `r_outer`.
    pub fn radial_glow(&mut self, center: Point, r_inner: f64, r_outer: f64, color: Color, alpha: f32) {
        if r_outer <= r_inner {
            return;
        }
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                let d = (Point::new(x as f64 + 0.5, y as f64 + 0.5) - center).hypot();
                let a = if d <= r_inner {
                    alpha
                } else if d >= r_outer {
                    0.0
                } else {
                    alpha * (1.0 - ((d - r_inner) / (r_outer - r_inner)) as f32)
                };
                if a > 0.0 {
                    self.blend_px(x, y, color.premul(a));
                }
            }
        }
    }

    /// Radial-gradient disc: `alpha` at the center falling linearly to
    /// transparent at `radius`.
    pub fn gradient_disc(&mut self, center: Point, radius: f64, color: Color, alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        let (x0, x1, y0, y1) = self.clip_box(center, radius + 1.0);
        for y in y0..y1 {
            for x in x0..x1 {
                let d = (Point::new(x as f64 + 0.5, y as f64 + 0.5) - center).hypot();
                if d < radius {
                    let a = alpha * (1.0 - (d / radius) as f32);
                    self.blend_px(x, y, color.premul(a));
                }
            }
        }
    }

    /// Stroked line through `center`, rotated by `rotation`, extending
    /// `half_len` either side, `width` pixels thick.
    pub fn stroke_ray(
        &mut self,
        center: Point,
        rotation: f64,
        half_len: f64,
        width: f64,
        color: Color,
        alpha: f32,
    ) {
        let half_w = (width / 2.0).max(0.5);
        let reach = (half_len * half_len + half_w * half_w).sqrt() + 1.0;
        let (x0, x1, y0, y1) = self.clip_box(center, reach);
        let (sin, cos) = rotation.sin_cos();
        let src = color.premul(alpha);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                // Inverse-rotate into the ray's local frame.
                let lx = dx * cos + dy * sin;
                let ly = -dx * sin + dy * cos;
                if lx.abs() <= half_len && ly.abs() <= half_w {
                    self.blend_px(x, y, src);
                }
            }
        }
    }

    /// Stroke a closed polygonal contour `width` pixels thick.
    ///
    /// Coverage is resolved per pixel against the nearest segment, so
    /// joints blend exactly once.
    pub fn stroke_contour(&mut self, points: &[Point], width: f64, color: Color, alpha: f32) {
        if points.len() < 2 {
            return;
        }
        let half_w = (width / 2.0).max(0.5);
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        let x0 = ((min.x - half_w - 1.0).floor() as i64).max(0);
        let y0 = ((min.y - half_w - 1.0).floor() as i64).max(0);
        let x1 = ((max.x + half_w + 1.0).ceil() as i64).min(i64::from(self.width));
        let y1 = ((max.y + half_w + 1.0).ceil() as i64).min(i64::from(self.height));
        let src = color.premul(alpha);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let mut d = f64::INFINITY;
                for i in 0..points.len() {
                    let a = points[i];
                    let b = points[(i + 1) % points.len()];
                    d = d.min(dist_to_segment(p, a, b));
                    if d <= half_w {
                        break;
                    }
                }
                if d <= half_w {
                    self.blend_px(x, y, src);
                }
            }
        }
    }

    /// Stochastic per-pixel grain: one zero-mean delta per pixel applied
    /// to every color channel.
    ///
    /// Reseeded from `seed` plus the current progress bucket, so grain
    /// differs per frame but is reproducible for a fixed plan+progress
    /// pair.
    pub fn film_grain(&mut self, seed: u64, progress: f64) {
        let bucket = (progress * 1000.0).floor().max(0.0) as u64;
        let mut rng = SeededRng::new(seed.wrapping_add(bucket));
        for px in self.data.chunks_exact_mut(4) {
            let grain = ((rng.next_f64() - 0.5) * 12.0).round() as i16;
            for c in px.iter_mut().take(3) {
                *c = (i16::from(*c) + grain).clamp(0, 255) as u8;
            }
        }
    }

    fn clip_box(&self, center: Point, reach: f64) -> (i64, i64, i64, i64) {
        let x0 = ((center.x - reach).floor() as i64).max(0);
        let x1 = ((center.x + reach).ceil() as i64).min(i64::from(self.width));
        let y0 = ((center.y - reach).floor() as i64).max(0);
        let y1 = ((center.y + reach).ceil() as i64).min(i64::from(self.height));
        (x0, x1, y0, y1)
    }
}

fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = u16::from(src[3]);
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}
