use crate::field::motion::resolve;
use crate::field::particle::Particle;
use crate::foundation::core::{Affine, Point, Vec2};
use crate::plan::model::{LayerShape, Plan};
use crate::render::raster::Surface;
use std::f64::consts::{PI, TAU};

/// Angular step for contour sampling (24 samples per revolution).
const CONTOUR_STEP: f64 = PI / 12.0;

/// Compose one frame of the plan onto the surface.
///
/// Draw order: background fill, ambient glow, every particle (shape
/// dependent primitive), film grain. The surface is mutated in place;
/// all blending happens through per-draw opacity.
pub fn compose_frame(
    surface: &mut Surface,
    plan: &Plan,
    particles: &[Particle],
    progress: f64,
    elapsed_secs: f64,
) {
    let w = f64::from(surface.width());
    let h = f64::from(surface.height());
    let center = Point::new(w / 2.0, h / 2.0);

    surface.fill(plan.background, 0.9);
    surface.radial_glow(center, h / 8.0, h / 1.4, plan.palette[0], 0.2);

    let beat_phase = (elapsed_secs * plan.bpm / 60.0).fract();

    for particle in particles {
        let layer = &plan.layers[particle.layer_index];
        let color = plan.palette[(particle.seed * plan.palette.len() as f64) as usize];
        let depth_mul = particle.depth * (1.0 + (progress * TAU).sin() * 0.1);
        let phase = elapsed_secs * 0.5 + particle.seed * 12.0;
        let mv = resolve(plan.motion, particle, phase, progress, beat_phase);
        let size = layer.size * (0.6 + particle.depth * 0.8);

        // Center, rotate, then displace in the rotated frame.
        let xform = Affine::translate(center.to_vec2())
            * Affine::rotate(mv.rotation)
            * Affine::translate(Vec2::new(mv.x_offset * w * 0.4, mv.y_offset * h * 0.4));
        let pos = xform * Point::ZERO;

        match layer.shape {
            LayerShape::Particles | LayerShape::Orbs => {
                surface.gradient_disc(pos, size, color, 0.9);
            }
            LayerShape::Rays => {
                let width = 2.0 + depth_mul * 4.0;
                surface.stroke_ray(pos, mv.rotation, size * 1.5, width, color, 0.3);
            }
            LayerShape::Contours => {
                let contour_size = size * (0.4 + particle.depth * 0.6);
                let samples = (TAU / CONTOUR_STEP) as usize;
                let mut points = Vec::with_capacity(samples);
                for k in 0..samples {
                    let angle = k as f64 * CONTOUR_STEP;
                    let wobble = (phase + angle * 3.0).sin() * layer.variance * 12.0;
                    let radius = contour_size + wobble;
                    points.push(xform * Point::new(angle.cos() * radius, angle.sin() * radius));
                }
                surface.stroke_contour(&points, 1.5, color, 0.2);
            }
        }
    }

    surface.film_grain(plan.seed, progress);
}
