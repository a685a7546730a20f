//! Decorative particle field behind the hero section.
//!
//! Pure simulation only: particles are laid out on a golden-angle spiral,
//! drift on slow sine paths and shift with a camera that eases towards the
//! pointer, nearer particles moving further (parallax). Drawing, the frame loop
//! and event listeners belong to the frontend.

use std::f64::consts::TAU;

const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;
/// How fast the camera catches up with the pointer, per second.
const CAMERA_EASE: f64 = 2.5;
/// Maximum camera offset at full pointer deflection, in normalized units.
const PARALLAX: f64 = 0.08;
const DRIFT: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    base_x: f64,
    base_y: f64,
    /// 0.0 is far away, 1.0 is closest to the camera.
    depth: f64,
    phase: f64,
}

/// A particle projected to canvas pixels for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    time: f64,
    pointer: (f64, f64),
    camera: (f64, f64),
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64) -> Self {
        let particles = (0..count)
            .map(|i| {
                let r = ((i as f64 + 0.5) / count as f64).sqrt();
                let theta = i as f64 * GOLDEN_ANGLE;
                Particle {
                    base_x: r * theta.cos(),
                    base_y: r * theta.sin(),
                    depth: ((i * 7_919) % 97) as f64 / 96.0,
                    phase: (i as f64 * 0.618_034).fract() * TAU,
                }
            })
            .collect();
        Self {
            width,
            height,
            particles,
            time: 0.0,
            pointer: (0.0, 0.0),
            camera: (0.0, 0.0),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Pointer position in canvas pixels; clamped to the canvas.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return;
        }
        let nx = (x / self.width * 2.0 - 1.0).clamp(-1.0, 1.0);
        let ny = (y / self.height * 2.0 - 1.0).clamp(-1.0, 1.0);
        self.pointer = (nx, ny);
    }

    pub fn camera(&self) -> (f64, f64) {
        self.camera
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        self.time += dt;
        let k = (dt * CAMERA_EASE).min(1.0);
        self.camera.0 += (self.pointer.0 - self.camera.0) * k;
        self.camera.1 += (self.pointer.1 - self.camera.1) * k;
    }

    pub fn points(&self) -> Vec<ProjectedPoint> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let scale = half_w.max(half_h);
        self.particles
            .iter()
            .map(|p| {
                let drift_x = (self.time * 0.3 + p.phase).sin() * DRIFT;
                let drift_y = (self.time * 0.2 + p.phase).cos() * DRIFT;
                let shift = PARALLAX * (0.3 + p.depth);
                ProjectedPoint {
                    x: half_w + (p.base_x + drift_x - self.camera.0 * shift) * scale,
                    y: half_h + (p.base_y + drift_y - self.camera.1 * shift) * scale,
                    radius: 0.8 + p.depth * 2.2,
                    alpha: 0.25 + p.depth * 0.6,
                }
            })
            .collect()
    }

    /// Index pairs of points closer than `max_distance` pixels, for the
    /// connecting lines. Each pair appears once with `i < j`.
    pub fn links(points: &[ProjectedPoint], max_distance: f64) -> Vec<(usize, usize, f64)> {
        let mut links = Vec::new();
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                let d = (a.x - b.x).hypot(a.y - b.y);
                if d < max_distance {
                    links.push((i, j, 1.0 - d / max_distance));
                }
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_deterministic_and_inside_the_unit_disc() {
        let a = ParticleField::new(64, 800.0, 600.0);
        let b = ParticleField::new(64, 800.0, 600.0);
        assert_eq!(a.points(), b.points());
        for p in &a.particles {
            assert!(p.base_x.hypot(p.base_y) <= 1.0);
            assert!((0.0..=1.0).contains(&p.depth));
        }
    }

    #[test]
    fn camera_eases_towards_pointer_without_overshoot() {
        let mut field = ParticleField::new(8, 800.0, 600.0);
        field.set_pointer(800.0, 0.0);
        field.step(0.1);
        let (cx, cy) = field.camera();
        assert!(cx > 0.0 && cx < 1.0);
        assert!(cy < 0.0 && cy > -1.0);
        field.step(10.0);
        assert_eq!(field.camera(), (1.0, -1.0));
    }

    #[test]
    fn pointer_outside_canvas_is_clamped() {
        let mut field = ParticleField::new(1, 100.0, 100.0);
        field.set_pointer(-500.0, 1_000.0);
        field.step(1.0);
        assert_eq!(field.camera(), (-1.0, 1.0));
    }

    #[test]
    fn links_are_unique_and_weighted() {
        let pts = [
            ProjectedPoint { x: 0.0, y: 0.0, radius: 1.0, alpha: 1.0 },
            ProjectedPoint { x: 3.0, y: 4.0, radius: 1.0, alpha: 1.0 },
            ProjectedPoint { x: 100.0, y: 0.0, radius: 1.0, alpha: 1.0 },
        ];
        let links = ParticleField::links(&pts, 10.0);
        assert_eq!(links, vec![(0, 1, 0.5)]);
    }
}
