//! Random star-shaped service areas (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of floor-plan-like polygons for
//!   benches and property tests. Draws are reproducible from a replay token.
//!
//! Model
//! - Start from `n` equally spaced angles around `center`, add bounded angular
//!   and radial jitter, sort by angle. The ring is star-shaped around `center`
//!   and therefore simple; it is convex only when `radial_jitter == 0`.

use super::types::{Point, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration (pixel units).
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    /// Clamped to [0, 0.9] so every vertex stays away from the centre.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 200.0,
            center: Point::new(250.0, 250.0),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a star-shaped service area.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::new(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{point_in_polygon, polygon_area};

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 6, max: 14 },
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok);
        let p2 = draw_polygon_radial(cfg, tok);
        assert_eq!(p1, p2);
        let p3 = draw_polygon_radial(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, p3);
    }

    #[test]
    fn star_shaped_around_center() {
        let cfg = RadialCfg::default();
        for index in 0..20 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 3, index });
            assert_eq!(p.pts.len(), 12);
            assert!(point_in_polygon(cfg.center, &p));
            // Inradius bound: every vertex sits at least (1 - jitter)·r0 out.
            let r_min = (1.0 - cfg.radial_jitter) * cfg.base_radius;
            for v in &p.pts {
                assert!((v - cfg.center).norm() >= r_min - 1e-9);
            }
            assert!(polygon_area(&p) > 0.0);
        }
    }
}
