//! Particle field behind the hero.
//!
//! Pure simulation: the canvas component owns a [`ParticleField`], calls
//! [`ParticleField::step`] once per animation frame and draws whatever
//! [`ParticleField::links`] and [`ParticleField::particles`] report.
//! Randomness is injected so tests can pin it down.

/// Particles spawned by the hero canvas.
pub const PARTICLE_COUNT: usize = 80;

/// Pairs closer than this (px) are joined by a line.
pub const LINK_DISTANCE: f64 = 120.0;

/// Line opacity at zero distance.
pub const LINK_MAX_ALPHA: f64 = 0.15;

/// A single dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position (px)
    pub x: f64,
    /// Vertical position (px)
    pub y: f64,
    /// Horizontal velocity (px/frame)
    pub vx: f64,
    /// Vertical velocity (px/frame)
    pub vy: f64,
    /// Radius (px)
    pub r: f64,
    /// Fill opacity
    pub alpha: f64,
}

impl Particle {
    /// Spawn a particle inside `width` x `height` using `rand` samples in `[0, 1)`.
    pub fn spawn(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        Self {
            x: rand() * width,
            y: rand() * height,
            vx: (rand() - 0.5) * 0.3,
            vy: (rand() - 0.5) * 0.3,
            r: rand() * 1.5 + 0.5,
            alpha: rand() * 0.4 + 0.1,
        }
    }
}

/// A line between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Index of the first particle
    pub a: usize,
    /// Index of the second particle (`a < b`)
    pub b: usize,
    /// Stroke opacity
    pub alpha: f64,
}

/// All particles plus the bounds they wrap around.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn `count` particles inside the given bounds.
    pub fn new(width: f64, height: f64, count: usize, mut rand: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, &mut rand))
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    #[cfg(test)]
    fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            width,
            height,
            particles,
        }
    }

    /// Current particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current bounds `(width, height)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Change the wrap-around bounds. Particles keep their positions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advance one frame. A particle leaving an edge reappears at the opposite one.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 {
                p.x = w;
            }
            if p.x > w {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = h;
            }
            if p.y > h {
                p.y = 0.0;
            }
        }
    }

    /// Lines between every pair closer than [`LINK_DISTANCE`], fading with distance.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                if let Some(alpha) = link_alpha(pa, pb) {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        alpha,
                    });
                }
            }
        }
        links
    }
}

/// Stroke opacity for a pair, `None` when they are too far apart.
pub fn link_alpha(a: &Particle, b: &Particle) -> Option<f64> {
    let dist = (a.x - b.x).hypot(a.y - b.y);
    (dist < LINK_DISTANCE).then(|| (1.0 - dist / LINK_DISTANCE) * LINK_MAX_ALPHA)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            r: 1.0,
            alpha: 0.3,
        }
    }

    #[test]
    fn spawn_maps_samples_into_ranges() {
        let mut samples = [0.0, 0.5, 0.0, 0.999, 0.0, 0.0].into_iter();
        let p = Particle::spawn(200.0, 100.0, &mut || samples.next().unwrap_or(0.0));

        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 50.0);
        assert!((p.vx + 0.15).abs() < 1e-12);
        assert!(p.vy < 0.15);
        assert_eq!(p.r, 0.5);
        assert!((p.alpha - 0.1).abs() < 1e-12);
    }

    #[test]
    fn new_spawns_requested_count_within_bounds() {
        let mut seed = 7u64;
        let lcg = move || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 11) as f64 / (1u64 << 53) as f64
        };
        let field = ParticleField::new(640.0, 480.0, PARTICLE_COUNT, lcg);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..640.0).contains(&p.x));
            assert!((0.0..480.0).contains(&p.y));
            assert!((0.5..2.0).contains(&p.r));
            assert!((0.1..0.5).contains(&p.alpha));
        }
    }

    #[test]
    fn step_moves_by_velocity() {
        let mut field = ParticleField::from_particles(100.0, 100.0, vec![at(10.0, 20.0, 0.1, -0.1)]);
        field.step();
        let p = field.particles()[0];
        assert!((p.x - 10.1).abs() < 1e-9);
        assert!((p.y - 19.9).abs() < 1e-9);
    }

    #[test]
    fn step_wraps_to_opposite_edge() {
        let mut field = ParticleField::from_particles(
            100.0,
            50.0,
            vec![
                at(0.05, 10.0, -0.1, 0.0),
                at(99.95, 10.0, 0.1, 0.0),
                at(10.0, 0.05, 0.0, -0.1),
                at(10.0, 49.95, 0.0, 0.1),
            ],
        );
        field.step();
        let ps = field.particles();
        assert_eq!(ps[0].x, 100.0);
        assert_eq!(ps[1].x, 0.0);
        assert_eq!(ps[2].y, 50.0);
        assert_eq!(ps[3].y, 0.0);
    }

    #[test]
    fn resize_changes_wrap_bounds() {
        let mut field = ParticleField::from_particles(100.0, 100.0, vec![at(150.0, 10.0, 0.1, 0.0)]);
        field.resize(300.0, 200.0);
        assert_eq!(field.bounds(), (300.0, 200.0));
        field.step();
        assert!((field.particles()[0].x - 150.1).abs() < 1e-9);
    }

    #[test]
    fn links_only_close_pairs() {
        let field = ParticleField::from_particles(
            1000.0,
            1000.0,
            vec![
                at(0.0, 0.0, 0.0, 0.0),
                at(60.0, 0.0, 0.0, 0.0),
                at(500.0, 500.0, 0.0, 0.0),
            ],
        );
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        assert!((links[0].alpha - 0.075).abs() < 1e-12);
    }

    #[test]
    fn link_alpha_fades_to_zero_at_cutoff() {
        let a = at(0.0, 0.0, 0.0, 0.0);
        assert_eq!(link_alpha(&a, &at(0.0, 0.0, 0.0, 0.0)), Some(LINK_MAX_ALPHA));
        assert_eq!(link_alpha(&a, &at(120.0, 0.0, 0.0, 0.0)), None);
        assert_eq!(link_alpha(&a, &at(72.0, 96.0, 0.0, 0.0)), None);
        let near = link_alpha(&a, &at(0.0, 119.0, 0.0, 0.0)).unwrap();
        assert!(near > 0.0 && near < 0.002);
    }
}
