//! Particle field simulation for the animated backdrop.
//!
//! A field owns a fixed set of particles drifting inside a rectangular
//! viewport. Each frame every particle advances by its per-frame velocity
//! and reflects off the viewport edges; pairs closer than `link_distance`
//! are joined by faint connection lines. The module is free of any DOM
//! dependency so the simulation runs under native `cargo test`.

use rand::Rng;

/// Dampening applied to link opacity so connections stay faint.
const LINK_ALPHA: f64 = 0.15;

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in canvas pixels.
	pub x: f64,
	/// Vertical position in canvas pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Draw radius in pixels.
	pub radius: f64,
	/// Fill opacity, fixed for the particle's lifetime.
	pub alpha: f64,
}

/// Tunable parameters for a particle field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Number of particles generated at every (re)initialization.
	pub count: usize,
	/// Maximum per-axis speed; velocities are uniform in `[-speed, speed)`.
	pub speed: f64,
	/// Lower bound of the draw radius range.
	pub radius_min: f64,
	/// Upper bound (exclusive) of the draw radius range.
	pub radius_max: f64,
	/// Lower bound of the fill opacity range.
	pub alpha_min: f64,
	/// Upper bound (exclusive) of the fill opacity range.
	pub alpha_max: f64,
	/// Maximum distance at which two particles are linked.
	pub link_distance: f64,
}

impl FieldConfig {
	/// Default config with `count` particles; negative counts clamp to zero
	/// so a malformed count degrades to an empty field.
	pub fn with_count(count: i32) -> Self {
		Self {
			count: count.max(0) as usize,
			..Self::default()
		}
	}
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 70,
			speed: 0.25,
			radius_min: 1.0,
			radius_max: 3.0,
			alpha_min: 0.2,
			alpha_max: 0.7,
			link_distance: 150.0,
		}
	}
}

/// A connection between two nearby particles.
#[derive(Clone, Copy, Debug)]
pub struct Link {
	/// Index of the first particle, `a < b`.
	pub a: usize,
	/// Index of the second particle.
	pub b: usize,
	/// Proximity strength in `(0, 1]`; 1 at zero distance.
	pub strength: f64,
}

impl Link {
	/// Stroke opacity for this link.
	pub fn alpha(&self) -> f64 {
		self.strength * LINK_ALPHA
	}
}

/// Particle state confined to a `width × height` viewport.
///
/// Created once when the backdrop mounts, then stepped each frame by the
/// animation loop. A viewport resize discards and regenerates all particles
/// rather than rescaling them, so a shrink never strands particles far
/// outside the new bounds.
pub struct ParticleField {
	particles: Vec<Particle>,
	config: FieldConfig,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Creates a field with `config.count` freshly randomized particles.
	pub fn new<R: Rng>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			config,
			width,
			height,
		};
		field.regenerate(rng);
		field
	}

	fn regenerate<R: Rng>(&mut self, rng: &mut R) {
		let config = self.config.clone();
		self.particles.clear();
		self.particles.reserve(config.count);

		for _ in 0..config.count {
			self.particles.push(Particle {
				x: rng.gen_range(0.0..=self.width),
				y: rng.gen_range(0.0..=self.height),
				vx: rng.gen_range(-config.speed..config.speed),
				vy: rng.gen_range(-config.speed..config.speed),
				radius: rng.gen_range(config.radius_min..config.radius_max),
				alpha: rng.gen_range(config.alpha_min..config.alpha_max),
			});
		}
	}

	/// Advances every particle one frame and reflects at the bounds.
	///
	/// Reflection only negates velocity; an out-of-range particle is pulled
	/// back by the next step rather than clamped, so it may render up to one
	/// frame past the edge.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Rebinds the field to new bounds and regenerates every particle.
	pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.regenerate(rng);
	}

	/// Collects every unordered particle pair within `link_distance`.
	///
	/// Quadratic in the particle count, which stays in the tens; the count is
	/// fixed by [`FieldConfig`] and never grows at runtime.
	pub fn links(&self) -> Vec<Link> {
		let max_distance = self.config.link_distance;
		let mut links = Vec::new();

		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let dx = self.particles[i].x - self.particles[j].x;
				let dy = self.particles[i].y - self.particles[j].y;
				let distance = (dx * dx + dy * dy).sqrt();

				if distance < max_distance {
					links.push(Link {
						a: i,
						b: j,
						strength: 1.0 - distance / max_distance,
					});
				}
			}
		}

		links
	}

	/// Current particles, in iteration order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Viewport width the field is bound to.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height the field is bound to.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn rng() -> SmallRng {
		SmallRng::seed_from_u64(0x5eed)
	}

	fn field_of(count: usize, width: f64, height: f64) -> ParticleField {
		let config = FieldConfig {
			count,
			..FieldConfig::default()
		};
		ParticleField::new(config, width, height, &mut rng())
	}

	#[test]
	fn init_produces_exact_count_within_bounds() {
		let field = field_of(70, 640.0, 480.0);
		assert_eq!(field.particles().len(), 70);

		for p in field.particles() {
			assert!(p.x >= 0.0 && p.x <= 640.0);
			assert!(p.y >= 0.0 && p.y <= 480.0);
			assert!(p.radius >= 1.0 && p.radius < 3.0);
			assert!(p.alpha >= 0.2 && p.alpha < 0.7);
			assert!(p.vx >= -0.25 && p.vx < 0.25);
			assert!(p.vy >= -0.25 && p.vy < 0.25);
		}
	}

	#[test]
	fn negative_count_clamps_to_empty() {
		let config = FieldConfig::with_count(-5);
		assert_eq!(config.count, 0);

		let field = ParticleField::new(config, 300.0, 200.0, &mut rng());
		assert!(field.particles().is_empty());
	}

	#[test]
	fn empty_field_is_inert() {
		let mut field = field_of(0, 100.0, 100.0);
		field.step();
		assert!(field.particles().is_empty());
		assert!(field.links().is_empty());
	}

	#[test]
	fn step_reflects_at_right_edge_without_clamping() {
		let mut field = field_of(1, 200.0, 100.0);
		let p = &mut field.particles[0];
		p.x = 200.0;
		p.y = 50.0;
		p.vx = 0.25;
		p.vy = 0.1;

		field.step();

		let p = &field.particles[0];
		// One-frame overshoot is allowed; only the velocity flips.
		assert!((p.x - 200.25).abs() < 1e-12);
		assert!(p.vx < 0.0);
		assert!((p.vy - 0.1).abs() < 1e-12);

		field.step();
		assert!(field.particles[0].x <= 200.0);
	}

	#[test]
	fn step_reflects_axes_independently() {
		let mut field = field_of(1, 100.0, 100.0);
		let p = &mut field.particles[0];
		p.x = 50.0;
		p.y = 0.0;
		p.vx = 0.2;
		p.vy = -0.2;

		field.step();

		let p = &field.particles[0];
		assert!((p.vx - 0.2).abs() < 1e-12);
		assert!(p.vy > 0.0);
	}

	#[test]
	fn resize_discards_and_rebounds_all_particles() {
		let mut field = field_of(40, 800.0, 600.0);
		field.resize(120.0, 90.0, &mut rng());

		assert_eq!(field.particles().len(), 40);
		assert!((field.width() - 120.0).abs() < 1e-12);
		for p in field.particles() {
			assert!(p.x >= 0.0 && p.x <= 120.0);
			assert!(p.y >= 0.0 && p.y <= 90.0);
		}
	}

	#[test]
	fn link_alpha_scales_with_proximity() {
		let mut field = field_of(2, 400.0, 400.0);
		field.particles[0].x = 0.0;
		field.particles[0].y = 0.0;
		field.particles[1].x = 75.0;
		field.particles[1].y = 0.0;

		let links = field.links();
		assert_eq!(links.len(), 1);
		// Half the threshold distance gives half strength.
		assert!((links[0].strength - 0.5).abs() < 1e-12);
		assert!((links[0].alpha() - 0.075).abs() < 1e-12);
	}

	#[test]
	fn link_alpha_is_order_independent() {
		let mut field = field_of(2, 400.0, 400.0);
		field.particles[0].x = 10.0;
		field.particles[0].y = 20.0;
		field.particles[1].x = 90.0;
		field.particles[1].y = 60.0;
		let forward = field.links()[0].alpha();

		field.particles.swap(0, 1);
		let swapped = field.links()[0].alpha();

		assert!((forward - swapped).abs() < 1e-12);
	}

	#[test]
	fn no_link_at_or_beyond_threshold() {
		let mut field = field_of(2, 400.0, 400.0);
		field.particles[0].x = 0.0;
		field.particles[0].y = 0.0;
		field.particles[1].x = 150.0;
		field.particles[1].y = 0.0;

		assert!(field.links().is_empty());
	}

	#[test]
	fn opposing_particles_reflect_and_stay_linked() {
		let mut field = field_of(2, 100.0, 100.0);
		{
			let p = &mut field.particles[0];
			(p.x, p.y, p.vx, p.vy) = (0.0, 50.0, -0.25, 0.0);
		}
		{
			let p = &mut field.particles[1];
			(p.x, p.y, p.vx, p.vy) = (100.0, 50.0, 0.25, 0.0);
		}

		field.step();

		let a = &field.particles[0];
		let b = &field.particles[1];
		assert!((a.x - -0.25).abs() < 1e-12);
		assert!((a.vx - 0.25).abs() < 1e-12);
		assert!((b.x - 100.25).abs() < 1e-12);
		assert!((b.vx - -0.25).abs() < 1e-12);

		let links = field.links();
		assert_eq!(links.len(), 1);
		let distance = b.x - a.x;
		let expected = (1.0 - distance / 150.0) * 0.15;
		assert!((links[0].alpha() - expected).abs() < 1e-12);
		assert!((links[0].alpha() - 0.0495).abs() < 1e-6);
	}
}
