//! Falling confetti for one celebration run.
//!
//! The run is pure state: it never touches the canvas. `step` advances every
//! piece by one animation frame and the renderer draws whatever is left.

use std::ops::RangeInclusive;

use fastrand::Rng;

use super::theme::{Color, ConfettiStyle, DEFAULT_PALETTE};

/// A single confetti piece.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Center position on the drawing surface.
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
	pub color: Color,
	/// Rotation in radians.
	pub rotation: f64,
	/// Base fall speed.
	pub speed: f64,
	/// Drift phase, offsets the shared sway wave.
	pub phase: f64,
}

/// Uniform sample from an inclusive range.
fn sample(rng: &mut Rng, range: &RangeInclusive<f64>) -> f64 {
	range.start() + rng.f64() * (range.end() - range.start())
}

/// Particle set plus frame counter for a single run.
#[derive(Clone, Debug)]
pub struct ConfettiRun {
	pub particles: Vec<Particle>,
	frame: u32,
	width: f64,
	height: f64,
	style: ConfettiStyle,
}

impl ConfettiRun {
	/// Scatter `style.count` pieces above a `width` x `height` surface.
	pub fn new(style: &ConfettiStyle, width: f64, height: f64, rng: &mut Rng) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: sample(rng, &(0.0..=width)),
				y: sample(rng, &(-height..=0.0)),
				width: sample(rng, &style.width),
				height: sample(rng, &style.height),
				color: pick_color(&style.palette, rng),
				rotation: sample(rng, &style.rotation),
				speed: sample(rng, &style.speed),
				phase: sample(rng, &style.phase),
			})
			.collect();

		Self::with_particles(style, particles, width, height)
	}

	/// Start a run from an explicit particle set.
	pub fn with_particles(
		style: &ConfettiStyle,
		particles: Vec<Particle>,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			particles,
			frame: 0,
			width,
			height,
			style: style.clone(),
		}
	}

	/// Number of frames stepped so far.
	pub fn frame(&self) -> u32 {
		self.frame
	}

	/// Surface size captured when the run started.
	pub fn surface(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// True once the frame budget is spent.
	pub fn is_finished(&self) -> bool {
		self.frame >= self.style.frames
	}

	/// Advance one frame. Returns whether more frames remain.
	pub fn step(&mut self, rng: &mut Rng) -> bool {
		self.frame += 1;
		// All pieces sway on the same slowly advancing wave.
		let sway_t = self.frame as f64 * self.style.sway_rate;
		let floor = self.height + self.style.recycle_margin;

		for p in &mut self.particles {
			p.y += p.speed * self.style.fall_multiplier;
			p.x += (p.phase + sway_t).sin() * self.style.sway_amplitude;
			p.rotation += self.style.spin;

			if p.y > floor {
				p.y = sample(rng, &self.style.respawn_y);
				p.x = sample(rng, &(0.0..=self.width));
			}
		}

		!self.is_finished()
	}
}

fn pick_color(palette: &[Color], rng: &mut Rng) -> Color {
	if palette.is_empty() {
		return DEFAULT_PALETTE[0];
	}
	palette[rng.usize(..palette.len())]
}
