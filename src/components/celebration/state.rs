//! Overlay visibility and run bookkeeping for the celebration.
//!
//! Each affirmation starts a new run and bumps the generation. A frame chain
//! carries the token it was started with; once a newer run exists the old chain
//! sees `Superseded` and stops rescheduling, so at most one chain draws.

use fastrand::Rng;

use super::particles::ConfettiRun;
use super::theme::ConfettiStyle;

/// Identifies the run a frame callback belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken(u64);

/// Outcome of advancing the active run by one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
	/// A frame was stepped and should be drawn; more remain.
	Drawn,
	/// The last frame was stepped; clear the surface and stop.
	Finished,
	/// The token no longer names the active run; stop without touching the surface.
	Superseded,
}

/// Celebration state shared by the overlay and the animation loop.
#[derive(Debug)]
pub struct CelebrationState {
	style: ConfettiStyle,
	overlay_visible: bool,
	generation: u64,
	run: Option<ConfettiRun>,
}

impl CelebrationState {
	pub fn new(style: ConfettiStyle) -> Self {
		Self {
			style,
			overlay_visible: false,
			generation: 0,
			run: None,
		}
	}

	pub fn overlay_visible(&self) -> bool {
		self.overlay_visible
	}

	/// The run currently owning the drawing surface, if any.
	pub fn run(&self) -> Option<&ConfettiRun> {
		self.run.as_ref()
	}

	/// Reveal the overlay and start a fresh run on a `width` x `height` surface.
	pub fn affirm(&mut self, width: f64, height: f64, rng: &mut Rng) -> RunToken {
		self.overlay_visible = true;
		self.generation += 1;
		self.run = Some(ConfettiRun::new(&self.style, width, height, rng));
		RunToken(self.generation)
	}

	/// Hide the overlay. The run, if any, keeps going.
	pub fn dismiss(&mut self) {
		self.overlay_visible = false;
	}

	/// Step the run named by `token`.
	pub fn advance(&mut self, token: RunToken, rng: &mut Rng) -> FrameStatus {
		if token.0 != self.generation {
			return FrameStatus::Superseded;
		}
		let Some(run) = self.run.as_mut() else {
			return FrameStatus::Superseded;
		};
		if run.step(rng) {
			FrameStatus::Drawn
		} else {
			self.run = None;
			FrameStatus::Finished
		}
	}
}
