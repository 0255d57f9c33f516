//! Pointer-evasion geometry.
//!
//! The evasive button never leaves its layout slot; it is only translated. The
//! accumulated translation lives in [`Displacement`], which the DOM adapter owns
//! and passes to [`relocate`] together with fresh measurements each time.
//!
//! # Coordinate Spaces
//!
//! - **Viewport-space**: what `getBoundingClientRect` reports. [`ElementRect`]
//!   is the button's *current visual* box, translation included.
//! - **Offset-space**: the `translate3d` applied on top of the layout position.
//!   Moving the visual box by `(dx, dy)` adds `(dx, dy)` to the offset.

use fastrand::Rng;

/// Default distance kept between the button and the viewport edges.
pub const DEFAULT_MARGIN: f64 = 12.0;

/// Viewport size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// An element's on-screen box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
	pub left: f64,
	pub top: f64,
	pub width: f64,
	pub height: f64,
}

/// Range of top-left positions that keep an element fully on screen with `margin`
/// to spare. Collapses to `margin` on an axis the element does not fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReachableArea {
	pub min_x: f64,
	pub max_x: f64,
	pub min_y: f64,
	pub max_y: f64,
}

impl ReachableArea {
	pub fn new(viewport: Viewport, width: f64, height: f64, margin: f64) -> Self {
		Self {
			min_x: margin,
			max_x: margin.max(viewport.width - width - margin),
			min_y: margin,
			max_y: margin.max(viewport.height - height - margin),
		}
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		(self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
	}

	/// Uniformly random point inside the area.
	pub fn sample(&self, rng: &mut Rng) -> (f64, f64) {
		(
			self.min_x + rng.f64() * (self.max_x - self.min_x),
			self.min_y + rng.f64() * (self.max_y - self.min_y),
		)
	}
}

/// Cumulative translation applied to the evasive button.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Displacement {
	pub x: f64,
	pub y: f64,
}

impl Displacement {
	/// Add `(dx, dy)` and clamp each axis to twice the viewport dimension.
	///
	/// Bounding rects are fractional, so sums of deltas drift; the clamp keeps
	/// that drift from ever running away while still allowing full-screen travel.
	pub fn shift(&mut self, dx: f64, dy: f64, viewport: Viewport) {
		let (limit_x, limit_y) = (viewport.width * 2.0, viewport.height * 2.0);
		self.x = (self.x + dx).clamp(-limit_x, limit_x);
		self.y = (self.y + dy).clamp(-limit_y, limit_y);
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}

	pub fn is_zero(&self) -> bool {
		self.x == 0.0 && self.y == 0.0
	}

	/// CSS `transform` value; pure translation, no layout impact.
	pub fn to_css_transform(self) -> String {
		format!("translate3d({}px, {}px, 0)", self.x, self.y)
	}
}

/// Result of a single relocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relocation {
	/// Chosen top-left position in viewport coordinates.
	pub target: (f64, f64),
	/// Movement from the current visual position to `target`.
	pub delta: (f64, f64),
}

/// Pick a random reachable spot for `rect` and fold the move into `offset`.
pub fn relocate(
	offset: &mut Displacement,
	rect: ElementRect,
	viewport: Viewport,
	margin: f64,
	rng: &mut Rng,
) -> Relocation {
	let area = ReachableArea::new(viewport, rect.width, rect.height, margin);
	let target = area.sample(rng);
	let delta = (target.0 - rect.left, target.1 - rect.top);
	offset.shift(delta.0, delta.1, viewport);
	Relocation { target, delta }
}
