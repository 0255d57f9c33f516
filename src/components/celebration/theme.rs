//! Confetti colors and tuning constants.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

/// RGB color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parse a `#rrggbb` (or `rrggbb`) hex string.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.trim().trim_start_matches('#');
		if digits.len() != 6 || !digits.is_ascii() {
			return None;
		}
		let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
		Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Pink-and-pastel confetti palette.
pub const DEFAULT_PALETTE: [Color; 6] = [
	Color::rgb(0xff, 0x4d, 0x7e), // Hot pink
	Color::rgb(0xff, 0xb3, 0xc7), // Blush
	Color::rgb(0xff, 0xd6, 0xe0), // Petal
	Color::rgb(0xff, 0xd2, 0x7a), // Butter
	Color::rgb(0xff, 0xc1, 0x7a), // Apricot
	Color::rgb(0xa6, 0xff, 0xcb), // Mint
];

/// Everything that shapes one confetti run.
///
/// Per-frame quantities are expressed in logical pixels (or radians) per
/// animation frame, not per second: the run is tied to the display refresh.
#[derive(Clone, Debug)]
pub struct ConfettiStyle {
	/// Number of pieces in flight.
	pub count: usize,
	/// Colors picked uniformly per piece.
	pub palette: Vec<Color>,
	/// Piece width range.
	pub width: RangeInclusive<f64>,
	/// Piece height range.
	pub height: RangeInclusive<f64>,
	/// Initial rotation range.
	pub rotation: RangeInclusive<f64>,
	/// Base fall speed range.
	pub speed: RangeInclusive<f64>,
	/// Drift phase range.
	pub phase: RangeInclusive<f64>,
	/// Fall distance per frame is `speed * fall_multiplier`.
	pub fall_multiplier: f64,
	/// Horizontal sway amplitude.
	pub sway_amplitude: f64,
	/// Sway phase advance per frame of the shared counter.
	pub sway_rate: f64,
	/// Rotation advance per frame.
	pub spin: f64,
	/// How far below the bottom edge a piece may fall before it is recycled.
	pub recycle_margin: f64,
	/// Vertical range a recycled piece is respawned into (above the surface).
	pub respawn_y: RangeInclusive<f64>,
	/// Number of frames a run lasts.
	pub frames: u32,
}

impl Default for ConfettiStyle {
	fn default() -> Self {
		Self {
			count: 120,
			palette: DEFAULT_PALETTE.to_vec(),
			width: 6.0..=12.0,
			height: 8.0..=16.0,
			rotation: 0.0..=TAU,
			speed: 1.0..=3.0,
			phase: 0.0..=TAU,
			fall_multiplier: 2.0,
			sway_amplitude: 0.8,
			sway_rate: 0.02,
			spin: 0.06,
			recycle_margin: 40.0,
			respawn_y: -200.0..=-40.0,
			frames: 300,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_with_and_without_hash() {
		assert_eq!(Color::from_hex("#ff4d7e"), Some(Color::rgb(255, 77, 126)));
		assert_eq!(Color::from_hex("A6FFCB"), Some(Color::rgb(166, 255, 203)));
	}

	#[test]
	fn rejects_malformed_hex() {
		assert_eq!(Color::from_hex("#fff"), None);
		assert_eq!(Color::from_hex("#gg0000"), None);
		assert_eq!(Color::from_hex("#ff4dé"), None);
	}

	#[test]
	fn css_is_lowercase_hex() {
		assert_eq!(Color::rgb(166, 255, 203).to_css(), "#a6ffcb");
		assert_eq!(Color::rgb(0, 10, 255).to_css(), "#000aff");
	}

	#[test]
	fn default_style_matches_confetti_tuning() {
		let style = ConfettiStyle::default();
		assert_eq!(style.count, 120);
		assert_eq!(style.frames, 300);
		assert_eq!(style.palette.len(), 6);
	}
}
