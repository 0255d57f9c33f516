//! Page-provided widget configuration.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="widget-config">`. Every field is
//! optional; anything missing keeps its default.

use log::warn;
use serde::Deserialize;

use crate::components::celebration::{Color, ConfettiStyle, DEFAULT_PALETTE};
use crate::components::evasion::DEFAULT_MARGIN;

/// Text and tuning knobs for the prompt.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
	pub question: String,
	pub yes_label: String,
	pub no_label: String,
	pub modal_title: String,
	pub modal_message: String,
	pub close_label: String,
	/// Gap kept between the evasive button and the viewport edges.
	pub margin: f64,
	pub particle_count: usize,
	/// Length of one celebration in animation frames.
	pub frame_budget: u32,
	/// Confetti colors as `#rrggbb`.
	pub palette: Vec<String>,
}

impl Default for WidgetConfig {
	fn default() -> Self {
		Self {
			question: "Will you be my Valentine?".into(),
			yes_label: "Yes".into(),
			no_label: "No".into(),
			modal_title: "Yay!".into(),
			modal_message: "I knew you'd say yes.".into(),
			close_label: "Close".into(),
			margin: DEFAULT_MARGIN,
			particle_count: 120,
			frame_budget: 300,
			palette: DEFAULT_PALETTE.iter().map(|c| c.to_css()).collect(),
		}
	}
}

impl WidgetConfig {
	/// Parse a JSON config, falling back to defaults (with a warning) on error.
	pub fn from_json(json: &str) -> Self {
		match serde_json::from_str::<WidgetConfig>(json) {
			Ok(config) => config,
			Err(e) => {
				warn!("evasive-prompt: ignoring unparsable widget config: {e}");
				Self::default()
			}
		}
	}

	/// Confetti tuning derived from this config.
	///
	/// Unparsable palette entries are dropped; an empty palette means default colors.
	pub fn confetti_style(&self) -> ConfettiStyle {
		let mut palette: Vec<Color> = self
			.palette
			.iter()
			.filter_map(|hex| {
				let color = Color::from_hex(hex);
				if color.is_none() {
					warn!("evasive-prompt: skipping invalid palette color {hex:?}");
				}
				color
			})
			.collect();
		if palette.is_empty() {
			palette = DEFAULT_PALETTE.to_vec();
		}

		ConfettiStyle {
			count: self.particle_count,
			frames: self.frame_budget,
			palette,
			..ConfettiStyle::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults() {
		let config = WidgetConfig::from_json(r#"{ "question": "Pizza tonight?", "margin": 20 }"#);
		assert_eq!(config.question, "Pizza tonight?");
		assert_eq!(config.margin, 20.0);
		assert_eq!(config.yes_label, "Yes");
		assert_eq!(config.frame_budget, 300);
	}

	#[test]
	fn broken_json_falls_back_to_defaults() {
		assert_eq!(WidgetConfig::from_json("{ nope"), WidgetConfig::default());
	}

	#[test]
	fn default_config_yields_default_style() {
		let style = WidgetConfig::default().confetti_style();
		assert_eq!(style.count, 120);
		assert_eq!(style.frames, 300);
		assert_eq!(style.palette, DEFAULT_PALETTE.to_vec());
	}

	#[test]
	fn invalid_palette_entries_are_skipped() {
		let config = WidgetConfig {
			palette: vec!["#000000".into(), "pink".into()],
			..WidgetConfig::default()
		};
		assert_eq!(config.confetti_style().palette, vec![Color::rgb(0, 0, 0)]);

		let all_bad = WidgetConfig {
			palette: vec!["pink".into()],
			..WidgetConfig::default()
		};
		assert_eq!(all_bad.confetti_style().palette.len(), 6);
	}
}
