//! evasive-prompt: a Yes/No prompt whose "No" button cannot be caught.
//!
//! This crate provides a WASM widget that asks a question, moves the "No" button
//! out from under the pointer, and celebrates a "Yes" with a dialog and confetti.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;

pub use components::celebration::{Celebration, CelebrationOverlay};
pub use components::evasion::EvasiveButton;
pub use config::WidgetConfig;
pub use error::WidgetError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("evasive-prompt: logging initialized");
}

/// Load the widget config from a script element with id="widget-config".
/// Expected format: JSON object, see [`WidgetConfig`].
fn load_widget_config() -> WidgetConfig {
	let Some(json_text) = config_script_text() else {
		return WidgetConfig::default();
	};
	let config = WidgetConfig::from_json(&json_text);
	info!("evasive-prompt: loaded widget config");
	config
}

fn config_script_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("widget-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Browser-seeded generator; tests seed their own.
fn browser_rng() -> fastrand::Rng {
	fastrand::Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Main application component.
/// Reads the page config and renders the prompt, its two answers and the overlay.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_widget_config();
	let celebration = Celebration::new(config.confetti_style(), browser_rng());
	let affirm = celebration.clone();
	let WidgetConfig {
		question,
		yes_label,
		no_label,
		modal_title,
		modal_message,
		close_label,
		margin,
		..
	} = config;
	let page_title = question.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=page_title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="prompt">
			<h1>{question}</h1>
			<div class="answers">
				<button
					id="yesBtn"
					type="button"
					class="btn yes"
					on:click=move |_| affirm.affirm()
				>
					{yes_label}
				</button>
				<EvasiveButton label=no_label margin=margin rng=browser_rng() />
			</div>
		</main>
		<CelebrationOverlay
			celebration=celebration
			title=modal_title
			message=modal_message
			close_label=close_label
		/>
	}
}
