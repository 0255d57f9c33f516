//! Failure modes of the DOM adapter layer.
//!
//! The geometry and animation logic never fails; only wiring against the host
//! document can, and only when the page is missing something we render ourselves.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while talking to the browser environment.
#[derive(Debug, Error)]
pub enum WidgetError {
	/// `window` is unavailable (not running in a browser main thread).
	#[error("no global window")]
	NoWindow,
	/// `window.document` is unavailable.
	#[error("window has no document")]
	NoDocument,
	/// A required element has not been mounted (identified by its DOM id).
	#[error("required element #{0} is not mounted")]
	MissingElement(&'static str),
	/// The canvas refused to hand out a 2d rendering context.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// Any other exception thrown by a browser API.
	#[error("browser API error: {0}")]
	Js(String),
}

impl From<JsValue> for WidgetError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}
