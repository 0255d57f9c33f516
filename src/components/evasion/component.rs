//! Leptos component for the button that runs away from the pointer.
//!
//! Hovering, pressing or touching the button relocates it before the browser can
//! act on the press. Only a CSS translation is written, so the surrounding
//! layout never reflows. A window resize snaps it back to its layout slot.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use leptos::html::Button;
use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, MouseEvent, TouchEvent};

use super::geometry::{DEFAULT_MARGIN, Displacement, ElementRect, Viewport, relocate};
use crate::error::WidgetError;

/// Current visual box of `el`, transform included.
pub fn measure(el: &Element) -> ElementRect {
	let rect = el.get_bounding_client_rect();
	ElementRect {
		left: rect.left(),
		top: rect.top(),
		width: rect.width(),
		height: rect.height(),
	}
}

/// Layout viewport size (excludes scrollbars).
pub fn viewport(document: &Document) -> Result<Viewport, WidgetError> {
	let root = document
		.document_element()
		.ok_or(WidgetError::MissingElement("html"))?;
	Ok(Viewport {
		width: root.client_width() as f64,
		height: root.client_height() as f64,
	})
}

pub fn apply_transform(el: &HtmlElement, offset: Displacement) -> Result<(), WidgetError> {
	el.style()
		.set_property("transform", &offset.to_css_transform())?;
	Ok(())
}

pub fn clear_transform(el: &HtmlElement) -> Result<(), WidgetError> {
	el.style().remove_property("transform")?;
	Ok(())
}

/// Everything a dodge needs; cloned into each event handler.
#[derive(Clone)]
struct Evader {
	button_ref: NodeRef<Button>,
	offset: Rc<RefCell<Displacement>>,
	rng: Rc<RefCell<Rng>>,
	margin: f64,
}

impl Evader {
	fn dodge(&self) {
		if let Err(e) = self.try_dodge() {
			error!("evasive-prompt: relocation failed: {e}");
		}
	}

	fn try_dodge(&self) -> Result<(), WidgetError> {
		let button = self
			.button_ref
			.get_untracked()
			.ok_or(WidgetError::MissingElement("noBtn"))?;
		let document = web_sys::window()
			.ok_or(WidgetError::NoWindow)?
			.document()
			.ok_or(WidgetError::NoDocument)?;

		let mut offset = self.offset.borrow_mut();
		let moved = relocate(
			&mut offset,
			measure(&button),
			viewport(&document)?,
			self.margin,
			&mut self.rng.borrow_mut(),
		);
		apply_transform(&button, *offset)?;

		debug!(
			"evasive-prompt: dodged to ({:.0}, {:.0}), offset now ({:.1}, {:.1})",
			moved.target.0, moved.target.1, offset.x, offset.y
		);
		Ok(())
	}

	fn reset(&self) {
		self.offset.borrow_mut().reset();
		if let Some(button) = self.button_ref.get_untracked() {
			if let Err(e) = clear_transform(&button) {
				error!("evasive-prompt: could not clear transform: {e}");
			}
		}
		debug!("evasive-prompt: viewport resized, offset reset");
	}
}

/// Listeners registered outside the view; kept alive for the page lifetime.
struct Listeners {
	_resize: Closure<dyn FnMut()>,
	_touch: Closure<dyn FnMut(TouchEvent)>,
}

fn register_listeners(button: &HtmlElement, evader: &Evader) -> Result<Listeners, WidgetError> {
	let window = web_sys::window().ok_or(WidgetError::NoWindow)?;

	let evader_resize = evader.clone();
	let resize = Closure::<dyn FnMut()>::new(move || evader_resize.reset());
	window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;

	// Passive touch listeners cannot cancel the tap, so register this one directly.
	let evader_touch = evader.clone();
	let touch = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
		ev.prevent_default();
		evader_touch.dodge();
	});
	let options = AddEventListenerOptions::new();
	options.set_passive(false);
	button.add_event_listener_with_callback_and_add_event_listener_options(
		"touchstart",
		touch.as_ref().unchecked_ref(),
		&options,
	)?;

	Ok(Listeners {
		_resize: resize,
		_touch: touch,
	})
}

/// The negative-choice button. It can be seen but not pressed.
#[component]
pub fn EvasiveButton(
	#[prop(into)] label: String,
	#[prop(default = DEFAULT_MARGIN)] margin: f64,
	rng: Rng,
) -> impl IntoView {
	let evader = Evader {
		button_ref: NodeRef::new(),
		offset: Rc::new(RefCell::new(Displacement::default())),
		rng: Rc::new(RefCell::new(rng)),
		margin,
	};
	let listeners: Rc<RefCell<Option<Listeners>>> = Rc::new(RefCell::new(None));

	let evader_init = evader.clone();
	Effect::new(move |_| {
		let Some(button) = evader_init.button_ref.get() else {
			return;
		};
		if listeners.borrow().is_some() {
			return;
		}
		match register_listeners(&button, &evader_init) {
			Ok(registered) => *listeners.borrow_mut() = Some(registered),
			Err(e) => error!("evasive-prompt: could not wire evasive button: {e}"),
		}
	});

	let evader_enter = evader.clone();
	let on_mouseenter = move |_: MouseEvent| evader_enter.dodge();

	let evader_down = evader.clone();
	let on_mousedown = move |ev: MouseEvent| {
		ev.prevent_default();
		evader_down.dodge();
	};

	view! {
		<button
			id="noBtn"
			type="button"
			class="btn no"
			node_ref=evader.button_ref
			on:mouseenter=on_mouseenter
			on:mousedown=on_mousedown
		>
			{label}
		</button>
	}
}
