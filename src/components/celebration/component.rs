//! Leptos wiring for the celebration overlay and its confetti canvas.
//!
//! `Celebration` is a cheap clonable handle shared by the affirmative button and
//! the overlay. Every affirmation sizes the canvas to the viewport once and
//! drives its own `requestAnimationFrame` chain; `CelebrationState` decides when
//! a chain has been superseded or has run out of frames.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use leptos::html::Canvas;
use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::{CelebrationState, FrameStatus, RunToken};
use super::theme::ConfettiStyle;
use crate::error::WidgetError;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Shared celebration controller: pure state, its RNG, and the DOM hooks.
#[derive(Clone)]
pub struct Celebration {
	state: Rc<RefCell<CelebrationState>>,
	rng: Rc<RefCell<Rng>>,
	visible: RwSignal<bool>,
	canvas_ref: NodeRef<Canvas>,
}

impl Celebration {
	/// Must be created inside a reactive owner (i.e. a component body).
	pub fn new(style: ConfettiStyle, rng: Rng) -> Self {
		Self {
			state: Rc::new(RefCell::new(CelebrationState::new(style))),
			rng: Rc::new(RefCell::new(rng)),
			visible: RwSignal::new(false),
			canvas_ref: NodeRef::new(),
		}
	}

	/// Show the overlay and start a new confetti run.
	pub fn affirm(&self) {
		if let Err(e) = self.try_affirm() {
			error!("evasive-prompt: celebration failed to start: {e}");
		}
	}

	/// Hide the overlay. A running animation is left alone.
	pub fn dismiss(&self) {
		self.state.borrow_mut().dismiss();
		self.visible.set(false);
	}

	fn try_affirm(&self) -> Result<(), WidgetError> {
		let canvas: HtmlCanvasElement = self
			.canvas_ref
			.get_untracked()
			.ok_or(WidgetError::MissingElement("confettiCanvas"))?
			.into();
		let window: Window = web_sys::window().ok_or(WidgetError::NoWindow)?;

		// Sized once per run; a mid-run window resize is not followed.
		let (w, h) = (
			window.inner_width()?.as_f64().unwrap_or_default(),
			window.inner_height()?.as_f64().unwrap_or_default(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(WidgetError::NoContext)?
			.dyn_into()
			.map_err(|_| WidgetError::NoContext)?;

		let token = self
			.state
			.borrow_mut()
			.affirm(w, h, &mut self.rng.borrow_mut());
		self.visible.set(true);
		info!("evasive-prompt: celebration started on {w}x{h} surface");

		self.run_frames(token, ctx, w, h)
	}

	fn run_frames(
		&self,
		token: RunToken,
		ctx: CanvasRenderingContext2d,
		width: f64,
		height: f64,
	) -> Result<(), WidgetError> {
		let frame: FrameCallback = Rc::new(RefCell::new(None));
		let (state, rng, frame_inner) = (self.state.clone(), self.rng.clone(), frame.clone());

		*frame.borrow_mut() = Some(Closure::new(move || {
			let status = state.borrow_mut().advance(token, &mut rng.borrow_mut());
			match status {
				FrameStatus::Drawn => {
					if let Some(run) = state.borrow().run() {
						render::render(run, &ctx);
					}
					if let Err(e) = request_frame(&frame_inner) {
						error!("evasive-prompt: could not schedule confetti frame: {e}");
						let _ = frame_inner.borrow_mut().take();
					}
				}
				FrameStatus::Finished => {
					render::clear(&ctx, width, height);
					info!("evasive-prompt: celebration finished");
					let _ = frame_inner.borrow_mut().take();
				}
				FrameStatus::Superseded => {
					debug!("evasive-prompt: confetti run {token:?} superseded");
					let _ = frame_inner.borrow_mut().take();
				}
			}
		}));

		request_frame(&frame)
	}
}

fn request_frame(frame: &FrameCallback) -> Result<(), WidgetError> {
	let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
	if let Some(ref cb) = *frame.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}
	Ok(())
}

/// Dismissible overlay plus the full-viewport confetti canvas.
///
/// The canvas sits above the page but ignores pointer input (see `index.html`),
/// so the animation can outlive the overlay without blocking the prompt.
#[component]
pub fn CelebrationOverlay(
	celebration: Celebration,
	#[prop(into)] title: String,
	#[prop(into)] message: String,
	#[prop(into)] close_label: String,
) -> impl IntoView {
	let (visible, canvas_ref) = (celebration.visible, celebration.canvas_ref);
	let on_close = move |_: MouseEvent| celebration.dismiss();

	view! {
		<div
			id="modal"
			class="modal"
			class:hidden=move || !visible.get()
			role="dialog"
			aria-modal="true"
		>
			<div class="modal-card">
				<h2>{title}</h2>
				<p>{message}</p>
				<button id="closeModal" class="btn close" on:click=on_close>
					{close_label}
				</button>
			</div>
		</div>
		<canvas id="confettiCanvas" class="confetti-canvas" node_ref=canvas_ref />
	}
}
