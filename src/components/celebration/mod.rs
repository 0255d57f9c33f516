//! Celebration shown when the prompt is answered "Yes".
//!
//! Reveals a dismissible overlay and rains confetti for a fixed number of
//! animation frames on a full-viewport canvas:
//! - `particles` / `state` hold the run and its frame counter (no DOM access)
//! - `render` draws a run onto a 2d context
//! - `component` owns the canvas, the overlay signal and the frame loop
//!
//! # Example
//!
//! ```ignore
//! let celebration = Celebration::new(ConfettiStyle::default(), fastrand::Rng::new());
//! let affirm = celebration.clone();
//!
//! view! {
//!     <button on:click=move |_| affirm.affirm()>"Yes"</button>
//!     <CelebrationOverlay celebration title="Yay" message=":)" close_label="Close" />
//! }
//! ```

mod component;
pub mod particles;
mod render;
pub mod state;
pub mod theme;

pub use component::{Celebration, CelebrationOverlay};
pub use particles::{ConfettiRun, Particle};
pub use state::{CelebrationState, FrameStatus, RunToken};
pub use theme::{Color, ConfettiStyle, DEFAULT_PALETTE};
