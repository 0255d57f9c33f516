//! UI components of the prompt.

pub mod celebration;
pub mod evasion;
