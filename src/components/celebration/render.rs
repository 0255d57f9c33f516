//! Canvas rendering for confetti.

use web_sys::CanvasRenderingContext2d;

use super::particles::{ConfettiRun, Particle};

/// Clears the surface and draws every piece of the run.
pub fn render(run: &ConfettiRun, ctx: &CanvasRenderingContext2d) {
	let (width, height) = run.surface();
	clear(ctx, width, height);

	for p in &run.particles {
		draw_particle(ctx, p);
	}
}

pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
}

/// Filled rectangle centered on the piece, rotated about its center.
fn draw_particle(ctx: &CanvasRenderingContext2d, p: &Particle) {
	ctx.save();
	let _ = ctx.translate(p.x, p.y);
	let _ = ctx.rotate(p.rotation);
	ctx.set_fill_style_str(&p.color.to_css());
	ctx.fill_rect(-p.width / 2.0, -p.height / 2.0, p.width, p.height);
	ctx.restore();
}
