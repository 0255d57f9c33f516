// End-to-end scenarios for the prompt's pure logic.
// These run natively under `cargo test`; no browser APIs are touched.

use evasive_prompt::components::celebration::{
	CelebrationState, ConfettiRun, ConfettiStyle, DEFAULT_PALETTE, FrameStatus, Particle,
};
use evasive_prompt::components::evasion::{
	DEFAULT_MARGIN, Displacement, ElementRect, ReachableArea, Viewport, relocate,
};
use fastrand::Rng;

fn button_at(left: f64, top: f64) -> ElementRect {
	ElementRect {
		left,
		top,
		width: 100.0,
		height: 40.0,
	}
}

#[test]
fn relocation_stays_within_margins_on_roomy_viewports() {
	let mut rng = Rng::with_seed(1);
	for _ in 0..200 {
		let viewport = Viewport {
			width: rng.f64() * 1_500.0 + 200.0,
			height: rng.f64() * 1_000.0 + 100.0,
		};
		let area = ReachableArea::new(viewport, 100.0, 40.0, DEFAULT_MARGIN);
		let mut offset = Displacement::default();
		let mut rect = button_at(viewport.width / 2.0, viewport.height / 2.0);

		for _ in 0..10 {
			let moved = relocate(&mut offset, rect, viewport, DEFAULT_MARGIN, &mut rng);
			let (x, y) = moved.target;
			assert!(x >= DEFAULT_MARGIN && x <= viewport.width - 100.0 - DEFAULT_MARGIN);
			assert!(y >= DEFAULT_MARGIN && y <= viewport.height - 40.0 - DEFAULT_MARGIN);
			assert!(area.contains(x, y));
			rect = button_at(x, y);
		}
	}
}

#[test]
fn displacement_never_exceeds_twice_the_viewport() {
	let mut rng = Rng::with_seed(77);
	let viewport = Viewport {
		width: 320.0,
		height: 200.0,
	};
	let mut offset = Displacement::default();
	for _ in 0..500 {
		// Wildly wrong measurements, as if rects were stale.
		let rect = button_at(rng.f64() * 8_000.0 - 4_000.0, rng.f64() * 8_000.0 - 4_000.0);
		relocate(&mut offset, rect, viewport, DEFAULT_MARGIN, &mut rng);
		assert!(offset.x.abs() <= 2.0 * viewport.width);
		assert!(offset.y.abs() <= 2.0 * viewport.height);
	}
}

#[test]
fn relocation_on_800x600_lands_in_reachable_rectangle() {
	let viewport = Viewport {
		width: 800.0,
		height: 600.0,
	};
	let area = ReachableArea::new(viewport, 100.0, 40.0, DEFAULT_MARGIN);
	assert_eq!((area.min_x, area.max_x), (12.0, 688.0));
	assert_eq!((area.min_y, area.max_y), (12.0, 548.0));

	let mut rng = Rng::with_seed(800);
	let mut offset = Displacement::default();
	let rect = button_at(350.0, 280.0);
	relocate(&mut offset, rect, viewport, DEFAULT_MARGIN, &mut rng);

	let (final_x, final_y) = (rect.left + offset.x, rect.top + offset.y);
	assert!((12.0..=688.0).contains(&final_x));
	assert!((12.0..=548.0).contains(&final_y));
}

#[test]
fn displacement_accumulates_deltas_then_resets() {
	// Too small for the button: every target is pinned at (12, 12), so the
	// delta is fully determined by where the button currently appears.
	let cramped = Viewport {
		width: 50.0,
		height: 30.0,
	};
	let mut rng = Rng::with_seed(0);
	let mut offset = Displacement::default();

	let first = relocate(&mut offset, button_at(-38.0, 42.0), cramped, DEFAULT_MARGIN, &mut rng);
	assert_eq!(first.delta, (50.0, -30.0));
	assert_eq!(offset, Displacement { x: 50.0, y: -30.0 });

	let second = relocate(&mut offset, button_at(22.0, 7.0), cramped, DEFAULT_MARGIN, &mut rng);
	assert_eq!(second.delta, (-10.0, 5.0));
	assert_eq!(offset, Displacement { x: 40.0, y: -25.0 });

	offset.reset();
	assert_eq!(offset, Displacement { x: 0.0, y: 0.0 });
}

#[test]
fn affirm_runs_exactly_the_frame_budget() {
	let mut state = CelebrationState::new(ConfettiStyle::default());
	let mut rng = Rng::with_seed(300);

	let token = state.affirm(1_024.0, 768.0, &mut rng);
	assert!(state.overlay_visible());

	let mut frames = 0;
	loop {
		match state.advance(token, &mut rng) {
			FrameStatus::Drawn => frames += 1,
			FrameStatus::Finished => {
				frames += 1;
				break;
			}
			FrameStatus::Superseded => panic!("sole run reported as superseded"),
		}
	}
	assert_eq!(frames, 300);
}

#[test]
fn dismiss_mid_run_keeps_particles_and_frame() {
	let mut state = CelebrationState::new(ConfettiStyle::default());
	let mut rng = Rng::with_seed(5);
	let token = state.affirm(800.0, 600.0, &mut rng);
	for _ in 0..10 {
		state.advance(token, &mut rng);
	}
	let snapshot = state.run().cloned().expect("run active");

	state.dismiss();

	assert!(!state.overlay_visible());
	let run = state.run().expect("run survives dismissal");
	assert_eq!(run.frame(), 10);
	assert_eq!(run.particles, snapshot.particles);
	assert_eq!(state.advance(token, &mut rng), FrameStatus::Drawn);
}

#[test]
fn retriggering_supersedes_the_previous_run() {
	let mut state = CelebrationState::new(ConfettiStyle::default());
	let mut rng = Rng::with_seed(6);

	let old = state.affirm(800.0, 600.0, &mut rng);
	state.dismiss();
	let new = state.affirm(800.0, 600.0, &mut rng);

	assert!(state.overlay_visible());
	assert_eq!(state.advance(old, &mut rng), FrameStatus::Superseded);
	assert_eq!(state.advance(new, &mut rng), FrameStatus::Drawn);
}

#[test]
fn particle_crossing_the_bottom_is_recycled() {
	let style = ConfettiStyle::default();
	let mut rng = Rng::with_seed(640);
	let falling = Particle {
		x: 10.0,
		y: 637.0,
		width: 6.0,
		height: 8.0,
		color: DEFAULT_PALETTE[3],
		rotation: 0.0,
		speed: 3.0,
		phase: 1.0,
	};
	let mut run = ConfettiRun::with_particles(&style, vec![falling], 800.0, 600.0);

	run.step(&mut rng);

	let p = &run.particles[0];
	assert!((-200.0..=-40.0).contains(&p.y));
	assert!((0.0..=800.0).contains(&p.x));
	assert_eq!(p.color, DEFAULT_PALETTE[3]);
}

#[test]
fn first_frame_moves_particle_by_speed_and_sway() {
	let style = ConfettiStyle::default();
	let mut rng = Rng::with_seed(9);
	let piece = Particle {
		x: 100.0,
		y: -50.0,
		width: 10.0,
		height: 10.0,
		color: DEFAULT_PALETTE[0],
		rotation: 1.0,
		speed: 2.0,
		phase: 0.0,
	};
	let mut run = ConfettiRun::with_particles(&style, vec![piece], 800.0, 600.0);

	run.step(&mut rng);

	let p = &run.particles[0];
	assert!((p.y - -46.0).abs() < 1e-9);
	assert!((p.x - (100.0 + 0.02_f64.sin() * 0.8)).abs() < 1e-9);
	assert!((p.rotation - 1.06).abs() < 1e-9);
}
