//! Drawing pass for the conversation-clustering scene. Layout happens in
//! logical space and is fitted to the canvas with a single view transform.

use super::data::{CENTER_POSITIONS, CLUSTER_COLORS, HEIGHT, METRICS, WIDTH};
use super::state::NlpState;
use crate::viz::{Surface, ViewTransform};

const BACKGROUND: &str = "#0f1419";
const LINE_COLOR: &str = "rgba(255, 255, 255, 0.15)";
const BANNER_FILL: &str = "rgba(52, 152, 219, 0.15)";
const BANNER_STROKE: &str = "#3498db";

/// Uniform scale that fits the logical scene into the canvas, centered.
pub fn scene_view(width: f64, height: f64) -> ViewTransform {
	let k = (width / WIDTH).min(height / HEIGHT);
	ViewTransform {
		x: (width - WIDTH * k) / 2.0,
		y: (height - HEIGHT * k) / 2.0,
		k,
	}
}

pub fn render<S: Surface>(state: &NlpState, width: f64, height: f64, surface: &mut S) {
	surface.clear(width, height, BACKGROUND);
	surface.push_view(&scene_view(width, height));

	if state.lines_visible {
		for p in &state.points {
			let (cx, cy) = CENTER_POSITIONS[p.cluster];
			surface.line(p.pos.x, p.pos.y, cx, cy, LINE_COLOR, 0.5, None, 0.0);
		}
	}

	if state.centers_visible {
		for (i, &(cx, cy)) in CENTER_POSITIONS.iter().enumerate() {
			surface.ring(cx, cy, 10.0, CLUSTER_COLORS[i], 2.0);
		}
	}

	for p in &state.points {
		surface.circle(p.pos.x, p.pos.y, 4.0 * p.scale, p.color);
	}

	for label in &state.labels {
		surface.text(
			&format!("{} ({} conversations)", label.name, label.count),
			label.pos.x,
			label.pos.y,
			11.0,
			label.color,
		);
	}

	if state.banner_visible() {
		let (bw, bh) = (320.0, 36.0);
		let (bx, by) = ((WIDTH - bw) / 2.0, 8.0);
		surface.rect(bx, by, bw, bh, BANNER_FILL, Some((BANNER_STROKE, 1.0)));
		surface.text(
			"Analyzing sentiment...",
			bx + 14.0,
			by + 23.0,
			13.0,
			BANNER_STROKE,
		);
	}

	if state.metrics_visible {
		let step = WIDTH / METRICS.len() as f64;
		for (i, &(value, label)) in METRICS.iter().enumerate() {
			let x = step * i as f64 + step / 2.0 - 40.0;
			surface.text(value, x, HEIGHT - 26.0, 18.0, "#64ffda");
			surface.text(label, x, HEIGHT - 10.0, 10.0, "rgba(255, 255, 255, 0.6)");
		}
	}

	surface.pop_view();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::nlp::data::NUM_POINTS;
	use crate::viz::VizRng;
	use crate::viz::surface::testing::RecordingSurface;

	#[test]
	fn idle_scene_draws_only_points() {
		let state = NlpState::new(VizRng::seeded(3));
		let mut surface = RecordingSurface::new();
		render(&state, 700.0, 360.0, &mut surface);
		assert_eq!(surface.visible_circle_count(), NUM_POINTS);
		assert_eq!(surface.line_count(), 0);
		assert!(surface.texts().is_empty());
	}

	#[test]
	fn clustering_stage_draws_connection_lines() {
		let mut state = NlpState::new(VizRng::seeded(3));
		state.next_step();
		while state.is_animating() {
			state.tick(0.1);
		}
		state.next_step();
		let mut surface = RecordingSurface::new();
		render(&state, 700.0, 360.0, &mut surface);
		assert_eq!(surface.line_count(), NUM_POINTS);
	}

	#[test]
	fn completed_run_shows_labels_and_metrics() {
		let mut state = NlpState::new(VizRng::seeded(3));
		state.start_analysis();
		for _ in 0..2000 {
			state.tick(0.016);
			if state.indicator == 6 {
				break;
			}
		}
		let mut surface = RecordingSurface::new();
		render(&state, 700.0, 360.0, &mut surface);
		// 7 theme labels + 4 metric value/label pairs
		assert_eq!(surface.texts().len(), 7 + METRICS.len() * 2);
		assert_eq!(surface.line_count(), 0);
	}
}
