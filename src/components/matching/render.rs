//! Drawing pass for the workforce-assignment scene. Panel and row geometry
//! is computed in logical space by pure functions so connection endpoints
//! can be asserted without a canvas.

use super::state::MatchingState;
use super::types::{ConnectionKind, Salesperson};
use crate::viz::{Point, Surface, ViewTransform};

pub const WIDTH: f64 = 760.0;
pub const HEIGHT: f64 = 420.0;

const PANEL_Y: f64 = 36.0;
const PANEL_H: f64 = 330.0;
const PANEL_W: f64 = 300.0;
const CLIENT_PANEL_X: f64 = 20.0;
const TEAM_PANEL_X: f64 = 440.0;
const ROW_H: f64 = 38.0;
const ROW_GAP: f64 = 4.0;

const BACKGROUND: &str = "#16213e";
const PANEL_FILL: &str = "rgba(255, 255, 255, 0.05)";
const PANEL_STROKE: &str = "rgba(255, 255, 255, 0.1)";
const ROW_FILL: &str = "rgba(255, 255, 255, 0.08)";
const ROW_STROKE: &str = "rgba(255, 255, 255, 0.2)";
const ACTIVE_STROKE: &str = "#4facfe";
const MATCHED_STROKE: &str = "#00ff88";
const UNAVAILABLE_STROKE: &str = "#ff4444";
const URGENT_STROKE: &str = "#ff6b6b";
const EVAL_LINE: &str = "rgba(200, 200, 200, 0.8)";
const TEXT_DIM: &str = "#b0b0b0";
const CAPACITY_TRACK: &str = "rgba(255, 255, 255, 0.1)";
const CAPACITY_FILL: &str = "#00ff88";

pub fn row_rect(panel_x: f64, index: usize) -> (f64, f64, f64, f64) {
	let y = PANEL_Y + 24.0 + index as f64 * (ROW_H + ROW_GAP);
	(panel_x + 8.0, y, PANEL_W - 16.0, ROW_H)
}

pub fn client_rect(index: usize) -> (f64, f64, f64, f64) {
	row_rect(CLIENT_PANEL_X, index)
}

pub fn salesperson_rect(index: usize) -> (f64, f64, f64, f64) {
	row_rect(TEAM_PANEL_X, index)
}

/// Connection endpoints: client right edge to salesperson left edge, both
/// at mid height.
pub fn client_anchor(index: usize) -> Point {
	let (x, y, w, h) = client_rect(index);
	Point::new(x + w, y + h / 2.0)
}

pub fn salesperson_anchor(index: usize) -> Point {
	let (x, y, _, h) = salesperson_rect(index);
	Point::new(x, y + h / 2.0)
}

/// Red-to-green gradient over the 20–70 score range.
pub fn score_color(score: u32) -> String {
	let normalized = ((score as f64 - 20.0) / 50.0).clamp(0.0, 1.0);
	if normalized < 0.5 {
		let green = (255.0 * normalized * 2.0).round() as u32;
		format!("rgba(255, {green}, 0, 0.8)")
	} else {
		let red = (255.0 * (1.0 - (normalized - 0.5) * 2.0)).round() as u32;
		format!("rgba({red}, 255, 0, 0.8)")
	}
}

/// Uniform scale that fits the logical scene into the canvas, centered.
pub fn scene_view(width: f64, height: f64) -> ViewTransform {
	let k = (width / WIDTH).min(height / HEIGHT);
	ViewTransform {
		x: (width - WIDTH * k) / 2.0,
		y: (height - HEIGHT * k) / 2.0,
		k,
	}
}

pub fn render<S: Surface>(state: &MatchingState, width: f64, height: f64, surface: &mut S) {
	surface.clear(width, height, BACKGROUND);
	surface.push_view(&scene_view(width, height));

	surface.rect(
		CLIENT_PANEL_X,
		PANEL_Y,
		PANEL_W,
		PANEL_H,
		PANEL_FILL,
		Some((PANEL_STROKE, 1.0)),
	);
	surface.rect(
		TEAM_PANEL_X,
		PANEL_Y,
		PANEL_W,
		PANEL_H,
		PANEL_FILL,
		Some((PANEL_STROKE, 1.0)),
	);
	surface.text("Clients", CLIENT_PANEL_X + 8.0, PANEL_Y + 16.0, 13.0, ACTIVE_STROKE);
	surface.text("Sales Team", TEAM_PANEL_X + 8.0, PANEL_Y + 16.0, 13.0, ACTIVE_STROKE);

	draw_connections(state, surface);
	draw_clients(state, surface);
	draw_salespeople(state, surface);
	draw_sidebar(state, surface);

	surface.pop_view();
}

fn draw_connections<S: Surface>(state: &MatchingState, surface: &mut S) {
	for conn in &state.connections {
		let Some(ci) = state.clients.iter().position(|c| c.id == conn.client_id) else {
			continue;
		};
		let Some(si) = state
			.salespeople
			.iter()
			.position(|p| p.id == conn.salesperson_id)
		else {
			continue;
		};
		let (a, b) = (client_anchor(ci), salesperson_anchor(si));
		match conn.kind {
			ConnectionKind::Evaluating => {
				let offset = -(state.flow_time * 10.0) % 10.0;
				surface.line(a.x, a.y, b.x, b.y, EVAL_LINE, 3.0, Some((5.0, 5.0)), offset);
			}
			ConnectionKind::Matched => {
				surface.line(a.x, a.y, b.x, b.y, &score_color(conn.score), 4.0, None, 0.0);
			}
		}
	}
}

fn draw_clients<S: Surface>(state: &MatchingState, surface: &mut S) {
	let highlight = state.highlighted_pair();
	for (i, client) in state.clients.iter().enumerate() {
		let (x, y, w, h) = client_rect(i);
		let matched = state.matches.iter().any(|m| m.client_id == client.id);
		let stroke = match highlight {
			Some((cid, _, true)) if cid == client.id => MATCHED_STROKE,
			Some((cid, _, false)) if cid == client.id => ACTIVE_STROKE,
			_ if matched => MATCHED_STROKE,
			_ if client.is_urgent => URGENT_STROKE,
			_ => ROW_STROKE,
		};
		surface.rect(x, y, w, h, ROW_FILL, Some((stroke, 2.0)));
		surface.text(&client.name, x + 6.0, y + 14.0, 11.0, "white");
		surface.text(
			&format!("{} | ${:.0}k", client.needs, client.revenue / 1000.0),
			x + 6.0,
			y + 28.0,
			9.0,
			TEXT_DIM,
		);
		if client.score > 0 {
			surface.text(
				&client.score.to_string(),
				x + w - 24.0,
				y + 22.0,
				12.0,
				&score_color(client.score),
			);
		}
	}
}

fn draw_salespeople<S: Surface>(state: &MatchingState, surface: &mut S) {
	let highlight = state.highlighted_pair();
	for (i, person) in state.salespeople.iter().enumerate() {
		let (x, y, w, h) = salesperson_rect(i);
		let stroke = match highlight {
			Some((_, sid, true)) if sid == person.id => MATCHED_STROKE,
			Some((_, sid, false)) if sid == person.id => ACTIVE_STROKE,
			_ if !person.available => UNAVAILABLE_STROKE,
			_ => ROW_STROKE,
		};
		surface.rect(x, y, w, h, ROW_FILL, Some((stroke, 2.0)));
		surface.text(person.name, x + 6.0, y + 14.0, 11.0, "white");
		surface.text(
			&format!(
				"{} | {}/{} | {:.0}%",
				person.skills.join(", "),
				person.current_clients,
				person.capacity,
				person.efficiency * 100.0
			),
			x + 6.0,
			y + 26.0,
			9.0,
			TEXT_DIM,
		);
		draw_capacity_bar(person, x + 6.0, y + h - 7.0, w - 12.0, surface);
	}
}

fn draw_capacity_bar<S: Surface>(person: &Salesperson, x: f64, y: f64, w: f64, surface: &mut S) {
	surface.rect(x, y, w, 3.0, CAPACITY_TRACK, None);
	let fill = w * person.current_clients as f64 / person.capacity as f64;
	if fill > 0.0 {
		surface.rect(x, y, fill, 3.0, CAPACITY_FILL, None);
	}
}

fn draw_sidebar<S: Surface>(state: &MatchingState, surface: &mut S) {
	let metrics = [
		(state.total_score().to_string(), "Total Score"),
		(state.matches_made().to_string(), "Matches"),
		(state.steps.to_string(), "Steps"),
		(format!("{}%", state.efficiency_pct()), "Efficiency"),
	];
	let step = WIDTH / metrics.len() as f64;
	for (i, (value, label)) in metrics.iter().enumerate() {
		let x = step * i as f64 + step / 2.0 - 30.0;
		surface.text(value, x, HEIGHT - 36.0, 14.0, ACTIVE_STROKE);
		surface.text(label, x, HEIGHT - 22.0, 9.0, TEXT_DIM);
	}
	surface.text(&state.status, 20.0, HEIGHT - 6.0, 11.0, ACTIVE_STROKE);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::matching::types::{Candidate, Connection};
	use crate::viz::VizRng;
	use crate::viz::surface::testing::{Op, RecordingSurface};

	#[test]
	fn score_gradient_endpoints() {
		assert_eq!(score_color(70), "rgba(0, 255, 0, 0.8)");
		assert_eq!(score_color(100), "rgba(0, 255, 0, 0.8)");
		assert_eq!(score_color(50), "rgba(204, 255, 0, 0.8)");
		assert_eq!(score_color(45), "rgba(255, 255, 0, 0.8)");
	}

	#[test]
	fn matched_connection_spans_row_anchors() {
		let mut state = MatchingState::new(VizRng::seeded(2));
		state.matches.push(Candidate {
			client_id: 1,
			salesperson_id: 3,
			score: 80,
		});
		state.connections.push(Connection {
			client_id: 1,
			salesperson_id: 3,
			score: 80,
			kind: ConnectionKind::Matched,
		});
		let mut surface = RecordingSurface::new();
		// identity view keeps logical coordinates observable
		render(&state, WIDTH, HEIGHT, &mut surface);
		let a = client_anchor(0);
		let b = salesperson_anchor(2);
		let found = surface.ops.iter().any(|op| {
			matches!(op, Op::Line { x1, y1, x2, y2, dashed: false }
				if *x1 == a.x && *y1 == a.y && *x2 == b.x && *y2 == b.y)
		});
		assert!(found, "matched line missing or misplaced");
	}

	#[test]
	fn evaluating_connections_draw_dashed() {
		let mut state = MatchingState::new(VizRng::seeded(2));
		state.connections.push(Connection {
			client_id: 2,
			salesperson_id: 1,
			score: 64,
			kind: ConnectionKind::Evaluating,
		});
		let mut surface = RecordingSurface::new();
		render(&state, WIDTH, HEIGHT, &mut surface);
		assert!(
			surface
				.ops
				.iter()
				.any(|op| matches!(op, Op::Line { dashed: true, .. }))
		);
	}

	#[test]
	fn idle_scene_lists_full_roster_and_metrics() {
		let state = MatchingState::new(VizRng::seeded(2));
		let mut surface = RecordingSurface::new();
		render(&state, WIDTH, HEIGHT, &mut surface);
		let texts = surface.texts();
		assert!(texts.contains(&"Acme Corp"));
		assert!(texts.contains(&"Sarah Chen"));
		assert!(texts.contains(&"Total Score"));
		assert!(texts.contains(&"Ready to optimize"));
		assert_eq!(surface.line_count(), 0);
	}
}
