//! Canvas drawing passes for both network presentation modes. All drawing
//! goes through the `Surface` capability so the passes stay testable.

use super::data::CITIES;
use super::state::{NetworkState, city_world, map_city_radius};
use super::types::ViewMode;
use crate::viz::geo::ease_out_cubic;
use crate::viz::{EdgeSet, Marker, Surface};

const BACKGROUND: &str = "#1a1a2e";
const MAP_LINE_COLOR: &str = "rgba(100, 255, 218, 0.5)";
const NODE_COLOR: &str = "#64ffda";
const CIRCLE_COLOR: &str = "rgba(100, 255, 218, 0.9)";
const PACKET_COLOR: &str = "#ff9500";

const NODE_RGB: (u8, u8, u8) = (100, 255, 218);
const SOURCE_RGB: (u8, u8, u8) = (255, 149, 0);
const EDGE_RGB: (u8, u8, u8) = (100, 180, 255);
const WHITE: (u8, u8, u8) = (255, 255, 255);

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
	format!("rgba({r}, {g}, {b}, {alpha:.3})")
}

pub fn render<S: Surface>(state: &NetworkState, surface: &mut S) {
	surface.clear(state.width, state.height, BACKGROUND);
	match state.mode {
		ViewMode::Map => render_map(state, surface),
		ViewMode::Graph => render_graph(state, surface),
	}
}

fn render_map<S: Surface>(state: &NetworkState, surface: &mut S) {
	surface.push_view(&state.map_view);
	let k = state.map_view.k;

	for &(from, to) in state.edges().iter() {
		let Some(&(a, b)) = state.path_handle(from, to) else {
			continue;
		};
		let style = state.dash_styles.get(&EdgeSet::canonical(&from, &to));
		let (dash, offset) = match style {
			Some(s) => (
				Some((s.dash / k, s.gap / k)),
				-(state.flow_time * s.speed) % ((s.dash + s.gap) / k),
			),
			None => (None, 0.0),
		};
		surface.line(a.x, a.y, b.x, b.y, MAP_LINE_COLOR, 1.5 / k, dash, offset);
	}

	for city in CITIES {
		let Some(p) = city_world(&city.id) else {
			continue;
		};
		let r = map_city_radius(city.population);
		surface.circle(p.x, p.y, r, NODE_COLOR);
		if state.hovered == Some(city.id) {
			surface.ring(p.x, p.y, r + 2.0 / k, "rgba(255, 255, 255, 0.8)", 1.5 / k);
		}
		surface.text(
			city.name,
			p.x + r + 3.0 / k,
			p.y + 3.0 / k,
			10.0 / k.max(0.5),
			"rgba(255, 255, 255, 0.75)",
		);
	}

	draw_markers(state, surface, k);
	surface.pop_view();
}

fn render_graph<S: Surface>(state: &NetworkState, surface: &mut S) {
	surface.push_view(&state.graph_view);
	let k = state.graph_view.k;
	// Eased hover fade; 0 when no highlight set is live, so the plain pass
	// below is exactly the unhovered rendering.
	let t = if state.has_active_highlight() {
		ease_out_cubic(state.highlight_t)
	} else {
		0.0
	};
	let (dash, gap) = (8.0 / k, 4.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);

	state.graph.visit_edges(|n1, n2, _| {
		let lit = state.is_highlighted(n1.data.user_data.id)
			&& state.is_highlighted(n2.data.user_data.id);
		let alpha = if lit { 0.6 } else { 0.6 * (1.0 - 0.7 * t) };
		surface.line(
			n1.x() as f64,
			n1.y() as f64,
			n2.x() as f64,
			n2.y() as f64,
			&rgba(EDGE_RGB, alpha),
			1.5 / k,
			Some((dash, gap)),
			dash_offset,
		);
	});

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let rgb = if info.is_source { SOURCE_RGB } else { NODE_RGB };
		if state.is_highlighted(info.id) {
			let target = state.is_hover_target(info.id);
			let (grow, glow, glow_alpha) = if target {
				(1.0 + 0.35 * t, 1.8 + 1.2 * t, 0.35 * t)
			} else {
				(1.0 + 0.2 * t, 1.4 + 0.6 * t, 0.2 * t)
			};
			let r = info.radius * grow;
			if t > 0.01 {
				surface.circle(x, y, info.radius * glow, &rgba(WHITE, glow_alpha));
			}
			surface.circle(x, y, r, &rgba(rgb, 1.0));
			if target {
				surface.ring(x, y, r + 2.0 / k, &rgba(WHITE, 0.7 * t), 1.5 / k);
			}
			surface.text(info.name, x, y - r - 6.0 / k, 10.0 / k.max(0.5), "white");
		} else {
			let alpha = 1.0 - 0.7 * t;
			surface.circle(x, y, info.radius, &rgba(rgb, alpha));
			surface.text(
				info.name,
				x,
				y - info.radius - 6.0 / k,
				10.0 / k.max(0.5),
				&rgba(WHITE, 0.8 * alpha),
			);
		}
	});

	draw_markers(state, surface, k);
	surface.pop_view();
}

fn draw_markers<S: Surface>(state: &NetworkState, surface: &mut S, k: f64) {
	draw_marker_batch(&state.circles, surface, k, CIRCLE_COLOR);
	draw_marker_batch(&state.packets, surface, k, PACKET_COLOR);
}

fn draw_marker_batch<S: Surface>(markers: &[Marker<&'static str>], surface: &mut S, k: f64, color: &str) {
	for m in markers {
		if m.complete {
			continue;
		}
		surface.circle(m.pos.x, m.pos.y, m.radius / k, color);
	}
}
