use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::data::{CITIES, CONNECTIONS, ROUTES, SOURCE_CITIES};
use super::types::{City, CityId, ViewMode};
use crate::viz::geo::fit_transform;
use crate::viz::{
	Bounds, EdgeSet, FitAnim, LatLng, Marker, Point, ViewTransform, VizRng, decompose,
	tick_markers,
};

/// Map view center (roughly mid-Chile) and projection scale in world units
/// per degree.
pub const MAP_CENTER: LatLng = LatLng::new(-35.6751, -71.5430);
pub const MAP_SCALE: f64 = 16.0;

const MIN_ALPHA: f64 = 0.02;
const ALPHA_DECAY: f64 = 0.6;
const SPAWN_INTERVAL: f64 = 15.0;
const TRAFFIC_INTERVAL: f64 = 10.0;
const FIT_DURATION: f64 = 1.0;
const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 4.0;
const HIT_SLOP: f64 = 4.0;

/// Per-node payload for the force simulation.
#[derive(Clone, Debug)]
pub struct CityInfo {
	pub id: CityId,
	pub name: &'static str,
	pub radius: f64,
	pub is_source: bool,
}

/// Cosmetic dash decoration for one map connection, reshuffled on the
/// traffic clock.
#[derive(Clone, Copy, Debug)]
pub struct DashStyle {
	pub dash: f64,
	pub gap: f64,
	pub speed: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Node radius in the force-graph view: source cities get a fixed prominent
/// size, the rest scale with the square root of their population.
pub fn graph_node_radius(population: u32, is_source: bool) -> f64 {
	if is_source {
		20.0
	} else {
		((population as f64).sqrt() / 200.0).max(8.0)
	}
}

/// City disc radius in the map view.
pub fn map_city_radius(population: u32) -> f64 {
	((population as f64).sqrt() / 400.0).clamp(4.0, 12.0)
}

pub struct NetworkState {
	pub mode: ViewMode,
	/// Cleared when the hosting modal closes; `tick` pauses without tearing
	/// anything down so reopening resumes in place.
	pub active: bool,
	pub width: f64,
	pub height: f64,
	edges: EdgeSet<CityId>,

	// Map presentation
	pub map_view: ViewTransform,
	path_lookup: HashMap<(CityId, CityId), (Point, Point)>,
	pub dash_styles: HashMap<(CityId, CityId), DashStyle>,

	// Force-graph presentation
	pub graph: ForceGraph<CityInfo, ()>,
	idx_by_id: HashMap<CityId, DefaultNodeIdx>,
	pub graph_view: ViewTransform,
	alpha: f64,
	fit_delay: Option<f64>,
	fit: Option<FitAnim>,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<CityId>,
	// Highlight set persists past hover-out so the fade can finish.
	highlight: Option<CityId>,
	neighbors: HashSet<CityId>,
	pub highlight_t: f64,

	// Traffic animation
	pub circles: Vec<Marker<CityId>>,
	pub packets: Vec<Marker<CityId>>,
	pub flow_time: f64,
	spawn_clock: f64,
	traffic_clock: f64,
	rng: VizRng,
}

impl NetworkState {
	pub fn new(width: f64, height: f64, rng: VizRng) -> Self {
		let mut edges = EdgeSet::new();
		for conn in CONNECTIONS {
			edges.insert(conn.from, conn.to);
		}

		let mut path_lookup = HashMap::new();
		for (from, to) in edges.iter() {
			if let (Some(a), Some(b)) = (city_world(from), city_world(to)) {
				path_lookup.insert(EdgeSet::canonical(from, to), (a, b));
			}
		}

		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut idx_by_id = HashMap::new();
		for (i, city) in CITIES.iter().enumerate() {
			let is_source = SOURCE_CITIES.contains(&city.id);
			let angle = (i as f64) * 2.0 * PI / CITIES.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (width / 2.0 + 150.0 * angle.cos()) as f32,
				y: (height / 2.0 + 150.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: CityInfo {
					id: city.id,
					name: city.name,
					radius: graph_node_radius(city.population, is_source),
					is_source,
				},
			});
			idx_by_id.insert(city.id, idx);
		}
		for (from, to) in edges.iter() {
			if let (Some(&a), Some(&b)) = (idx_by_id.get(from), idx_by_id.get(to)) {
				graph.add_edge(a, b, EdgeData::default());
			}
		}

		let mut state = Self {
			mode: ViewMode::Map,
			active: true,
			width,
			height,
			edges,
			map_view: map_fit_view(width, height),
			path_lookup,
			dash_styles: HashMap::new(),
			graph,
			idx_by_id,
			// Nodes are seeded in canvas coordinates, so the graph view starts
			// at identity; the delayed fit animation takes over from there.
			graph_view: ViewTransform::default(),
			alpha: 1.0,
			fit_delay: Some(3.0),
			fit: None,
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			highlight: None,
			neighbors: HashSet::new(),
			highlight_t: 0.0,
			circles: Vec::new(),
			packets: Vec::new(),
			flow_time: 0.0,
			spawn_clock: 0.0,
			traffic_clock: 0.0,
			rng,
		};
		state.randomize_traffic();
		state.spawn_markers();
		state
	}

	pub fn edges(&self) -> &EdgeSet<CityId> {
		&self.edges
	}

	/// World-space endpoints of the rendered path for an endpoint pair; both
	/// orderings resolve to the same handle.
	pub fn path_handle(&self, a: CityId, b: CityId) -> Option<&(Point, Point)> {
		self.path_lookup.get(&EdgeSet::canonical(&a, &b))
	}

	pub fn node_position(&self, id: CityId) -> Option<Point> {
		let target = *self.idx_by_id.get(&id)?;
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == target {
				found = Some(Point::new(node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	fn graph_positions(&self) -> HashMap<CityId, Point> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(
				node.data.user_data.id,
				Point::new(node.x() as f64, node.y() as f64),
			);
		});
		positions
	}

	/// Switch presentation mode without discarding entity data. The inactive
	/// mode's simulation is frozen; markers respawn for the new mode.
	pub fn switch_mode(&mut self, mode: ViewMode) {
		if mode == self.mode {
			return;
		}
		debug!("network: switching view to {:?}", mode);
		self.mode = mode;
		self.hovered = None;
		self.highlight = None;
		self.neighbors.clear();
		self.highlight_t = 0.0;
		self.drag = DragState::default();
		self.pan = PanState::default();
		match mode {
			ViewMode::Map => {
				self.alpha = 0.0;
				self.fit = None;
				self.fit_delay = None;
			}
			ViewMode::Graph => {
				self.alpha = self.alpha.max(0.5);
				self.fit_delay = Some(FIT_DURATION);
			}
		}
		self.spawn_clock = 0.0;
		self.spawn_markers();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.map_view = map_fit_view(width, height);
		// Let the simulation resettle, then fit the graph back into view.
		self.alpha = self.alpha.max(0.3);
		self.fit_delay = Some(FIT_DURATION);
	}

	/// Regenerate the marker batches for the active mode.
	pub fn spawn_markers(&mut self) {
		self.circles.clear();
		self.packets.clear();
		let (circle_lo, circle_hi, packet_lo, packet_hi, circle_r, packet_r) = match self.mode {
			ViewMode::Map => (1, 3, 3, 7, 8.0, 4.0),
			ViewMode::Graph => (1, 2, 2, 4, 6.0, 3.0),
		};
		let speed_scale = match self.mode {
			ViewMode::Map => 1.0,
			ViewMode::Graph => 0.6,
		};
		for source in SOURCE_CITIES {
			for route in ROUTES.iter().filter(|r| r.stops.first() == Some(source)) {
				let segments = decompose(route.stops, &self.edges);
				if segments.is_empty() {
					continue;
				}
				for _ in 0..self.rng.range_usize(circle_lo, circle_hi) {
					let speed = self.rng.range_f64(0.01, 0.015) * speed_scale;
					let start = self.rng.range_f64(0.0, 0.2);
					self.circles
						.push(Marker::new(segments.clone(), speed, circle_r, start));
				}
				for _ in 0..self.rng.range_usize(packet_lo, packet_hi) {
					let speed = self.rng.range_f64(0.01, 0.03) * speed_scale;
					let start = self.rng.range_f64(0.0, 0.2);
					self.packets
						.push(Marker::new(segments.clone(), speed, packet_r, start));
				}
			}
		}
	}

	fn randomize_traffic(&mut self) {
		self.dash_styles.clear();
		let mut styles = Vec::new();
		for (from, to) in self.edges.iter() {
			let dash = self.rng.range_f64(10.0, 60.0);
			let speed = self.rng.range_f64(5.0, 20.0);
			let speed = if self.rng.chance(0.5) { speed } else { -speed };
			styles.push((
				EdgeSet::canonical(from, to),
				DashStyle {
					dash,
					gap: dash / 2.0,
					speed,
				},
			));
		}
		self.dash_styles.extend(styles);
	}

	/// Per-frame update: simulation, fit animation, periodic spawn/traffic
	/// clocks and marker advancement. Pauses (without losing state) while the
	/// widget is inactive.
	pub fn tick(&mut self, dt: f64) {
		if !self.active {
			return;
		}
		self.flow_time += dt;

		let (target, speed) = if self.hovered.is_some() {
			(1.0, 1.8)
		} else {
			(0.0, 1.26)
		};
		self.highlight_t += (target - self.highlight_t) * speed * dt;
		if self.hovered.is_none() && self.highlight_t < 0.01 {
			self.highlight_t = 0.0;
			self.highlight = None;
			self.neighbors.clear();
		}

		self.spawn_clock += dt;
		if self.spawn_clock >= SPAWN_INTERVAL {
			self.spawn_clock = 0.0;
			self.spawn_markers();
		}

		match self.mode {
			ViewMode::Map => {
				self.traffic_clock += dt;
				if self.traffic_clock >= TRAFFIC_INTERVAL {
					self.traffic_clock = 0.0;
					self.randomize_traffic();
				}
				let lookup = &self.path_lookup;
				let resolve = |a: &CityId, b: &CityId| {
					lookup.get(&EdgeSet::canonical(a, b)).copied()
				};
				tick_markers(&mut self.circles, resolve);
				tick_markers(&mut self.packets, resolve);
			}
			ViewMode::Graph => {
				if self.alpha > MIN_ALPHA {
					self.graph.update(dt as f32);
					self.alpha -= self.alpha * ALPHA_DECAY * dt;
				}
				if let Some(delay) = &mut self.fit_delay {
					*delay -= dt;
					if *delay <= 0.0 {
						self.fit_delay = None;
						self.start_fit();
					}
				}
				if let Some(anim) = &mut self.fit {
					match anim.tick(dt) {
						Some(view) => self.graph_view = view,
						None => {
							self.graph_view = anim.target();
							self.fit = None;
						}
					}
				}
				let positions = self.graph_positions();
				let resolve = |a: &CityId, b: &CityId| {
					Some((*positions.get(a)?, *positions.get(b)?))
				};
				tick_markers(&mut self.circles, resolve);
				tick_markers(&mut self.packets, resolve);
			}
		}
	}

	fn start_fit(&mut self) {
		let positions = self.graph_positions();
		let Some(bounds) = Bounds::from_points(positions.values().copied()) else {
			return;
		};
		let target = fit_transform(bounds.padded(50.0), self.width, self.height, 2.0);
		self.fit = Some(FitAnim::new(self.graph_view, target, FIT_DURATION));
	}

	fn view(&self) -> &ViewTransform {
		match self.mode {
			ViewMode::Map => &self.map_view,
			ViewMode::Graph => &self.graph_view,
		}
	}

	fn view_mut(&mut self) -> &mut ViewTransform {
		match self.mode {
			ViewMode::Map => &mut self.map_view,
			ViewMode::Graph => &mut self.graph_view,
		}
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let w = self.graph_view.to_world(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let p = Point::new(node.x() as f64, node.y() as f64);
			if p.dist(w) < node.data.user_data.radius + HIT_SLOP {
				found = Some(node.index());
			}
		});
		found
	}

	fn city_at_map_position(&self, sx: f64, sy: f64) -> Option<&'static City> {
		let w = self.map_view.to_world(sx, sy);
		CITIES.iter().find(|city| {
			city_world(&city.id)
				.is_some_and(|p| p.dist(w) < map_city_radius(city.population) + HIT_SLOP)
		})
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if self.mode == ViewMode::Graph {
			if let Some(idx) = self.node_at_position(sx, sy) {
				self.drag.active = true;
				self.drag.node_idx = Some(idx);
				self.drag.start_x = sx;
				self.drag.start_y = sy;
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						self.drag.node_start_x = node.data.x;
						self.drag.node_start_y = node.data.y;
						// Pin the node and stir the simulation so neighbors react.
						node.data.is_anchor = true;
					}
				});
				self.alpha = self.alpha.max(0.5);
				return;
			}
		}
		let (vx, vy) = {
			let view = self.view();
			(view.x, view.y)
		};
		self.pan.active = true;
		self.pan.start_x = sx;
		self.pan.start_y = sy;
		self.pan.transform_start_x = vx;
		self.pan.transform_start_y = vy;
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let k = self.graph_view.k;
				let nx = self.drag.node_start_x + ((sx - self.drag.start_x) / k) as f32;
				let ny = self.drag.node_start_y + ((sy - self.drag.start_y) / k) as f32;
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
				self.alpha = self.alpha.max(0.3);
			}
			return;
		}
		if self.pan.active {
			let (dx, dy) = (sx - self.pan.start_x, sy - self.pan.start_y);
			let (tx, ty) = (
				self.pan.transform_start_x + dx,
				self.pan.transform_start_y + dy,
			);
			let view = self.view_mut();
			view.x = tx;
			view.y = ty;
			return;
		}
		let hit = match self.mode {
			ViewMode::Map => self.city_at_map_position(sx, sy).map(|c| c.id),
			ViewMode::Graph => self.node_at_position(sx, sy).and_then(|idx| {
				let mut id = None;
				self.graph.visit_nodes(|node| {
					if node.index() == idx {
						id = Some(node.data.user_data.id);
					}
				});
				id
			}),
		};
		self.set_hover(hit);
	}

	/// Update the hovered city and, with it, the neighbor highlight set. On
	/// hover-out only `hovered` clears; the set stays while the fade runs.
	fn set_hover(&mut self, id: Option<CityId>) {
		if id == self.hovered {
			return;
		}
		self.hovered = id;
		if let Some(id) = id {
			self.highlight = Some(id);
			self.neighbors = self
				.edges
				.iter()
				.filter_map(|(a, b)| {
					if *a == id {
						Some(*b)
					} else if *b == id {
						Some(*a)
					} else {
						None
					}
				})
				.collect();
		}
	}

	pub fn is_hover_target(&self, id: CityId) -> bool {
		self.highlight == Some(id)
	}

	pub fn is_highlighted(&self, id: CityId) -> bool {
		self.highlight == Some(id) || self.neighbors.contains(&id)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.highlight.is_some() && self.highlight_t > 0.0
	}

	pub fn pointer_up(&mut self) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				// Release the pin; energy decays back to rest on its own.
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.is_anchor = false;
					}
				});
			}
		}
		self.drag = DragState::default();
		self.pan.active = false;
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
		self.set_hover(None);
	}

	pub fn zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.view_mut()
			.zoom_about(sx, sy, factor, MIN_ZOOM, MAX_ZOOM);
	}

	/// Name and population of the hovered city, for the info panel.
	pub fn hover_info(&self) -> Option<(&'static str, &'static str)> {
		let id = self.hovered?;
		CITIES
			.iter()
			.find(|c| c.id == id)
			.map(|c| (c.name, c.population_label))
	}
}

pub fn city_world(id: &CityId) -> Option<Point> {
	CITIES
		.iter()
		.find(|c| c.id == *id)
		.map(|c| c.location.project(MAP_CENTER, MAP_SCALE))
}

fn map_fit_view(width: f64, height: f64) -> ViewTransform {
	match Bounds::from_points(
		CITIES
			.iter()
			.map(|c| c.location.project(MAP_CENTER, MAP_SCALE)),
	) {
		Some(bounds) => fit_transform(bounds.padded(40.0), width, height, 4.0),
		None => ViewTransform::centered(width, height),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::viz::rejoin;

	fn state() -> NetworkState {
		NetworkState::new(800.0, 600.0, VizRng::seeded(42))
	}

	#[test]
	fn path_handles_cover_every_connection() {
		let s = state();
		assert_eq!(s.path_lookup.len(), CONNECTIONS.len());
	}

	#[test]
	fn endpoint_orderings_share_one_handle() {
		let s = state();
		let fwd = s.path_handle("santiago", "valparaiso").unwrap();
		let rev = s.path_handle("valparaiso", "santiago").unwrap();
		assert!(std::ptr::eq(fwd, rev));
	}

	#[test]
	fn routes_round_trip_through_segments() {
		let s = state();
		for route in ROUTES {
			let segments = decompose(route.stops, &s.edges);
			let rejoined = rejoin(&segments);
			if route.name == "Santiago-South" {
				// The valdivia -> puertomontt hop has no direct connection;
				// it is dropped, the rest of the route survives.
				assert_eq!(rejoined, route.stops[..route.stops.len() - 1].to_vec());
			} else {
				assert_eq!(rejoined, route.stops.to_vec());
			}
		}
	}

	#[test]
	fn marker_batches_respect_spawn_bounds() {
		let s = state();
		// 9 routes: per route 1-3 circles and 3-7 packets in map mode.
		assert!((9..=27).contains(&s.circles.len()));
		assert!((27..=63).contains(&s.packets.len()));
		for m in s.circles.iter().chain(&s.packets) {
			assert!((0.0..0.2).contains(&m.progress));
			assert!((0.01..0.015).contains(&m.speed) || (0.01..0.03).contains(&m.speed));
		}
	}

	#[test]
	fn tick_advances_markers_and_respects_pause() {
		let mut s = state();
		let before: Vec<f64> = s.circles.iter().map(|m| m.progress).collect();
		s.tick(0.016);
		let after: Vec<f64> = s.circles.iter().map(|m| m.progress).collect();
		assert_ne!(before, after);

		s.active = false;
		let frozen: Vec<f64> = s.circles.iter().map(|m| m.progress).collect();
		s.tick(0.016);
		let still: Vec<f64> = s.circles.iter().map(|m| m.progress).collect();
		assert_eq!(frozen, still);
	}

	#[test]
	fn marker_progress_bounded_over_long_run() {
		let mut s = state();
		for _ in 0..2000 {
			s.tick(0.016);
			for m in s.circles.iter().chain(&s.packets) {
				if !m.complete {
					assert!((0.0..1.0).contains(&m.progress));
				} else {
					assert_eq!(m.radius, 0.0);
				}
			}
		}
	}

	#[test]
	fn switch_mode_is_noop_on_current_mode() {
		let mut s = state();
		let circles = s.circles.len();
		s.switch_mode(ViewMode::Map);
		assert_eq!(s.circles.len(), circles);
		s.switch_mode(ViewMode::Graph);
		assert_eq!(s.mode, ViewMode::Graph);
		// Graph-mode batches use graph-mode bounds (1-2 circles per route).
		assert!((9..=18).contains(&s.circles.len()));
	}

	#[test]
	fn drag_without_movement_keeps_node_position() {
		let mut s = state();
		s.switch_mode(ViewMode::Graph);
		let before = s.node_position("santiago").unwrap();
		let screen = s.graph_view.to_screen(before);
		s.pointer_down(screen.x, screen.y);
		assert!(s.drag.active, "pointer_down over the node starts a drag");
		s.pointer_up();
		let after = s.node_position("santiago").unwrap();
		assert!(before.dist(after) < 1e-6);
		assert!(!s.drag.active);
	}

	#[test]
	fn background_drag_pans_the_view() {
		let mut s = state();
		let before = s.map_view;
		s.pointer_down(700.0, 60.0);
		assert!(s.pan.active, "map pointer_down always starts a pan");
		s.pointer_move(710.0, 85.0);
		assert!((s.map_view.x - (before.x + 10.0)).abs() < 1e-9);
		assert!((s.map_view.y - (before.y + 25.0)).abs() < 1e-9);
		s.pointer_up();
		assert!(!s.pan.active);
	}

	#[test]
	fn hover_highlights_neighbors_and_fades_out() {
		let mut s = state();
		s.switch_mode(ViewMode::Graph);
		let p = s.node_position("santiago").unwrap();
		let screen = s.graph_view.to_screen(p);
		s.pointer_move(screen.x, screen.y);
		assert_eq!(s.hovered, Some("santiago"));
		assert!(s.is_hover_target("santiago"));
		for neighbor in [
			"laserena",
			"ovalle",
			"valparaiso",
			"rancagua",
			"sanfernando",
			"sanantonio",
		] {
			assert!(s.is_highlighted(neighbor), "{neighbor} borders santiago");
		}
		assert!(!s.is_highlighted("arica"));

		s.tick(0.016);
		assert!(s.highlight_t > 0.0);
		assert!(s.has_active_highlight());

		// Hover-out keeps the set alive while the fade runs down.
		s.pointer_leave();
		assert_eq!(s.hovered, None);
		assert!(s.has_active_highlight());
		for _ in 0..500 {
			s.tick(0.016);
		}
		assert_eq!(s.highlight_t, 0.0);
		assert!(!s.has_active_highlight());
		assert!(!s.is_highlighted("santiago"));
	}

	#[test]
	fn hover_reports_city_details() {
		let mut s = state();
		let p = city_world(&"santiago").unwrap();
		let screen = s.map_view.to_screen(p);
		s.pointer_move(screen.x, screen.y);
		assert_eq!(s.hover_info(), Some(("Santiago", "7.1 million")));
		s.pointer_leave();
		assert_eq!(s.hover_info(), None);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut s = state();
		for _ in 0..200 {
			s.zoom(400.0, 300.0, -1.0);
		}
		assert!(s.map_view.k <= MAX_ZOOM + 1e-9);
		for _ in 0..400 {
			s.zoom(400.0, 300.0, 1.0);
		}
		assert!(s.map_view.k >= MIN_ZOOM - 1e-9);
	}
}
