use log::debug;

use super::data::{
	CENTER_POSITIONS, CLUSTER_COLORS, CLUSTER_NAMES, CLUSTER_SIZES, GROUP_RECTS, HEIGHT,
	NEGATIVE_COLOR, NUM_CLUSTERS, NUM_POINTS, POSITIVE_COLOR, STAGE_MESSAGES, UNCLUSTERED_COLOR,
	WIDTH,
};
use crate::viz::{Point, SeqEvent, Sequencer, VizRng};

/// Settle time per stage, seconds (load, cluster, sentiment, color, organize).
const SETTLES: [f64; 5] = [2.0, 3.0, 3.5, 2.0, 3.0];

#[derive(Clone, Debug)]
pub struct NlpPoint {
	pub cluster: usize,
	pub pos: Point,
	pub color: &'static str,
	/// Pulse factor; decays back toward 1.0 each tick.
	pub scale: f64,
}

#[derive(Clone, Debug)]
pub struct ClusterLabel {
	pub name: &'static str,
	pub count: usize,
	pub pos: Point,
	pub color: &'static str,
}

pub struct NlpState {
	pub active: bool,
	pub points: Vec<NlpPoint>,
	pub centers_visible: bool,
	pub lines_visible: bool,
	pub labels: Vec<ClusterLabel>,
	pub metrics_visible: bool,
	pub indicator: usize,
	seq: Sequencer,
	rng: VizRng,
}

impl NlpState {
	pub fn new(rng: VizRng) -> Self {
		let mut state = Self {
			active: true,
			points: Vec::with_capacity(NUM_POINTS),
			centers_visible: false,
			lines_visible: false,
			labels: Vec::new(),
			metrics_visible: false,
			indicator: 0,
			seq: Sequencer::new(SETTLES.to_vec()),
			rng,
		};
		state.create_points();
		state
	}

	/// Scatter the unclustered point cloud; clears every transient visual.
	fn create_points(&mut self) {
		self.points.clear();
		self.labels.clear();
		self.centers_visible = false;
		self.lines_visible = false;
		for (cluster, &size) in CLUSTER_SIZES.iter().enumerate() {
			for _ in 0..size {
				let pos = Point::new(
					self.rng.range_f64(0.0, WIDTH),
					self.rng.range_f64(0.0, HEIGHT - 10.0),
				);
				self.points.push(NlpPoint {
					cluster,
					pos,
					color: UNCLUSTERED_COLOR,
					scale: 1.0,
				});
			}
		}
	}

	pub fn stage(&self) -> usize {
		self.seq.stage()
	}

	pub fn is_animating(&self) -> bool {
		self.seq.is_advancing()
	}

	pub fn indicator_text(&self) -> &'static str {
		STAGE_MESSAGES[self.indicator.min(STAGE_MESSAGES.len() - 1)]
	}

	/// The sentiment banner shows only while the sentiment stage settles.
	pub fn banner_visible(&self) -> bool {
		self.seq.stage() == 3 && self.seq.is_advancing()
	}

	/// Run every stage unattended; dropped if an advance is in flight.
	pub fn start_analysis(&mut self) {
		if self.seq.is_advancing() {
			debug!("nlp: run requested while animating, dropped");
			return;
		}
		self.reset();
		if let Some(stage) = self.seq.run_all() {
			self.apply_stage(stage);
		}
	}

	/// Advance a single stage; dropped while a stage settles.
	pub fn next_step(&mut self) {
		if self.seq.is_advancing() {
			return;
		}
		if self.seq.stage() == 0 {
			self.reset();
		}
		if let Some(stage) = self.seq.advance_one() {
			self.apply_stage(stage);
		}
	}

	/// Back to the idle scatter. Always succeeds, cancelling any run.
	pub fn reset(&mut self) {
		self.seq.reset();
		self.indicator = 0;
		self.metrics_visible = false;
		self.create_points();
	}

	pub fn tick(&mut self, dt: f64) {
		if !self.active {
			return;
		}
		for p in &mut self.points {
			p.scale += (1.0 - p.scale) * (dt * 3.0).min(1.0);
		}
		match self.seq.tick(dt) {
			Some(SeqEvent::Entered(stage)) => self.apply_stage(stage),
			Some(SeqEvent::Finished) => {
				self.indicator = 6;
				self.metrics_visible = true;
			}
			None => {}
		}
	}

	fn apply_stage(&mut self, stage: usize) {
		self.indicator = stage;
		match stage {
			1 => {} // dataset load: status change only
			2 => self.apply_clustering(),
			3 => self.apply_sentiment(),
			4 => self.color_by_cluster(),
			5 => self.organize_themes(),
			_ => {}
		}
	}

	fn apply_clustering(&mut self) {
		self.centers_visible = true;
		self.lines_visible = true;
		for p in &mut self.points {
			let (cx, cy) = CENTER_POSITIONS[p.cluster];
			let angle = self.rng.range_f64(0.0, std::f64::consts::TAU);
			let radius = self.rng.range_f64(20.0, 80.0);
			p.pos = Point::new(
				(cx + angle.cos() * radius).clamp(10.0, WIDTH),
				(cy + angle.sin() * radius).clamp(10.0, HEIGHT - 10.0),
			);
		}
	}

	fn apply_sentiment(&mut self) {
		for p in &mut self.points {
			// 70% of conversations read as positive
			p.color = if self.rng.chance(0.7) {
				POSITIVE_COLOR
			} else {
				NEGATIVE_COLOR
			};
			p.scale = 1.3;
		}
	}

	fn color_by_cluster(&mut self) {
		for p in &mut self.points {
			p.color = CLUSTER_COLORS[p.cluster];
			p.scale = 1.2;
		}
	}

	fn organize_themes(&mut self) {
		self.lines_visible = false;
		self.centers_visible = false;
		let mut placed = [0usize; NUM_CLUSTERS];
		for p in &mut self.points {
			let (gx, gy, gw, gh) = GROUP_RECTS[p.cluster];
			let n = CLUSTER_SIZES[p.cluster];
			let cols = (n as f64).sqrt().ceil() as usize;
			let rows = n.div_ceil(cols);
			let idx = placed[p.cluster];
			placed[p.cluster] += 1;
			let (row, col) = (idx / cols, idx % cols);
			p.pos = Point::new(
				gx + col as f64 * (gw / cols as f64) + gw / cols as f64 / 2.0,
				gy + row as f64 * (gh / rows as f64) + gh / rows as f64 / 2.0,
			);
		}
		self.labels = GROUP_RECTS
			.iter()
			.enumerate()
			.map(|(i, &(gx, gy, gw, gh))| ClusterLabel {
				name: CLUSTER_NAMES[i],
				count: CLUSTER_SIZES[i],
				pos: Point::new(gx + gw / 2.0, gy + gh + 14.0),
				color: CLUSTER_COLORS[i],
			})
			.collect();
	}

	/// Count of visible connection lines (one per point while clustering
	/// lines are shown).
	pub fn connection_line_count(&self) -> usize {
		if self.lines_visible {
			self.points.len()
		} else {
			0
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> NlpState {
		NlpState::new(VizRng::seeded(9))
	}

	fn run_to_completion(s: &mut NlpState) -> Vec<usize> {
		let mut indicators = vec![s.indicator];
		for _ in 0..2000 {
			s.tick(0.016);
			if *indicators.last().unwrap() != s.indicator {
				indicators.push(s.indicator);
			}
			if s.indicator == 6 {
				break;
			}
		}
		indicators
	}

	#[test]
	fn points_follow_cluster_distribution() {
		let s = state();
		assert_eq!(s.points.len(), NUM_POINTS);
		for (cluster, &size) in CLUSTER_SIZES.iter().enumerate() {
			let count = s.points.iter().filter(|p| p.cluster == cluster).count();
			assert_eq!(count, size);
		}
	}

	#[test]
	fn run_all_visits_stages_in_order() {
		let mut s = state();
		s.start_analysis();
		assert_eq!(s.indicator, 1);
		let indicators = run_to_completion(&mut s);
		assert_eq!(indicators, vec![1, 2, 3, 4, 5, 6]);
		assert_eq!(s.stage(), 5);
		assert!(s.metrics_visible);
		assert!(!s.is_animating());
	}

	#[test]
	fn calls_during_animation_are_dropped() {
		let mut s = state();
		s.start_analysis();
		let stage = s.stage();
		s.next_step();
		s.start_analysis();
		assert_eq!(s.stage(), stage);
	}

	#[test]
	fn manual_stepping_reaches_terminal() {
		let mut s = state();
		for expected in 1..=5 {
			s.next_step();
			assert_eq!(s.stage(), expected);
			while s.is_animating() {
				s.tick(0.1);
			}
		}
		assert_eq!(s.indicator, 6);
		s.next_step();
		assert_eq!(s.stage(), 5, "terminal stage saturates");
	}

	#[test]
	fn reset_clears_all_transient_visuals() {
		let mut s = state();
		s.start_analysis();
		for _ in 0..2000 {
			s.tick(0.016);
			if s.indicator == 6 {
				break;
			}
		}
		assert!(!s.labels.is_empty());
		s.reset();
		assert_eq!(s.stage(), 0);
		assert_eq!(s.indicator, 0);
		assert_eq!(s.labels.len(), 0);
		assert_eq!(s.connection_line_count(), 0);
		assert!(!s.centers_visible);
		assert!(!s.metrics_visible);
		assert!(s.points.iter().all(|p| p.color == UNCLUSTERED_COLOR));
	}

	#[test]
	fn clustering_keeps_points_in_bounds() {
		let mut s = state();
		s.next_step();
		while s.is_animating() {
			s.tick(0.1);
		}
		s.next_step(); // clustering stage
		for p in &s.points {
			assert!((10.0..=WIDTH).contains(&p.pos.x));
			assert!((10.0..=HEIGHT - 10.0).contains(&p.pos.y));
		}
	}

	#[test]
	fn banner_only_during_sentiment_settle() {
		let mut s = state();
		for _ in 0..3 {
			s.next_step();
			if s.stage() == 3 {
				assert!(s.banner_visible());
			}
			while s.is_animating() {
				s.tick(0.1);
			}
		}
		assert_eq!(s.stage(), 3);
		assert!(!s.banner_visible());
	}

	#[test]
	fn inactive_state_pauses_run() {
		let mut s = state();
		s.start_analysis();
		s.active = false;
		for _ in 0..100 {
			s.tick(0.1);
		}
		assert_eq!(s.indicator, 1, "paused run makes no progress");
		s.active = true;
		let indicators = run_to_completion(&mut s);
		assert_eq!(*indicators.last().unwrap(), 6, "resumes where it left off");
	}
}
