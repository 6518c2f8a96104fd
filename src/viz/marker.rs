//! Transient markers that traverse route segments at independent speeds.
//! Each render frame advances every live marker once; there is no global
//! animation clock.

use super::geo::Point;
use super::route::Segment;

#[derive(Clone, Debug)]
pub struct Marker<K> {
	pub segments: Vec<Segment<K>>,
	pub seg_index: usize,
	/// Fraction of the current segment already covered, in [0, 1).
	pub progress: f64,
	pub speed: f64,
	pub radius: f64,
	pub complete: bool,
	pub pos: Point,
}

impl<K> Marker<K> {
	pub fn new(segments: Vec<Segment<K>>, speed: f64, radius: f64, start_progress: f64) -> Self {
		Self {
			segments,
			seg_index: 0,
			progress: start_progress,
			speed,
			radius,
			complete: false,
			pos: Point::default(),
		}
	}

	/// Advance one frame. `resolve` maps declared edge endpoints to their
	/// current world positions; a segment with no resolvable path skips this
	/// tick without erroring.
	pub fn tick(&mut self, resolve: impl Fn(&K, &K) -> Option<(Point, Point)>) {
		if self.complete {
			return;
		}
		let Some(seg) = self.segments.get(self.seg_index) else {
			self.retire();
			return;
		};
		if resolve(&seg.from, &seg.to).is_none() {
			return;
		}

		self.progress += self.speed;
		if self.progress >= 1.0 {
			self.seg_index += 1;
			self.progress = 0.0;
			if self.seg_index >= self.segments.len() {
				self.retire();
				return;
			}
		}

		let seg = &self.segments[self.seg_index];
		if let Some((a, b)) = resolve(&seg.from, &seg.to) {
			let t = if seg.forward {
				self.progress
			} else {
				1.0 - self.progress
			};
			self.pos = Point::lerp(a, b, t);
		}
	}

	fn retire(&mut self) {
		self.complete = true;
		self.radius = 0.0;
	}
}

/// Advance a whole batch; the per-frame tick is the sole mutator of marker
/// progress and position.
pub fn tick_markers<K>(
	markers: &mut [Marker<K>],
	resolve: impl Fn(&K, &K) -> Option<(Point, Point)>,
) {
	for marker in markers.iter_mut() {
		marker.tick(&resolve);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::viz::route::EdgeSet;
	use crate::viz::route::decompose;
	use std::collections::HashMap;

	fn positions() -> HashMap<&'static str, Point> {
		HashMap::from([
			("a", Point::new(0.0, 0.0)),
			("b", Point::new(10.0, 0.0)),
			("c", Point::new(10.0, 10.0)),
		])
	}

	fn marker() -> Marker<&'static str> {
		let mut edges = EdgeSet::new();
		edges.insert("a", "b");
		edges.insert("b", "c");
		Marker::new(decompose(&["a", "b", "c"], &edges), 0.25, 4.0, 0.0)
	}

	fn resolve<'a>(
		points: &'a HashMap<&'static str, Point>,
	) -> impl Fn(&&'static str, &&'static str) -> Option<(Point, Point)> + 'a {
		move |a, b| Some((*points.get(*a)?, *points.get(*b)?))
	}

	#[test]
	fn progress_stays_in_unit_interval_until_complete() {
		let points = positions();
		let mut m = marker();
		while !m.complete {
			m.tick(resolve(&points));
			if !m.complete {
				assert!((0.0..1.0).contains(&m.progress));
			}
		}
	}

	#[test]
	fn completion_retires_marker() {
		let points = positions();
		let mut m = marker();
		for _ in 0..100 {
			m.tick(resolve(&points));
		}
		assert!(m.complete);
		assert_eq!(m.radius, 0.0);
		let frozen = (m.seg_index, m.progress, m.pos);
		m.tick(resolve(&points));
		assert_eq!(frozen, (m.seg_index, m.progress, m.pos));
	}

	#[test]
	fn reverse_segment_interpolates_from_declared_end() {
		let points = positions();
		let mut edges = EdgeSet::new();
		edges.insert("b", "a"); // declared b -> a, traversed a -> b
		let mut m = Marker::new(decompose(&["a", "b"], &edges), 0.5, 4.0, 0.0);
		m.tick(resolve(&points));
		// progress 0.5 against the declared orientation: halfway along b -> a
		assert!((m.pos.x - 5.0).abs() < 1e-9);
	}

	#[test]
	fn unresolved_segment_skips_tick_silently() {
		let points = positions();
		let mut m = marker();
		m.tick(resolve(&points));
		let before = (m.seg_index, m.progress, m.pos);
		let missing = |_: &&'static str, _: &&'static str| -> Option<(Point, Point)> { None };
		m.tick(missing);
		assert_eq!(before, (m.seg_index, m.progress, m.pos));
		assert!(!m.complete);
		// Resolvable again: the marker resumes.
		m.tick(resolve(&points));
		assert!(m.progress > before.1 || m.seg_index > before.0);
	}
}
