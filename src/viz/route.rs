//! Named multi-hop routes decomposed into per-edge traversal segments.
//!
//! Edges are direction-insensitive for lookup (both endpoint orderings map to
//! the same stored edge) but direction-sensitive for traversal: a segment
//! remembers whether the route walks the edge in its declared orientation.

use std::collections::HashMap;
use std::hash::Hash;

/// Direction-insensitive edge store keyed by the canonical (sorted) endpoint
/// pair; the value keeps the declared `(from, to)` orientation.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet<K> {
	map: HashMap<(K, K), (K, K)>,
}

impl<K: Clone + Eq + Hash + Ord> EdgeSet<K> {
	pub fn new() -> Self {
		Self {
			map: HashMap::new(),
		}
	}

	pub fn canonical(a: &K, b: &K) -> (K, K) {
		if a <= b {
			(a.clone(), b.clone())
		} else {
			(b.clone(), a.clone())
		}
	}

	pub fn insert(&mut self, from: K, to: K) {
		self.map
			.insert(Self::canonical(&from, &to), (from, to));
	}

	/// Resolve either endpoint ordering to the declared edge orientation.
	pub fn resolve(&self, a: &K, b: &K) -> Option<&(K, K)> {
		self.map.get(&Self::canonical(a, b))
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &(K, K)> {
		self.map.values()
	}
}

/// One hop of a route: the underlying edge in its declared orientation plus
/// the traversal direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<K> {
	pub from: K,
	pub to: K,
	pub forward: bool,
}

impl<K: Clone> Segment<K> {
	/// The endpoint the traversal starts at.
	pub fn start(&self) -> K {
		if self.forward {
			self.from.clone()
		} else {
			self.to.clone()
		}
	}

	/// The endpoint the traversal ends at.
	pub fn end(&self) -> K {
		if self.forward {
			self.to.clone()
		} else {
			self.from.clone()
		}
	}
}

/// Decompose an ordered stop list into edge segments. Hops that do not
/// resolve to a live edge are skipped silently; the rest of the route still
/// animates.
pub fn decompose<K: Clone + Eq + Hash + Ord>(stops: &[K], edges: &EdgeSet<K>) -> Vec<Segment<K>> {
	let mut segments = Vec::new();
	for pair in stops.windows(2) {
		let (a, b) = (&pair[0], &pair[1]);
		if let Some((from, to)) = edges.resolve(a, b) {
			segments.push(Segment {
				from: from.clone(),
				to: to.clone(),
				forward: from == a,
			});
		}
	}
	segments
}

/// Rebuild the ordered stop sequence from a segment list.
pub fn rejoin<K: Clone>(segments: &[Segment<K>]) -> Vec<K> {
	let Some(first) = segments.first() else {
		return Vec::new();
	};
	let mut stops = vec![first.start()];
	stops.extend(segments.iter().map(Segment::end));
	stops
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges() -> EdgeSet<&'static str> {
		let mut set = EdgeSet::new();
		set.insert("santiago", "valparaiso");
		set.insert("santiago", "rancagua");
		set.insert("rancagua", "talca");
		set
	}

	#[test]
	fn both_orderings_resolve_to_one_edge() {
		let set = edges();
		let fwd = set.resolve(&"santiago", &"valparaiso").unwrap();
		let rev = set.resolve(&"valparaiso", &"santiago").unwrap();
		assert_eq!(fwd, rev);
		assert_eq!(fwd, &("santiago", "valparaiso"));
	}

	#[test]
	fn decompose_records_traversal_direction() {
		let set = edges();
		let segs = decompose(&["valparaiso", "santiago", "rancagua"], &set);
		assert_eq!(segs.len(), 2);
		// First hop runs against the declared orientation.
		assert!(!segs[0].forward);
		assert_eq!(segs[0].start(), "valparaiso");
		assert!(segs[1].forward);
	}

	#[test]
	fn decompose_rejoin_round_trips() {
		let set = edges();
		let stops = ["talca", "rancagua", "santiago", "valparaiso"];
		let segs = decompose(&stops, &set);
		assert_eq!(rejoin(&segs), stops.to_vec());
	}

	#[test]
	fn unresolved_hops_are_skipped() {
		let set = edges();
		let segs = decompose(&["santiago", "nowhere", "rancagua"], &set);
		assert!(segs.is_empty());
	}
}
