use crate::viz::LatLng;

/// Stable city identity used by edges, routes and marker segments.
pub type CityId = &'static str;

#[derive(Clone, Copy, Debug)]
pub struct City {
	pub id: CityId,
	pub name: &'static str,
	pub location: LatLng,
	pub population: u32,
	pub population_label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Connection {
	pub from: CityId,
	pub to: CityId,
}

/// Named multi-hop animation route over the connection network.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
	pub name: &'static str,
	pub stops: &'static [CityId],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
	Map,
	Graph,
}
