//! Chilean cities network seed data: cities, connections, traffic source
//! cities and the named multi-hop animation routes.

use super::types::{City, CityId, Connection, RouteDef};
use crate::viz::LatLng;

pub const CITIES: &[City] = &[
	city("santiago", "Santiago", -33.4489, -70.6693, 7_100_000, "7.1 million"),
	city("valparaiso", "Valparaíso", -33.0472, -71.6127, 980_000, "980,000"),
	city("concepcion", "Concepción", -36.8201, -73.0397, 830_000, "830,000"),
	city("antofagasta", "Antofagasta", -23.6509, -70.3975, 362_000, "362,000"),
	city("laserena", "La Serena", -29.9027, -71.2525, 210_000, "210,000"),
	city("temuco", "Temuco", -38.7359, -72.5904, 280_000, "280,000"),
	city("puertomontt", "Puerto Montt", -41.4717, -72.9429, 245_000, "245,000"),
	city("arica", "Arica", -18.4783, -70.3212, 222_000, "222,000"),
	city("iquique", "Iquique", -20.2307, -70.1356, 191_000, "191,000"),
	city("puntaarenas", "Punta Arenas", -53.1638, -70.9171, 127_000, "127,000"),
	city("rancagua", "Rancagua", -34.1709, -70.7408, 273_000, "273,000"),
	city("talca", "Talca", -35.4264, -71.6553, 230_000, "230,000"),
	city("chillan", "Chillán", -36.6062, -72.1039, 215_000, "215,000"),
	city("osorno", "Osorno", -40.5740, -73.1342, 172_000, "172,000"),
	city("calama", "Calama", -22.4657, -68.9239, 165_000, "165,000"),
	city("copiapo", "Copiapó", -27.3668, -70.3321, 158_000, "158,000"),
	city("valdivia", "Valdivia", -39.8142, -73.2459, 154_000, "154,000"),
	city("curico", "Curicó", -34.9829, -71.2367, 150_000, "150,000"),
	city("quillota", "Quillota", -32.8811, -71.2499, 90_000, "90,000"),
	city("coyhaique", "Coyhaique", -45.5717, -72.0652, 57_000, "57,000"),
	city("sanfernando", "San Fernando", -34.5857, -70.9886, 73_000, "73,000"),
	city("losangeles", "Los Ángeles", -37.4696, -72.3521, 202_000, "202,000"),
	city("ovalle", "Ovalle", -30.6011, -71.2000, 112_000, "112,000"),
	city("castro", "Castro", -42.4808, -73.7623, 43_000, "43,000"),
	city("constitucion", "Constitución", -35.3350, -72.4150, 46_000, "46,000"),
	city("sanantonio", "San Antonio", -33.5928, -71.6064, 91_350, "91,350"),
];

const fn city(
	id: CityId,
	name: &'static str,
	lat: f64,
	lng: f64,
	population: u32,
	population_label: &'static str,
) -> City {
	City {
		id,
		name,
		location: LatLng::new(lat, lng),
		population,
		population_label,
	}
}

pub const CONNECTIONS: &[Connection] = &[
	conn("arica", "iquique"),
	conn("iquique", "antofagasta"),
	conn("antofagasta", "calama"),
	conn("antofagasta", "copiapo"),
	conn("copiapo", "laserena"),
	conn("laserena", "ovalle"),
	conn("laserena", "santiago"),
	conn("ovalle", "santiago"),
	conn("santiago", "valparaiso"),
	conn("santiago", "rancagua"),
	conn("santiago", "sanfernando"),
	conn("santiago", "sanantonio"),
	conn("valparaiso", "sanantonio"),
	conn("valparaiso", "quillota"),
	conn("rancagua", "sanfernando"),
	conn("rancagua", "talca"),
	conn("sanfernando", "curico"),
	conn("curico", "talca"),
	conn("talca", "constitucion"),
	conn("talca", "chillan"),
	conn("chillan", "concepcion"),
	conn("concepcion", "losangeles"),
	conn("losangeles", "temuco"),
	conn("temuco", "valdivia"),
	conn("valdivia", "osorno"),
	conn("osorno", "puertomontt"),
	conn("puertomontt", "castro"),
	conn("puertomontt", "coyhaique"),
	conn("coyhaique", "puntaarenas"),
];

const fn conn(from: CityId, to: CityId) -> Connection {
	Connection { from, to }
}

/// Cities that spawn animated traffic.
pub const SOURCE_CITIES: &[CityId] = &["santiago", "concepcion", "valparaiso", "sanantonio"];

pub const ROUTES: &[RouteDef] = &[
	RouteDef {
		name: "Santiago-North",
		stops: &[
			"santiago",
			"laserena",
			"copiapo",
			"antofagasta",
			"iquique",
			"arica",
		],
	},
	RouteDef {
		name: "Santiago-South",
		stops: &[
			"santiago",
			"rancagua",
			"talca",
			"chillan",
			"concepcion",
			"losangeles",
			"temuco",
			"valdivia",
			"puertomontt",
		],
	},
	RouteDef {
		name: "Santiago-Coast",
		stops: &["santiago", "sanantonio", "valparaiso", "quillota"],
	},
	RouteDef {
		name: "Concepcion-North",
		stops: &[
			"concepcion",
			"chillan",
			"talca",
			"curico",
			"sanfernando",
			"rancagua",
			"santiago",
		],
	},
	RouteDef {
		name: "Concepcion-South",
		stops: &[
			"concepcion",
			"losangeles",
			"temuco",
			"valdivia",
			"osorno",
			"puertomontt",
			"castro",
		],
	},
	RouteDef {
		name: "Valparaiso-North",
		stops: &["valparaiso", "santiago", "laserena", "copiapo"],
	},
	RouteDef {
		name: "Valparaiso-South",
		stops: &[
			"valparaiso",
			"santiago",
			"rancagua",
			"sanfernando",
			"curico",
			"talca",
		],
	},
	RouteDef {
		name: "SanAntonio-North",
		stops: &["sanantonio", "valparaiso", "quillota"],
	},
	RouteDef {
		name: "SanAntonio-South",
		stops: &["sanantonio", "santiago", "rancagua", "sanfernando", "curico"],
	},
];
