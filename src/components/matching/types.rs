pub type ClientId = u32;
pub type SalespersonId = u32;

#[derive(Clone, Debug)]
pub struct Client {
	pub id: ClientId,
	pub name: String,
	pub needs: &'static str,
	pub revenue: f64,
	pub preferred_skills: &'static [&'static str],
	pub score: u32,
	pub is_urgent: bool,
}

#[derive(Clone, Debug)]
pub struct Salesperson {
	pub id: SalespersonId,
	pub name: &'static str,
	pub skills: &'static [&'static str],
	pub capacity: u32,
	pub current_clients: u32,
	pub available: bool,
	pub efficiency: f64,
}

impl Salesperson {
	pub fn has_capacity(&self) -> bool {
		self.available && self.current_clients < self.capacity
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
	pub client_id: ClientId,
	pub salesperson_id: SalespersonId,
	pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionKind {
	Evaluating,
	Matched,
}

/// A visible client-to-salesperson line. Evaluating lines are transient;
/// matched lines persist until the match is released.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
	pub client_id: ClientId,
	pub salesperson_id: SalespersonId,
	pub score: u32,
	pub kind: ConnectionKind,
}
