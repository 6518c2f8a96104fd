//! Phase machine and scoring for the workforce-assignment animation. The
//! run is the staged-sequencer pattern with a data-dependent stage list:
//! each cycle selects the next unmatched client, evaluates one or two
//! candidate salespeople, then commits the best match.

use std::collections::HashMap;

use log::debug;

use super::data::{
	NUM_SEED_CLIENTS, URGENCY_MULTIPLIER, WEIGHT_REVENUE, WEIGHT_SATISFACTION, WEIGHT_WORKLOAD,
	seed_clients, seed_salespeople,
};
use super::types::{Candidate, Client, ClientId, Connection, ConnectionKind, Salesperson, SalespersonId};
use crate::viz::VizRng;

const SELECT_WAIT: f64 = 0.4;
const EVALUATE_WAIT: f64 = 0.6;
const DECIDE_WAIT: f64 = 0.3;
const CONFIRM_WAIT: f64 = 0.4;
const COOLDOWN_WAIT: f64 = 0.5;

/// In-run event cadence: every interval, an event fires with this chance.
const EVENT_INTERVAL: f64 = 8.0;
const EVENT_CHANCE: f64 = 0.3;

#[derive(Clone, Debug)]
pub enum RunPhase {
	Idle,
	Selecting {
		candidates: Vec<Candidate>,
		wait: f64,
	},
	Evaluating {
		candidates: Vec<Candidate>,
		idx: usize,
		wait: f64,
	},
	Deciding {
		candidates: Vec<Candidate>,
		wait: f64,
	},
	Confirming {
		wait: f64,
	},
	Cooldown {
		wait: f64,
	},
	Complete,
}

pub struct MatchingState {
	pub active: bool,
	pub clients: Vec<Client>,
	pub salespeople: Vec<Salesperson>,
	pub matches: Vec<Candidate>,
	pub connections: Vec<Connection>,
	pub phase: RunPhase,
	pub steps: u32,
	pub status: String,
	pub flow_time: f64,
	matrix: HashMap<(ClientId, SalespersonId), u32>,
	event_clock: f64,
	event_pending: bool,
	rng: VizRng,
}

impl MatchingState {
	pub fn new(rng: VizRng) -> Self {
		let mut state = Self {
			active: true,
			clients: seed_clients(),
			salespeople: seed_salespeople(),
			matches: Vec::new(),
			connections: Vec::new(),
			phase: RunPhase::Idle,
			steps: 0,
			status: "Ready to optimize".to_string(),
			flow_time: 0.0,
			matrix: HashMap::new(),
			event_clock: 0.0,
			event_pending: false,
			rng,
		};
		state.rebuild_matrix();
		state
	}

	pub fn is_running(&self) -> bool {
		!matches!(self.phase, RunPhase::Idle | RunPhase::Complete)
	}

	pub fn compatibility(&self, client: ClientId, salesperson: SalespersonId) -> u32 {
		self.matrix
			.get(&(client, salesperson))
			.copied()
			.unwrap_or(0)
	}

	/// Weighted score in 50–100, or 0 for an unavailable salesperson.
	fn compute_score(&self, client: &Client, person: &Salesperson) -> u32 {
		if !person.available {
			return 0;
		}
		let skill_matches = client
			.preferred_skills
			.iter()
			.filter(|s| person.skills.contains(s))
			.count();
		let satisfaction = 50.0 + skill_matches as f64 * 25.0;

		let max_revenue = self
			.clients
			.iter()
			.map(|c| c.revenue)
			.fold(f64::MIN, f64::max);
		let revenue = client.revenue / max_revenue * 100.0;

		let capacity_ratio = person.current_clients as f64 / person.capacity as f64;
		let workload = (1.0 - capacity_ratio) * 100.0 * person.efficiency;

		let urgency = if client.is_urgent {
			URGENCY_MULTIPLIER
		} else {
			1.0
		};
		let combined = (satisfaction * WEIGHT_SATISFACTION
			+ revenue * WEIGHT_REVENUE
			+ workload * WEIGHT_WORKLOAD)
			* urgency;
		combined.round().clamp(50.0, 100.0) as u32
	}

	/// Recomputes every (client, salesperson) pair. Called at init and after
	/// any entity mutation.
	pub fn rebuild_matrix(&mut self) {
		let mut matrix = HashMap::new();
		for client in &self.clients {
			for person in &self.salespeople {
				matrix.insert((client.id, person.id), self.compute_score(client, person));
			}
		}
		self.matrix = matrix;
	}

	pub fn total_score(&self) -> u32 {
		self.matches.iter().map(|m| m.score).sum()
	}

	pub fn matches_made(&self) -> usize {
		self.matches.len()
	}

	pub fn efficiency_pct(&self) -> u32 {
		let capacity: u32 = self.salespeople.iter().map(|p| p.capacity).sum();
		let max_possible = (self.clients.len() as u32).min(capacity);
		if max_possible == 0 {
			return 0;
		}
		(self.matches.len() as f64 / max_possible as f64 * 100.0).round() as u32
	}

	fn is_matched(&self, client: ClientId) -> bool {
		self.matches.iter().any(|m| m.client_id == client)
	}

	/// First unmatched client against 1–2 candidates from a shuffle of the
	/// salespeople with spare capacity.
	fn find_candidates(&mut self) -> Option<Vec<Candidate>> {
		let client = self.clients.iter().find(|c| !self.is_matched(c.id))?.clone();
		let mut available: Vec<Salesperson> = self
			.salespeople
			.iter()
			.filter(|p| p.has_capacity())
			.cloned()
			.collect();
		if available.is_empty() {
			return None;
		}
		let wanted = if self.rng.chance(0.7) { 2 } else { 1 };
		self.rng.shuffle(&mut available);
		Some(
			available
				.iter()
				.take(wanted.min(available.len()))
				.map(|p| Candidate {
					client_id: client.id,
					salesperson_id: p.id,
					score: self.compute_score(&client, p),
				})
				.collect(),
		)
	}

	pub fn start_optimization(&mut self) {
		if self.is_running() {
			debug!("matching: run requested while running, dropped");
			return;
		}
		self.steps = 0;
		self.event_clock = 0.0;
		self.event_pending = false;
		self.enter_selecting();
	}

	/// Cancels any in-flight run and restores seed state.
	pub fn reset(&mut self) {
		self.phase = RunPhase::Idle;
		self.matches.clear();
		self.connections.clear();
		self.steps = 0;
		self.event_clock = 0.0;
		self.event_pending = false;
		self.clients.truncate(NUM_SEED_CLIENTS);
		for client in &mut self.clients {
			client.score = 0;
			client.is_urgent = false;
		}
		for person in &mut self.salespeople {
			person.current_clients = 0;
			person.available = true;
		}
		self.rebuild_matrix();
		self.status = "Ready to optimize".to_string();
	}

	/// User-facing event trigger; dropped while a run is in flight (the
	/// in-run event clock covers that case).
	pub fn trigger_event(&mut self) {
		if self.is_running() {
			debug!("matching: manual event during run, dropped");
			return;
		}
		self.apply_random_event();
	}

	fn apply_random_event(&mut self) {
		if self.rng.chance(0.5) {
			self.deactivate_random_salesperson();
		} else {
			self.inject_urgent_client();
		}
	}

	fn deactivate_random_salesperson(&mut self) {
		let available: Vec<SalespersonId> = self
			.salespeople
			.iter()
			.filter(|p| p.available)
			.map(|p| p.id)
			.collect();
		let Some(&victim) = available
			.get(self.rng.range_usize(0, available.len().saturating_sub(1)))
		else {
			return;
		};
		self.deactivate(victim);
	}

	/// Takes a salesperson off the board and releases every match they hold.
	fn deactivate(&mut self, victim: SalespersonId) {
		debug!("matching: salesperson {victim} deactivated");
		let released: Vec<Candidate> = self
			.matches
			.iter()
			.filter(|m| m.salesperson_id == victim)
			.copied()
			.collect();
		self.matches.retain(|m| m.salesperson_id != victim);
		for m in &released {
			if let Some(client) = self.clients.iter_mut().find(|c| c.id == m.client_id) {
				client.score = 0;
			}
		}
		self.connections
			.retain(|c| c.salesperson_id != victim || c.kind != ConnectionKind::Matched);
		if let Some(person) = self.salespeople.iter_mut().find(|p| p.id == victim) {
			person.available = false;
			person.current_clients = person.current_clients.saturating_sub(released.len() as u32);
		}
		self.rebuild_matrix();
	}

	fn inject_urgent_client(&mut self) {
		let id = self.clients.len() as u32 + 1;
		let n = self.clients.len() - (NUM_SEED_CLIENTS - 1);
		self.clients.push(Client {
			id,
			name: format!("UrgentCorp {n}"),
			needs: "Critical System",
			revenue: 200_000.0,
			preferred_skills: &["Enterprise", "Emergency"],
			score: 0,
			is_urgent: true,
		});
		debug!("matching: urgent client {id} injected");
		self.rebuild_matrix();
	}

	fn enter_selecting(&mut self) {
		// Events raised mid-cycle land here so a stage never observes a
		// roster that changed under it.
		if self.event_pending {
			self.event_pending = false;
			self.apply_random_event();
		}
		self.steps += 1;
		match self.find_candidates() {
			Some(candidates) => {
				let name = self.client_name(candidates[0].client_id);
				let plural = if candidates.len() > 1 { "s" } else { "" };
				self.status = format!(
					"Processing {}... ({} candidate{} to evaluate)",
					name,
					candidates.len(),
					plural
				);
				self.phase = RunPhase::Selecting {
					candidates,
					wait: SELECT_WAIT,
				};
			}
			None => {
				self.status = "Optimization complete! All possible matches made.".to_string();
				self.phase = RunPhase::Complete;
			}
		}
	}

	fn client_name(&self, id: ClientId) -> String {
		self.clients
			.iter()
			.find(|c| c.id == id)
			.map(|c| c.name.clone())
			.unwrap_or_default()
	}

	fn salesperson_name(&self, id: SalespersonId) -> &'static str {
		self.salespeople
			.iter()
			.find(|p| p.id == id)
			.map(|p| p.name)
			.unwrap_or("")
	}

	fn begin_evaluation(&mut self, candidate: Candidate) {
		self.connections.push(Connection {
			client_id: candidate.client_id,
			salesperson_id: candidate.salesperson_id,
			score: candidate.score,
			kind: ConnectionKind::Evaluating,
		});
		self.status = format!(
			"Evaluating: {} ↔ {} (Score: {})",
			self.client_name(candidate.client_id),
			self.salesperson_name(candidate.salesperson_id),
			candidate.score
		);
	}

	fn commit_best(&mut self, candidates: Vec<Candidate>) {
		let Some(best) = candidates.iter().copied().max_by_key(|c| c.score) else {
			self.phase = RunPhase::Cooldown {
				wait: COOLDOWN_WAIT,
			};
			return;
		};
		// Re-check before applying: the winner must still have capacity.
		let still_open = self
			.salespeople
			.iter()
			.find(|p| p.id == best.salesperson_id)
			.is_some_and(Salesperson::has_capacity);
		self.connections
			.retain(|c| c.kind != ConnectionKind::Evaluating);
		if !still_open {
			debug!("matching: winning candidate went stale, cycle dropped");
			self.phase = RunPhase::Cooldown {
				wait: COOLDOWN_WAIT,
			};
			return;
		}

		self.connections.push(Connection {
			client_id: best.client_id,
			salesperson_id: best.salesperson_id,
			score: best.score,
			kind: ConnectionKind::Matched,
		});
		if let Some(client) = self.clients.iter_mut().find(|c| c.id == best.client_id) {
			client.score = best.score;
		}
		if let Some(person) = self
			.salespeople
			.iter_mut()
			.find(|p| p.id == best.salesperson_id)
		{
			person.current_clients += 1;
		}
		self.matches.push(best);
		self.status = format!(
			"✓ Matched: {} → {} (Score: {})",
			self.client_name(best.client_id),
			self.salesperson_name(best.salesperson_id),
			best.score
		);
		self.phase = RunPhase::Confirming { wait: CONFIRM_WAIT };
	}

	pub fn tick(&mut self, dt: f64) {
		if !self.active {
			return;
		}
		self.flow_time += dt;
		if self.is_running() {
			self.event_clock += dt;
			if self.event_clock >= EVENT_INTERVAL {
				self.event_clock -= EVENT_INTERVAL;
				if self.rng.chance(EVENT_CHANCE) {
					self.event_pending = true;
				}
			}
		}

		match std::mem::replace(&mut self.phase, RunPhase::Idle) {
			RunPhase::Idle => {}
			RunPhase::Complete => self.phase = RunPhase::Complete,
			RunPhase::Selecting { candidates, wait } => {
				let wait = wait - dt;
				if wait > 0.0 {
					self.phase = RunPhase::Selecting { candidates, wait };
				} else {
					self.begin_evaluation(candidates[0]);
					self.phase = RunPhase::Evaluating {
						candidates,
						idx: 0,
						wait: EVALUATE_WAIT,
					};
				}
			}
			RunPhase::Evaluating {
				candidates,
				idx,
				wait,
			} => {
				let wait = wait - dt;
				if wait > 0.0 {
					self.phase = RunPhase::Evaluating {
						candidates,
						idx,
						wait,
					};
				} else if idx + 1 < candidates.len() {
					self.begin_evaluation(candidates[idx + 1]);
					self.phase = RunPhase::Evaluating {
						candidates,
						idx: idx + 1,
						wait: EVALUATE_WAIT,
					};
				} else {
					self.phase = RunPhase::Deciding {
						candidates,
						wait: DECIDE_WAIT,
					};
				}
			}
			RunPhase::Deciding { candidates, wait } => {
				let wait = wait - dt;
				if wait > 0.0 {
					self.phase = RunPhase::Deciding { candidates, wait };
				} else {
					self.commit_best(candidates);
				}
			}
			RunPhase::Confirming { wait } => {
				let wait = wait - dt;
				self.phase = if wait > 0.0 {
					RunPhase::Confirming { wait }
				} else {
					RunPhase::Cooldown {
						wait: COOLDOWN_WAIT,
					}
				};
			}
			RunPhase::Cooldown { wait } => {
				let wait = wait - dt;
				if wait > 0.0 {
					self.phase = RunPhase::Cooldown { wait };
				} else {
					self.enter_selecting();
				}
			}
		}
	}

	/// The (client, salesperson) pair the run is currently spotlighting.
	pub fn highlighted_pair(&self) -> Option<(ClientId, SalespersonId, bool)> {
		match &self.phase {
			RunPhase::Evaluating {
				candidates, idx, ..
			} => candidates
				.get(*idx)
				.map(|c| (c.client_id, c.salesperson_id, false)),
			RunPhase::Confirming { .. } => self
				.matches
				.last()
				.map(|m| (m.client_id, m.salesperson_id, true)),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> MatchingState {
		MatchingState::new(VizRng::seeded(11))
	}

	fn run_until_complete(s: &mut MatchingState) {
		s.start_optimization();
		for _ in 0..20_000 {
			s.tick(0.016);
			if matches!(s.phase, RunPhase::Complete) {
				return;
			}
		}
		panic!("run never completed");
	}

	#[test]
	fn matrix_covers_every_pair_in_score_range() {
		let s = state();
		for client in &s.clients {
			for person in &s.salespeople {
				let score = s.compatibility(client.id, person.id);
				assert!((50..=100).contains(&score), "score {score} out of range");
			}
		}
	}

	#[test]
	fn skill_match_raises_score() {
		let s = state();
		// Acme Corp (Enterprise, CRM) against Sarah Chen (Enterprise, CRM)
		// versus Jake Thompson (Web, Design).
		assert!(s.compatibility(1, 1) > s.compatibility(1, 4));
	}

	#[test]
	fn run_terminates_with_consistent_books() {
		let mut s = state();
		run_until_complete(&mut s);
		// terminal means no unmatched client or no spare capacity
		let unmatched = s.clients.iter().any(|c| !s.is_matched(c.id));
		let capacity_left = s.salespeople.iter().any(|p| p.has_capacity());
		assert!(!unmatched || !capacity_left);
		assert!(s.steps as usize >= s.matches.len());
		let matched_lines = s
			.connections
			.iter()
			.filter(|c| c.kind == ConnectionKind::Matched)
			.count();
		assert_eq!(matched_lines, s.matches.len());
		let assigned: u32 = s.salespeople.iter().map(|p| p.current_clients).sum();
		assert_eq!(assigned as usize, s.matches.len());
	}

	#[test]
	fn start_during_run_is_dropped() {
		let mut s = state();
		s.start_optimization();
		s.tick(0.016);
		let steps = s.steps;
		s.start_optimization();
		assert_eq!(s.steps, steps);
		assert!(s.is_running());
	}

	#[test]
	fn phase_cycle_orders_select_evaluate_decide_confirm() {
		let mut s = state();
		s.start_optimization();
		assert!(matches!(s.phase, RunPhase::Selecting { .. }));
		for _ in 0..30 {
			s.tick(0.016);
		}
		assert!(matches!(s.phase, RunPhase::Evaluating { .. }));
		let n = match &s.phase {
			RunPhase::Evaluating { candidates, .. } => candidates.len(),
			_ => unreachable!(),
		};
		assert!((1..=2).contains(&n));
		// ride out evaluation and deciding, first match lands
		for _ in 0..((n as u32 * 40) + 25) {
			s.tick(0.016);
		}
		assert_eq!(s.matches.len(), 1);
	}

	#[test]
	fn deactivation_releases_every_held_match() {
		let mut s = state();
		run_until_complete(&mut s);
		// force the deactivate branch deterministically
		let victim = s
			.salespeople
			.iter()
			.find(|p| p.available && p.current_clients > 0)
			.map(|p| p.id)
			.expect("someone holds a match");
		let held: Vec<ClientId> = s
			.matches
			.iter()
			.filter(|m| m.salesperson_id == victim)
			.map(|m| m.client_id)
			.collect();
		let before = s.matches.len();

		s.deactivate(victim);

		assert_eq!(s.matches.len(), before - held.len());
		let person = s.salespeople.iter().find(|p| p.id == victim).unwrap();
		assert!(!person.available);
		assert_eq!(person.current_clients, 0);
		for id in &held {
			let client = s.clients.iter().find(|c| c.id == *id).unwrap();
			assert_eq!(client.score, 0);
		}
		assert!(
			!s.connections
				.iter()
				.any(|c| c.salesperson_id == victim && c.kind == ConnectionKind::Matched)
		);
		for client in &s.clients {
			assert_eq!(s.compatibility(client.id, victim), 0);
		}
	}

	#[test]
	fn urgent_injection_extends_roster_and_matrix() {
		let mut s = state();
		s.inject_urgent_client();
		assert_eq!(s.clients.len(), NUM_SEED_CLIENTS + 1);
		let urgent = s.clients.last().unwrap();
		assert_eq!(urgent.name, "UrgentCorp 1");
		assert!(urgent.is_urgent);
		assert!(s.compatibility(urgent.id, 1) > 0);
	}

	#[test]
	fn reset_cancels_run_and_truncates_injected_clients() {
		let mut s = state();
		s.inject_urgent_client();
		s.start_optimization();
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert!(s.is_running() || !s.matches.is_empty());
		s.reset();
		assert!(matches!(s.phase, RunPhase::Idle));
		assert_eq!(s.clients.len(), NUM_SEED_CLIENTS);
		assert!(s.matches.is_empty());
		assert!(s.connections.is_empty());
		assert_eq!(s.steps, 0);
		assert!(s.clients.iter().all(|c| c.score == 0 && !c.is_urgent));
		assert!(
			s.salespeople
				.iter()
				.all(|p| p.available && p.current_clients == 0)
		);
		assert_eq!(s.status, "Ready to optimize");
	}

	#[test]
	fn manual_event_dropped_mid_run() {
		let mut s = state();
		s.start_optimization();
		let clients = s.clients.len();
		let available = s.salespeople.iter().filter(|p| p.available).count();
		s.trigger_event();
		assert_eq!(s.clients.len(), clients);
		assert_eq!(
			s.salespeople.iter().filter(|p| p.available).count(),
			available
		);
	}

	#[test]
	fn inactive_state_freezes_the_run() {
		let mut s = state();
		s.start_optimization();
		s.active = false;
		for _ in 0..500 {
			s.tick(0.016);
		}
		assert!(matches!(s.phase, RunPhase::Selecting { .. }));
		assert!(s.matches.is_empty());
	}

	#[test]
	fn efficiency_tracks_matches_over_possible() {
		let mut s = state();
		assert_eq!(s.efficiency_pct(), 0);
		run_until_complete(&mut s);
		let capacity: u32 = s.salespeople.iter().map(|p| p.capacity).sum();
		let max_possible = (s.clients.len() as u32).min(capacity);
		let expected =
			(s.matches.len() as f64 / max_possible as f64 * 100.0).round() as u32;
		assert_eq!(s.efficiency_pct(), expected);
	}
}
