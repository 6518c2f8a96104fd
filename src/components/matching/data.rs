//! Seed roster for the workforce-assignment animation.

use super::types::{Client, Salesperson};

pub const NUM_SEED_CLIENTS: usize = 7;

/// Multi-objective weights: satisfaction / revenue / workload.
pub const WEIGHT_SATISFACTION: f64 = 0.4;
pub const WEIGHT_REVENUE: f64 = 0.35;
pub const WEIGHT_WORKLOAD: f64 = 0.25;

pub const URGENCY_MULTIPLIER: f64 = 1.3;

pub fn seed_clients() -> Vec<Client> {
	let rows: [(&str, &str, f64, &'static [&'static str]); NUM_SEED_CLIENTS] = [
		("Acme Corp", "Enterprise CRM", 85_000.0, &["Enterprise", "CRM"]),
		("StartupX", "MVP Development", 35_000.0, &["Startup", "MVP"]),
		("TechGiant", "Cloud Migration", 120_000.0, &["Cloud", "Enterprise"]),
		("LocalBiz", "Website Redesign", 15_000.0, &["Web", "Design"]),
		("MedTech Inc", "Compliance System", 95_000.0, &["Healthcare", "Compliance"]),
		("EduPlatform", "Learning Management", 45_000.0, &["Education", "Platform"]),
		("FinanceFirst", "Trading Platform", 150_000.0, &["Finance", "Trading"]),
	];
	rows.iter()
		.enumerate()
		.map(|(i, &(name, needs, revenue, preferred_skills))| Client {
			id: i as u32 + 1,
			name: name.to_string(),
			needs,
			revenue,
			preferred_skills,
			score: 0,
			is_urgent: false,
		})
		.collect()
}

pub fn seed_salespeople() -> Vec<Salesperson> {
	let rows: [(&str, &'static [&'static str], u32, f64); 5] = [
		("Sarah Chen", &["Enterprise", "CRM"], 3, 0.9),
		("Marcus Rodriguez", &["Startup", "MVP"], 4, 0.85),
		("Dr. Emily Watson", &["Healthcare", "Compliance"], 2, 0.95),
		("Jake Thompson", &["Web", "Design"], 5, 0.8),
		("Lisa Patel", &["Finance", "Trading"], 3, 0.88),
	];
	rows.iter()
		.enumerate()
		.map(|(i, &(name, skills, capacity, efficiency))| Salesperson {
			id: i as u32 + 1,
			name,
			skills,
			capacity,
			current_clients: 0,
			available: true,
			efficiency,
		})
		.collect()
}
