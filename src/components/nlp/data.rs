//! Seed constants for the conversation-clustering animation.

pub const NUM_POINTS: usize = 120;
pub const NUM_CLUSTERS: usize = 7;

/// Points per cluster: the first four clusters carry 70% of the data.
pub const CLUSTER_SIZES: [usize; NUM_CLUSTERS] = [30, 24, 18, 12, 12, 12, 12];

pub const CLUSTER_COLORS: [&str; NUM_CLUSTERS] = [
	"#ff6b6b", // Billing Issues
	"#4ecdc4", // Technical Support
	"#45b7d1", // Account Questions
	"#f9ca24", // Product Info
	"#a55eea", // Complaints
	"#26de81", // Feature Requests
	"#fd79a8", // General Inquiries
];

pub const CLUSTER_NAMES: [&str; NUM_CLUSTERS] = [
	"Billing Issues",
	"Technical Support",
	"Account Questions",
	"Product Information",
	"Complaints & Feedback",
	"Feature Requests",
	"General Inquiries",
];

/// Logical drawing space for the point cloud.
pub const WIDTH: f64 = 700.0;
pub const HEIGHT: f64 = 360.0;

/// Cluster center positions in logical space.
pub const CENTER_POSITIONS: [(f64, f64); NUM_CLUSTERS] = [
	(120.0, 100.0),
	(360.0, 100.0),
	(600.0, 100.0),
	(120.0, 220.0),
	(360.0, 220.0),
	(600.0, 220.0),
	(360.0, 320.0),
];

/// Theme group rectangles `(x, y, w, h)` used by the final organize stage.
pub const GROUP_RECTS: [(f64, f64, f64, f64); NUM_CLUSTERS] = [
	(40.0, 40.0, 180.0, 80.0),
	(260.0, 40.0, 180.0, 80.0),
	(480.0, 40.0, 180.0, 80.0),
	(40.0, 150.0, 180.0, 80.0),
	(260.0, 150.0, 180.0, 80.0),
	(480.0, 150.0, 180.0, 80.0),
	(260.0, 260.0, 180.0, 80.0),
];

/// Stage-indicator messages; index 0 is idle, 6 is the completion banner.
pub const STAGE_MESSAGES: [&str; 7] = [
	"Ready to analyze conversation data and extract FAQ themes",
	"Step 1: Load conversation dataset (120 unique conversations)",
	"Step 2: Apply K-means clustering algorithm",
	"Step 3: Analyze conversation sentiment (positive/negative)",
	"Step 4: Group conversations by themes",
	"Step 5: Organize themes for FAQ creation",
	"Analysis complete! Ready to generate FAQ themes",
];

/// Summary readouts revealed when the run completes.
pub const METRICS: [(&str, &str); 4] = [
	("120", "Conversations analyzed"),
	("7", "Theme clusters found"),
	("70%", "Positive sentiment"),
	("92%", "Clustering confidence"),
];

pub const POSITIVE_COLOR: &str = "#3498db";
pub const NEGATIVE_COLOR: &str = "#e74c3c";
pub const UNCLUSTERED_COLOR: &str = "#ffffff";
