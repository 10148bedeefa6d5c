// Defaults for a search configuration
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;
pub const DEFAULT_INTEGER_MAX: i64 = 1_000_000;
pub const DEFAULT_REAL_MIN: f64 = 1e-6;
pub const DEFAULT_REAL_MAX: f64 = 1e6;
