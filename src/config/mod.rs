//! Runtime settings for the matching engine
//!
//! Engine knobs are read from environment variables at startup so Docker
//! users can tune extraction without rebuilding. Invalid or out-of-range
//! values fall back to the defaults with a warning.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Tuning knobs for dominant color extraction
#[derive(Debug, Clone)]
pub struct Settings {
    /// Number of k-means clusters
    pub clusters: usize,
    /// Number of k-means restarts; the best-scoring run wins
    pub kmeans_runs: u64,
    /// Square thumbnail edge used to downsample uploads before clustering
    pub thumbnail: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            clusters: 3,
            kmeans_runs: 3,
            thumbnail: 100,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Settings::default();

        Self {
            clusters: read_env("OUTFIT_CLUSTERS", defaults.clusters, 1, 16),
            kmeans_runs: read_env("OUTFIT_KMEANS_RUNS", defaults.kmeans_runs, 1, 10),
            thumbnail: read_env("OUTFIT_THUMBNAIL", defaults.thumbnail, 16, 512),
        }
    }
}

fn read_env<T>(key: &str, default: T, min: T, max: T) -> T
where
    T: Copy + PartialOrd + FromStr + Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };

    match raw.parse::<T>() {
        Ok(value) if value >= min && value <= max => value,
        _ => {
            warn!("Invalid {}='{}', falling back to {}", key, raw, default);
            default
        }
    }
}
