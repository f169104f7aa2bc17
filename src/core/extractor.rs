//! Dominant color extraction via k-means clustering
//!
//! Uploads are downsampled, stripped of near-background pixels, and
//! clustered in sRGB space. Centroids come back ordered by cluster
//! population, most populous first.

use kmeans_colors::{get_kmeans, Kmeans, Sort};
use palette::Srgb;

use crate::config::Settings;
use crate::errors::MatchError;
use crate::models::Rgb;

/// Fixed base seed so repeated extractions of the same image agree
const KMEANS_SEED: u64 = 42;
/// Iteration cap per k-means run
const MAX_ITERATIONS: usize = 20;
/// Convergence threshold in unit sRGB space
const CONVERGE: f32 = 0.0025;

/// Fallback when an image yields no usable pixels
const NEUTRAL_GRAY: Rgb = Rgb(128, 128, 128);

/// Extract the color palette of an image, ordered by cluster population
/// descending. The first entry is the dominant color.
pub fn extract_palette(data: &[u8], settings: &Settings) -> Result<Vec<Rgb>, MatchError> {
    let img = image::load_from_memory(data)?;
    let small = img.thumbnail(settings.thumbnail, settings.thumbnail).to_rgb8();

    let raw: Vec<[u8; 3]> = small.pixels().map(|p| p.0).collect();

    // Drop very dark and very light pixels; they are usually background.
    // An image that is all background keeps everything.
    let filtered: Vec<[u8; 3]> = raw
        .iter()
        .copied()
        .filter(|[r, g, b]| {
            let brightness = (*r as f32 + *g as f32 + *b as f32) / 3.0;
            brightness > 30.0 && brightness < 225.0
        })
        .collect();

    let chosen = if filtered.is_empty() { raw } else { filtered };
    if chosen.is_empty() {
        return Ok(vec![NEUTRAL_GRAY]);
    }

    let pixels: Vec<Srgb> = chosen
        .iter()
        .map(|[r, g, b]| Srgb::new(*r, *g, *b).into_format())
        .collect();

    // Degenerate images can have fewer pixels than requested clusters
    let k = settings.clusters.clamp(1, pixels.len());

    let mut best: Kmeans<Srgb> = Kmeans::new();
    for run in 0..settings.kmeans_runs {
        let result = get_kmeans(k, MAX_ITERATIONS, CONVERGE, false, &pixels, KMEANS_SEED + run);
        if result.score < best.score {
            best = result;
        }
    }

    let mut centroids = Srgb::sort_indexed_colors(&best.centroids, &best.indices);
    centroids.sort_unstable_by(|a, b| b.percentage.total_cmp(&a.percentage));

    Ok(centroids
        .into_iter()
        .map(|c| {
            let (r, g, b) = c.centroid.into_format::<u8>().into_components();
            Rgb(r, g, b)
        })
        .collect())
}
