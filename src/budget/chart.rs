//! Pie-chart series projection for the spending breakdown view.

use rand::Rng;

use super::budget::Budget;

/// One pie slice: folder label, its spent total, and a resolved display
/// color.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Projects the budget into pie-chart slices.
///
/// Stored folder colors are used verbatim; a folder without one gets a
/// randomly generated HSL fallback on each call, never written back.
/// Returns an empty series when there are no folders or every folder total
/// is zero, so callers render a "nothing to display" state instead of a
/// chart.
pub fn chart_series(budget: &Budget) -> Vec<ChartSlice> {
    let slices: Vec<ChartSlice> = budget
        .folders
        .iter()
        .map(|(name, folder)| ChartSlice {
            label: name.clone(),
            value: folder.total(),
            color: folder.color.clone().unwrap_or_else(random_hsl_color),
        })
        .collect();
    if slices.iter().all(|slice| slice.value == 0.0) {
        return Vec::new();
    }
    slices
}

fn random_hsl_color() -> String {
    let mut rng = rand::thread_rng();
    let hue = rng.gen_range(0..360);
    let saturation = rng.gen_range(70..100);
    let lightness = rng.gen_range(40..70);
    format!("hsl({hue}, {saturation}%, {lightness}%)")
}
