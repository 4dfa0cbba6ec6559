// src/services/options.rs
use crate::models::{GrowthRateSelection, SelectOption};
use crate::services::dataset::GdpDataset;
use crate::services::flags::flag_emoji;
use crate::services::miracles::MiracleTable;

fn with_flag(country: &str, text: &str) -> String {
    format!("{} {}", flag_emoji(country), text)
}

/// One entry per country, in dataset order.
pub fn country_options(dataset: &GdpDataset) -> Vec<SelectOption> {
    dataset
        .countries()
        .iter()
        .map(|country| SelectOption {
            label: with_flag(country, country),
            value: country.clone(),
        })
        .collect()
}

/// Derived modes first, then one option per miracle episode.
pub fn growth_rate_options(table: &MiracleTable) -> Vec<SelectOption> {
    let mut options = vec![
        SelectOption {
            label: "Recent 10-year growth rates".to_string(),
            value: GrowthRateSelection::RECENT_KEY.to_string(),
        },
        SelectOption {
            label: "Average historical growth rates".to_string(),
            value: GrowthRateSelection::HISTORICAL_KEY.to_string(),
        },
    ];

    options.extend(table.episodes().iter().map(|episode| SelectOption {
        label: with_flag(
            episode.country,
            &format!("{} ({})", episode.label, episode.period),
        ),
        value: episode.key.to_string(),
    }));
    options
}
