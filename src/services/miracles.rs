// src/services/miracles.rs
use serde::Serialize;

/// A historical growth episode used as a fixed rate assumption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiracleEpisode {
    pub key: &'static str,
    pub label: &'static str,
    /// Name used for the flag lookup.
    pub country: &'static str,
    pub period: &'static str,
    pub rate: f64,
}

/// Named episode rates. Built once at start-up and never mutated.
#[derive(Debug, Clone)]
pub struct MiracleTable {
    episodes: Vec<MiracleEpisode>,
}

impl MiracleTable {
    pub fn new(episodes: Vec<MiracleEpisode>) -> Self {
        MiracleTable { episodes }
    }

    pub fn get(&self, key: &str) -> Option<&MiracleEpisode> {
        self.episodes.iter().find(|e| e.key == key)
    }

    pub fn rate(&self, key: &str) -> Option<f64> {
        self.get(key).map(|e| e.rate)
    }

    pub fn episodes(&self) -> &[MiracleEpisode] {
        &self.episodes
    }
}

impl Default for MiracleTable {
    fn default() -> Self {
        MiracleTable::new(vec![
            MiracleEpisode {
                key: "German-miracle",
                label: "German miracle rates",
                country: "Germany",
                period: "1950-73",
                rate: 0.057242325,
            },
            MiracleEpisode {
                key: "Chinese-miracle",
                label: "Chinese miracle rates",
                country: "China",
                period: "1978-2012",
                rate: 0.067037168,
            },
            MiracleEpisode {
                key: "Japanese-miracle",
                label: "Japanese miracle rates",
                country: "Japan",
                period: "1950-73",
                rate: 0.079924659,
            },
            MiracleEpisode {
                key: "Irish-miracle",
                label: "Celtic Tiger rates",
                country: "Ireland",
                period: "1994-2007",
                rate: 0.069506166,
            },
            MiracleEpisode {
                key: "SouthKorean-miracle",
                label: "Han River miracle rates",
                country: "Korea, Republic of",
                period: "1962-1980",
                rate: 0.082610882,
            },
            MiracleEpisode {
                key: "Taiwanese-miracle",
                label: "Taiwanese miracle rates",
                country: "Taiwan, Province of China",
                period: "1951-2019",
                rate: 0.051376746,
            },
        ])
    }
}
