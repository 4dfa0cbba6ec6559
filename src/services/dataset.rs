// src/services/dataset.rs
use anyhow::{anyhow, Context, Result};
use csv::Reader;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::io::Read;

use crate::errors::ProjectionError;
use crate::models::{GdpPoint, GdpSeries};

pub const COUNTRY_COLUMN: &str = "country";
pub const YEAR_COLUMN: &str = "year";
pub const GDP_COLUMN: &str = "rgdpe_pc";

/// GDP per capita by country, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct GdpDataset {
    countries: Vec<String>,
    series: HashMap<String, GdpSeries>,
}

impl GdpDataset {
    pub fn from_series(all: Vec<GdpSeries>) -> Self {
        let mut dataset = GdpDataset::default();
        for series in all {
            if series.is_empty() || dataset.series.contains_key(&series.country) {
                continue;
            }
            dataset.countries.push(series.country.clone());
            dataset.series.insert(series.country.clone(), series);
        }
        dataset
    }

    /// Parses a Penn World Table style CSV. Rows without a GDP value are
    /// skipped; countries with no usable rows are not offered.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = Reader::from_reader(reader);

        let headers = rdr.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| anyhow!("No '{}' column in dataset CSV", name))
        };
        let idx_country = column(COUNTRY_COLUMN)?;
        let idx_year = column(YEAR_COLUMN)?;
        let idx_gdp = column(GDP_COLUMN)?;

        let mut dataset = GdpDataset::default();
        let mut skipped = 0usize;

        for (line, record) in rdr.records().enumerate() {
            let row = record.with_context(|| format!("Malformed dataset row {}", line + 2))?;

            let country = row.get(idx_country).unwrap_or("").trim();
            if country.is_empty() {
                skipped += 1;
                continue;
            }

            let year_cell = row.get(idx_year).unwrap_or("").trim();
            let year: i32 = year_cell
                .parse()
                .with_context(|| format!("Invalid year '{}' on row {}", year_cell, line + 2))?;

            let gdp = match row.get(idx_gdp).map(str::trim).unwrap_or("").parse::<f64>() {
                Ok(v) if v.is_finite() && v > 0.0 => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            dataset.push(country, GdpPoint::new(year, gdp));
        }

        for series in dataset.series.values_mut() {
            let dropped = series.normalize();
            if dropped > 0 {
                warn!("Dropped {} duplicate years for {}", dropped, series.country);
            }
        }

        debug!("Skipped {} dataset rows without usable GDP values", skipped);
        info!("Loaded GDP series for {} countries", dataset.countries.len());
        Ok(dataset)
    }

    /// Loads the dataset from an `http(s)://` URL or a local file path.
    pub async fn load(source: &str) -> Result<Self> {
        let text = if source.starts_with("http://") || source.starts_with("https://") {
            info!("Fetching dataset CSV from URL: {}", source);
            let response = reqwest::get(source)
                .await
                .with_context(|| format!("Failed to fetch dataset from {}", source))?
                .error_for_status()?;
            response.text().await?
        } else {
            info!("Reading dataset CSV from file: {}", source);
            tokio::fs::read_to_string(source)
                .await
                .with_context(|| format!("Failed to read dataset file {}", source))?
        };

        Self::from_csv_reader(text.as_bytes())
    }

    fn push(&mut self, country: &str, point: GdpPoint) {
        match self.series.get_mut(country) {
            Some(series) => series.push(point),
            None => {
                self.countries.push(country.to_string());
                self.series
                    .insert(country.to_string(), GdpSeries::new(country, vec![point]));
            }
        }
    }

    /// Exact-name lookup.
    pub fn series(&self, country: &str) -> Result<&GdpSeries, ProjectionError> {
        self.series
            .get(country)
            .ok_or_else(|| ProjectionError::UnknownCountry {
                country: country.to_string(),
            })
    }

    /// Country names in order of first appearance.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
countrycode,country,year,rgdpe_pc,pop
NOR,Norway,2019,70000.5,5.3
NOR,Norway,2017,65000,5.2
NOR,Norway,2018,,5.25
ALB,Albania,2017,12000,2.9
NOR,Norway,2018,68000,5.25
ALB,Albania,2018,12500,2.9
ZZZ,Nowhere,2018,,0.1
";

    #[test]
    fn parses_sorts_and_skips_blank_gdp() {
        let dataset = GdpDataset::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.countries(), &["Norway".to_string(), "Albania".to_string()]);

        let norway = dataset.series("Norway").unwrap();
        let years: Vec<i32> = norway.points().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2017, 2018, 2019]);
        assert_eq!(norway.last().unwrap().gdp_per_capita, 70000.5);
    }

    #[test]
    fn lookup_is_exact() {
        let dataset = GdpDataset::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            dataset.series("norway").unwrap_err(),
            ProjectionError::UnknownCountry { country: "norway".into() }
        );
        assert!(dataset.series("Nowhere").is_err());
    }

    #[test]
    fn duplicate_years_keep_first() {
        let csv = "country,year,rgdpe_pc\nA,2000,1\nA,2000,2\nA,2001,3\n";
        let dataset = GdpDataset::from_csv_reader(csv.as_bytes()).unwrap();
        let a = dataset.series("A").unwrap();
        assert_eq!(a.points(), &[GdpPoint::new(2000, 1.0), GdpPoint::new(2001, 3.0)]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "country,year,gdp\nA,2000,1\n";
        let err = GdpDataset::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("rgdpe_pc"));
    }

    #[test]
    fn bad_year_is_an_error() {
        let csv = "country,year,rgdpe_pc\nA,two thousand,1\n";
        assert!(GdpDataset::from_csv_reader(csv.as_bytes()).is_err());
    }

    #[tokio::test]
    async fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("mtc_dataset_{}.csv", std::process::id()));
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let dataset = GdpDataset::load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(dataset.countries().len(), 2);

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
