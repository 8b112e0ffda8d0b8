//! Country records in the shape served by the REST Countries API
//! (`fields=name,latlng,flags,population,capital,region`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::GeoResult;
use crate::geo::GeoCoordinate;
use crate::tracker::{DecorationKind, SurfaceDecoration};

#[derive(Debug, Deserialize)]
struct RawCountry {
    name: RawName,
    #[serde(default)]
    latlng: Option<Vec<f64>>,
    #[serde(default)]
    flags: Option<RawFlags>,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    region: String,
    #[serde(default)]
    population: u64,
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RawFlags {
    png: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub coordinate: GeoCoordinate,
    pub flag_url: Option<String>,
    pub capital: Option<String>,
    pub region: String,
    pub population: u64,
}

impl Country {
    /// Capital, region and population, one per line.
    pub fn details(&self) -> String {
        format!(
            "Capital: {}\nRegion: {}\nPopulation: {}",
            self.capital.as_deref().unwrap_or("—"),
            self.region,
            group_thousands(self.population)
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Parses a JSON array of country records. Records without a usable
    /// `latlng` are skipped.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: Vec<RawCountry> =
            serde_json::from_str(json).context("Failed to parse country list")?;
        let total = raw.len();

        let countries: Vec<Country> = raw.into_iter().filter_map(convert).collect();

        if countries.len() < total {
            info!(
                "Loaded {} countries ({} skipped without coordinates)",
                countries.len(),
                total - countries.len()
            );
        } else {
            info!("Loaded {} countries", countries.len());
        }
        Ok(Self { countries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read country file: {:?}", path))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid country file: {:?}", path))
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    /// First country whose common name contains `query`, ignoring case.
    /// An empty or blank query matches nothing.
    pub fn search(&self, query: &str) -> Option<(usize, &Country)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .enumerate()
            .find(|(_, c)| c.name.to_lowercase().contains(&query))
    }

    /// One flag per country at `radius`, tagged with the country's index.
    pub fn flag_decorations(&self, radius: f64, width: f64, height: f64) -> GeoResult<Vec<SurfaceDecoration>> {
        self.countries
            .iter()
            .enumerate()
            .map(|(i, c)| {
                SurfaceDecoration::new(c.coordinate, radius, DecorationKind::Flag { width, height })
                    .map(|d| d.with_source(i))
            })
            .collect()
    }
}

fn convert(raw: RawCountry) -> Option<Country> {
    let name = raw.name.common;

    let coordinate = match raw.latlng.as_deref() {
        Some(&[lat, lon]) => match GeoCoordinate::new(lat, lon) {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping {}: {}", name, e);
                return None;
            }
        },
        Some(other) => {
            warn!("Skipping {}: latlng has {} values", name, other.len());
            return None;
        }
        None => {
            debug!("Skipping {}: no latlng", name);
            return None;
        }
    };

    Some(Country {
        name,
        coordinate,
        flag_url: raw.flags.and_then(|f| f.png),
        capital: raw.capital.into_iter().next(),
        region: raw.region,
        population: raw.population,
    })
}
