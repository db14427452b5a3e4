use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Road-width band mapped to the floor-space index it permits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoningRuleBand {
    /// Inclusive upper bound on road width in meters; `None` is unbounded.
    pub max_road_width_m: Option<f64>,
    pub fsi: f64,
}

impl ZoningRuleBand {
    pub fn bounded(max_road_width_m: f64, fsi: f64) -> Self {
        Self {
            max_road_width_m: Some(max_road_width_m),
            fsi,
        }
    }

    pub fn unbounded(fsi: f64) -> Self {
        Self {
            max_road_width_m: None,
            fsi,
        }
    }

    pub fn upper_bound(&self) -> f64 {
        self.max_road_width_m.unwrap_or(f64::INFINITY)
    }

    pub fn admits(&self, road_width_m: f64) -> bool {
        self.upper_bound() >= road_width_m
    }
}

/// One edition of the zoning code: FSI bands plus the envelope constants.
///
/// Instances are validated on construction and never mutated afterwards, so a
/// single code can be shared by every request through an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoningCode {
    bands: Vec<ZoningRuleBand>,
    coverage_ratio: f64,
    floor_height_m: f64,
    height_factor: f64,
}

#[derive(Deserialize)]
struct ZoningCodeDocument {
    bands: Vec<ZoningRuleBand>,
    coverage_ratio: f64,
    floor_height_m: f64,
    height_factor: f64,
}

impl<'de> Deserialize<'de> for ZoningCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let doc = ZoningCodeDocument::deserialize(deserializer)?;
        ZoningCode::new(
            doc.bands,
            doc.coverage_ratio,
            doc.floor_height_m,
            doc.height_factor,
        )
        .map_err(serde::de::Error::custom)
    }
}

impl ZoningCode {
    pub fn new(
        bands: Vec<ZoningRuleBand>,
        coverage_ratio: f64,
        floor_height_m: f64,
        height_factor: f64,
    ) -> Result<Self, ZoningCodeError> {
        if bands.is_empty() {
            return Err(ZoningCodeError::NoBands);
        }

        let mut previous: Option<f64> = None;
        for (index, band) in bands.iter().enumerate() {
            if !band.fsi.is_finite() || band.fsi <= 0.0 {
                return Err(ZoningCodeError::InvalidFsi {
                    index,
                    fsi: band.fsi,
                });
            }

            match band.max_road_width_m {
                None if index + 1 != bands.len() => {
                    return Err(ZoningCodeError::UnboundedBandNotLast { index });
                }
                None => {}
                Some(bound) if !bound.is_finite() || bound <= 0.0 => {
                    return Err(ZoningCodeError::InvalidBound { index, bound });
                }
                Some(bound) => {
                    if previous.is_some_and(|prior| bound <= prior) {
                        return Err(ZoningCodeError::BandsOutOfOrder { index });
                    }
                    previous = Some(bound);
                }
            }
        }

        if !coverage_ratio.is_finite() || coverage_ratio <= 0.0 || coverage_ratio > 1.0 {
            return Err(ZoningCodeError::InvalidConstant {
                name: "coverage_ratio",
                value: coverage_ratio,
            });
        }
        if !floor_height_m.is_finite() || floor_height_m <= 0.0 {
            return Err(ZoningCodeError::InvalidConstant {
                name: "floor_height_m",
                value: floor_height_m,
            });
        }
        if !height_factor.is_finite() || height_factor <= 0.0 {
            return Err(ZoningCodeError::InvalidConstant {
                name: "height_factor",
                value: height_factor,
            });
        }

        Ok(Self {
            bands,
            coverage_ratio,
            floor_height_m,
            height_factor,
        })
    }

    /// The edition shipped with the service.
    pub fn standard() -> Self {
        Self {
            bands: vec![
                ZoningRuleBand::bounded(9.0, 1.1),
                ZoningRuleBand::bounded(12.0, 1.3),
                ZoningRuleBand::bounded(18.0, 1.5),
                ZoningRuleBand::unbounded(2.0),
            ],
            coverage_ratio: 0.65,
            floor_height_m: 3.0,
            height_factor: 1.5,
        }
    }

    /// Load and validate a code from a JSON document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ZoningCodeError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ZoningCodeError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ZoningCodeError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn bands(&self) -> &[ZoningRuleBand] {
        &self.bands
    }

    pub fn coverage_ratio(&self) -> f64 {
        self.coverage_ratio
    }

    pub fn floor_height_m(&self) -> f64 {
        self.floor_height_m
    }

    pub fn height_factor(&self) -> f64 {
        self.height_factor
    }

    /// First band, in ascending order, whose inclusive bound admits the road
    /// width. Falls back to the lowest-FSI band when nothing admits it.
    pub fn band_for(&self, road_width_m: f64) -> &ZoningRuleBand {
        self.bands
            .iter()
            .find(|band| band.admits(road_width_m))
            .unwrap_or_else(|| self.lowest_fsi_band())
    }

    fn lowest_fsi_band(&self) -> &ZoningRuleBand {
        self.bands
            .iter()
            .min_by(|a, b| a.fsi.total_cmp(&b.fsi))
            .unwrap_or(&self.bands[0])
    }
}

impl Default for ZoningCode {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ZoningCodeError {
    #[error("zoning code must define at least one band")]
    NoBands,
    #[error("band {index} has invalid fsi {fsi}")]
    InvalidFsi { index: usize, fsi: f64 },
    #[error("band {index} has invalid road width bound {bound}")]
    InvalidBound { index: usize, bound: f64 },
    #[error("band {index} bound must exceed the previous band's bound")]
    BandsOutOfOrder { index: usize },
    #[error("band {index} is unbounded but is not the last band")]
    UnboundedBandNotLast { index: usize },
    #[error("{name} has invalid value {value}")]
    InvalidConstant { name: &'static str, value: f64 },
    #[error("failed to read zoning code {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid zoning code {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
