//! OSRM HTTP adapter for distance matrices.

use serde::Deserialize;
use tracing::debug;

use crate::error::DistanceError;
use crate::matrix::DistanceMatrix;
use crate::point::Point;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "car".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn table_url(&self, points: &[Point]) -> String {
        let coords = points
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.lng(), point.lat()))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/table/v1/{}/{}?annotations=distance",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            coords
        )
    }
}

impl DistanceMatrixProvider for OsrmClient {
    fn matrix_for(&self, points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        if points.is_empty() {
            return DistanceMatrix::from_rows(Vec::new());
        }

        let url = self.table_url(points);
        debug!(points = points.len(), "requesting OSRM table");

        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<OsrmTableResponse>()?;

        body.into_matrix(points.len())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OsrmTableResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    distances: Option<Vec<Vec<Option<f64>>>>,
}

impl OsrmTableResponse {
    /// `null` cells are pairs OSRM could not route.
    pub(crate) fn into_matrix(self, expected: usize) -> Result<DistanceMatrix, DistanceError> {
        if self.code != "Ok" {
            return Err(DistanceError::Api {
                status: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        let distances = self
            .distances
            .ok_or_else(|| DistanceError::Malformed("response has no distances".to_string()))?;

        let rows = distances
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.map(to_meters)).collect())
            .collect();

        let matrix = DistanceMatrix::from_rows(rows)?;
        matrix.ensure_size(expected)?;
        Ok(matrix)
    }
}

fn to_meters(value: f64) -> u64 {
    value.max(0.0).round() as u64
}
