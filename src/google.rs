//! Google Distance Matrix API adapter.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::DistanceError;
use crate::matrix::DistanceMatrix;
use crate::point::Point;
use crate::traits::DistanceMatrixProvider;

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api/distancematrix/json".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GoogleDistanceClient {
    config: GoogleConfig,
    client: reqwest::blocking::Client,
}

impl GoogleDistanceClient {
    pub fn new(config: GoogleConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

fn join_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{:.6},{:.6}", point.lat(), point.lng()))
        .collect::<Vec<_>>()
        .join("|")
}

impl DistanceMatrixProvider for GoogleDistanceClient {
    fn matrix_for(&self, points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        if points.is_empty() {
            return DistanceMatrix::from_rows(Vec::new());
        }

        let locations = join_points(points);
        debug!(points = points.len(), "requesting Google distance matrix");

        let body = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("origins", locations.as_str()),
                ("destinations", locations.as_str()),
                ("key", self.config.api_key.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json::<GoogleMatrixResponse>()?;

        body.into_matrix(points.len())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GoogleMatrixResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    rows: Vec<GoogleRow>,
}

#[derive(Debug, Deserialize)]
struct GoogleRow {
    elements: Vec<GoogleElement>,
}

#[derive(Debug, Deserialize)]
struct GoogleElement {
    status: String,
    #[serde(default)]
    distance: Option<GoogleValue>,
}

#[derive(Debug, Deserialize)]
struct GoogleValue {
    value: u64,
}

impl GoogleMatrixResponse {
    /// Elements with a status other than `OK` become unreachable cells.
    pub(crate) fn into_matrix(self, expected: usize) -> Result<DistanceMatrix, DistanceError> {
        if self.status != "OK" {
            return Err(DistanceError::Api {
                status: self.status,
                message: self.error_message.unwrap_or_default(),
            });
        }

        let rows = self
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                row.elements
                    .into_iter()
                    .enumerate()
                    .map(|(j, element)| element.into_cell(i, j))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let matrix = DistanceMatrix::from_rows(rows)?;
        matrix.ensure_size(expected)?;
        Ok(matrix)
    }
}

impl GoogleElement {
    fn into_cell(self, origin: usize, destination: usize) -> Result<Option<u64>, DistanceError> {
        if self.status != "OK" {
            warn!(origin, destination, status = %self.status, "element has no route");
            return Ok(None);
        }

        self.distance
            .map(|distance| Some(distance.value))
            .ok_or_else(|| {
                DistanceError::Malformed(format!(
                    "element ({}, {}) is OK but has no distance",
                    origin, destination
                ))
            })
    }
}
