//! Ground-area estimation for user-drawn parcels.
//!
//! Vertices arrive as latitude/longitude pairs in decimal degrees. The ring is
//! projected onto a local plane (equirectangular about the ring's mean
//! latitude) and measured with the shoelace formula. The approximation holds
//! for urban parcels of a few hundred to a few thousand square meters; large
//! or near-polar polygons need an ellipsoidal formula instead.

use serde::{Deserialize, Serialize};

/// Length of one degree of latitude, in meters, on the spherical earth model.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// A polygon corner in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "VertexRepr", into = "[f64; 2]")]
pub struct Vertex {
    pub lat: f64,
    pub lng: f64,
}

impl Vertex {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Map clients send either `[lat, lng]` pairs or Leaflet-style `{lat, lng}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum VertexRepr {
    Pair([f64; 2]),
    Object { lat: f64, lng: f64 },
}

impl From<VertexRepr> for Vertex {
    fn from(value: VertexRepr) -> Self {
        match value {
            VertexRepr::Pair([lat, lng]) => Vertex { lat, lng },
            VertexRepr::Object { lat, lng } => Vertex { lat, lng },
        }
    }
}

impl From<Vertex> for [f64; 2] {
    fn from(value: Vertex) -> Self {
        [value.lat, value.lng]
    }
}

/// Rejection of a vertex sequence that cannot describe a parcel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidPolygon {
    #[error("invalid polygon: need at least 3 points, got {0}")]
    TooFewVertices(usize),
    #[error("invalid polygon: vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
}

/// Returns a closed copy of `vertices`, appending the first vertex when the
/// ring is open. Empty input yields an empty ring.
pub fn close_ring(vertices: &[Vertex]) -> Vec<Vertex> {
    let mut ring = vertices.to_vec();
    if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
        if first != last {
            ring.push(*first);
        }
    }
    ring
}

/// Ground area of the parcel outlined by `vertices`, in square meters.
///
/// The ring may be open or already closed. Winding order does not affect the
/// result. Self-intersecting rings are not detected; the magnitude of their
/// signed area is returned.
pub fn area(vertices: &[Vertex]) -> Result<f64, InvalidPolygon> {
    signed_area(vertices).map(f64::abs)
}

/// Signed projected area in square meters: positive for counter-clockwise
/// rings (east as x, north as y), negative for clockwise ones.
pub fn signed_area(vertices: &[Vertex]) -> Result<f64, InvalidPolygon> {
    let distinct = distinct_vertices(vertices)?;
    let mean_lat = distinct.iter().map(|vertex| vertex.lat).sum::<f64>() / distinct.len() as f64;
    let x_scale = METERS_PER_DEGREE * mean_lat.to_radians().cos();

    let ring = close_ring(&distinct);
    let origin = ring[0];
    let projected: Vec<(f64, f64)> = ring
        .iter()
        .map(|vertex| {
            (
                (vertex.lng - origin.lng) * x_scale,
                (vertex.lat - origin.lat) * METERS_PER_DEGREE,
            )
        })
        .collect();

    let twice_area: f64 = projected
        .windows(2)
        .map(|pair| pair[0].0 * pair[1].1 - pair[1].0 * pair[0].1)
        .sum();

    Ok(twice_area / 2.0)
}

/// Open ring with consecutive repeats and the caller's closing vertex removed.
fn distinct_vertices(vertices: &[Vertex]) -> Result<Vec<Vertex>, InvalidPolygon> {
    if let Some(index) = vertices.iter().position(|vertex| !vertex.is_finite()) {
        return Err(InvalidPolygon::NonFiniteVertex { index });
    }

    let mut distinct: Vec<Vertex> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if distinct.last() != Some(vertex) {
            distinct.push(*vertex);
        }
    }
    if distinct.len() > 1 && distinct.first() == distinct.last() {
        distinct.pop();
    }

    if distinct.len() < 3 {
        return Err(InvalidPolygon::TooFewVertices(distinct.len()));
    }
    Ok(distinct)
}
