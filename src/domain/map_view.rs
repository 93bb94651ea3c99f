// Map view domain model
use super::position::{GeoBounds, PositionSample};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub receiver: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Marker {
    pub fn from_sample(sample: &PositionSample) -> Self {
        Self {
            receiver: sample.receiver.clone(),
            latitude: sample.latitude,
            longitude: sample.longitude,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapView {
    pub markers: Vec<Marker>,
    /// (latitude, longitude)
    pub center: Option<(f64, f64)>,
    pub bounds: Option<GeoBounds>,
    pub zoom: u8,
}

impl MapView {
    pub fn new(markers: Vec<Marker>, center: Option<(f64, f64)>, bounds: Option<GeoBounds>, zoom: u8) -> Self {
        Self {
            markers,
            center,
            bounds,
            zoom,
        }
    }
}
