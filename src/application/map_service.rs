// Map service - Markers and framing for the receiver map
use crate::domain::map_view::{MapView, Marker};
use crate::domain::position::Dataset;
use std::sync::Arc;

/// Margin added around the data extent, in degrees
pub const BOUNDS_MARGIN_DEG: f64 = 0.0005;

pub const DEFAULT_ZOOM: u8 = 5;

#[derive(Clone)]
pub struct MapService {
    dataset: Arc<Dataset>,
}

impl MapService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// One marker per receiver, placed at its first sample
    pub fn markers(&self) -> Vec<Marker> {
        self.dataset
            .first_per_receiver()
            .into_iter()
            .map(Marker::from_sample)
            .collect()
    }

    pub fn map_view(&self) -> MapView {
        let bounds = self.dataset.bounds();
        let center = bounds.map(|b| b.center());
        let padded = bounds.map(|b| b.padded(BOUNDS_MARGIN_DEG));

        MapView::new(self.markers(), center, padded, DEFAULT_ZOOM)
    }
}
