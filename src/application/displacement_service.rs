// Displacement service - Per-receiver ECEF coordinates over time
use crate::domain::displacement::{Axis, Displacement, DisplacementPoint, DisplacementSeries};
use crate::domain::position::{Dataset, PositionSample};
use std::sync::Arc;

#[derive(Clone)]
pub struct DisplacementService {
    dataset: Arc<Dataset>,
}

impl DisplacementService {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// X, Y and Z series for one receiver; `None` if the receiver has no rows
    pub fn get_displacement(&self, receiver: &str) -> Option<Displacement> {
        if !self.dataset.contains_receiver(receiver) {
            return None;
        }

        let series = [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .map(|axis| DisplacementSeries {
                axis,
                points: self
                    .dataset
                    .for_receiver(receiver)
                    .map(|s| DisplacementPoint::new(s.gpst.clone(), s.gpst_millis(), value(s, axis)))
                    .collect(),
            })
            .collect();

        Some(Displacement::new(receiver.to_string(), series))
    }
}

fn value(sample: &PositionSample, axis: Axis) -> f64 {
    match axis {
        Axis::X => sample.x,
        Axis::Y => sample.y,
        Axis::Z => sample.z,
    }
}
