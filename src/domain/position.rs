// Position domain models
use super::geodesy::{ecef_to_geodetic, Geodetic};
use chrono::{NaiveDateTime, TimeZone, Utc};

/// GPST layouts seen in solution logs when the time column is a single token
const GPST_FORMATS: &[&str] = &[
    "%Y/%m/%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d_%H:%M:%S%.f",
];

/// One row of a position log before it is attributed to a receiver
#[derive(Debug, Clone, PartialEq)]
pub struct EcefObservation {
    pub gpst: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefObservation {
    pub fn new(gpst: String, x: f64, y: f64, z: f64) -> Self {
        Self { gpst, x, y, z }
    }

    pub fn to_geodetic(&self) -> Geodetic {
        ecef_to_geodetic(self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSample {
    pub gpst: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub receiver: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl PositionSample {
    pub fn new(observation: EcefObservation, receiver: String, geodetic: Geodetic) -> Self {
        Self {
            gpst: observation.gpst,
            x: observation.x,
            y: observation.y,
            z: observation.z,
            receiver,
            latitude: geodetic.latitude,
            longitude: geodetic.longitude,
            altitude: geodetic.altitude,
        }
    }

    /// GPST label as milliseconds since the Unix epoch, when it is a calendar timestamp
    pub fn gpst_millis(&self) -> Option<i64> {
        GPST_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&self.gpst, fmt).ok())
            .map(|t| Utc.from_utc_datetime(&t).timestamp_millis())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeoBounds {
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    pub fn padded(&self, margin_deg: f64) -> Self {
        Self {
            min_latitude: self.min_latitude - margin_deg,
            max_latitude: self.max_latitude + margin_deg,
            min_longitude: self.min_longitude - margin_deg,
            max_longitude: self.max_longitude + margin_deg,
        }
    }
}

/// All samples of all receivers, in assembly order
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    samples: Vec<PositionSample>,
}

impl Dataset {
    pub fn new(samples: Vec<PositionSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[PositionSample] {
        &self.samples
    }

    /// Rows of one receiver (exact name match), in dataset order
    pub fn for_receiver<'a>(&'a self, receiver: &'a str) -> impl Iterator<Item = &'a PositionSample> + 'a {
        self.samples.iter().filter(move |s| s.receiver == receiver)
    }

    pub fn contains_receiver(&self, receiver: &str) -> bool {
        self.samples.iter().any(|s| s.receiver == receiver)
    }

    /// First row of each receiver, ordered by first appearance
    pub fn first_per_receiver(&self) -> Vec<&PositionSample> {
        let mut seen: Vec<&str> = Vec::new();
        let mut firsts = Vec::new();

        for sample in &self.samples {
            if !seen.contains(&sample.receiver.as_str()) {
                seen.push(&sample.receiver);
                firsts.push(sample);
            }
        }

        firsts
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        let first = self.samples.first()?;
        let init = GeoBounds {
            min_latitude: first.latitude,
            max_latitude: first.latitude,
            min_longitude: first.longitude,
            max_longitude: first.longitude,
        };

        Some(self.samples.iter().fold(init, |b, s| GeoBounds {
            min_latitude: b.min_latitude.min(s.latitude),
            max_latitude: b.max_latitude.max(s.latitude),
            min_longitude: b.min_longitude.min(s.longitude),
            max_longitude: b.max_longitude.max(s.longitude),
        }))
    }
}
