// Mapper to convert domain models to JSON response types
use crate::domain::displacement::{Displacement, DisplacementPoint, DisplacementSeries};
use crate::domain::map_view::{MapView, Marker};
use crate::domain::position::GeoBounds;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MarkerJson {
    pub receiver: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct CenterJson {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct BoundsJson {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

#[derive(Debug, Serialize)]
pub struct MapViewJson {
    pub markers: Vec<MarkerJson>,
    pub center: Option<CenterJson>,
    pub bounds: Option<BoundsJson>,
    pub zoom: u8,
}

#[derive(Debug, Serialize)]
pub struct PointJson {
    pub gpst: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<i64>,
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct SeriesJson {
    pub column: &'static str,
    pub points: Vec<PointJson>,
}

#[derive(Debug, Serialize)]
pub struct DisplacementJson {
    pub receiver: String,
    pub series: Vec<SeriesJson>,
}

pub fn marker_to_json(marker: Marker) -> MarkerJson {
    MarkerJson {
        receiver: marker.receiver,
        latitude: marker.latitude,
        longitude: marker.longitude,
    }
}

pub fn map_view_to_json(view: MapView) -> MapViewJson {
    MapViewJson {
        markers: view.markers.into_iter().map(marker_to_json).collect(),
        center: view.center.map(|(lat, lon)| CenterJson { lat, lon }),
        bounds: view.bounds.map(bounds_to_json),
        zoom: view.zoom,
    }
}

fn bounds_to_json(bounds: GeoBounds) -> BoundsJson {
    BoundsJson {
        west: bounds.min_longitude,
        east: bounds.max_longitude,
        south: bounds.min_latitude,
        north: bounds.max_latitude,
    }
}

pub fn displacement_to_json(displacement: Displacement) -> DisplacementJson {
    DisplacementJson {
        receiver: displacement.receiver,
        series: displacement.series.into_iter().map(series_to_json).collect(),
    }
}

fn series_to_json(series: DisplacementSeries) -> SeriesJson {
    SeriesJson {
        column: series.axis.label(),
        points: series.points.into_iter().map(point_to_json).collect(),
    }
}

fn point_to_json(point: DisplacementPoint) -> PointJson {
    PointJson {
        gpst: point.gpst,
        time_ms: point.time_ms,
        value: point.value,
    }
}
