// Displacement domain models - ECEF coordinates of one receiver over time

#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementPoint {
    pub gpst: String,
    pub time_ms: Option<i64>,
    pub value: f64,
}

impl DisplacementPoint {
    pub fn new(gpst: String, time_ms: Option<i64>, value: f64) -> Self {
        Self { gpst, time_ms, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "x-ecef(m)",
            Axis::Y => "y-ecef(m)",
            Axis::Z => "z-ecef(m)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplacementSeries {
    pub axis: Axis,
    pub points: Vec<DisplacementPoint>,
}

#[derive(Debug, Clone)]
pub struct Displacement {
    pub receiver: String,
    pub series: Vec<DisplacementSeries>,
}

impl Displacement {
    pub fn new(receiver: String, series: Vec<DisplacementSeries>) -> Self {
        Self { receiver, series }
    }
}
