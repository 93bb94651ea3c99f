// WGS84 ECEF -> geodetic conversion (closed form, no iteration)

/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6378137.0;

/// WGS84 first eccentricity
pub const WGS84_E: f64 = 0.081819190842622;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    /// Degrees
    pub latitude: f64,
    /// Degrees
    pub longitude: f64,
    /// Meters above the ellipsoid, may be negative
    pub altitude: f64,
}

/// Convert ECEF coordinates (meters) to WGS84 latitude/longitude/altitude.
///
/// Near the poles `p` approaches zero and the altitude term `p / cos(lat)`
/// becomes unstable. Nothing is special-cased there.
pub fn ecef_to_geodetic(x: f64, y: f64, z: f64) -> Geodetic {
    let a = WGS84_A;
    let e2 = WGS84_E * WGS84_E;

    let lon = y.atan2(x);

    let b = (a * a * (1.0 - e2)).sqrt();
    let ep = ((a * a - b * b) / (b * b)).sqrt();
    let p = (x * x + y * y).sqrt();
    let th = (a * z).atan2(b * p);

    let lat = (z + ep * ep * b * th.sin().powi(3)).atan2(p - e2 * a * th.cos().powi(3));
    let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
    let alt = p / lat.cos() - n;

    Geodetic {
        latitude: lat.to_degrees(),
        longitude: lon.to_degrees(),
        altitude: alt,
    }
}
