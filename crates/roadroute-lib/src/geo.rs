//! Spherical-earth geometry used for the search heuristic and turn detection.
//!
//! Both functions treat the earth as a sphere of radius [`EARTH_RADIUS_METERS`].
//! The haversine distance is a metric on that sphere, which is what makes it a
//! consistent A* heuristic: it is symmetric, zero only for identical points and
//! satisfies the triangle inequality up to floating-point error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Segments shorter than this carry no usable direction.
const MIN_SEGMENT_METERS: f64 = 1e-9;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside the usual degree ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Self) -> f64 {
        distance(*self, *other)
    }

    /// Initial bearing towards `other` in degrees.
    pub fn bearing_to(&self, other: &Self) -> f64 {
        bearing(*self, *other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Returned by [`checked_bearing`] when the two points coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateBearing;

impl fmt::Display for DegenerateBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("bearing is undefined for a zero-length segment")
    }
}

impl std::error::Error for DegenerateBearing {}

/// Great-circle distance between `a` and `b` in meters (haversine formula).
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_METERS * c
}

/// Initial compass bearing in `[0, 360)` when travelling from `a` to `b`.
///
/// The result is meaningless when `a == b`; use [`checked_bearing`] when the
/// caller cannot rule that out.
pub fn bearing(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    let degrees = (x.atan2(y).to_degrees() + 360.0) % 360.0;
    // -0.0 and values within an ulp of 360 both fold onto 0.
    if degrees >= 360.0 || degrees == 0.0 {
        0.0
    } else {
        degrees
    }
}

/// Like [`bearing`], but rejects zero-length segments.
pub fn checked_bearing(a: Coordinate, b: Coordinate) -> Result<f64, DegenerateBearing> {
    if distance(a, b) < MIN_SEGMENT_METERS {
        return Err(DegenerateBearing);
    }
    Ok(bearing(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POKHARA: Coordinate = Coordinate::new(28.2096, 83.9856);
    const WALING: Coordinate = Coordinate::new(27.9833, 83.7667);
    const SYANGJA: Coordinate = Coordinate::new(28.0946, 83.8723);

    #[test]
    fn distance_is_zero_for_identical_points() {
        assert_eq!(distance(POKHARA, POKHARA), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = distance(POKHARA, WALING);
        let backward = distance(WALING, POKHARA);
        assert!((forward - backward).abs() < 1e-9);
        assert!(forward > 30_000.0 && forward < 35_000.0, "got {forward}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_satisfies_triangle_inequality() {
        let direct = distance(POKHARA, WALING);
        let via = distance(POKHARA, SYANGJA) + distance(SYANGJA, WALING);
        assert!(direct <= via + 1e-6);
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!((bearing(origin, Coordinate::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinate::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinate::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing(origin, Coordinate::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_is_always_in_range() {
        let points = [POKHARA, WALING, SYANGJA, Coordinate::new(-45.0, 170.0)];
        for a in points {
            for b in points {
                if a == b {
                    continue;
                }
                let value = bearing(a, b);
                assert!((0.0..360.0).contains(&value), "{value}");
            }
        }
    }

    #[test]
    fn checked_bearing_rejects_zero_length_segment() {
        assert_eq!(checked_bearing(POKHARA, POKHARA), Err(DegenerateBearing));
        assert!(checked_bearing(POKHARA, WALING).is_ok());
    }

    #[test]
    fn coordinate_validation() {
        assert!(POKHARA.is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }
}
