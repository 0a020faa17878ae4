//! Parsers for command-line values that clap cannot derive on its own.

use roadroute_lib::Coordinate;

/// Parse a `LAT,LON` pair in decimal degrees.
///
/// Used as a clap `value_parser`, so errors are plain strings.
pub fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{value}'"))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;

    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        return Err(format!(
            "coordinate {value} is out of range (latitude -90..90, longitude -180..180)"
        ));
    }
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_pairs_with_whitespace() {
        let coordinate = parse_coordinate("-33.8688, 151.2093").expect("valid pair");
        assert_eq!(coordinate, Coordinate::new(-33.8688, 151.2093));
    }

    #[test]
    fn rejects_missing_separator() {
        let error = parse_coordinate("28.2").expect_err("no comma");
        assert!(error.contains("LAT,LON"));
    }

    #[test]
    fn rejects_non_numeric_parts() {
        assert!(parse_coordinate("north,83.9")
            .expect_err("bad latitude")
            .contains("latitude"));
        assert!(parse_coordinate("28.2,east")
            .expect_err("bad longitude")
            .contains("longitude"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(parse_coordinate("95.0,10.0").is_err());
        assert!(parse_coordinate("10.0,181.0").is_err());
        assert!(parse_coordinate("NaN,0").is_err());
    }
}
