use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateParseError {
    #[error("Expected two comma-separated values, got {0}")]
    WrongArity(usize),

    #[error("Invalid latitude: {0}")]
    InvalidLatitude(String),

    #[error("Invalid longitude: {0}")]
    InvalidLongitude(String),
}

/// Parse a "lat,lng" string into a [`Coordinate`]. Whitespace around either
/// component is ignored.
pub fn parse_coordinate(input: &str) -> Result<Coordinate, CoordinateParseError> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return Err(CoordinateParseError::WrongArity(parts.len()));
    }

    let lat_text = parts[0].trim();
    let lng_text = parts[1].trim();

    let latitude: f64 = lat_text
        .parse()
        .map_err(|_| CoordinateParseError::InvalidLatitude(lat_text.to_string()))?;
    let longitude: f64 = lng_text
        .parse()
        .map_err(|_| CoordinateParseError::InvalidLongitude(lng_text.to_string()))?;

    Ok(Coordinate {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pair_with_space() {
        let coord = parse_coordinate("50.230, 13.4050").expect("Should parse");
        assert_eq!(coord.latitude, 50.230);
        assert_eq!(coord.longitude, 13.4050);
    }

    #[test]
    fn parses_pair_without_space() {
        let coord = parse_coordinate("23.430,55.4050").expect("Should parse");
        assert_eq!(coord.latitude, 23.430);
        assert_eq!(coord.longitude, 55.4050);
    }

    #[test]
    fn parses_negative_values() {
        let coord = parse_coordinate("-33.87, -151.21").expect("Should parse");
        assert_eq!(coord.latitude, -33.87);
        assert_eq!(coord.longitude, -151.21);
    }

    #[test]
    fn rejects_single_value() {
        assert_eq!(
            parse_coordinate("50.230"),
            Err(CoordinateParseError::WrongArity(1))
        );
    }

    #[test]
    fn rejects_three_values() {
        assert_eq!(
            parse_coordinate("1.0,2.0,3.0"),
            Err(CoordinateParseError::WrongArity(3))
        );
    }

    #[test]
    fn rejects_non_numeric_latitude() {
        assert_eq!(
            parse_coordinate("north, 13.4"),
            Err(CoordinateParseError::InvalidLatitude("north".to_string()))
        );
    }

    #[test]
    fn rejects_empty_longitude() {
        assert_eq!(
            parse_coordinate("50.230,"),
            Err(CoordinateParseError::InvalidLongitude(String::new()))
        );
    }
}
