//! Text format for road maps.
//!
//! Each line holds either a road or the coordinates of a city:
//!
//! ```text
//! # comments run to the end of the line
//! Coimbra - Leiria: 73
//! Coimbra @ 60, 167
//! ```
//!
//! City names may contain spaces, but not `-`, `@`, `:` or `#`.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Cities;
use crate::errors::RoadMapError;

fn number(s: &str) -> Result<f64, RoadMapError> {
    s.parse()
        .map_err(|_| RoadMapError::InvalidNumber(s.to_string()))
}

impl FromStr for Cities {
    type Err = RoadMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref ROAD: Regex =
                Regex::new(r"^(?P<a>[^-@:#]+?)\s*-\s*(?P<b>[^-@:#]+?)\s*:\s*(?P<distance>\S+)$")
                    .unwrap();
            static ref LOCATION: Regex =
                Regex::new(r"^(?P<city>[^-@:#]+?)\s*@\s*(?P<x>[^,\s]+)\s*,\s*(?P<y>\S+)$").unwrap();
        }

        let mut cities = Cities::default();
        for (n, line) in s.lines().enumerate() {
            let line = match line.find('#') {
                Some(i) => &line[..i],
                None => line,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            if let Some(cap) = ROAD.captures(line) {
                let distance = number(&cap["distance"])?;
                if distance < 0.0 {
                    return Err(RoadMapError::InvalidNumber(cap["distance"].to_string()));
                }
                cities.connect(&cap["a"], &cap["b"], distance);
            } else if let Some(cap) = LOCATION.captures(line) {
                cities.locate(&cap["city"], number(&cap["x"])?, number(&cap["y"])?);
            } else {
                return Err(RoadMapError::InvalidLine {
                    line: n + 1,
                    content: line.to_string(),
                });
            }
        }
        Ok(cities)
    }
}

#[cfg(test)]
mod test {
    use searcher::SearchDomain;

    use super::*;

    #[test]
    fn roads_and_coordinates() {
        let cities: Cities = "
        # A small corner of the map
        Castelo Branco - Covilha: 62
        Guarda - Covilha: 46   # mountain road

        Castelo Branco @ 140, 124
        Covilha @ 130, 175
        Evora @ 120, -10.5
        "
        .parse()
        .unwrap();

        assert_eq!(cities.roads().count(), 2);
        assert_eq!(
            cities.cities(),
            vec!["Castelo Branco", "Covilha", "Evora", "Guarda"]
        );
        assert_eq!(cities.coordinates("Evora"), Some((120.0, -10.5)));
        assert_eq!(cities.coordinates("Guarda"), None);

        let roads = cities.actions(&"Covilha".to_string());
        assert_eq!(roads.len(), 2);
        assert_eq!(roads[0].to, "Castelo Branco");
        assert_eq!(roads[1].to, "Guarda");
        assert_eq!(cities.cost(&"Covilha".to_string(), &roads[1]).unwrap(), 46.0);
    }

    #[test]
    fn invalid_line() {
        let result = "Coimbra - Leiria: 73\nCoimbra to Lisboa\n".parse::<Cities>();
        match result {
            Err(RoadMapError::InvalidLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "Coimbra to Lisboa");
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_numbers() {
        assert!(matches!(
            "Coimbra - Leiria: far".parse::<Cities>(),
            Err(RoadMapError::InvalidNumber(_))
        ));
        assert!(matches!(
            "Coimbra - Leiria: -73".parse::<Cities>(),
            Err(RoadMapError::InvalidNumber(_))
        ));
        assert!(matches!(
            "Coimbra @ 60, north".parse::<Cities>(),
            Err(RoadMapError::InvalidNumber(_))
        ));
    }
}
