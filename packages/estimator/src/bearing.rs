//! Road-orientation inference from street names.
//!
//! Address components are the only signal available — no parcel or road
//! network data — so the heuristic is purely lexical: a directional token
//! in the street name ("North Capitol St", "S Main St") is read as the
//! direction the lot fronts. Streets without a token fall back to the
//! configured default (south-facing).
//!
//! Compound names like "Northwest Dr" carry no standalone token and are
//! treated as no signal.

use std::sync::LazyLock;

use lawnquote_estimator_models::{EstimatorConfig, RoadOrientation};
use regex::Regex;

/// Regex for standalone directional tokens, full or single-letter
/// ("NORTH", "N", ...).
static DIRECTION_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(NORTH|SOUTH|EAST|WEST|N|S|E|W)\b").expect("valid regex"));

/// Infers the road orientation for an address.
///
/// The first directional token wins, scanning left to right. Missing or
/// signal-free street names silently fall back to
/// [`EstimatorConfig::default_road_orientation`].
#[must_use]
pub fn road_orientation(street: Option<&str>, config: &EstimatorConfig) -> RoadOrientation {
    street
        .and_then(token_orientation)
        .unwrap_or(config.default_road_orientation)
}

/// Maps the first directional token in a street name to a bearing.
fn token_orientation(street: &str) -> Option<RoadOrientation> {
    let token = DIRECTION_TOKEN_RE.find(street)?;
    match token.as_str().to_ascii_uppercase().as_str() {
        "NORTH" | "N" => Some(RoadOrientation::NORTH),
        "SOUTH" | "S" => Some(RoadOrientation::SOUTH),
        "EAST" | "E" => Some(RoadOrientation::EAST),
        "WEST" | "W" => Some(RoadOrientation::WEST),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orient(street: &str) -> RoadOrientation {
        road_orientation(Some(street), &EstimatorConfig::default())
    }

    #[test]
    fn full_tokens_map_to_cardinal_bearings() {
        assert_eq!(orient("North Capitol St"), RoadOrientation::NORTH);
        assert_eq!(orient("South Dakota Ave"), RoadOrientation::SOUTH);
        assert_eq!(orient("East Elm St"), RoadOrientation::EAST);
        assert_eq!(orient("West Maple Dr"), RoadOrientation::WEST);
    }

    #[test]
    fn single_letter_prefixes_map_too() {
        assert_eq!(orient("N State St"), RoadOrientation::NORTH);
        assert_eq!(orient("S Main St"), RoadOrientation::SOUTH);
        assert_eq!(orient("100 E Pine St"), RoadOrientation::EAST);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(orient("NORTH AVE"), RoadOrientation::NORTH);
        assert_eq!(orient("west end ln"), RoadOrientation::WEST);
    }

    #[test]
    fn first_token_wins() {
        assert_eq!(orient("East West Hwy"), RoadOrientation::EAST);
    }

    #[test]
    fn compound_names_are_no_signal() {
        assert_eq!(orient("Northwest Dr"), RoadOrientation::SOUTH);
        assert_eq!(orient("Southeast Blvd"), RoadOrientation::SOUTH);
    }

    #[test]
    fn plain_streets_fall_back_to_default() {
        assert_eq!(orient("Elm St"), RoadOrientation::SOUTH);
        assert_eq!(orient(""), RoadOrientation::SOUTH);
    }

    #[test]
    fn missing_street_falls_back_to_default() {
        assert_eq!(
            road_orientation(None, &EstimatorConfig::default()),
            RoadOrientation::SOUTH
        );
    }

    #[test]
    fn configured_default_is_honored() {
        let config = EstimatorConfig {
            default_road_orientation: RoadOrientation::EAST,
            ..EstimatorConfig::default()
        };
        assert_eq!(road_orientation(Some("Elm St"), &config), RoadOrientation::EAST);
    }
}
