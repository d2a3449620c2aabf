use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::locate::create_selector;
use crate::{Error, Result, MAP_SUBPATH};

static RE_LAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""lat"\s*:\s*(-?\d+(?:\.\d+)?)"#).expect("invalid regex: latitude")
});
static RE_LNG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""lng"\s*:\s*(-?\d+(?:\.\d+)?)"#).expect("invalid regex: longitude")
});

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// The map page of a listing: `<listing url>/kankyo/`.
pub fn map_url(listing_url: &str) -> String {
    if listing_url.ends_with('/') {
        format!("{listing_url}{MAP_SUBPATH}")
    } else {
        format!("{listing_url}/{MAP_SUBPATH}")
    }
}

/// Finds the map centre the map page embeds in its inline scripts.
/// Falls back to attribute values and then the whole serialized page.
pub fn extract_coordinates(map_document: &Html) -> Result<Coordinates> {
    let script_selector = create_selector("script")?;
    let mut haystacks = map_document
        .select(&script_selector)
        .map(|s| s.text().collect::<String>())
        .collect::<Vec<_>>();
    // Serialization escapes quotes inside attributes, so read them raw.
    haystacks.extend(
        map_document
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .flat_map(|el| el.value().attrs().map(|(_, v)| v.to_string()).collect::<Vec<_>>()),
    );
    haystacks.push(map_document.html());

    let lat = find_float(&haystacks, &RE_LAT, "latitude")?;
    let lng = find_float(&haystacks, &RE_LNG, "longitude")?;
    Ok(Coordinates { lat, lng })
}

fn find_float(haystacks: &[String], re: &Regex, field: &'static str) -> Result<f64> {
    let raw = haystacks
        .iter()
        .find_map(|s| re.captures(s))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::FieldNotFound {
            selector: format!("/{}/", re.as_str()),
            index: 0,
        })?;
    raw.parse::<f64>().map_err(|_| Error::malformed(field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_url_always_has_one_slash() {
        assert_eq!(
            map_url("https://suumo.jp/chintai/bc_100296177140/"),
            "https://suumo.jp/chintai/bc_100296177140/kankyo/"
        );
        assert_eq!(
            map_url("https://suumo.jp/chintai/bc_100296177140"),
            "https://suumo.jp/chintai/bc_100296177140/kankyo/"
        );
    }

    #[test]
    fn reads_lat_and_lng_from_scripts() {
        let doc = Html::parse_document(
            r#"<html><head><script>
            var mapOptions = {"zoom": 16, "lat": 35.6895, "lng": 139.6917};
            </script></head><body></body></html>"#,
        );
        let coords = extract_coordinates(&doc).unwrap();
        assert_eq!(coords, Coordinates { lat: 35.6895, lng: 139.6917 });
    }

    #[test]
    fn keys_may_live_in_different_scripts() {
        let doc = Html::parse_document(
            r#"<html><body>
            <script>var a = {"lat": 34.7025};</script>
            <script>var b = {"lng": 135.4959};</script>
            </body></html>"#,
        );
        let coords = extract_coordinates(&doc).unwrap();
        assert_eq!(coords.lat, 34.7025);
        assert_eq!(coords.lng, 135.4959);
    }

    #[test]
    fn missing_longitude_is_field_not_found() {
        let doc = Html::parse_document(
            r#"<html><body><script>var a = {"lat": 34.7025};</script></body></html>"#,
        );
        assert!(matches!(
            extract_coordinates(&doc),
            Err(Error::FieldNotFound { .. })
        ));
    }

    #[test]
    fn scripts_win_over_the_rest_of_the_page() {
        let doc = Html::parse_document(
            r#"<html><body>
            <p>"lat": 1.5, "lng": 2.5</p>
            <script>var c = {"lat": 35.6895, "lng": 139.6917};</script>
            </body></html>"#,
        );
        let coords = extract_coordinates(&doc).unwrap();
        assert_eq!(coords, Coordinates { lat: 35.6895, lng: 139.6917 });
    }

    #[test]
    fn coordinates_in_a_data_attribute() {
        let doc = Html::parse_document(
            r#"<html><body><div id="js-map" data-map='{"lat": 35.1, "lng": 139.1}'></div></body></html>"#,
        );
        let coords = extract_coordinates(&doc).unwrap();
        assert_eq!(coords, Coordinates { lat: 35.1, lng: 139.1 });
    }

    #[test]
    fn coordinates_in_page_text() {
        let doc = Html::parse_document(
            r#"<html><body><p>"lat": 35.1, "lng": 139.1</p></body></html>"#,
        );
        let coords = extract_coordinates(&doc).unwrap();
        assert_eq!(coords, Coordinates { lat: 35.1, lng: 139.1 });
    }
}
