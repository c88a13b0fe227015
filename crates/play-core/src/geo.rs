use play_domain::config::GeoCoordinate;

use crate::constants::EARTH_RADIUS_METERS;

/// Distancia de gran círculo en metros.
pub fn haversine_meters(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    let (lat1, lat2) = (a.latitude.to_radians(), b.latitude.to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().min(1.0).asin()
}
