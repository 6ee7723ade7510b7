use std::fmt;

/// A geographic position in degrees.
///
/// Equality is exact on both coordinates. The remote directory returns
/// coordinate-stable records, so two points compare equal iff they refer to
/// the same pin on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// An axis-aligned bounding box given by its south-west and north-east
/// corners. Does not wrap around the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    pub sw: MapPoint,
    pub ne: MapPoint,
}

impl MapBbox {
    #[must_use]
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.sw.lat <= self.ne.lat && self.sw.lng <= self.ne.lng
    }

    /// Containment is inclusive at all four borders.
    #[must_use]
    pub fn contains(&self, p: MapPoint) -> bool {
        p.lat >= self.sw.lat && p.lat <= self.ne.lat && p.lng >= self.sw.lng && p.lng <= self.ne.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_equality_is_exact() {
        let p = MapPoint::new(19.4327402, -99.1331565);
        assert_eq!(p, MapPoint::new(19.4327402, -99.1331565));
        assert_ne!(p, MapPoint::new(19.4327403, -99.1331565));
        assert_ne!(p, MapPoint::new(19.4327402, -99.1331564));
    }

    #[test]
    fn bbox_contains_is_inclusive() {
        let bbox = MapBbox::new(MapPoint::new(-10.0, -10.0), MapPoint::new(10.0, 10.0));
        assert!(bbox.is_valid());
        assert!(bbox.contains(MapPoint::new(0.0, 0.0)));
        assert!(bbox.contains(MapPoint::new(-10.0, 10.0)));
        assert!(bbox.contains(MapPoint::new(10.0, -10.0)));
        assert!(!bbox.contains(MapPoint::new(10.1, 0.0)));
        assert!(!bbox.contains(MapPoint::new(0.0, -10.1)));
    }

    #[test]
    fn bbox_with_switched_corners_is_invalid() {
        let bbox = MapBbox::new(MapPoint::new(10.0, 10.0), MapPoint::new(-10.0, -10.0));
        assert!(!bbox.is_valid());
    }
}
