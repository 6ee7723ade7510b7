use pudo_entities::geo::{MapBbox, MapPoint};

/// Ordered set of the coordinates currently shown as markers.
///
/// One entry per displayed pin, no two entries equal (equality is exact on
/// both floats, see [`MapPoint`]). The registry is the single source of
/// truth for "is this location already shown" and must be mutated in
/// lockstep with the actual marker layer: every insert corresponds to a
/// created marker, every removal to a destroyed one.
#[derive(Debug, Default, Clone)]
pub struct MarkerRegistry {
    entries: Vec<MapPoint>,
}

impl MarkerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a coordinate unless an equal one is already present.
    ///
    /// Returns `false` (and leaves the registry untouched) on a duplicate.
    pub fn add(&mut self, pos: MapPoint) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.entries.push(pos);
        true
    }

    #[must_use]
    pub fn contains(&self, pos: MapPoint) -> bool {
        self.entries.iter().any(|entry| *entry == pos)
    }

    /// Removes `pos` if it lies outside `bbox`.
    ///
    /// Returns `true` iff an entry was removed.
    pub fn remove_if_outside(&mut self, bbox: &MapBbox, pos: MapPoint) -> bool {
        if bbox.contains(pos) {
            return false;
        }
        let Some(index) = self.entries.iter().position(|entry| *entry == pos) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    /// Drops every entry outside `bbox` and returns the removed coordinates
    /// so the caller can destroy the corresponding markers in the same pass.
    pub fn prune_outside(&mut self, bbox: &MapBbox) -> Vec<MapPoint> {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if bbox.contains(*entry) {
                true
            } else {
                removed.push(*entry);
                false
            }
        });
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MapPoint> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(sw_lat: f64, sw_lng: f64, ne_lat: f64, ne_lng: f64) -> MapBbox {
        MapBbox::new(MapPoint::new(sw_lat, sw_lng), MapPoint::new(ne_lat, ne_lng))
    }

    #[test]
    fn add_skips_duplicates() {
        let mut registry = MarkerRegistry::new();
        assert!(registry.add(MapPoint::new(19.40, -99.10)));
        assert!(!registry.add(MapPoint::new(19.40, -99.10)));
        assert!(registry.add(MapPoint::new(19.41, -99.10)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn adding_the_same_set_twice_is_idempotent() {
        let points = [
            MapPoint::new(19.40, -99.10),
            MapPoint::new(19.42, -99.12),
            MapPoint::new(19.44, -99.14),
        ];
        let mut registry = MarkerRegistry::new();
        for p in points {
            assert!(registry.add(p));
        }
        for p in points {
            assert!(!registry.add(p));
        }
        assert_eq!(registry.len(), points.len());
    }

    #[test]
    fn remove_if_outside() {
        let bounds = bbox(19.0, -100.0, 20.0, -99.0);
        let inside = MapPoint::new(19.5, -99.5);
        let outside = MapPoint::new(21.0, -99.5);
        let mut registry = MarkerRegistry::new();
        registry.add(inside);
        registry.add(outside);

        assert!(!registry.remove_if_outside(&bounds, inside));
        assert!(registry.remove_if_outside(&bounds, outside));
        // already gone
        assert!(!registry.remove_if_outside(&bounds, outside));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(inside));
    }

    #[test]
    fn prune_is_sound() {
        let bounds = bbox(19.0, -100.0, 20.0, -99.0);
        let mut registry = MarkerRegistry::new();
        let all = [
            MapPoint::new(19.5, -99.5),
            MapPoint::new(18.9, -99.5),
            MapPoint::new(19.5, -98.9),
            MapPoint::new(19.0, -100.0), // on the border: stays
        ];
        for p in all {
            registry.add(p);
        }

        let removed = registry.prune_outside(&bounds);

        assert_eq!(removed.len(), 2);
        assert!(registry.iter().all(|p| bounds.contains(p)));
        assert!(removed.iter().all(|p| !bounds.contains(*p)));
        assert_eq!(registry.len() + removed.len(), all.len());
    }
}
