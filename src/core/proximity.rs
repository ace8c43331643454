use crate::core::distance::haversine_miles;
use crate::models::{Coordinate, RankedMatch, Target};

/// Rank targets by great-circle distance from `origin` and keep the nearest `k`
///
/// Ties keep the order of `targets` (stable sort). A `k` larger than the
/// target list returns every target; a `k` of zero is treated as one.
pub fn rank_targets(origin: Coordinate, targets: &[Target], k: usize) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = targets
        .iter()
        .map(|target| RankedMatch {
            distance_miles: haversine_miles(origin, target.coordinate()),
            target: target.clone(),
        })
        .collect();

    // `sort_by` is stable, which keeps equal distances in list order
    ranked.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
    ranked.truncate(k.max(1));

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_targets;

    fn origin() -> Coordinate {
        Coordinate::new(47.15, -122.30).unwrap()
    }

    #[test]
    fn test_nearest_first() {
        let ranked = rank_targets(origin(), &default_targets(), 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].target.id, "puyallup");
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_miles <= pair[1].distance_miles);
        }
    }

    #[test]
    fn test_respects_k() {
        let ranked = rank_targets(origin(), &default_targets(), 2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_k_larger_than_targets() {
        let targets = default_targets();
        let ranked = rank_targets(origin(), &targets[..3], 10);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_zero_k_returns_one() {
        let ranked = rank_targets(origin(), &default_targets(), 0);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_ties_keep_list_order() {
        // Mirror images across the origin's meridian are equidistant
        let targets = vec![
            Target::new("east", "East", 0.0, 1.0),
            Target::new("west", "West", 0.0, -1.0),
            Target::new("far", "Far", 0.0, 5.0),
        ];
        let here = Coordinate::new(0.0, 0.0).unwrap();

        for _ in 0..10 {
            let ranked = rank_targets(here, &targets, 3);
            assert_eq!(ranked[0].target.id, "east");
            assert_eq!(ranked[1].target.id, "west");
            assert_eq!(ranked[2].target.id, "far");
        }

        let swapped = vec![targets[1].clone(), targets[0].clone()];
        let ranked = rank_targets(here, &swapped, 2);
        assert_eq!(ranked[0].target.id, "west");
    }

    #[test]
    fn test_empty_targets() {
        assert!(rank_targets(origin(), &[], 3).is_empty());
    }
}
