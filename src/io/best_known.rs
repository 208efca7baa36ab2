//! Reference makespans of the classical benchmark instances.
//!
//! Optimal or best-known values for Fisher & Thompson (`ft*`) and
//! Lawrence (`la*`) instances, plus the small `aaa1` teaching example.
//!
//! # References
//! - Fisher & Thompson (1963), "Probabilistic learning combinations of local
//!   job-shop scheduling rules"
//! - Lawrence (1984), "Resource constrained project scheduling"

const BEST_KNOWN: &[(&str, i64)] = &[
    ("aaa1", 11),
    ("ft06", 55),
    ("ft10", 930),
    ("ft20", 1165),
    ("la01", 666),
    ("la02", 655),
    ("la03", 597),
    ("la04", 590),
    ("la05", 593),
    ("la06", 926),
    ("la07", 890),
    ("la08", 863),
    ("la09", 951),
    ("la10", 958),
    ("la11", 1222),
    ("la12", 1039),
    ("la13", 1150),
    ("la14", 1292),
    ("la15", 1207),
    ("la16", 945),
    ("la17", 784),
    ("la18", 848),
    ("la19", 842),
    ("la20", 902),
    ("la21", 1046),
    ("la22", 927),
    ("la23", 1032),
    ("la24", 935),
    ("la25", 977),
    ("la26", 1218),
    ("la27", 1235),
    ("la28", 1216),
    ("la29", 1152),
    ("la30", 1355),
    ("la31", 1784),
    ("la32", 1850),
    ("la33", 1719),
    ("la34", 1721),
    ("la35", 1888),
    ("la36", 1268),
    ("la37", 1397),
    ("la38", 1196),
    ("la39", 1233),
    ("la40", 1222),
];

/// Reference makespan of an instance, if it is a known benchmark.
pub fn best_known(name: &str) -> Option<i64> {
    BEST_KNOWN
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, makespan)| makespan)
}

/// Whether the instance has a reference makespan.
pub fn is_known(name: &str) -> bool {
    best_known(name).is_some()
}

/// Names of every known instance.
pub fn known_instances() -> impl Iterator<Item = &'static str> {
    BEST_KNOWN.iter().map(|&(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(best_known("ft06"), Some(55));
        assert_eq!(best_known("la40"), Some(1222));
        assert_eq!(best_known("aaa1"), Some(11));
        assert_eq!(best_known("nope"), None);
        assert!(!is_known("LA01"));
    }

    #[test]
    fn test_known_instances() {
        let names: Vec<_> = known_instances().collect();
        assert_eq!(names.len(), 44);
        assert!(names.contains(&"ft20"));
        assert!(names.iter().all(|n| is_known(n)));
    }
}
