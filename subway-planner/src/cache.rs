//! Caching layer for route queries.
//!
//! A network does not change once loaded, so the outcome of a query depends
//! only on its (start, end) pair. Both routes and "no route" answers are
//! cached; timeouts are not, since a retry may succeed.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::domain::{PathResult, StationId};
use crate::planner::{RouteError, RoutePlanner};

/// Cache key: (start, end).
type RouteKey = (StationId, StationId);

/// Cached query outcome.
type RouteEntry = Result<Arc<PathResult>, RouteError>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Route planner with caching.
///
/// Wraps a `RoutePlanner` and memoises its answers.
pub struct CachedRoutePlanner {
    planner: RoutePlanner,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl CachedRoutePlanner {
    /// Create a new cached planner.
    pub fn new(planner: RoutePlanner, cache_config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { planner, routes }
    }

    /// Find a route, using the cache if available.
    pub fn route(&self, start: &str, end: &str) -> RouteEntry {
        let key = (StationId::new(start), StationId::new(end));
        if let Some(entry) = self.routes.get(&key) {
            trace!(start, end, "Route cache hit");
            return entry;
        }

        let entry = self.planner.route(start, end).map(Arc::new);
        if !matches!(entry, Err(RouteError::Timeout)) {
            self.routes.insert(key, entry.clone());
        }
        entry
    }

    /// The wrapped planner.
    pub fn planner(&self) -> &RoutePlanner {
        &self.planner
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.run_pending_tasks();
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Line, Position, Station, TransitNetwork};
    use crate::planner::PlannerConfig;

    fn planner(config: PlannerConfig) -> RoutePlanner {
        let network = TransitNetwork::new(
            vec![
                Station::new("A", "Alpha", Position::new(0.0, 0.0, 0.0)),
                Station::new("B", "Beta", Position::new(3.0, 4.0, 0.0)),
                Station::new("C", "Gamma", Position::new(100.0, 0.0, 0.0)),
            ],
            vec![Line::new(
                "l1",
                "L1",
                "#000",
                vec![StationId::new("A"), StationId::new("B")],
            )],
        )
        .unwrap();
        RoutePlanner::new(Arc::new(network), config)
    }

    fn cached_planner() -> CachedRoutePlanner {
        CachedRoutePlanner::new(planner(PlannerConfig::default()), &CacheConfig::default())
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 10_000);
    }

    #[test]
    fn cached_answer_matches_planner() {
        let cached = cached_planner();

        let first = cached.route("A", "B").unwrap();
        let second = cached.route("A", "B").unwrap();

        assert_eq!(first.total_distance, 5.0);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, cached.planner().route("A", "B").unwrap());
    }

    #[test]
    fn not_found_is_cached() {
        let cached = cached_planner();

        assert!(matches!(cached.route("A", "C"), Err(RouteError::Unreachable { .. })));
        assert!(matches!(cached.route("A", "Z"), Err(RouteError::UnknownStation(_))));
        assert_eq!(cached.entry_count(), 2);
    }

    #[test]
    fn direction_is_part_of_key() {
        let cached = cached_planner();

        cached.route("A", "B").unwrap();
        cached.route("B", "A").unwrap();
        assert_eq!(cached.entry_count(), 2);
    }

    #[test]
    fn timeouts_are_not_cached() {
        let config = PlannerConfig::default().with_deadline(Duration::ZERO);
        let cached = CachedRoutePlanner::new(planner(config), &CacheConfig::default());

        assert!(matches!(cached.route("A", "B"), Err(RouteError::Timeout)));
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn invalidate_all_clears() {
        let cached = cached_planner();

        cached.route("A", "B").unwrap();
        assert_eq!(cached.entry_count(), 1);

        cached.invalidate_all();
        assert_eq!(cached.entry_count(), 0);
    }
}
