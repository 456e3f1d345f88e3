//! Stop table, routes, and directed leg durations.
//!
//! # Data layout
//!
//! Stops are interned: each unique stop name gets a [`StopId`] indexing into
//! `stops`.  Routes hold `Vec<StopId>` and durations are keyed by
//! `(StopId, StopId)`, so the hot path never hashes strings.
//!
//! A route has no separate reverse entity.  Forward traversal walks
//! `route.stops` by ascending index, backward traversal by descending index,
//! and each direction looks up its own directed duration.
//!
//! The network is built once by [`NetworkBuilder`] and is immutable
//! afterwards; share it by reference.

use rustc_hash::FxHashMap;

use ferry_core::{Coordinate, RouteId, StopId};

use crate::{NetworkError, NetworkResult};

// ── Stop / Route ──────────────────────────────────────────────────────────────

/// A named waypoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub name:  String,
    pub coord: Coordinate,
}

/// An ordered stop sequence traversed forward, then backward, per round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub name:  String,
    pub stops: Vec<StopId>,
    forward_secs:  u32,
    backward_secs: u32,
}

impl Route {
    /// Seconds to traverse the route from its first to its last stop.
    #[inline]
    pub fn forward_secs(&self) -> u32 {
        self.forward_secs
    }

    /// Seconds to traverse the route from its last stop back to its first.
    #[inline]
    pub fn backward_secs(&self) -> u32 {
        self.backward_secs
    }

    /// Duration of one full round trip.  Fits in a `u32` for every route
    /// accepted by [`NetworkBuilder::build`].
    #[inline]
    pub fn round_trip_secs(&self) -> u32 {
        self.forward_secs + self.backward_secs
    }

    pub fn first_stop(&self) -> StopId {
        self.stops[0]
    }

    pub fn last_stop(&self) -> StopId {
        self.stops[self.stops.len() - 1]
    }
}

/// One directed leg of a route traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    /// Index of `from` within `route.stops`.
    pub from_pos: usize,
    /// Index of `to` within `route.stops`.
    pub to_pos:   usize,
    pub from:     StopId,
    pub to:       StopId,
    pub secs:     u32,
}

// ── Network ───────────────────────────────────────────────────────────────────

/// The immutable stop / route / duration tables.
///
/// Do not construct directly; use [`NetworkBuilder`] or one of the loaders.
#[derive(Clone, Debug)]
pub struct Network {
    stops:       Vec<Stop>,
    stop_index:  FxHashMap<String, StopId>,
    durations:   FxHashMap<(StopId, StopId), u32>,
    routes:      Vec<Route>,
    route_index: FxHashMap<String, RouteId>,
}

impl Network {
    // ── Stops ─────────────────────────────────────────────────────────────

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    #[inline]
    pub fn coord(&self, id: StopId) -> Coordinate {
        self.stops[id.index()].coord
    }

    #[inline]
    pub fn stop_name(&self, id: StopId) -> &str {
        &self.stops[id.index()].name
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    // ── Durations ─────────────────────────────────────────────────────────

    /// Directed travel time from `from` to `to`.  Returns 0 when no entry
    /// exists; routes built by [`NetworkBuilder`] never hit that case.
    #[inline]
    pub fn travel_secs(&self, from: StopId, to: StopId) -> u32 {
        self.durations.get(&(from, to)).copied().unwrap_or(0)
    }

    /// [`travel_secs`](Self::travel_secs) keyed by stop names.  Unknown
    /// names also yield 0.
    pub fn travel_secs_by_name(&self, from: &str, to: &str) -> u32 {
        match (self.stop_id(from), self.stop_id(to)) {
            (Some(a), Some(b)) => self.travel_secs(a, b),
            _ => 0,
        }
    }

    pub fn duration_count(&self) -> usize {
        self.durations.len()
    }

    // ── Routes ────────────────────────────────────────────────────────────

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id.index()]
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteId(i as u16), r))
    }

    /// Sum of directed durations over consecutive forward pairs.  Saturates
    /// at `u32::MAX`; routes built by [`NetworkBuilder`] never reach it.
    pub fn total_forward_secs(&self, route: &Route) -> u32 {
        self.forward_legs(route).fold(0, |acc, l| acc.saturating_add(l.secs))
    }

    /// Sum of directed durations over consecutive backward pairs.  Saturates
    /// like [`total_forward_secs`](Self::total_forward_secs).
    pub fn total_backward_secs(&self, route: &Route) -> u32 {
        self.backward_legs(route).fold(0, |acc, l| acc.saturating_add(l.secs))
    }

    /// Legs of `route` in forward (index-ascending) order.
    pub fn forward_legs<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = Leg> + 'a {
        route.stops.windows(2).enumerate().map(move |(i, pair)| Leg {
            from_pos: i,
            to_pos:   i + 1,
            from:     pair[0],
            to:       pair[1],
            secs:     self.travel_secs(pair[0], pair[1]),
        })
    }

    /// Legs of `route` in backward (index-descending) order.
    pub fn backward_legs<'a>(&'a self, route: &'a Route) -> impl Iterator<Item = Leg> + 'a {
        let n = route.stops.len();
        (1..n).rev().map(move |i| {
            let (from, to) = (route.stops[i], route.stops[i - 1]);
            Leg {
                from_pos: i,
                to_pos:   i - 1,
                from,
                to,
                secs: self.travel_secs(from, to),
            }
        })
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// Stops must be added before the durations and routes that name them.
/// `build()` rejects any route whose consecutive pairs lack a non-zero
/// duration in either direction.
///
/// # Example
///
/// ```
/// use ferry_core::Coordinate;
/// use ferry_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// b.add_stop("A", Coordinate::new(-74.0, 40.0)).unwrap();
/// b.add_stop("B", Coordinate::new(-74.0, 40.1)).unwrap();
/// b.add_crossing("A", "B", 600).unwrap();
/// b.add_route("A - B", &["A", "B"]).unwrap();
/// let net = b.build().unwrap();
/// assert_eq!(net.route(net.route_id("A - B").unwrap()).round_trip_secs(), 1_200);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    stops:       Vec<Stop>,
    stop_index:  FxHashMap<String, StopId>,
    durations:   FxHashMap<(StopId, StopId), u32>,
    routes:      Vec<(String, Vec<StopId>)>,
    route_index: FxHashMap<String, RouteId>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named stop.  Names are unique keys.
    pub fn add_stop(&mut self, name: &str, coord: Coordinate) -> NetworkResult<StopId> {
        if self.stop_index.contains_key(name) {
            return Err(NetworkError::DuplicateStop(name.to_owned()));
        }
        if !(-180.0..=180.0).contains(&coord.lon) || !(-90.0..=90.0).contains(&coord.lat) {
            return Err(NetworkError::InvalidCoordinate { stop: name.to_owned(), coord });
        }
        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop { name: name.to_owned(), coord });
        self.stop_index.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Set the **directed** travel time from `from` to `to`.  A later call
    /// for the same pair overwrites the earlier value.
    pub fn add_duration(&mut self, from: &str, to: &str, secs: u32) -> NetworkResult<()> {
        let a = self.resolve(from)?;
        let b = self.resolve(to)?;
        self.durations.insert((a, b), secs);
        Ok(())
    }

    /// Convenience: the same travel time in both directions.
    pub fn add_crossing(&mut self, a: &str, b: &str, secs: u32) -> NetworkResult<()> {
        self.add_duration(a, b, secs)?;
        self.add_duration(b, a, secs)
    }

    /// Add a route over previously added stops.
    pub fn add_route(&mut self, name: &str, stops: &[&str]) -> NetworkResult<RouteId> {
        if self.route_index.contains_key(name) {
            return Err(NetworkError::DuplicateRoute(name.to_owned()));
        }
        let ids = stops
            .iter()
            .map(|s| self.resolve(s))
            .collect::<NetworkResult<Vec<_>>>()?;
        let id = RouteId(
            u16::try_from(self.routes.len())
                .map_err(|_| NetworkError::TooManyRoutes)?,
        );
        self.routes.push((name.to_owned(), ids));
        self.route_index.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn stop_count(&self) -> usize { self.stops.len() }
    pub fn route_count(&self) -> usize { self.routes.len() }

    /// Validate every route and produce the immutable [`Network`].
    pub fn build(self) -> NetworkResult<Network> {
        let mut network = Network {
            stops:       self.stops,
            stop_index:  self.stop_index,
            durations:   self.durations,
            routes:      Vec::with_capacity(self.routes.len()),
            route_index: self.route_index,
        };

        for (name, stops) in self.routes {
            validate_route(&network, &name, &stops)?;
            let mut route = Route { name, stops, forward_secs: 0, backward_secs: 0 };
            let forward = checked_secs(network.forward_legs(&route));
            let backward = checked_secs(network.backward_legs(&route));
            match (forward, backward) {
                (Some(f), Some(b)) if f.checked_add(b).is_some() => {
                    route.forward_secs = f;
                    route.backward_secs = b;
                }
                _ => return Err(NetworkError::DurationOverflow(route.name)),
            }
            network.routes.push(route);
        }

        Ok(network)
    }

    fn resolve(&self, name: &str) -> NetworkResult<StopId> {
        self.stop_index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStop(name.to_owned()))
    }
}

/// Total seconds over `legs`, or `None` if it does not fit in a `u32`.
fn checked_secs(mut legs: impl Iterator<Item = Leg>) -> Option<u32> {
    legs.try_fold(0u32, |acc, l| acc.checked_add(l.secs))
}

fn validate_route(network: &Network, name: &str, stops: &[StopId]) -> NetworkResult<()> {
    if stops.len() < 2 {
        return Err(NetworkError::RouteTooShort(name.to_owned()));
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == b {
            return Err(NetworkError::RepeatedStop {
                route: name.to_owned(),
                stop:  network.stop_name(a).to_owned(),
            });
        }
        for (from, to) in [(a, b), (b, a)] {
            match network.durations.get(&(from, to)) {
                None => {
                    return Err(NetworkError::MissingDuration {
                        route: name.to_owned(),
                        from:  network.stop_name(from).to_owned(),
                        to:    network.stop_name(to).to_owned(),
                    });
                }
                Some(0) => {
                    return Err(NetworkError::ZeroDuration {
                        route: name.to_owned(),
                        from:  network.stop_name(from).to_owned(),
                        to:    network.stop_name(to).to_owned(),
                    });
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
