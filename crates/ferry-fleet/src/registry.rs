//! The fleet registry and its builder.

use rustc_hash::FxHashMap;

use ferry_core::{Mmsi, VesselId};
use ferry_network::Network;

use crate::{DepartureSchedule, FleetError, FleetResult, Vessel, VesselProfile, ais_name};

/// Everything needed to register one vessel.  The route is named and
/// resolved against the network when added.
#[derive(Clone, Debug)]
pub struct VesselSpec {
    pub name:     String,
    pub mmsi:     Mmsi,
    pub route:    String,
    pub profile:  Option<VesselProfile>,
    pub schedule: DepartureSchedule,
}

/// The immutable vessel table, indexed by [`VesselId`].
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    vessels:    Vec<Vessel>,
    mmsi_index: FxHashMap<Mmsi, VesselId>,
}

impl Fleet {
    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    #[inline]
    pub fn vessel(&self, id: VesselId) -> &Vessel {
        &self.vessels[id.index()]
    }

    pub fn by_mmsi(&self, mmsi: Mmsi) -> Option<&Vessel> {
        self.mmsi_index.get(&mmsi).map(|id| self.vessel(*id))
    }

    /// All vessels, indexed by [`VesselId`].
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vessel> {
        self.vessels.iter()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Vessel;
    type IntoIter = std::slice::Iter<'a, Vessel>;

    fn into_iter(self) -> Self::IntoIter {
        self.vessels.iter()
    }
}

/// Fluent builder for a [`Fleet`] bound to one [`Network`].
///
/// ```rust,ignore
/// let fleet = FleetBuilder::new(&network)
///     .vessel(spec_a)?
///     .vessel(spec_b)?
///     .build();
/// ```
pub struct FleetBuilder<'n> {
    network: &'n Network,
    fleet:   Fleet,
}

impl<'n> FleetBuilder<'n> {
    pub fn new(network: &'n Network) -> Self {
        Self { network, fleet: Fleet::default() }
    }

    /// Validate and register one vessel.
    pub fn add(&mut self, spec: VesselSpec) -> FleetResult<VesselId> {
        let name = ais_name(&spec.name);
        if name.is_empty() {
            return Err(FleetError::EmptyName(spec.mmsi));
        }
        if spec.schedule.is_empty() {
            return Err(FleetError::EmptySchedule(name));
        }
        if self.fleet.mmsi_index.contains_key(&spec.mmsi) {
            return Err(FleetError::DuplicateIdentity(spec.mmsi));
        }
        let route = self
            .network
            .route_id(&spec.route)
            .ok_or_else(|| FleetError::UnknownRoute { name: name.clone(), route: spec.route.clone() })?;

        let id = VesselId(self.fleet.vessels.len() as u32);
        self.fleet.vessels.push(Vessel {
            id,
            name,
            mmsi: spec.mmsi,
            route,
            profile: spec.profile,
            schedule: spec.schedule,
        });
        self.fleet.mmsi_index.insert(spec.mmsi, id);
        Ok(id)
    }

    /// Chaining form of [`add`](Self::add).
    pub fn vessel(mut self, spec: VesselSpec) -> FleetResult<Self> {
        self.add(spec)?;
        Ok(self)
    }

    pub fn build(self) -> Fleet {
        self.fleet
    }
}
