//! Everything an encoder needs to know about one vessel at one second.

use ferry_engine::{PositionSample, destination, eta_secs};
use ferry_fleet::Vessel;
use ferry_network::Network;

/// A [`PositionSample`] together with the tables needed to label it.
#[derive(Copy, Clone)]
pub struct SampleView<'a> {
    pub network: &'a Network,
    pub vessel:  &'a Vessel,
    pub sample:  &'a PositionSample,
}

impl<'a> SampleView<'a> {
    pub fn new(network: &'a Network, vessel: &'a Vessel, sample: &'a PositionSample) -> Self {
        Self { network, vessel, sample }
    }

    pub fn route_name(&self) -> &'a str {
        &self.network.route(self.sample.route).name
    }

    /// `"From->To"`.
    pub fn segment(&self) -> String {
        self.sample.segment(self.network)
    }

    pub fn destination(&self) -> &'a str {
        destination(self.network, self.sample)
    }

    pub fn eta_secs(&self) -> Option<u32> {
        eta_secs(self.network, self.sample)
    }

    /// Seconds since simulated midnight; the clock as shown on the wire.
    pub fn second_of_day(&self) -> u32 {
        self.sample.at.second_of_day()
    }
}
