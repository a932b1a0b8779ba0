use std::sync::Arc;

use serde::Serialize;

use crate::{
    network::{Line, Network},
    router::INTERCHANGE_TIME_PENALTY,
    shared::{Distance, Duration},
};

/// The outcome of one route query. `found == false` is the single
/// "nothing to show" signal, covering unknown endpoints as well as
/// disconnected ones; the path and line sequences are empty in that case
/// and must not be relied on.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteResult {
    pub found: bool,
    /// Station indices from start to end inclusive.
    pub path: Vec<u32>,
    /// Line used on each hop; `lines[i]` carries `path[i] -> path[i + 1]`.
    pub lines: Vec<Line>,
    pub total_distance: Distance,
    pub total_time: Duration,
    pub interchanges: u32,
}

impl RouteResult {
    pub(crate) fn not_found() -> Self {
        Default::default()
    }

    /// A journey that starts where it ends.
    pub(crate) fn single(station: u32) -> Self {
        Self {
            found: true,
            path: vec![station],
            ..Default::default()
        }
    }

    /// Assemble the result from a reconstructed path. Totals come from one
    /// pass over the hops the search actually chose: raw edge distances and
    /// times summed up, plus the fixed penalty once per interchange.
    pub(crate) fn from_path(network: &Network, path: Vec<u32>, lines: Vec<Line>) -> Self {
        let mut total_distance = Distance::default();
        let mut total_time = Duration::default();
        let mut interchanges: u32 = 0;

        for i in 0..path.len().saturating_sub(1) {
            let Some(connection) = network.connection_on(path[i], path[i + 1], lines[i]) else {
                return Self::not_found();
            };
            total_distance += connection.distance;
            total_time += connection.time;
            if i > 0 && lines[i] != lines[i - 1] {
                interchanges += 1;
            }
        }
        total_time += INTERCHANGE_TIME_PENALTY.scale(interchanges as f64);

        Self {
            found: true,
            path,
            lines,
            total_distance,
            total_time,
            interchanges,
        }
    }

    /// Group consecutive same-line hops into legs for presentation. Each
    /// leg runs from boarding to alighting station on a single line.
    pub fn legs(&self, network: &Network) -> Vec<Leg> {
        let mut legs: Vec<Leg> = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            match legs.last_mut() {
                Some(leg) if leg.line == *line => {
                    leg.stations.push(network.station(self.path[i + 1]).name.clone());
                }
                _ => {
                    legs.push(Leg {
                        line: *line,
                        stations: vec![
                            network.station(self.path[i]).name.clone(),
                            network.station(self.path[i + 1]).name.clone(),
                        ],
                    });
                }
            }
        }
        legs
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Leg {
    pub line: Line,
    pub stations: Vec<Arc<str>>,
}
