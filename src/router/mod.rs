use std::collections::BinaryHeap;

mod route;
mod state;

pub use route::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    network::{Connection, Network},
    router::state::{Frontier, Labels},
    shared::{Distance, Duration},
};

/// Cost of switching lines mid-route when minimizing time.
pub const INTERCHANGE_TIME_PENALTY: Duration = Duration::from_minutes(4.0);
/// Distance-equivalent cost of switching lines when minimizing distance.
pub const INTERCHANGE_DISTANCE_PENALTY: Distance = Distance::from_kilometers(0.5);

/// The metric a query optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Objective {
    #[default]
    Time,
    Distance,
}

/// Shortest route between two known station names under the given
/// objective. Unknown names and unreachable endpoints both come back as a
/// not-found result, never an error.
pub fn find_path(network: &Network, from: &str, to: &str, objective: Objective) -> RouteResult {
    Router::new(network, from, to).minimize(objective).solve()
}

/// Trades travel cost for fewer interchanges: if the time-optimal route
/// changes lines, the distance-optimal route is tried and returned when it
/// is found with strictly fewer interchanges. A two-candidate heuristic,
/// not a Pareto search.
pub fn find_alternative(network: &Network, from: &str, to: &str) -> RouteResult {
    let primary = find_path(network, from, to, Objective::Time);
    if !primary.found || primary.interchanges == 0 {
        return primary;
    }

    let alternative = find_path(network, from, to, Objective::Distance);
    if alternative.found && alternative.interchanges < primary.interchanges {
        alternative
    } else {
        primary
    }
}

/// One route query over a shared read-only network. All search state lives
/// in the solver, so queries are independent of each other.
pub struct Router<'a> {
    network: &'a Network,
    from: &'a str,
    to: &'a str,
    objective: Objective,
}

impl<'a> Router<'a> {
    pub fn new(network: &'a Network, from: &'a str, to: &'a str) -> Self {
        Self {
            network,
            from,
            to,
            objective: Objective::default(),
        }
    }

    pub fn minimize(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Label-correcting search over (station, line-of-arrival) states.
    /// Continuing on the arrival line is free, leaving a station on a
    /// different line is charged the interchange penalty at the moment of
    /// traversal. With non-negative costs this is Dijkstra over the
    /// augmented graph, so the cheapest label at the destination is optimal.
    pub fn solve(self) -> RouteResult {
        let Some(start) = self.network.station_by_name(self.from) else {
            return RouteResult::not_found();
        };
        let Some(end) = self.network.station_by_name(self.to) else {
            return RouteResult::not_found();
        };
        if start.index == end.index {
            return RouteResult::single(start.index);
        }

        let mut labels = Labels::new(self.network.len());
        let mut heap: BinaryHeap<Frontier> = BinaryHeap::new();

        // The first hop never pays a penalty: there is no line of arrival
        // at the origin yet.
        for connection in self.network.connections(start.index) {
            labels.settle(start.index, connection.line);
            let cost = self.connection_cost(connection);
            if labels.improve(connection.to, connection.line, cost, start.index, connection.line) {
                heap.push(Frontier {
                    cost,
                    station: connection.to,
                    line: connection.line,
                });
            }
        }

        let mut popped: usize = 0;
        while let Some(entry) = heap.pop() {
            if entry.cost > labels.cost(entry.station, entry.line) {
                continue;
            }
            popped += 1;

            for connection in self.network.connections(entry.station) {
                let mut cost = entry.cost + self.connection_cost(connection);
                if connection.line != entry.line {
                    cost += self.switch_penalty();
                }
                if labels.improve(connection.to, connection.line, cost, entry.station, entry.line) {
                    heap.push(Frontier {
                        cost,
                        station: connection.to,
                        line: connection.line,
                    });
                }
            }
        }
        debug!("Settled {popped} states for {} -> {}", self.from, self.to);

        let Some(arrival_line) = labels.best_arrival(end.index) else {
            return RouteResult::not_found();
        };
        let Some((path, lines)) = labels.backtrack(start.index, end.index, arrival_line) else {
            return RouteResult::not_found();
        };
        RouteResult::from_path(self.network, path, lines)
    }

    fn connection_cost(&self, connection: &Connection) -> f64 {
        match self.objective {
            Objective::Time => connection.time.as_minutes(),
            Objective::Distance => connection.distance.as_kilometers(),
        }
    }

    fn switch_penalty(&self) -> f64 {
        match self.objective {
            Objective::Time => INTERCHANGE_TIME_PENALTY.as_minutes(),
            Objective::Distance => INTERCHANGE_DISTANCE_PENALTY.as_kilometers(),
        }
    }
}
