use std::{collections::HashMap, sync::Arc};

mod models;
pub use models::*;

use tracing::info;

use crate::{
    dataset::Segment,
    shared::{self, Distance},
};

/// Cruising speed used to derive a connection's travel time from its length.
pub const BASE_SPEED_KMH: f64 = 35.0;

type NameToIndex = HashMap<Arc<str>, usize>;

/// The static substrate every query runs against: station records, a
/// name lookup and a symmetric adjacency list. Mutation happens through
/// [`Network::add_station`] and [`Network::connect`] while the network is
/// assembled; after that the value is only ever read, so it can be shared
/// across threads as-is.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: Vec<Station>,
    adjacency: Vec<Vec<Connection>>,
    station_lookup: NameToIndex,
}

impl Network {
    pub fn new() -> Self {
        Default::default()
    }

    /// Bulk-load a segment list into the network.
    pub fn with_segments(mut self, segments: &[Segment]) -> Self {
        for segment in segments {
            self.connect(
                &segment.from,
                &segment.to,
                Distance::from_kilometers(segment.distance_km),
                segment.line,
            );
        }
        info!(
            "Loaded {} segments into {} stations",
            segments.len(),
            self.stations.len()
        );
        self
    }

    /// Register a station by name, returning its index. Idempotent: a name
    /// that is already known returns the existing index untouched.
    pub fn add_station(&mut self, name: &str) -> u32 {
        if let Some(index) = self.station_lookup.get(name) {
            return *index as u32;
        }
        let index = self.stations.len();
        let station = Station::new(index as u32, name);
        self.station_lookup.insert(station.name.clone(), index);
        self.stations.push(station);
        self.adjacency.push(Vec::new());
        index as u32
    }

    /// Connect two stations with a track segment of the given line. Both
    /// endpoints are created if missing, both pick up the line, and the
    /// connection is inserted in both directions.
    pub fn connect(&mut self, from: &str, to: &str, distance: Distance, line: Line) {
        let from_idx = self.add_station(from);
        let to_idx = self.add_station(to);

        self.stations[from_idx as usize].add_line(line);
        self.stations[to_idx as usize].add_line(line);

        let time = distance.travel_time(BASE_SPEED_KMH);
        self.adjacency[from_idx as usize].push(Connection {
            to: to_idx,
            distance,
            time,
            line,
        });
        self.adjacency[to_idx as usize].push(Connection {
            to: from_idx,
            distance,
            time,
            line,
        });
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, index: u32) -> &Station {
        &self.stations[index as usize]
    }

    /// Exact name lookup. Resolving partial or fuzzy input is the caller's
    /// job, see [`Network::search`].
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        let index = self.station_lookup.get(name)?;
        Some(&self.stations[*index])
    }

    pub fn connections(&self, index: u32) -> &[Connection] {
        &self.adjacency[index as usize]
    }

    /// The connection leaving `from` towards `to` on the given line.
    pub fn connection_on(&self, from: u32, to: u32, line: Line) -> Option<&Connection> {
        self.adjacency[from as usize]
            .iter()
            .find(|connection| connection.to == to && connection.line == line)
    }

    /// Every station name, sorted.
    pub fn station_names(&self) -> Vec<Arc<str>> {
        let mut names: Vec<_> = self
            .stations
            .iter()
            .map(|station| station.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Every station served by the given line, sorted by name.
    pub fn stations_on_line(&self, line: Line) -> Vec<&Station> {
        let mut stations: Vec<_> = self
            .stations
            .iter()
            .filter(|station| station.serves(line))
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));
        stations
    }

    /// Case-insensitive substring search over station names, sorted by name.
    pub fn search(&self, needle: &str) -> Vec<&Station> {
        shared::search(needle, &self.stations)
    }

    pub fn stats(&self) -> NetworkStats {
        let mut stats = NetworkStats {
            stations: self.stations.len(),
            ..Default::default()
        };
        for station in self.stations.iter() {
            if station.is_interchange {
                stats.interchanges += 1;
            }
            for line in station.lines.iter() {
                stats.stations_per_line[line.index()] += 1;
            }
        }
        stats
    }
}
