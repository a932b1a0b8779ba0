use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::shared::{Distance, Duration, Named};

/// The closed set of services running on the network. Lines are fixed tags,
/// not runtime objects; `index` is stable and dense so per-line state can
/// live in flat arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Purple,
    Aqua,
    Red,
}

impl Line {
    pub const COUNT: usize = 3;
    pub const ALL: [Line; Line::COUNT] = [Line::Purple, Line::Aqua, Line::Red];

    pub const fn index(&self) -> usize {
        match self {
            Line::Purple => 0,
            Line::Aqua => 1,
            Line::Red => 2,
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Purple => f.write_str("Purple Line"),
            Line::Aqua => f.write_str("Aqua Line"),
            Line::Red => f.write_str("Red Line"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Station {
    pub index: u32,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub lines: Vec<Line>,
    pub is_interchange: bool,
}

impl Station {
    pub(crate) fn new(index: u32, name: &str) -> Self {
        Self {
            index,
            name: name.into(),
            normalized_name: name.to_lowercase().into(),
            lines: Vec::new(),
            is_interchange: false,
        }
    }

    pub(crate) fn add_line(&mut self, line: Line) {
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
        self.is_interchange = self.lines.len() > 1;
    }

    pub fn serves(&self, line: Line) -> bool {
        self.lines.contains(&line)
    }
}

impl Named for Station {
    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// One direction of a track segment. Segments are undirected, so every
/// connection has a mirror in the other station's adjacency list with the
/// same distance, time and line.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub to: u32,
    pub distance: Distance,
    pub time: Duration,
    pub line: Line,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NetworkStats {
    pub stations: usize,
    pub interchanges: usize,
    pub stations_per_line: [usize; Line::COUNT],
}

impl NetworkStats {
    pub fn on_line(&self, line: Line) -> usize {
        self.stations_per_line[line.index()]
    }
}
