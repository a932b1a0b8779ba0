use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use chrono::{Local, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sub for Distance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|distance| distance.0).sum())
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.1} km", self.0))
    }
}

impl Distance {
    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_meters(distance: f64) -> Self {
        Self(distance / 1000.0)
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0
    }

    pub const fn as_meters(&self) -> f64 {
        self.0 * 1000.0
    }

    /// Time it takes to cover this distance at a fixed cruising speed.
    pub const fn travel_time(&self, speed_kmh: f64) -> Duration {
        Duration::from_minutes(self.0 / speed_kmh * 60.0)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Duration(f64);

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Duration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sub for Duration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|duration| duration.0).sum())
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:.0} min", self.0))
    }
}

impl Duration {
    pub const fn from_minutes(minutes: f64) -> Self {
        Self(minutes)
    }

    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds / 60.0)
    }

    pub const fn as_minutes(&self) -> f64 {
        self.0
    }

    pub const fn as_seconds(&self) -> f64 {
        self.0 * 60.0
    }

    pub const fn scale(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Wall-clock arrival time if the journey starts now.
    pub fn arrival_from_now(&self) -> NaiveTime {
        Local::now().time() + TimeDelta::seconds(self.as_seconds() as i64)
    }
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn distance_sum_test() {
    let total: Distance = [1.0, 1.1, 0.9]
        .into_iter()
        .map(Distance::from_kilometers)
        .sum();
    assert!((total.as_kilometers() - 3.0).abs() < 1e-9)
}

#[test]
fn travel_time_test() {
    let time = Distance::from_kilometers(35.0).travel_time(35.0);
    assert_eq!(time, Duration::from_minutes(60.0))
}

#[test]
fn duration_seconds_test() {
    let duration = Duration::from_seconds(90.0);
    assert_eq!(duration, Duration::from_minutes(1.5))
}
