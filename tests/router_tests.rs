use marga::{
    dataset,
    network::{Line, Network},
    router::{self, Objective},
    shared::Distance,
};

fn pune() -> Network {
    Network::new().with_segments(&dataset::pune())
}

/// Two lines sharing station B. The Purple chain A-B-C-D is longer than
/// cutting over to Aqua at B, but the interchange penalty outweighs the
/// saving under the time objective.
fn shortcut_network() -> Network {
    let mut network = Network::new();
    network.connect("A", "B", Distance::from_kilometers(1.0), Line::Purple);
    network.connect("B", "C", Distance::from_kilometers(1.0), Line::Purple);
    network.connect("C", "D", Distance::from_kilometers(1.0), Line::Purple);
    network.connect("B", "D", Distance::from_kilometers(1.2), Line::Aqua);
    network
}

#[test]
fn self_route() {
    let network = pune();
    let result = router::find_path(&network, "Civil Court", "Civil Court", Objective::Time);
    assert!(result.found);
    assert_eq!(result.path.len(), 1);
    assert!(result.lines.is_empty());
    assert_eq!(result.total_distance.as_kilometers(), 0.0);
    assert_eq!(result.total_time.as_minutes(), 0.0);
    assert_eq!(result.interchanges, 0);
}

#[test]
fn unknown_station_is_not_found() {
    let network = pune();
    let result = router::find_path(&network, "Nonexistent", "Vanaz", Objective::Time);
    assert!(!result.found);
    assert!(result.path.is_empty());

    let result = router::find_path(&network, "Vanaz", "Nonexistent", Objective::Distance);
    assert!(!result.found);

    let result = router::find_alternative(&network, "Nowhere", "Nonexistent");
    assert!(!result.found);
}

#[test]
fn disconnected_stations_are_not_found() {
    let mut network = Network::new();
    network.connect("A", "B", Distance::from_kilometers(1.0), Line::Purple);
    network.connect("X", "Y", Distance::from_kilometers(1.0), Line::Aqua);
    let result = router::find_path(&network, "A", "Y", Objective::Time);
    assert!(!result.found);
    assert!(result.path.is_empty());
}

#[test]
fn routes_are_symmetric() {
    let network = pune();
    let there = router::find_path(&network, "Vanaz", "Ramwadi", Objective::Time);
    let back = router::find_path(&network, "Ramwadi", "Vanaz", Objective::Time);
    assert!(there.found && back.found);
    assert!(
        (there.total_distance.as_kilometers() - back.total_distance.as_kilometers()).abs() < 1e-9
    );
    assert!((there.total_time.as_minutes() - back.total_time.as_minutes()).abs() < 1e-9);
    assert_eq!(there.interchanges, back.interchanges);
}

#[test]
fn same_line_beats_cheaper_switch_on_time() {
    let network = shortcut_network();
    let result = router::find_path(&network, "A", "D", Objective::Time);
    assert!(result.found);

    let names: Vec<_> = result
        .path
        .iter()
        .map(|index| network.station(*index).name.to_string())
        .collect();
    assert_eq!(names, ["A", "B", "C", "D"]);
    assert_eq!(result.lines, [Line::Purple, Line::Purple, Line::Purple]);
    assert_eq!(result.interchanges, 0);
    assert!((result.total_distance.as_kilometers() - 3.0).abs() < 1e-9);
    // 3.0 km at 35 km/h, no penalty.
    assert!((result.total_time.as_minutes() - 3.0 / 35.0 * 60.0).abs() < 1e-9);
}

#[test]
fn switch_wins_on_distance() {
    let network = shortcut_network();
    let result = router::find_path(&network, "A", "D", Objective::Distance);
    assert!(result.found);

    let names: Vec<_> = result
        .path
        .iter()
        .map(|index| network.station(*index).name.to_string())
        .collect();
    assert_eq!(names, ["A", "B", "D"]);
    assert_eq!(result.lines, [Line::Purple, Line::Aqua]);
    assert_eq!(result.interchanges, 1);
    assert!((result.total_distance.as_kilometers() - 2.2).abs() < 1e-9);
}

#[test]
fn interchange_penalty_counted_once_per_switch() {
    let network = shortcut_network();
    let result = router::find_path(&network, "A", "D", Objective::Distance);
    // Raw edge times plus one interchange penalty, nothing double counted.
    let expected = 1.0 / 35.0 * 60.0 + 1.2 / 35.0 * 60.0 + 4.0;
    assert!((result.total_time.as_minutes() - expected).abs() < 1e-9);
    // The distance total stays raw: the penalty only ranks, it is not
    // reported as kilometers traveled.
    assert!((result.total_distance.as_kilometers() - 2.2).abs() < 1e-9);
}

#[test]
fn tied_optimal_paths_accept_either() {
    let mut network = Network::new();
    network.connect("A", "B", Distance::from_kilometers(1.0), Line::Purple);
    network.connect("B", "D", Distance::from_kilometers(1.0), Line::Purple);
    network.connect("A", "C", Distance::from_kilometers(1.0), Line::Aqua);
    network.connect("C", "D", Distance::from_kilometers(1.0), Line::Aqua);

    let result = router::find_path(&network, "A", "D", Objective::Time);
    assert!(result.found);
    assert_eq!(result.interchanges, 0);
    assert!((result.total_distance.as_kilometers() - 2.0).abs() < 1e-9);

    let middle = network.station(result.path[1]).name.to_string();
    assert!(middle == "B" || middle == "C");
}

#[test]
fn vanaz_to_ramwadi_stays_on_aqua() {
    let network = pune();
    let result = router::find_path(&network, "Vanaz", "Ramwadi", Objective::Time);
    assert!(result.found);
    assert_eq!(result.interchanges, 0);
    assert_eq!(result.path.len(), 16);
    assert!(result.lines.iter().all(|line| *line == Line::Aqua));
    assert!((result.total_distance.as_kilometers() - 15.9).abs() < 1e-9);
    assert!((result.total_time.as_minutes() - 15.9 / 35.0 * 60.0).abs() < 1e-6);
}

#[test]
fn pcmc_bhavan_to_vanaz_crosses_lines() {
    let network = pune();
    let result = router::find_path(&network, "PCMC Bhavan", "Vanaz", Objective::Time);
    assert!(result.found);
    assert!(result.interchanges >= 1);
    // Purple to Civil Court, one switch onto Aqua.
    assert!((result.total_distance.as_kilometers() - 26.4).abs() < 1e-9);
    assert!((result.total_time.as_minutes() - (26.4 / 35.0 * 60.0 + 4.0)).abs() < 1e-6);
}

#[test]
fn alternative_returns_primary_when_interchange_free() {
    let network = shortcut_network();
    let primary = router::find_path(&network, "A", "D", Objective::Time);
    assert_eq!(primary.interchanges, 0);

    let alternative = router::find_alternative(&network, "A", "D");
    assert!(alternative.found);
    assert_eq!(alternative.interchanges, 0);
    assert_eq!(alternative.path, primary.path);
}

#[test]
fn alternative_never_regresses_reachability() {
    let network = pune();
    for (from, to) in [
        ("Vanaz", "Ramwadi"),
        ("PCMC Bhavan", "Vanaz"),
        ("Megapolis Circle", "Swargate"),
        ("Nonexistent", "Vanaz"),
        ("Ramwadi", "Megapolis Circle"),
    ] {
        let primary = router::find_path(&network, from, to, Objective::Time);
        let alternative = router::find_alternative(&network, from, to);
        assert_eq!(primary.found, alternative.found, "{from} -> {to}");
    }
}

#[test]
fn legs_group_hops_by_line() {
    let network = shortcut_network();
    let result = router::find_path(&network, "A", "D", Objective::Distance);
    let legs = result.legs(&network);
    assert_eq!(legs.len(), 2);
    assert_eq!(legs[0].line, Line::Purple);
    let stations: Vec<_> = legs[0].stations.iter().map(|name| name.to_string()).collect();
    assert_eq!(stations, ["A", "B"]);
    assert_eq!(legs[1].line, Line::Aqua);
    let stations: Vec<_> = legs[1].stations.iter().map(|name| name.to_string()).collect();
    assert_eq!(stations, ["B", "D"]);

    let network = pune();
    let result = router::find_path(&network, "Vanaz", "Ramwadi", Objective::Time);
    let legs = result.legs(&network);
    assert_eq!(legs.len(), 1);
    assert_eq!(legs[0].line, Line::Aqua);
    assert_eq!(legs[0].stations.len(), 16);
}

#[test]
fn builder_surface_matches_free_functions() {
    let network = pune();
    let from_builder = router::Router::new(&network, "Vanaz", "Ramwadi")
        .minimize(Objective::Distance)
        .solve();
    let from_function = router::find_path(&network, "Vanaz", "Ramwadi", Objective::Distance);
    assert_eq!(from_builder.found, from_function.found);
    assert_eq!(from_builder.path, from_function.path);
}
