use marga::network::{Line, Network};
use marga::router::RouteResult;

pub fn route(network: &Network, result: &RouteResult) {
    if !result.found {
        println!("No route found between specified stations.");
        return;
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("ROUTE FOUND");
    println!("{}", "=".repeat(60));
    println!();

    for (i, index) in result.path.iter().enumerate() {
        if i == 0 {
            if let Some(line) = result.lines.first() {
                println!("Board {line}");
            }
        } else if i < result.lines.len() && result.lines[i] != result.lines[i - 1] {
            println!();
            println!("   Interchange -> {}", result.lines[i]);
            println!();
        }
        let station = network.station(*index);
        let marker = if station.is_interchange { " *" } else { "" };
        println!("  {:>2}. {}{marker}", i + 1, station.name);
    }

    println!();
    println!("{}", "=".repeat(60));
    println!("JOURNEY SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Total distance: {}", result.total_distance);
    println!("Estimated time: {}", result.total_time);
    println!(
        "Arrival if you leave now: {}",
        result.total_time.arrival_from_now().format("%H:%M")
    );
    println!("Stations: {}", result.path.len());
    println!("Interchanges: {}", result.interchanges);
    if result.interchanges > 0 {
        println!("Tip: allow a few extra minutes for each interchange.");
    }
    println!("{}", "=".repeat(60));
}

pub fn all_stations(network: &Network) {
    let names = network.station_names();
    println!();
    println!("ALL STATIONS ({} total):", names.len());
    println!("{}", "-".repeat(40));
    for (i, name) in names.iter().enumerate() {
        println!("{:>2}. {name}", i + 1);
    }
}

pub fn stations_by_line(network: &Network) {
    println!();
    println!("STATIONS BY LINE");
    println!("{}", "=".repeat(40));
    for line in Line::ALL {
        let stations = network.stations_on_line(line);
        println!();
        println!("{line} ({} stations):", stations.len());
        for (i, station) in stations.iter().enumerate() {
            println!("   {:>2}. {}", i + 1, station.name);
        }
    }
}

pub fn stats(network: &Network) {
    let stats = network.stats();
    println!();
    println!("NETWORK STATISTICS");
    println!("{}", "=".repeat(40));
    println!("Total stations: {}", stats.stations);
    for line in Line::ALL {
        println!("{line}: {} stations", stats.on_line(line));
    }
    println!("Interchange stations: {}", stats.interchanges);
    println!("{}", "=".repeat(40));
}
