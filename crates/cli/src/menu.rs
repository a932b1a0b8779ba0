use marga::{network::Network, router};

use crate::{display, prompt};

pub fn run(network: &Network) {
    println!("MARGA - METRO ROUTE PLANNER");
    println!("{}", "=".repeat(60));

    loop {
        println!();
        println!("MAIN MENU:");
        println!("1. Find optimal route");
        println!("2. Find alternative route");
        println!("3. View all stations");
        println!("4. View stations by line");
        println!("5. Network statistics");
        println!("6. Exit");
        println!();

        let Some(input) = prompt::read_line("Choose option (1-6): ") else {
            return;
        };
        match input.as_str() {
            "1" => plan_route(network, false),
            "2" => plan_route(network, true),
            "3" => display::all_stations(network),
            "4" => display::stations_by_line(network),
            "5" => display::stats(network),
            "6" => {
                println!("Safe travels!");
                return;
            }
            _ => println!("Invalid option. Please choose 1-6."),
        }
    }
}

fn plan_route(network: &Network, alternative: bool) {
    let Some(from) = prompt::station(network, "From station: ") else {
        return;
    };
    let Some(to) = prompt::station(network, "To station: ") else {
        return;
    };

    if from == to {
        println!("You're already at your destination!");
        return;
    }

    let result = if alternative {
        router::find_alternative(network, &from, &to)
    } else {
        router::find_path(network, &from, &to, router::Objective::Time)
    };
    display::route(network, &result);
}
