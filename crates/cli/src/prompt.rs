use std::io::{self, Write};

use marga::network::Network;

use crate::display;

/// Prompt and read one trimmed line. None means stdin is closed.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Resolve user input to an exact station name by substring search.
/// A single match is taken directly, an exact match wins over its
/// superstrings, anything else prompts a numbered selection.
pub fn station(network: &Network, prompt: &str) -> Option<String> {
    loop {
        let input = read_line(prompt)?;
        if input.is_empty() {
            println!("Please enter a station name.");
            continue;
        }
        if input == "list" {
            display::all_stations(network);
            continue;
        }

        let matches = network.search(&input);
        if matches.is_empty() {
            println!("No stations found matching '{input}'");
            println!("Type 'list' to see all stations or try a partial name.");
            continue;
        }

        if matches.len() == 1 {
            return Some(matches[0].name.to_string());
        }
        if let Some(station) = matches
            .iter()
            .find(|station| station.name.eq_ignore_ascii_case(&input))
        {
            return Some(station.name.to_string());
        }

        println!("Multiple matches found:");
        for (i, station) in matches.iter().enumerate() {
            println!("   {}. {}", i + 1, station.name);
        }
        let choice = read_line(&format!(
            "Select station (1-{}) or 0 to search again: ",
            matches.len()
        ))?;
        match choice.parse::<usize>() {
            Ok(0) => continue,
            Ok(n) if n <= matches.len() => return Some(matches[n - 1].name.to_string()),
            _ => println!("Invalid selection."),
        }
    }
}
