mod display;
mod menu;
mod prompt;

use std::time::Instant;

use marga::{dataset, network::Network};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt().init();

    let args: Vec<_> = std::env::args().collect();
    let segments = match args.get(1) {
        Some(path) => match dataset::from_csv(path) {
            Ok(segments) => segments,
            Err(err) => {
                error!("Could not read {path}: {err}");
                std::process::exit(1);
            }
        },
        None => dataset::pune(),
    };

    let now = Instant::now();
    let network = Network::new().with_segments(&segments);
    info!("Building the network took {:?}", now.elapsed());

    menu::run(&network);
}
