use std::process::exit;

use log::info;
use torlife::{Config, Sim, View};

pub fn main() {
    env_logger::init();

    let config = Config::from_env().unwrap_or_else(|error| {
        eprintln!("[error] {error}");
        eprintln!("usage: torlife <pattern-file> | torlife <rows> <cols>");
        exit(1);
    });
    let engine = config.build_engine().unwrap_or_else(|error| {
        eprintln!("[error] {error}");
        exit(1);
    });
    info!("starting at {} fps", config.fps);

    let simulation = Sim::spawn(engine, config.tick_interval());
    let view = View::spawn(simulation.handle());

    let result = view.join();
    simulation.join();
    if let Err(error) = result {
        eprintln!("[error] {error}");
        exit(1);
    }
}
