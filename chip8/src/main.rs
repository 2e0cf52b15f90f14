use std::process;

use log::error;

use crate::config::Config;

mod audio;
mod clock;
mod config;
mod keymap;
mod run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = Config::from_args(std::env::args().skip(1)).and_then(run::run);
    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }
}
