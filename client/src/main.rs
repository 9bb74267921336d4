use std::{env, fs, time::Duration};

use anyhow::Context;
use liblife::Engine;
use serde::{Deserialize, Serialize};

mod patterns;
mod renderer;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pattern: String,    // which seed layout to play
    width: usize,       // board size, used by the random soup
    height: usize,
    alive_cells: usize, // random soup population
    generations: usize,
    tick_millis: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: "blinker".to_string(),
            width: 12,
            height: 12,
            alive_cells: 40,
            generations: 10,
            tick_millis: 500,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);

    let config = if let Some(config_path) = args.next() {
        let raw = fs::read(&config_path)
            .with_context(|| format!("couldn't read config {config_path}"))?;

        serde_json::from_slice(&raw).context("couldn't deserialize config")?
    } else {
        Config::default()
    };

    let seed = patterns::build(&config)?;

    let mut engine = Engine::with_seed_and_limit(seed, config.generations);
    engine.settle = Some(Duration::from_millis(config.tick_millis));

    engine.advance(renderer::draw)?;

    println!();
    println!("done");

    Ok(())
}
