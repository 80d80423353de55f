use std::io::{self, BufRead, BufWriter, Write};
use std::thread;

use anyhow::Context;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::Grid;

mod config;
mod render;
mod run;

use config::Command;
use render::TerminalRenderer;
use run::{CancelToken, RunOptions};

/// Cancels `token` once a line reading `q` arrives on stdin.
fn spawn_quit_listener(token: CancelToken) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().eq_ignore_ascii_case("q") => {
                    token.cancel();
                    break;
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match config::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            print!("{}", config::USAGE);
            return Ok(());
        }
        Command::Run(config) => config,
    };
    info!(
        "{}x{} grid, rules {}, wrap {}, delay {:?}, population {}",
        config.width,
        config.height,
        config.rules,
        config.wrap,
        config.cycle_delay,
        config.start_population
    );

    let mut grid = Grid::new(config.width, config.height)
        .context("failed to create grid")?
        .with_rules(config.rules)
        .with_wrap(config.wrap);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    grid.randomize(&mut rng, config.start_population)
        .context("failed to seed grid")?;

    let cancel = CancelToken::new();
    spawn_quit_listener(cancel.clone());

    let mut renderer = TerminalRenderer::new(BufWriter::new(io::stdout().lock()), config.glyphs);
    let summary = run::run(&mut grid, &mut renderer, &RunOptions::from(&config), &cancel)?;
    renderer
        .into_inner()
        .flush()
        .context("failed to flush output")?;
    info!(
        "stopped ({:?}) after {} generations, population {}",
        summary.reason, summary.generations, summary.population
    );
    Ok(())
}
