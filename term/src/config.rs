use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context};
use shared::RuleTable;

use crate::render::Glyphs;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 25;
pub const DEFAULT_CYCLE_DELAY: Duration = Duration::from_millis(250);
pub const DEFAULT_START_POPULATION: f64 = 0.3;

pub const USAGE: &str = "\
usage: term [options]

  --width N              grid columns (default 80)
  --height N             grid rows (default 25)
  --delay-ms N           pause between generations in milliseconds (default 250)
  --population F         initial live-cell ratio in [0, 1] (default 0.3)
  --generations N        stop after N generations (default: run until quit)
  --seed N               seed the initial population for a repeatable run
  --rules B3/S23         birth/survival rule (default B3/S23)
  --wrap                 join opposite edges
  --halt-on-extinction   stop once every cell is dead
  --live C               glyph for live cells (default '*')
  --dead C               glyph for dead cells (default ' ')
  -h, --help             show this message

Type q and press enter to quit.
";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub cycle_delay: Duration,
    pub start_population: f64,
    pub generations: Option<u64>,
    pub seed: Option<u64>,
    pub rules: RuleTable,
    pub wrap: bool,
    pub halt_on_extinction: bool,
    pub glyphs: Glyphs,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cycle_delay: DEFAULT_CYCLE_DELAY,
            start_population: DEFAULT_START_POPULATION,
            generations: None,
            seed: None,
            rules: RuleTable::conway(),
            wrap: false,
            halt_on_extinction: false,
            glyphs: Glyphs::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "grid dimensions must be positive, got {}x{}",
                self.width,
                self.height
            );
        }
        if !(0.0..=1.0).contains(&self.start_population) {
            bail!(
                "--population must be within [0, 1], got {}",
                self.start_population
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Parses command-line arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => config.width = next_value(&mut args, &arg)?,
            "--height" => config.height = next_value(&mut args, &arg)?,
            "--delay-ms" => {
                config.cycle_delay = Duration::from_millis(next_value(&mut args, &arg)?)
            }
            "--population" => config.start_population = next_value(&mut args, &arg)?,
            "--generations" => config.generations = Some(next_value(&mut args, &arg)?),
            "--seed" => config.seed = Some(next_value(&mut args, &arg)?),
            "--rules" => config.rules = next_value(&mut args, &arg)?,
            "--wrap" => config.wrap = true,
            "--halt-on-extinction" => config.halt_on_extinction = true,
            "--live" => config.glyphs.live = next_value(&mut args, &arg)?,
            "--dead" => config.glyphs.dead = next_value(&mut args, &arg)?,
            "-h" | "--help" => return Ok(Command::Help),
            other => bail!("unknown argument: {other}\n\n{USAGE}"),
        }
    }
    config.validate()?;
    Ok(Command::Run(config))
}

fn next_value<T>(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .next()
        .with_context(|| format!("{flag} requires a value"))?;
    raw.parse()
        .with_context(|| format!("invalid value {raw:?} for {flag}"))
}
