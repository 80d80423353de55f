use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::debug;
use shared::Grid;

use crate::config::Config;
use crate::render::Render;

/// Shared flag asking the run loop to stop before its next generation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub cycle_delay: Duration,
    /// Stop after this many advances.
    pub generations: Option<u64>,
    pub halt_on_extinction: bool,
}

impl From<&Config> for RunOptions {
    fn from(config: &Config) -> Self {
        Self {
            cycle_delay: config.cycle_delay,
            generations: config.generations,
            halt_on_extinction: config.halt_on_extinction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    GenerationLimit,
    Extinct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Advances performed by this run.
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

/// Renders and advances `grid` until a stop condition holds.
///
/// Every generation reached is rendered, including the last one. Stop
/// conditions are checked between generations only.
pub fn run<R: Render>(
    grid: &mut Grid,
    renderer: &mut R,
    options: &RunOptions,
    cancel: &CancelToken,
) -> anyhow::Result<RunSummary> {
    let start = grid.generation();
    let reason = loop {
        if cancel.is_cancelled() {
            break StopReason::Cancelled;
        }
        renderer
            .render(&grid.snapshot())
            .with_context(|| format!("failed to render generation {}", grid.generation()))?;

        let advanced = grid.generation() - start;
        if options.generations.is_some_and(|limit| advanced >= limit) {
            break StopReason::GenerationLimit;
        }
        if options.halt_on_extinction && grid.population() == 0 {
            break StopReason::Extinct;
        }

        grid.advance();
        debug!(
            "generation {}: population {}",
            grid.generation(),
            grid.population()
        );
        if !options.cycle_delay.is_zero() {
            thread::sleep(options.cycle_delay);
        }
    };

    Ok(RunSummary {
        generations: grid.generation() - start,
        population: grid.population(),
        reason,
    })
}
