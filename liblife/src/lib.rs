use std::time::Duration;

use itertools::Itertools;

use cell::Cell;
use generation::Generation;

pub mod cell;
pub mod generation;
pub mod rule;

/// Step count an engine gets when constructed from a seed alone.
pub const DEFAULT_MAX_GENERATIONS: usize = 5;

/// The current generation is missing or empty. Fatal to the `advance` call
/// that raised it; reseed the engine and run again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("generation seed is missing or empty, reseed the engine and run again")]
pub struct InvalidSeedError;

/// Drives a board through a fixed number of generations, handing every
/// produced grid to a callback as it completes.
#[derive(Debug)]
pub struct Engine<C> {
    pub current: Generation<C>,
    pub max_generations: usize,
    /// Pause inserted after every callback, for watchable playback. `None`
    /// skips pacing entirely; correctness never depends on it.
    pub settle: Option<Duration>,
}

impl<C: Cell> Engine<C> {
    /// Engine with no seed. It will not run until reseeded: the step count
    /// starts at 0 and `advance` rejects the empty board.
    pub fn new() -> Self {
        Self {
            current: Generation::empty(),
            max_generations: 0,
            settle: None,
        }
    }

    pub fn with_seed(seed: Generation<C>) -> Self {
        Self {
            current: seed,
            max_generations: DEFAULT_MAX_GENERATIONS,
            settle: None,
        }
    }

    pub fn with_seed_and_limit(seed: Generation<C>, max_generations: usize) -> Self {
        Self {
            current: seed,
            max_generations,
            settle: None,
        }
    }

    /// Runs the configured number of steps, invoking `on_step` once per
    /// generation with the grid and its step number: the seed comes first as
    /// step 0, then 1..=max_generations as each step completes.
    ///
    /// Each step reads neighborhoods from a snapshot of the current grid and
    /// writes into a freshly allocated next grid, which becomes current once
    /// the callback returns.
    pub fn advance<F>(&mut self, mut on_step: F) -> Result<(), InvalidSeedError>
    where
        F: FnMut(&Generation<C>, usize),
    {
        if self.current.is_empty() {
            return Err(InvalidSeedError);
        }

        on_step(&self.current, 0);
        self.settle_pause();

        for step in 1..=self.max_generations {
            let snapshot = self.current.snapshot();
            let mut next: Generation<C> = Generation::new(snapshot.width, snapshot.height);

            for (y, x) in (0..snapshot.height).cartesian_product(0..snapshot.width) {
                let live_neighbors = snapshot
                    .neighborhood(x, y)
                    .into_iter()
                    .filter(|cell| cell.is_alive())
                    .count();

                // SAFETY: positions come from the snapshot's own dimensions,
                // which the next grid shares, so neither lookup can miss.
                let alive_now = snapshot.cell((x, y)).unwrap().is_alive();
                let survives = !rule::should_die(live_neighbors, alive_now);
                next.cell_mut((x, y)).unwrap().set_alive(survives);
            }

            on_step(&next, step);
            self.settle_pause();
            self.current = next;
        }

        Ok(())
    }

    fn settle_pause(&self) {
        if let Some(delay) = self.settle {
            spin_sleep::sleep(delay);
        }
    }
}

impl<C: Cell> Default for Engine<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::SimpleCell;

    fn blinker_seed() -> Generation<SimpleCell> {
        let mut seed: Generation<SimpleCell> = Generation::new(5, 5);

        for pos in [[1, 2], [2, 2], [3, 2]] {
            seed.cell_mut(pos).unwrap().set_alive(true);
        }

        seed
    }

    fn alive_positions<C: Cell>(generation: &Generation<C>) -> Vec<[usize; 2]> {
        generation
            .enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| [pos.x, pos.y])
            .collect()
    }

    #[test]
    fn default_construction_must_not_run() {
        let engine = Engine::<SimpleCell>::new();

        assert_eq!(engine.max_generations, 0);
        assert!(engine.current.is_empty());
    }

    #[test]
    fn seed_only_construction_defaults_to_five_generations() {
        let engine = Engine::with_seed(blinker_seed());

        assert_eq!(engine.max_generations, 5);
    }

    #[test]
    fn explicit_generation_limit_is_kept() {
        let engine = Engine::with_seed_and_limit(blinker_seed(), 10);

        assert_eq!(engine.max_generations, 10);
    }

    #[test]
    fn advancing_without_a_seed_fails_before_any_callback() {
        let mut engine = Engine::<SimpleCell>::new();
        let mut calls = 0;

        let result = engine.advance(|_, _| calls += 1);

        assert_eq!(result, Err(InvalidSeedError));
        assert_eq!(calls, 0);
    }

    #[test]
    fn zero_generations_reports_only_the_seed() {
        let mut engine = Engine::with_seed_and_limit(blinker_seed(), 0);
        let mut reported = Vec::new();

        engine
            .advance(|generation, step| reported.push((step, alive_positions(generation))))
            .unwrap();

        assert_eq!(reported, vec![(0, vec![[1, 2], [2, 2], [3, 2]])]);
        assert_eq!(alive_positions(&engine.current), vec![[1, 2], [2, 2], [3, 2]]);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut engine = Engine::with_seed_and_limit(blinker_seed(), 2);
        let mut runs = Vec::new();

        engine
            .advance(|generation, _| runs.push(alive_positions(generation)))
            .unwrap();

        assert_eq!(runs.len(), 3);
        // seed phase: three in a row across row 2
        assert_eq!(runs[0], vec![[1, 2], [2, 2], [3, 2]]);
        // half a period later: three in a column down column 2
        assert_eq!(runs[1], vec![[2, 1], [2, 2], [2, 3]]);
        // full period: back to the seed phase
        assert_eq!(runs[2], vec![[1, 2], [2, 2], [3, 2]]);
    }

    #[test]
    fn step_numbers_count_completed_generations() {
        let mut engine = Engine::with_seed_and_limit(blinker_seed(), 3);
        let mut steps = Vec::new();

        engine.advance(|_, step| steps.push(step)).unwrap();

        assert_eq!(steps, vec![0, 1, 2, 3]);
    }

    #[derive(Debug, Default)]
    struct TaggedCell {
        alive: bool,
        tag: u8,
    }

    impl Cell for TaggedCell {
        fn is_alive(&self) -> bool {
            self.alive
        }

        fn set_alive(&mut self, alive: bool) {
            self.alive = alive;
        }
    }

    #[test]
    fn engine_runs_any_cell_implementation() {
        let mut seed = Generation::<TaggedCell>::new(5, 5);

        for pos in [[1, 2], [2, 2], [3, 2]] {
            let cell = seed.cell_mut(pos).unwrap();
            cell.set_alive(true);
            cell.tag = 7;
        }

        // the extra payload rides on the cell without the engine caring
        assert_eq!(seed.cell([1, 2]).unwrap().tag, 7);

        let mut engine = Engine::with_seed_and_limit(seed, 1);
        let mut last = Vec::new();

        engine
            .advance(|generation, _| last = alive_positions(generation))
            .unwrap();

        assert_eq!(last, vec![[2, 1], [2, 2], [2, 3]]);
    }
}
