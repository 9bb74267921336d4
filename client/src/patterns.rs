use anyhow::bail;
use itertools::Itertools;
use liblife::cell::{Cell, SimpleCell};
use liblife::generation::Generation;

use crate::Config;

pub fn build(config: &Config) -> anyhow::Result<Generation<SimpleCell>> {
    Ok(match config.pattern.as_str() {
        "blinker" => blinker(),
        "toad" => toad(),
        "block" => block(),
        "glider" => glider(),
        "random" => random(config.width, config.height, config.alive_cells)?,
        other => bail!("unknown pattern {other:?} (try blinker, toad, block, glider or random)"),
    })
}

/// Period-2 oscillator: three cells in a row.
pub fn blinker() -> Generation<SimpleCell> {
    seeded(5, 5, &[[1, 2], [2, 2], [3, 2]])
}

/// Period-2 oscillator: two offset rows of three.
pub fn toad() -> Generation<SimpleCell> {
    seeded(6, 6, &[[2, 2], [3, 2], [4, 2], [1, 3], [2, 3], [3, 3]])
}

/// Two-by-two still life.
pub fn block() -> Generation<SimpleCell> {
    seeded(4, 4, &[[1, 1], [2, 1], [1, 2], [2, 2]])
}

/// Diagonal traveller. Gets a board big enough to walk across.
pub fn glider() -> Generation<SimpleCell> {
    seeded(12, 12, &[[1, 0], [2, 1], [0, 2], [1, 2], [2, 2]])
}

/// Soup with an exact number of alive cells scattered uniformly.
pub fn random(
    width: usize,
    height: usize,
    alive_cells: usize,
) -> anyhow::Result<Generation<SimpleCell>> {
    let mut generation: Generation<SimpleCell> = Generation::new(width, height);

    let mut open_positions = (0..width).cartesian_product(0..height).collect_vec();

    for _ in 0..alive_cells {
        if open_positions.is_empty() {
            bail!("board too small for {alive_cells} alive cells");
        }

        let chosen = open_positions.swap_remove(rand::random_range(0..open_positions.len()));

        // SAFETY: open_positions only ever holds on-board coordinates.
        generation.cell_mut(chosen).unwrap().set_alive(true);
    }

    Ok(generation)
}

fn seeded(width: usize, height: usize, alive: &[[usize; 2]]) -> Generation<SimpleCell> {
    let mut generation: Generation<SimpleCell> = Generation::new(width, height);

    for &pos in alive {
        // pattern coordinates are fixed and sized to their board
        generation.cell_mut(pos).unwrap().set_alive(true);
    }

    generation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_positions(generation: &Generation<SimpleCell>) -> Vec<(usize, usize)> {
        generation
            .enumerate_cells()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(pos, _)| (pos.x, pos.y))
            .collect()
    }

    #[test]
    fn blinker_seeds_three_cells_across_the_middle() {
        let generation = blinker();

        assert_eq!(generation.width, 5);
        assert_eq!(generation.height, 5);
        assert_eq!(alive_positions(&generation), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn block_is_a_filled_two_by_two() {
        let generation = block();

        assert_eq!(alive_positions(&generation), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn random_places_exactly_the_requested_population() {
        let generation = random(6, 6, 10).unwrap();

        assert_eq!(alive_positions(&generation).len(), 10);
    }

    #[test]
    fn random_rejects_oversized_populations() {
        assert!(random(3, 3, 10).is_err());
    }
}
