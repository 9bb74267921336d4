use crate::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl From<(usize, usize)> for Position {
    fn from(value: (usize, usize)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

/// Moore-neighborhood probe order: axis directions first, then diagonals.
/// The order is load-bearing for border cells, where the first off-board
/// direction is the one that stands the cell itself in.
const NEIGHBOR_OFFSETS: [[isize; 2]; 8] = [
    [-1, 0],
    [1, 0],
    [0, -1],
    [0, 1],
    [-1, -1],
    [1, -1],
    [-1, 1],
    [1, 1],
];

/// A complete grid snapshot at one simulation step: `width` by `height`
/// cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation<C> {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<C>,
}

impl<C: Cell> Generation<C> {
    /// The zero-size grid. An engine seeded with it refuses to run.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }

    /// Grid of all-dead cells. Zero in either dimension collapses to the
    /// empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }

        let cells = std::iter::repeat_with(C::default)
            .take(width * height)
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell<P>(&self, pos: P) -> Option<&C>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut C>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &C)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    /// Clones the alive/dead layout into a freshly allocated grid of the
    /// same dimensions. Goes through the `Cell` capability, so it works for
    /// any cell type and shares nothing with the source.
    pub fn snapshot(&self) -> Self {
        let mut copy = Self::new(self.width, self.height);

        for (pos, cell) in self.enumerate_cells() {
            if cell.is_alive() {
                // SAFETY: positions enumerated from self fit the same-sized copy.
                copy.cell_mut(pos).unwrap().set_alive(true);
            }
        }

        copy
    }

    /// The cells around `(x, y)`, probed in the `NEIGHBOR_OFFSETS` order.
    ///
    /// The first direction that falls off the board contributes the cell
    /// itself in place of the missing neighbor; every later off-board
    /// direction contributes nothing, so the cell is never counted twice.
    /// Border cells therefore see fewer than 8 entries: 6 along an edge,
    /// 4 in a corner.
    pub fn neighborhood(&self, x: usize, y: usize) -> Vec<&C> {
        let mut hood = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        let mut stood_in_for_self = false;

        for [dx, dy] in NEIGHBOR_OFFSETS {
            let neighbor = match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
                (Some(nx), Some(ny)) => self.cell((nx, ny)),
                _ => None,
            };

            match neighbor {
                Some(neighbor) => hood.push(neighbor),
                None if !stood_in_for_self => {
                    if let Some(cell) = self.cell((x, y)) {
                        hood.push(cell);
                        stood_in_for_self = true;
                    }
                }
                None => {}
            }
        }

        hood
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}
