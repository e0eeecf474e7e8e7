use crate::engine::{Board, BoardError};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice is one row, top to bottom, holding exactly `N`
/// whitespace-separated numbers. `0` marks the blank.
///
/// # Returns
/// * `Ok(Board)` if the rows form a permutation of `0..N²`.
/// * `Err(BoardError)` if:
///     - the number of rows is not `N`,
///     - a row does not have exactly `N` cells,
///     - a cell is not a non-negative integer,
///     - a value is out of range or repeated.
///
/// # Examples
/// ```
/// use sliding_puzzle::engine::{Board, BoardError};
/// use sliding_puzzle::utils::board_from_rows;
///
/// let board: Board<3> = board_from_rows(&["1 2 3", "4 0 6", "7 5 8"]).unwrap();
/// assert_eq!(board.tile(1, 1), 0);
///
/// let short = board_from_rows::<3>(&["1 2 3", "4 0 6"]);
/// assert_eq!(short, Err(BoardError::WrongRowCount { expected: 3, found: 2 }));
/// ```
pub fn board_from_rows<const N: usize>(rows: &[&str]) -> Result<Board<N>, BoardError> {
    if rows.len() != N {
        return Err(BoardError::WrongRowCount {
            expected: N,
            found: rows.len(),
        });
    }

    let mut grid = [[0u8; N]; N];
    for (r, row_str) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row_str.split_whitespace().collect();
        if tokens.len() != N {
            return Err(BoardError::WrongRowLength {
                row: r,
                expected: N,
                found: tokens.len(),
            });
        }

        for (c, token) in tokens.iter().enumerate() {
            let value: u32 = token.parse().map_err(|_| BoardError::InvalidNumber {
                row: r,
                token: token.to_string(),
            })?;
            grid[r][c] = u8::try_from(value)
                .ok()
                .filter(|&v| (v as usize) < N * N)
                .ok_or(BoardError::TileOutOfRange {
                    tile: value,
                    size: N,
                    max: N * N - 1,
                })?;
        }
    }

    Board::from_grid(grid)
}

/// Parses a whole board description, one row per line. Blank lines and lines
/// starting with `#` are skipped.
pub fn board_from_str<const N: usize>(text: &str) -> Result<Board<N>, BoardError> {
    let rows = significant_lines(text);
    board_from_rows(&rows)
}

/// Returns the lines of `text` that describe board rows.
pub fn significant_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
