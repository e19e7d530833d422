//! Enumeration of every geohash inside a rectangle spanned by two corners.
//!
//! Both corners are decoded level by level into (column, row) cells of the
//! per-position grids. The rectangle is then expanded from the most
//! significant level down. A corner's column or row only bounds a deeper
//! level while the branch still matches that corner's prefix exactly, so each
//! branch carries four lock flags (low/high for columns and rows) that are
//! cleared once the branch leaves the corner.
//!
//! Rows count from the northern edge, so `from` is the north-west corner and
//! `to` the south-east one.
//!
//! ```rust
//! use geohash_range::compute::range::RangeEnumerator;
//!
//! let cells = RangeEnumerator.range("6u4", "6gx").unwrap();
//! assert_eq!(cells.len(), 18);
//! assert!(cells.contains("6gf"));
//!
//! // Same rectangle, with the second corner written as a suffix.
//! assert_eq!(RangeEnumerator.range_shorthand("6u4-gx").unwrap(), cells);
//! ```

pub mod grid;

use geohash_types::GridCell;
use grid::GridIndexer;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Hashes inside a rectangle. Iteration order carries no meaning.
pub type RangeResult = FxHashSet<String>;

/// Corner cells at one character position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Level {
    position: usize,
    from: GridCell,
    to: GridCell,
    width: u8,
    height: u8,
}

/// Whether each corner bound still applies to the current branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Locks {
    col_low: bool,
    col_high: bool,
    row_low: bool,
    row_high: bool,
}

impl Locks {
    const ALL: Locks = Locks {
        col_low: true,
        col_high: true,
        row_low: true,
        row_high: true,
    };

    /// Locks for the children of `cell`.
    fn descend(self, level: &Level, cell: GridCell) -> Self {
        Self {
            col_low: self.col_low && cell.column == level.from.column,
            col_high: self.col_high && cell.column == level.to.column,
            row_low: self.row_low && cell.row == level.from.row,
            row_high: self.row_high && cell.row == level.to.row,
        }
    }
}

impl Level {
    fn columns(&self, locks: Locks) -> std::ops::RangeInclusive<u8> {
        let low = if locks.col_low { self.from.column } else { 0 };
        let high = if locks.col_high { self.to.column } else { self.width - 1 };
        low..=high
    }

    fn rows(&self, locks: Locks) -> std::ops::RangeInclusive<u8> {
        let low = if locks.row_low { self.from.row } else { 0 };
        let high = if locks.row_high { self.to.row } else { self.height - 1 };
        low..=high
    }
}

/// Stateless enumerator of the hashes between two corner hashes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeEnumerator;

impl RangeEnumerator {
    /// Every hash of the corners' length inside the rectangle they span.
    ///
    /// Returns `None` when either corner is empty or holds a non-alphabet
    /// symbol, or when the corners differ in length. Corners given in the
    /// wrong order yield an empty set.
    pub fn range(&self, from: &str, to: &str) -> Option<RangeResult> {
        let levels = corner_levels(from, to)?;

        let mut result = RangeResult::default();
        let mut prefix = String::with_capacity(levels.len());
        expand(&levels, Locks::ALL, &mut prefix, &mut result);

        log::debug!(
            "Range {}..{} over {} levels produced {} cells",
            from,
            to,
            levels.len(),
            result.len()
        );
        Some(result)
    }

    /// [`range`](Self::range) with both corners packed as `"prefix-suffix"`.
    ///
    /// The second corner is the first one with its trailing characters
    /// replaced by the suffix, so `"6u4-gx"` spans `6u4` to `6gx`.
    pub fn range_shorthand(&self, combined: &str) -> Option<RangeResult> {
        let (from, to) = Self::expand_shorthand(combined)?;
        self.range(&from, &to)
    }

    /// Split `"prefix-suffix"` into its two corner hashes.
    ///
    /// Requires exactly one `-` and a suffix no longer than the prefix.
    pub fn expand_shorthand(combined: &str) -> Option<(String, String)> {
        let Some((from, suffix)) = combined.split_once('-') else {
            log::debug!("Range shorthand {:?} has no '-' separator", combined);
            return None;
        };

        if suffix.contains('-') || !from.is_ascii() || !suffix.is_ascii() {
            log::debug!("Malformed range shorthand {:?}", combined);
            return None;
        }

        if suffix.len() > from.len() {
            log::debug!(
                "Range shorthand suffix {:?} is longer than prefix {:?}",
                suffix,
                from
            );
            return None;
        }

        let to = format!("{}{}", &from[..from.len() - suffix.len()], suffix);
        Some((from.to_string(), to))
    }
}

/// Decode both corners into per-position grid cells, most significant first.
fn corner_levels(from: &str, to: &str) -> Option<SmallVec<[Level; 16]>> {
    if from.is_empty() || to.is_empty() {
        log::debug!("Rejecting range with an empty corner");
        return None;
    }

    if from.len() != to.len() {
        log::debug!(
            "Rejecting range {}..{}: corner lengths {} and {} differ",
            from,
            to,
            from.len(),
            to.len()
        );
        return None;
    }

    from.bytes()
        .zip(to.bytes())
        .enumerate()
        .map(|(idx, (f, t))| {
            let position = idx + 1;
            let level = Level {
                position,
                from: GridIndexer::cell_of(position, f)?,
                to: GridIndexer::cell_of(position, t)?,
                width: GridIndexer::width(position),
                height: GridIndexer::height(position),
            };
            log::trace!(
                "Level {}: from {:?} to {:?} on a {}x{} grid",
                position,
                level.from,
                level.to,
                level.width,
                level.height
            );
            Some(level)
        })
        .collect::<Option<SmallVec<[Level; 16]>>>()
        .or_else(|| {
            log::debug!("Rejecting range {}..{}: non-alphabet symbol", from, to);
            None
        })
}

fn expand(levels: &[Level], locks: Locks, prefix: &mut String, out: &mut RangeResult) {
    let Some((level, deeper)) = levels.split_first() else {
        return;
    };

    for row in level.rows(locks) {
        for column in level.columns(locks) {
            let cell = GridCell::new(column, row);
            let Some(symbol) = GridIndexer::symbol_at(level.position, cell) else {
                continue;
            };

            prefix.push(symbol as char);
            if deeper.is_empty() {
                out.insert(prefix.clone());
            } else {
                expand(deeper, locks.descend(level, cell), prefix, out);
            }
            prefix.pop();
        }
    }
}
