//! Rayon-parallel placement scan (feature-gated).
//!
//! Each row of placements is scanned on its own task; the per-row winners
//! are then folded in row order so the result matches the sequential scan.

use std::ops::Range;

use crate::raster::PixelMatrix;
use crate::search::scan::scan_rows;
use crate::search::Match;
use crate::util::PixMatchResult;
use rayon::prelude::*;

/// Row-parallel equivalent of [`scan_rows`].
pub(crate) fn scan_rows_par(
    gray: &PixelMatrix,
    tpl: &PixelMatrix,
    rows: Range<usize>,
) -> PixMatchResult<Option<Match>> {
    let row_best: Vec<Option<Match>> = rows
        .into_par_iter()
        .map(|y| scan_rows(gray, tpl, y..y + 1))
        .collect::<PixMatchResult<_>>()?;

    Ok(row_best.into_iter().fold(None, keep_first_best))
}

/// Picks the better of two candidates, preferring `first` on equal scores.
fn keep_first_best(first: Option<Match>, second: Option<Match>) -> Option<Match> {
    match (first, second) {
        (Some(a), Some(b)) if b.score > a.score => Some(b),
        (Some(a), _) => Some(a),
        (None, b) => b,
    }
}
