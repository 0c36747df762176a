//! Sequential placement scan.

use std::ops::Range;

use crate::raster::{PixelMatrix, Point, Rect};
use crate::score::mean_closeness;
use crate::search::Match;
use crate::util::PixMatchResult;

/// Scores the template at one placement of an already gray image.
pub(crate) fn score_at(
    gray: &PixelMatrix,
    tpl: &PixelMatrix,
    offset: Point,
) -> PixMatchResult<u32> {
    let window = gray.sub_image(Rect::from_origin(offset, tpl.width(), tpl.height()))?;
    mean_closeness(&window, tpl)
}

/// Returns the best placement whose top row lies in `rows`.
///
/// Columns cover every placement where the template fits. Only a strictly
/// greater score replaces the current best, so ties keep the first
/// placement in row-major order.
pub(crate) fn scan_rows(
    gray: &PixelMatrix,
    tpl: &PixelMatrix,
    rows: Range<usize>,
) -> PixMatchResult<Option<Match>> {
    let max_x = gray.width() - tpl.width();
    let mut best: Option<Match> = None;
    for y in rows {
        for x in 0..=max_x {
            let offset = Point::new(x, y);
            let score = score_at(gray, tpl, offset)?;
            let better = match best {
                Some(b) => score > b.score,
                None => true,
            };
            if better {
                best = Some(Match { offset, score });
            }
        }
    }
    Ok(best)
}
