//! Optional instrumentation for matrix processing, scoring and search.
//!
//! Everything is emitted under the `pixmatch` target, so a filter such as
//! `pixmatch=debug` enables all of it:
//!
//! | name                | kind         | fields                                              |
//! |---------------------|--------------|-----------------------------------------------------|
//! | `similarity`        | info span    |                                                     |
//! | `similarity_result` | debug event  | `score`                                             |
//! | `locate_template`   | info span    | `img_width`, `img_height`, `tpl_width`, `tpl_height` |
//! | `locate_result`     | debug event  | `x`, `y`, `score`                                   |
//! | `matrix_processed`  | debug event  | `width`, `height`                                   |
//!
//! Without the `tracing` feature the macros compile away and call sites need
//! no `cfg` attributes.

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) const TARGET: &str = "pixmatch";

#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!(target: $crate::trace::TARGET, $name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

// Field values are still evaluated when compiled out so bindings used only
// for logging stay used.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, target: $crate::trace::TARGET, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Span guard used when tracing is compiled out.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{trace_event, trace_span, TARGET};

    #[test]
    fn target_matches_crate_filter() {
        assert_eq!(TARGET, env!("CARGO_PKG_NAME"));
    }

    #[test]
    fn macros_accept_call_site_shapes() {
        let score = 7u32;
        let _span = trace_span!("similarity").entered();
        trace_event!("similarity_result", score = score);
    }
}
