//! Page slicing over the ranked list.

use crate::error::ConfigurationError;
use crate::models::{AnnotatedSignal, RankedPage};

pub struct Paginator;

impl Paginator {
    /// Slice the ranked list into the requested page.
    ///
    /// A zero page size is a configuration defect and is rejected
    /// before any slicing. An out-of-range page index is clamped to
    /// the last populated page (or page 0 when the list is empty), so
    /// a shrinking result set never strands the caller on a blank
    /// page.
    pub fn paginate(
        ranked: Vec<AnnotatedSignal>,
        page_index: usize,
        page_size: usize,
    ) -> Result<RankedPage, ConfigurationError> {
        if page_size == 0 {
            return Err(ConfigurationError::InvalidPageSize(page_size));
        }

        let total_count = ranked.len();
        let page_index = if total_count == 0 {
            0
        } else {
            let last_page = (total_count - 1) / page_size;
            page_index.min(last_page)
        };

        let rows: Vec<AnnotatedSignal> = ranked
            .into_iter()
            .skip(page_index * page_size)
            .take(page_size)
            .collect();

        Ok(RankedPage {
            rows,
            page_index,
            page_size,
            total_count,
            has_next: (page_index + 1) * page_size < total_count,
            has_previous: page_index > 0,
        })
    }
}
