//! View Projector
//!
//! Pure derivation of the rendered slice from the full mirror. Deterministic
//! by construction: no hidden state, no clock, no randomness.

use crate::domain::EquipmentRecord;

/// One derived page of the filtered list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Projection {
    /// Records visible on the current page, mirror order preserved
    pub page_items: Vec<EquipmentRecord>,
    /// How many records survive the filter
    pub total_filtered: usize,
    /// Page count implied by the filter, 0 when nothing matches
    pub total_pages: usize,
    /// Zero-based index of the first slot on the current page
    pub page_start: usize,
    /// Zero-based end of the visible range (exclusive), clamped to the
    /// filtered length
    pub page_end: usize,
}

/// Filter by display name, then slice out one page.
///
/// The query is a case-insensitive substring match against the display name
/// only; an empty or whitespace-only query returns every record in mirror
/// order. `page` is 1-based and deliberately NOT clamped here: an
/// out-of-range page yields empty `page_items`, and keeping the page in
/// range is the caller's contract (see [`ListControls`]). `page_size` must
/// be non-zero.
pub fn project(
    records: &[EquipmentRecord],
    query: &str,
    page: usize,
    page_size: usize,
) -> Projection {
    let query = query.trim().to_lowercase();
    let filtered: Vec<&EquipmentRecord> = if query.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| record.display_name.to_lowercase().contains(&query))
            .collect()
    };

    let total_filtered = filtered.len();
    let total_pages = total_filtered.div_ceil(page_size);
    let page_start = page.saturating_sub(1).saturating_mul(page_size);
    let page_end = page_start.saturating_add(page_size).min(total_filtered);
    let page_items = if page_start < page_end {
        filtered[page_start..page_end]
            .iter()
            .map(|record| (*record).clone())
            .collect()
    } else {
        Vec::new()
    };

    Projection {
        page_items,
        total_filtered,
        total_pages,
        page_start,
        page_end,
    }
}

/// Transient list-browsing state: the search text and the 1-based page.
///
/// Owned by the view layer; the engine only reads it. Changing the query
/// always lands back on page 1, so a narrowed filter can never leave the
/// page beyond the new page count.
#[derive(Debug, Clone, PartialEq)]
pub struct ListControls {
    pub query: String,
    pub page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl ListControls {
    /// Replace the search text and reset to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Jump to a page; zero is treated as the first page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Pull the page back into range after the mirror shrank underneath it.
    pub fn clamp_to(&mut self, total_pages: usize) {
        if total_pages > 0 && self.page > total_pages {
            self.page = total_pages;
        }
    }
}
