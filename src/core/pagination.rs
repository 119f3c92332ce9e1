use std::ops::RangeInclusive;

/// `ceil(total_items / page_size)`, never less than one page.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Items on 1-based `page`; empty when the page is out of range.
pub fn current_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page cursor over a fixed-size collection. The page is always in `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl Paginator {
    pub fn new(total_items: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Jump to `page`, clamped to `[1, total_pages]`. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages());
        if target != page {
            log::debug!("page request {page} clamped to {target}");
        }
        if target == self.page {
            return false;
        }
        log::debug!("page {} -> {target}", self.page);
        self.page = target;
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page.saturating_add(1))
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// One entry per page; no windowing.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages()
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        current_slice(items, self.page, self.page_size)
    }
}
