/// Navigation limits for [`ProductPager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerBounds {
    /// `previous()` only moves while `start` is strictly above this.
    pub lower_start: i32,
    /// `next()` only moves while `end` is strictly below this.
    pub upper_end: i32,
    /// Reaching this `end` marks the final page as seen.
    pub final_end: i32,
    pub step: i32,
}

impl Default for PagerBounds {
    fn default() -> Self {
        Self {
            lower_start: 1,
            upper_end: 10,
            final_end: 9,
            step: 2,
        }
    }
}

/// Exclusive index range `(start, end)` over the product collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerWindow {
    pub start: i32,
    pub end: i32,
}

impl Default for PagerWindow {
    fn default() -> Self {
        Self { start: -1, end: 3 }
    }
}

impl PagerWindow {
    /// Slice of `items` whose indices lie strictly between `start` and `end`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let from = usize::try_from(self.start.saturating_add(1)).unwrap_or(0);
        let to = usize::try_from(self.end).unwrap_or(0).min(items.len());
        if from >= to {
            return &[];
        }
        &items[from..to]
    }
}

/// Fixed-step sliding window over a product list.
///
/// The list size is not consulted: the window moves purely on its bounds, so
/// an empty or short catalog still pages (and shows nothing past its end).
#[derive(Debug, Clone, Default)]
pub struct ProductPager {
    window: PagerWindow,
    bounds: PagerBounds,
    view_product: bool,
}

impl ProductPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(window: PagerWindow, bounds: PagerBounds) -> Self {
        Self {
            window,
            bounds,
            view_product: false,
        }
    }

    pub fn next(&mut self) {
        if self.window.end < self.bounds.upper_end {
            self.window.start += self.bounds.step;
            self.window.end += self.bounds.step;
            if self.window.end == self.bounds.final_end {
                self.view_product = true;
            }
        }
    }

    pub fn previous(&mut self) {
        if self.window.start > self.bounds.lower_start {
            self.window.start -= self.bounds.step;
            self.window.end -= self.bounds.step;
        }
    }

    pub fn window(&self) -> PagerWindow {
        self.window
    }

    /// Set once the final page has been reached; never cleared.
    pub fn view_product(&self) -> bool {
        self.view_product
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.window.slice(items)
    }
}
