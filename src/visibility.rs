//! One-shot visibility trigger.
//!
//! Watches a set of vertical regions of the page and reports each one the
//! first time it overlaps the viewport shrunk by an inward margin. A reported
//! region is no longer observed, so it can never trigger twice.

use std::collections::BTreeSet;

/// A vertical span of the page, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub top: usize,
    pub height: usize,
}

impl Span {
    pub fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// Shrink by `margin` rows on both edges, always leaving at least one
    /// row of a non-empty span.
    pub fn shrink(&self, margin: usize) -> Span {
        let margin = margin.min(self.height.saturating_sub(1) / 2);
        Span {
            top: self.top + margin,
            height: self.height - 2 * margin,
        }
    }

    /// Strict overlap: touching edges do not count.
    pub fn intersects(&self, other: &Span) -> bool {
        self.height > 0
            && other.height > 0
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Tracks which keys are still waiting for their first appearance.
#[derive(Debug, Clone)]
pub struct VisibilityWatcher<K: Ord + Copy> {
    observed: BTreeSet<K>,
    margin: usize,
}

impl<K: Ord + Copy> VisibilityWatcher<K> {
    pub fn new(margin: usize) -> Self {
        Self {
            observed: BTreeSet::new(),
            margin,
        }
    }

    pub fn observe(&mut self, key: K) {
        self.observed.insert(key);
    }

    pub fn unobserve(&mut self, key: K) {
        self.observed.remove(&key);
    }

    pub fn is_observing(&self, key: K) -> bool {
        self.observed.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Report every observed region now inside the shrunk viewport and stop
    /// observing it. Regions not under observation are ignored.
    pub fn update<I>(&mut self, regions: I, viewport: Span) -> Vec<K>
    where
        I: IntoIterator<Item = (K, Span)>,
    {
        let area = viewport.shrink(self.margin);
        let triggered: Vec<K> = regions
            .into_iter()
            .filter(|(key, span)| self.observed.contains(key) && span.intersects(&area))
            .map(|(key, _)| key)
            .collect();
        for key in &triggered {
            self.observed.remove(key);
        }
        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_applies_margin_on_both_edges() {
        assert_eq!(Span::new(10, 20).shrink(2), Span::new(12, 16));
    }

    #[test]
    fn shrink_keeps_a_row_on_tiny_viewports() {
        assert_eq!(Span::new(0, 3).shrink(5), Span::new(1, 1));
        assert_eq!(Span::new(0, 1).shrink(5), Span::new(0, 1));
        assert_eq!(Span::new(0, 0).shrink(5), Span::new(0, 0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Span::new(0, 10);
        assert!(!a.intersects(&Span::new(10, 5)));
        assert!(a.intersects(&Span::new(9, 5)));
        assert!(!a.intersects(&Span::new(3, 0)));
    }

    #[test]
    fn region_at_the_edge_is_not_yet_visible() {
        let mut watcher = VisibilityWatcher::new(2);
        watcher.observe(0);
        // Viewport rows 0..20, shrunk to 2..18; region starts at row 18
        assert!(watcher.update([(0, Span::new(18, 5))], Span::new(0, 20)).is_empty());
        assert_eq!(watcher.update([(0, Span::new(17, 5))], Span::new(0, 20)), vec![0]);
    }

    #[test]
    fn never_visible_never_triggers() {
        let mut watcher = VisibilityWatcher::new(0);
        watcher.observe(1);
        for top in 0..10 {
            assert!(watcher
                .update([(1, Span::new(100, 4))], Span::new(top, 20))
                .is_empty());
        }
        assert!(watcher.is_observing(1));
    }

    #[test]
    fn triggers_exactly_once() {
        let mut watcher = VisibilityWatcher::new(1);
        watcher.observe(7);
        let region = [(7, Span::new(5, 4))];
        assert_eq!(watcher.update(region, Span::new(0, 20)), vec![7]);
        // Scroll away and back
        assert!(watcher.update(region, Span::new(50, 20)).is_empty());
        assert!(watcher.update(region, Span::new(0, 20)).is_empty());
        assert!(watcher.is_empty());
    }

    #[test]
    fn unobserved_regions_are_ignored() {
        let mut watcher = VisibilityWatcher::new(0);
        watcher.observe(1);
        watcher.observe(2);
        watcher.unobserve(2);
        let triggered = watcher.update(
            [(1, Span::new(0, 3)), (2, Span::new(0, 3)), (3, Span::new(0, 3))],
            Span::new(0, 10),
        );
        assert_eq!(triggered, vec![1]);
    }
}
