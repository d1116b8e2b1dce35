// News board component
//
// Partitions the fixed card set by the active filter category. There is no
// per-click state beyond which filter is active; activating a filter marks it
// selected (all siblings deselected) and recomputes the partition. Nothing is
// persisted across runs.

use crate::site::{NewsCard, NewsCategory, NEWS_CARDS};

/// News filter state
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsBoard {
    active: NewsCategory,
}

impl NewsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a filter control
    pub fn activate(&mut self, category: NewsCategory) {
        self.active = category;
    }

    /// Whether a filter control carries the selected marker
    pub fn is_selected(&self, category: NewsCategory) -> bool {
        self.active == category
    }

    /// Cards whose tag matches the active category, in declaration order
    pub fn visible_cards(&self) -> Vec<&'static NewsCard> {
        NEWS_CARDS
            .iter()
            .filter(|card| card.category == self.active)
            .collect()
    }

    /// How many cards the active filter hides
    pub fn hidden_count(&self) -> usize {
        NEWS_CARDS.len() - self.visible_cards().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upcoming_filter_shows_only_upcoming_cards() {
        let mut board = NewsBoard::new();
        board.activate(NewsCategory::Upcoming);

        let visible = board.visible_cards();
        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|card| card.category == NewsCategory::Upcoming));
        assert_eq!(visible.len() + board.hidden_count(), NEWS_CARDS.len());
    }

    #[test]
    fn every_category_partitions_the_full_set() {
        let mut board = NewsBoard::new();
        let mut total = 0;
        for category in NewsCategory::ALL {
            board.activate(category);
            total += board.visible_cards().len();
        }
        // Tags are immutable and exclusive, so the partitions tile the set
        assert_eq!(total, NEWS_CARDS.len());
    }

    #[test]
    fn exactly_one_filter_is_selected() {
        let mut board = NewsBoard::new();
        board.activate(NewsCategory::Sports);

        let selected: Vec<_> = NewsCategory::ALL
            .iter()
            .filter(|c| board.is_selected(**c))
            .collect();
        assert_eq!(selected, vec![&NewsCategory::Sports]);
    }
}
