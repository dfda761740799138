//! Study material catalog
//!
//! The seed list is static configuration. Every generation clones it into a
//! [`MaterialCatalog`] that hands out items per category, lowest priority
//! first, and never returns the same item twice.

use std::collections::{BTreeMap, VecDeque};
use studyplan_core::{MaterialCategory, MaterialItem};

use studyplan_core::MaterialCategory::{Cars, PracticeQuestions, PracticeTest, Review};

/// Seed inventory in priority order
pub const SEED_MATERIALS: &[MaterialItem] = &[
    // Full-length practice tests
    MaterialItem::new("AAMC Sample Test", PracticeTest, 1, 7.5).full_day(),
    MaterialItem::new("AAMC FL1", PracticeTest, 2, 7.5).full_day(),
    MaterialItem::new("AAMC FL2", PracticeTest, 3, 7.5).full_day(),
    MaterialItem::new("AAMC FL3", PracticeTest, 4, 7.5).full_day(),
    MaterialItem::new("AAMC FL4", PracticeTest, 5, 7.5).full_day(),
    // Question and section banks
    MaterialItem::new("AAMC Question Bank Questions - 100 Questions", PracticeQuestions, 10, 3.0),
    MaterialItem::new("AAMC Section Bank B/B - 60 Questions", PracticeQuestions, 15, 2.0),
    MaterialItem::new("AAMC Section Bank P/S - 60 Questions", PracticeQuestions, 16, 2.0),
    MaterialItem::new("AAMC Section Bank C/P - 60 Questions", PracticeQuestions, 17, 2.0),
    MaterialItem::new("AAMC Section Bank B/B - 40 Questions", PracticeQuestions, 18, 1.5),
    MaterialItem::new("AAMC Section Bank P/S - 40 Questions", PracticeQuestions, 19, 1.5),
    MaterialItem::new("AAMC Section Bank C/P - 40 Questions", PracticeQuestions, 20, 1.5),
    // CARS passages
    MaterialItem::new("AAMC CARS Pack 1/2 - 3 passages", Cars, 25, 1.0),
    MaterialItem::new("AAMC CARS Pack 1/2 - 1 passages", Cars, 26, 0.5),
    // General review
    MaterialItem::new("Anki Review Cards", Review, 100, 1.0),
];

/// Per-generation inventory, consumed destructively
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    queues: BTreeMap<MaterialCategory, VecDeque<MaterialItem>>,
}

impl MaterialCatalog {
    /// Fresh copy of the seed inventory
    pub fn new() -> Self {
        Self::from_items(SEED_MATERIALS)
    }

    /// Build a catalog from arbitrary items; each category queue is ordered by priority
    pub fn from_items(items: &[MaterialItem]) -> Self {
        let mut sorted = items.to_vec();
        // stable: equal priorities keep seed order
        sorted.sort_by_key(|item| item.priority);

        let mut queues: BTreeMap<MaterialCategory, VecDeque<MaterialItem>> = BTreeMap::new();
        for item in sorted {
            queues.entry(item.category).or_default().push_back(item);
        }
        Self { queues }
    }

    /// Remove and return the next item of `category`, or `None` once it is exhausted
    pub fn take_next(&mut self, category: MaterialCategory) -> Option<MaterialItem> {
        self.queues.get_mut(&category)?.pop_front()
    }

    /// Peek at the next item of `category` without consuming it
    pub fn peek(&self, category: MaterialCategory) -> Option<&MaterialItem> {
        self.queues.get(&category)?.front()
    }

    pub fn remaining(&self, category: MaterialCategory) -> usize {
        self.queues.get(&category).map_or(0, VecDeque::len)
    }

    pub fn is_exhausted(&self, category: MaterialCategory) -> bool {
        self.remaining(category) == 0
    }

    /// Total items left across all categories
    pub fn len(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seed_counts_per_category() {
        let catalog = MaterialCatalog::new();
        assert_eq!(catalog.remaining(PracticeTest), 5);
        assert_eq!(catalog.remaining(PracticeQuestions), 7);
        assert_eq!(catalog.remaining(Cars), 2);
        assert_eq!(catalog.remaining(Review), 1);
        assert_eq!(catalog.len(), SEED_MATERIALS.len());
    }

    #[test]
    fn seed_practice_tests_are_full_day() {
        for item in SEED_MATERIALS {
            assert_eq!(item.is_full_day, item.category == PracticeTest, "{}", item.name);
        }
    }

    #[test]
    fn take_next_follows_priority() {
        let mut catalog = MaterialCatalog::new();
        let names: Vec<&str> = std::iter::from_fn(|| catalog.take_next(PracticeTest))
            .map(|item| item.name)
            .collect();
        assert_eq!(
            names,
            vec!["AAMC Sample Test", "AAMC FL1", "AAMC FL2", "AAMC FL3", "AAMC FL4"]
        );
        assert!(catalog.is_exhausted(PracticeTest));
        assert_eq!(catalog.take_next(PracticeTest), None);
    }

    #[test]
    fn categories_are_consumed_independently() {
        let mut catalog = MaterialCatalog::new();
        let first = catalog.take_next(Cars).unwrap();
        assert_eq!(first.name, "AAMC CARS Pack 1/2 - 3 passages");
        assert_eq!(first.estimated_hours, 1.0);
        assert_eq!(catalog.remaining(PracticeQuestions), 7);
        assert_eq!(catalog.peek(Cars).map(|i| i.name), Some("AAMC CARS Pack 1/2 - 1 passages"));
        assert_eq!(catalog.remaining(Cars), 1);
    }

    #[test]
    fn from_items_sorts_out_of_order_input() {
        let items = [
            MaterialItem::new("late", Cars, 30, 1.0),
            MaterialItem::new("early", Cars, 5, 1.0),
        ];
        let mut catalog = MaterialCatalog::from_items(&items);
        assert_eq!(catalog.take_next(Cars).map(|i| i.name), Some("early"));
        assert_eq!(catalog.take_next(Cars).map(|i| i.name), Some("late"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn fresh_catalogs_do_not_share_state() {
        let mut first = MaterialCatalog::new();
        while first.take_next(PracticeQuestions).is_some() {}
        let second = MaterialCatalog::new();
        assert_eq!(second.remaining(PracticeQuestions), 7);
    }
}
