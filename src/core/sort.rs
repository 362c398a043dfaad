use crate::domain::model::PersonName;
use crate::domain::ports::SortStrategy;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Selects which sort implementation the processor runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategyKind {
    Sequential,
    Parallel,
    Merge,
}

impl SortStrategyKind {
    /// Maps a config tag onto a strategy. Unrecognized tags fall back to
    /// `Sequential`; the fallback is part of the contract, not an accident.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "parallel" => SortStrategyKind::Parallel,
            "merge" => SortStrategyKind::Merge,
            _ => SortStrategyKind::Sequential,
        }
    }
}

pub fn create_sort_strategy(kind: SortStrategyKind) -> Box<dyn SortStrategy> {
    match kind {
        SortStrategyKind::Parallel => Box::new(ParallelSortStrategy),
        SortStrategyKind::Merge => Box::new(MergeSortStrategy),
        SortStrategyKind::Sequential => Box::new(SequentialSortStrategy),
    }
}

/// The shared two-level key: byte-wise last name, then the space-joined
/// given names. Every strategy orders by exactly this comparison.
pub fn by_name_key(a: &PersonName, b: &PersonName) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.joined_given_names().cmp(&b.joined_given_names()))
}

pub struct SequentialSortStrategy;

impl SortStrategy for SequentialSortStrategy {
    fn sort(&self, names: &[PersonName]) -> Vec<PersonName> {
        let mut sorted = names.to_vec();
        sorted.sort_by(by_name_key);
        sorted
    }
}

/// Same ordering as the sequential strategy, computed on rayon's worker
/// pool. `par_sort_by` is stable, so the result is identical element for
/// element.
pub struct ParallelSortStrategy;

impl SortStrategy for ParallelSortStrategy {
    fn sort(&self, names: &[PersonName]) -> Vec<PersonName> {
        let mut sorted = names.to_vec();
        sorted.par_sort_by(by_name_key);
        sorted
    }
}

/// Hand-rolled divide-and-conquer merge sort over the same key. The merge
/// step takes the lesser-or-equal head, so equal keys prefer the left
/// partition.
pub struct MergeSortStrategy;

impl SortStrategy for MergeSortStrategy {
    fn sort(&self, names: &[PersonName]) -> Vec<PersonName> {
        merge_sort(names.to_vec())
    }
}

fn merge_sort(names: Vec<PersonName>) -> Vec<PersonName> {
    if names.len() <= 1 {
        return names;
    }

    let mut left = names;
    let right = left.split_off(left.len() / 2);

    merge(merge_sort(left), merge_sort(right))
}

fn merge(left: Vec<PersonName>, right: Vec<PersonName>) -> Vec<PersonName> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut l = left.next();
    let mut r = right.next();

    loop {
        match (l.take(), r.take()) {
            (Some(a), Some(b)) => {
                if by_name_key(&a, &b) != Ordering::Greater {
                    merged.push(a);
                    l = left.next();
                    r = Some(b);
                } else {
                    merged.push(b);
                    l = Some(a);
                    r = right.next();
                }
            }
            (Some(a), None) => {
                merged.push(a);
                merged.extend(left);
                break;
            }
            (None, Some(b)) => {
                merged.push(b);
                merged.extend(right);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}
