use crate::{index::item_at, Index, Seq};

/// Whether rotating `items` right by one fold out of `folds` leaves it unchanged.
fn are_folds_symmetrical<T: PartialEq>(items: &[T], folds: usize) -> bool {
    let len = items.len();
    let cut = len - len / folds;
    items
        .iter()
        .zip(items[cut..].iter().chain(&items[..cut]))
        .all(|(a, b)| a == b)
}

fn rotational_order<T: PartialEq>(items: &[T]) -> usize {
    let size = items.len();
    if size < 2 {
        return 1;
    }
    let exact_divisors = (3..=size / 2).rev().filter(|n| size % n == 0);
    std::iter::once(size)
        .chain(exact_divisors)
        .find(|&folds| are_folds_symmetrical(items, folds))
        .unwrap_or(1)
}

/// Checks the axis of `fold` viewed from `start`, comparing `k + 1`
/// against `-(k + gap)` over the greater half of the fold.
fn check_reflection_axis<T: PartialEq>(fold: &[T], start: isize, gap: isize) -> bool {
    let half = fold.len().div_ceil(2) as isize;
    (0..half).all(|k| item_at(fold, start + k + 1) == item_at(fold, start - (k + gap)))
}

fn has_axis<T: PartialEq>(fold: &[T], start: isize) -> bool {
    let head_on_axis = check_reflection_axis(fold, start, 1);
    head_on_axis || check_reflection_axis(fold, start, 0)
}

/// The first offset in the greater half of `fold` with a reflection axis
/// either through it or between it and the next element.
fn find_reflection_symmetry<T: PartialEq>(fold: &[T]) -> Option<usize> {
    let half = fold.len().div_ceil(2);
    (0..half).find(|&j| has_axis(fold, j as isize))
}

/// The order of rotational symmetry, the number of rotations in which
/// the ring looks exactly the same. Always at least 1.
///
/// Only `size` itself and the exact divisors from `size / 2` down to 3 are
/// tried, so a ring that only repeats in two halves reports 1.
///
/// ```
/// use ring_seq::rotational_symmetry;
/// assert_eq!(rotational_symmetry(&"-|--|--|--|-".to_owned()), 4);
/// ```
pub fn rotational_symmetry<S>(seq: &S) -> usize
where
    S: Seq,
    S::Item: PartialEq,
{
    let folds = rotational_order(&seq.items());
    log::trace!(target: "ring_seq::rotational_symmetry", "Found {} folds", folds);
    folds
}

/// Indices of the elements next to an axis of reflectional symmetry,
/// one per rotational fold.
///
/// ```
/// use ring_seq::symmetry_indices;
/// assert_eq!(symmetry_indices(&"-|--|--|--|-".to_owned()), [1, 4, 7, 10]);
/// assert!(symmetry_indices(&"-|+-|+-|+-|+".to_owned()).is_empty());
/// ```
pub fn symmetry_indices<S>(seq: &S) -> Vec<Index>
where
    S: Seq,
    S::Item: PartialEq,
{
    let items = seq.items();
    let length = items.len();
    if length == 0 {
        return Vec::new();
    }
    let folds = rotational_order(&items);
    let fold_size = length / folds;
    match find_reflection_symmetry(&items[..fold_size]) {
        Some(axis) => {
            log::trace!(target: "ring_seq::symmetry_indices", "Axis at {} repeated over {} folds of {}", axis, folds, fold_size);
            (0..folds)
                .map(|j| Index::new(j * fold_size + axis))
                .collect()
        }
        None => Vec::new(),
    }
}

/// The order of reflectional symmetry. Never greater than
/// `rotational_symmetry`, and 0 when the ring has no mirror axis.
pub fn symmetry<S>(seq: &S) -> usize
where
    S: Seq,
    S::Item: PartialEq,
{
    symmetry_indices(seq).len()
}
