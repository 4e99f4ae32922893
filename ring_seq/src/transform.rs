use crate::{
    index::{index_from, wrap},
    Error, Index, IndexO, Seq,
};
use std::iter;

pub(crate) fn empty<S: Seq>() -> S {
    S::from_items(iter::empty())
}

/// Rebuilds `items` starting at slot `start`, which must be in range.
pub(crate) fn started_at<S: Seq>(items: &[S::Item], start: usize) -> S {
    S::from_items(items[start..].iter().chain(&items[..start]).cloned())
}

/// Rotates the ring to the right by `step` positions.
///
/// ```
/// use ring_seq::rotate_right;
/// assert_eq!(rotate_right(&"ABC".to_owned(), 1), "CAB");
/// ```
pub fn rotate_right<S: Seq>(seq: &S, step: impl Into<IndexO>) -> S {
    let items = seq.items();
    if items.is_empty() {
        return empty();
    }
    let len = items.len();
    let j = len - wrap(len, step.into().get());
    started_at::<S>(&items, if j == len { 0 } else { j })
}

/// Rotates the ring to the left by `step` positions.
/// Same as `rotate_right` with the step negated.
pub fn rotate_left<S: Seq>(seq: &S, step: impl Into<IndexO>) -> S {
    let items = seq.items();
    if items.is_empty() {
        return empty();
    }
    started_at::<S>(&items, wrap(items.len(), step.into().get()))
}

/// Views the ring starting from circular index `i`.
pub fn start_at<S: Seq>(seq: &S, i: impl Into<IndexO>) -> S {
    rotate_left(seq, i)
}

/// Plain reversal, keeping the concrete kind.
pub fn reverse<S: Seq>(seq: &S) -> S {
    S::from_items(seq.items().iter().rev().cloned())
}

/// Reflects the ring so that the element at circular index `i`
/// becomes the head and the traversal direction flips around it.
///
/// `reflect_at(seq, -1)` is the plain reversal.
///
/// ```
/// use ring_seq::reflect_at;
/// assert_eq!(reflect_at(&"ABC".to_owned(), 0), "ACB");
/// assert_eq!(reflect_at(&"ABC".to_owned(), 1), "BAC");
/// ```
pub fn reflect_at<S: Seq>(seq: &S, i: impl Into<IndexO>) -> S {
    let items = seq.items();
    if items.is_empty() {
        return empty();
    }
    let len = items.len();
    let k = (wrap(len, i.into().get()) + 1) % len;
    S::from_items(
        items[..k]
            .iter()
            .rev()
            .chain(items[k..].iter().rev())
            .cloned(),
    )
}

/// Selects the circular interval `[from, to)`, keeping the first element
/// of every `step`.
///
/// The interval may be longer than the ring itself, in which case the
/// ring repeats as many times as needed.
///
/// # Failure
///
/// Fails with `Error::InvalidStep` when `step` is zero. A negative step or
/// a reversed interval is not an error and selects nothing.
pub fn slice_o<S: Seq>(
    seq: &S,
    from: impl Into<IndexO>,
    to: impl Into<IndexO>,
    step: isize,
) -> Result<S, Error> {
    if step == 0 {
        return Err(Error::InvalidStep);
    }
    let items = seq.items();
    if items.is_empty() {
        return Ok(empty());
    }
    let from = from.into().get();
    let gap = to.into().get().saturating_sub(from);
    if gap < 0 || step < 0 {
        return Ok(empty());
    }
    let start = wrap(items.len(), from);
    Ok(S::from_items(
        items
            .iter()
            .cycle()
            .skip(start)
            .take(gap as usize)
            .step_by(step as usize)
            .cloned(),
    ))
}

/// Finds the first circular occurrence of `sub` inside the window `[start, end)`.
///
/// The window never extends past `start + length + sub.length - 1`, the
/// furthest point at which a first occurrence can still begin inside one
/// turn of the ring. `None` for `end` means no upper limit besides that one.
///
/// An empty `sub` is found at the normalized `start`. On an empty ring the
/// search is not circular: only an empty `sub` is found, at index 0.
///
/// # Failure
///
/// Fails with `Error::NotFound` when no occurrence begins inside the window.
pub fn index_o<S>(
    seq: &S,
    sub: &S,
    start: impl Into<IndexO>,
    end: Option<IndexO>,
) -> Result<Index, Error>
where
    S: Seq,
    S::Item: PartialEq,
{
    let items = seq.items();
    let needle = sub.items();
    let start = start.into().get();
    if items.is_empty() {
        return if needle.is_empty() {
            Ok(Index::new(0))
        } else {
            Err(Error::NotFound)
        };
    }
    if needle.is_empty() {
        return index_from(items.len(), start);
    }

    let len = items.len();
    let reach = (len + needle.len() - 1) as isize;
    let bound = start.saturating_add(reach);
    let to = end.map_or(bound, |e| e.get().min(bound));
    let gap = to.saturating_sub(start);
    log::trace!(target: "ring_seq::index_o", "Searching {} elements from circular index {}", gap.max(0), start);
    if gap < needle.len() as isize {
        return Err(Error::NotFound);
    }

    let first = wrap(len, start);
    let window: Vec<&S::Item> = items.iter().cycle().skip(first).take(gap as usize).collect();
    window
        .windows(needle.len())
        .position(|w| w.iter().zip(needle.iter()).all(|(a, b)| *a == b))
        .map(|p| Index::new((first + p) % len))
        .ok_or(Error::NotFound)
}
