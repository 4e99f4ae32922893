use crate::{Error, Seq};

/// A circular index: any offset, positive or negative,
/// read modulo the length of the ring it is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexO(pub isize);

/// A normalized index, always inside `[0, length)`
/// of the ring it was computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl IndexO {
    pub const fn get(self) -> isize {
        self.0
    }
}

impl Index {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<isize> for IndexO {
    fn from(value: isize) -> Self {
        Self(value)
    }
}

impl From<i32> for IndexO {
    fn from(value: i32) -> Self {
        Self(value as isize)
    }
}

impl From<i64> for IndexO {
    fn from(value: i64) -> Self {
        Self(value as isize)
    }
}

impl From<Index> for IndexO {
    fn from(value: Index) -> Self {
        Self(value.0 as isize)
    }
}

impl From<Index> for usize {
    fn from(value: Index) -> Self {
        value.0
    }
}

impl PartialEq<usize> for Index {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for IndexO {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a circular index onto `[0, length)`.
///
/// The remainder is taken with truncating division and shifted
/// by `length` when negative, so `-1` lands on the last slot.
///
/// # Failure
///
/// Fails with `Error::EmptySequence` when `length` is zero.
pub fn index_from(length: usize, i: impl Into<IndexO>) -> Result<Index, Error> {
    if length == 0 {
        return Err(Error::EmptySequence);
    }
    Ok(Index(wrap(length, i.into().0)))
}

/// Returns the element at a circular index.
///
/// Unlike `[i]`, any offset is accepted as long as the ring is not empty.
pub fn apply_o<S: Seq>(seq: &S, i: impl Into<IndexO>) -> Result<S::Item, Error> {
    let items = seq.items();
    let index = index_from(items.len(), i)?;
    Ok(items[index.0].clone())
}

/// `length` must be non-zero.
pub(crate) fn wrap(length: usize, i: isize) -> usize {
    let len = length as isize;
    let n = i % len;
    if n < 0 {
        (n + len) as usize
    } else {
        n as usize
    }
}

/// Indexes a slice without checks. The caller guarantees `items` is not empty.
pub(crate) fn item_at<T>(items: &[T], i: isize) -> &T {
    &items[wrap(items.len(), i)]
}
