use std::{borrow::Cow, collections::VecDeque, sync::Arc};

/// A concrete sequence kind that can be viewed as a ring.
///
/// The transform layer reads a sequence through `items` and rebuilds
/// a value of the same kind through `from_items`, so a `String` stays
/// a `String` and a `Box<[T]>` stays a `Box<[T]>`.
pub trait Seq: Sized {
    type Item: Clone;

    /// Returns the elements as an indexable slice.
    ///
    /// Slice-backed kinds borrow, the others collect once.
    fn items(&self) -> Cow<'_, [Self::Item]>;

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>;

    /// Number of elements in the ring. For text this counts `char`s, not bytes.
    fn length(&self) -> usize {
        self.items().len()
    }

    fn is_void(&self) -> bool {
        self.length() == 0
    }
}

impl Seq for String {
    type Item = char;

    fn items(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        items.into_iter().collect()
    }

    fn length(&self) -> usize {
        self.chars().count()
    }

    fn is_void(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Clone> Seq for Vec<T> {
    type Item = T;

    fn items(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Seq for Box<[T]> {
    type Item = T;

    fn items(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(&self[..])
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Seq for Arc<[T]> {
    type Item = T;

    fn items(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(&self[..])
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Clone> Seq for VecDeque<T> {
    type Item = T;

    fn items(&self) -> Cow<'_, [T]> {
        match self.as_slices() {
            (front, []) => Cow::Borrowed(front),
            (front, back) => Cow::Owned(front.iter().chain(back).cloned().collect()),
        }
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod test {
    use super::Seq;
    use std::{collections::VecDeque, sync::Arc};

    #[test]
    fn text_counts_chars_not_bytes() {
        let s = "añb".to_owned();
        assert_eq!(3, s.length());
        assert_eq!(vec!['a', 'ñ', 'b'], s.items().into_owned());
    }

    #[test]
    fn rebuilds_same_kind() {
        let v: Vec<u8> = Seq::from_items([1, 2, 3]);
        let b: Box<[u8]> = Seq::from_items([1, 2, 3]);
        let a: Arc<[u8]> = Seq::from_items([1, 2, 3]);
        let d: VecDeque<u8> = Seq::from_items([1, 2, 3]);
        let s: String = Seq::from_items(['x', 'y']);

        assert_eq!(vec![1, 2, 3], v);
        assert_eq!(&[1, 2, 3][..], &*b);
        assert_eq!(&[1, 2, 3][..], &*a);
        assert_eq!(VecDeque::from([1, 2, 3]), d);
        assert_eq!("xy", s);
    }

    #[test]
    fn wrapped_deque_is_read_in_order() {
        let mut d = VecDeque::from([2, 3]);
        d.push_front(1);
        assert_eq!(&[1, 2, 3][..], &*d.items());
    }

    #[test]
    fn empty_is_void() {
        assert!(String::new().is_void());
        assert!(Vec::<i32>::new().is_void());
        assert!(!vec![0].is_void());
    }
}
