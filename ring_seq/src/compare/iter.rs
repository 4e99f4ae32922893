pub use pair::{Reflections, Reversions};
pub use rotations::{Rotations, RotationsAndReflections};

mod rotations {
    use crate::{transform::started_at, Seq};
    use std::borrow::Cow;

    /// Yields every left rotation of a ring, one step at a time,
    /// starting with the ring itself.
    pub struct Rotations<'a, S: Seq> {
        items: Cow<'a, [S::Item]>,
        index: usize,
    }

    impl<'a, S: Seq> Rotations<'a, S> {
        pub(crate) fn new(items: Cow<'a, [S::Item]>) -> Self {
            Self { items, index: 0 }
        }
    }

    impl<S: Seq> Iterator for Rotations<'_, S> {
        type Item = S;

        fn next(&mut self) -> Option<Self::Item> {
            if self.index >= self.items.len() {
                None
            } else {
                let index = self.index;
                self.index += 1;
                Some(started_at::<S>(&self.items, index))
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            let n = self.items.len() - self.index;
            (n, Some(n))
        }
    }
    impl<S: Seq> ExactSizeIterator for Rotations<'_, S> {}

    /// All rotations of a ring followed by all rotations of its reflection.
    pub struct RotationsAndReflections<'a, S: Seq> {
        items: Cow<'a, [S::Item]>,
        reflected: Vec<S::Item>,
        index: usize,
    }

    impl<'a, S: Seq> RotationsAndReflections<'a, S> {
        pub(crate) fn new(items: Cow<'a, [S::Item]>) -> Self {
            let reflected = match items.split_first() {
                Some((head, tail)) => std::iter::once(head)
                    .chain(tail.iter().rev())
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };
            Self {
                items,
                reflected,
                index: 0,
            }
        }
    }

    impl<S: Seq> Iterator for RotationsAndReflections<'_, S> {
        type Item = S;

        fn next(&mut self) -> Option<Self::Item> {
            let len = self.items.len();
            if self.index >= 2 * len {
                return None;
            }
            let index = self.index;
            self.index += 1;
            if index < len {
                Some(started_at::<S>(&self.items, index))
            } else {
                Some(started_at::<S>(&self.reflected, index - len))
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            let n = 2 * self.items.len() - self.index;
            (n, Some(n))
        }
    }
    impl<S: Seq> ExactSizeIterator for RotationsAndReflections<'_, S> {}
}

mod pair {
    use crate::{transform::empty, Seq};
    use std::borrow::Cow;

    #[derive(Clone, Copy)]
    enum Flip {
        Reflect,
        Reverse,
    }

    /// A ring followed by one mirrored copy of it. Empty rings yield nothing.
    struct Pair<'a, S: Seq> {
        items: Cow<'a, [S::Item]>,
        flip: Flip,
        n: usize,
    }

    impl<'a, S: Seq> Pair<'a, S> {
        fn new(items: Cow<'a, [S::Item]>, flip: Flip) -> Self {
            let n = if items.is_empty() { 0 } else { 2 };
            Self { items, flip, n }
        }

        fn mirrored(&self) -> S {
            match (self.flip, self.items.split_first()) {
                (_, None) => empty(),
                (Flip::Reflect, Some((head, tail))) => {
                    S::from_items(std::iter::once(head).chain(tail.iter().rev()).cloned())
                }
                (Flip::Reverse, Some(_)) => S::from_items(self.items.iter().rev().cloned()),
            }
        }
    }

    impl<S: Seq> Iterator for Pair<'_, S> {
        type Item = S;

        fn next(&mut self) -> Option<Self::Item> {
            match self.n {
                0 => None,
                1 => {
                    self.n = 0;
                    Some(self.mirrored())
                }
                _ => {
                    self.n = 1;
                    Some(S::from_items(self.items.iter().cloned()))
                }
            }
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.n, Some(self.n))
        }
    }

    /// Yields a ring and its reflection at index 0.
    pub struct Reflections<'a, S: Seq>(Pair<'a, S>);

    impl<'a, S: Seq> Reflections<'a, S> {
        pub(crate) fn new(items: Cow<'a, [S::Item]>) -> Self {
            Self(Pair::new(items, Flip::Reflect))
        }
    }

    impl<S: Seq> Iterator for Reflections<'_, S> {
        type Item = S;

        fn next(&mut self) -> Option<Self::Item> {
            self.0.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.0.size_hint()
        }
    }
    impl<S: Seq> ExactSizeIterator for Reflections<'_, S> {}

    /// Yields a ring and its plain reversal.
    pub struct Reversions<'a, S: Seq>(Pair<'a, S>);

    impl<'a, S: Seq> Reversions<'a, S> {
        pub(crate) fn new(items: Cow<'a, [S::Item]>) -> Self {
            Self(Pair::new(items, Flip::Reverse))
        }
    }

    impl<S: Seq> Iterator for Reversions<'_, S> {
        type Item = S;

        fn next(&mut self) -> Option<Self::Item> {
            self.0.next()
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.0.size_hint()
        }
    }
    impl<S: Seq> ExactSizeIterator for Reversions<'_, S> {}
}
