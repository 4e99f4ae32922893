use crate::{apply_o, reflect_at, start_at, Error, IndexO, Seq};

/// A ring with a mutable point of view.
///
/// The underlying sequence is never touched, only two pieces
/// of state are tracked: the circular index of the current head,
/// and whether the ring is being read in the reflected direction.
/// Once reflected, rotating to the right moves the head forward
/// instead of backward.
///
/// ```
/// use ring_seq::Ring;
///
/// let mut ring = Ring::new("ABC".to_owned());
/// ring.rotate_right(1);
/// assert_eq!(ring.current(), "CAB");
/// ring.reflect();
/// assert_eq!(ring.current(), "CBA");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ring<S: Seq> {
    underlying: S,
    head_index: IndexO,
    is_reflected: bool,
}

impl<S: Seq> Ring<S> {
    pub fn new(underlying: S) -> Self {
        Self::with_state(underlying, 0, false)
    }

    pub fn with_state(underlying: S, head_index: impl Into<IndexO>, is_reflected: bool) -> Self {
        Self {
            underlying,
            head_index: head_index.into(),
            is_reflected,
        }
    }

    /// Returns the ring to its unrotated, unreflected view.
    pub fn reset(&mut self) {
        self.head_index = IndexO(0);
        self.is_reflected = false;
    }

    fn direction_multiplier(&self) -> isize {
        if self.is_reflected {
            1
        } else {
            -1
        }
    }

    /// Updates the rotation state by `step` to the right.
    pub fn rotate_right(&mut self, step: isize) {
        let head = self.head_index.get();
        self.head_index = IndexO(head.wrapping_add(step.wrapping_mul(self.direction_multiplier())));
    }

    /// Updates the rotation state by `step` to the left.
    pub fn rotate_left(&mut self, step: isize) {
        self.rotate_right(step.wrapping_neg());
    }

    /// Inverts the reflection state.
    pub fn reflect(&mut self) {
        self.is_reflected = !self.is_reflected;
    }

    /// The element at the head of the current view.
    ///
    /// # Failure
    ///
    /// Fails with `Error::EmptySequence` when the underlying ring is empty.
    pub fn current_head(&self) -> Result<S::Item, Error> {
        apply_o(&self.underlying, self.head_index)
    }

    /// The sequence as seen from the current rotation and reflection state.
    pub fn current(&self) -> S {
        if self.is_reflected {
            reflect_at(&self.underlying, self.head_index)
        } else {
            start_at(&self.underlying, self.head_index)
        }
    }

    pub const fn head_index(&self) -> IndexO {
        self.head_index
    }

    pub const fn is_reflected(&self) -> bool {
        self.is_reflected
    }

    pub fn underlying(&self) -> &S {
        &self.underlying
    }

    pub fn into_inner(self) -> S {
        self.underlying
    }
}

impl<S: Seq> From<S> for Ring<S> {
    fn from(value: S) -> Self {
        Self::new(value)
    }
}
