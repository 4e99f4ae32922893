use crate::{
    compare, index, symmetry, transform, Error, Index, IndexO, Reflections, Reversions, Ring,
    Rotations, RotationsAndReflections, Seq,
};

/// Method-call syntax for every circular operation.
///
/// Implemented for every `Seq`, so bringing the trait into scope is enough:
///
/// ```
/// use ring_seq::Circular;
///
/// let ring = "ABC".to_owned();
/// assert_eq!(ring.start_at(1), "BCA");
/// assert_eq!(ring.apply_o(-1), Ok('C'));
/// ```
///
/// Note that `rotate_left` and `rotate_right` shadow the in-place slice
/// methods of the same name on `Vec`.
pub trait Circular: Seq {
    fn index_from(&self, i: impl Into<IndexO>) -> Result<Index, Error> {
        index::index_from(self.length(), i)
    }

    fn apply_o(&self, i: impl Into<IndexO>) -> Result<Self::Item, Error> {
        index::apply_o(self, i)
    }

    fn rotate_right(&self, step: impl Into<IndexO>) -> Self {
        transform::rotate_right(self, step)
    }

    fn rotate_left(&self, step: impl Into<IndexO>) -> Self {
        transform::rotate_left(self, step)
    }

    fn start_at(&self, i: impl Into<IndexO>) -> Self {
        transform::start_at(self, i)
    }

    fn reflect_at(&self, i: impl Into<IndexO>) -> Self {
        transform::reflect_at(self, i)
    }

    fn slice_o(&self, from: impl Into<IndexO>, to: impl Into<IndexO>) -> Self {
        match transform::slice_o(self, from, to, 1) {
            Ok(slice) => slice,
            Err(_) => unreachable!("a step of one is always valid"),
        }
    }

    fn slice_o_by(
        &self,
        from: impl Into<IndexO>,
        to: impl Into<IndexO>,
        step: isize,
    ) -> Result<Self, Error> {
        transform::slice_o(self, from, to, step)
    }

    fn index_o(&self, sub: &Self, start: impl Into<IndexO>) -> Result<Index, Error>
    where
        Self::Item: PartialEq,
    {
        transform::index_o(self, sub, start, None)
    }

    fn rotations(&self) -> Rotations<'_, Self> {
        compare::rotations(self)
    }

    fn reflections(&self) -> Reflections<'_, Self> {
        compare::reflections(self)
    }

    fn reversions(&self) -> Reversions<'_, Self> {
        compare::reversions(self)
    }

    fn rotations_and_reflections(&self) -> RotationsAndReflections<'_, Self> {
        compare::rotations_and_reflections(self)
    }

    fn is_rotation_of(&self, that: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        compare::is_rotation_of(self, that)
    }

    fn is_reflection_of(&self, that: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        compare::is_reflection_of(self, that)
    }

    fn is_reversion_of(&self, that: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        compare::is_reversion_of(self, that)
    }

    fn is_rotation_or_reflection_of(&self, that: &Self) -> bool
    where
        Self::Item: PartialEq,
    {
        compare::is_rotation_or_reflection_of(self, that)
    }

    fn rotational_symmetry(&self) -> usize
    where
        Self::Item: PartialEq,
    {
        symmetry::rotational_symmetry(self)
    }

    fn symmetry_indices(&self) -> Vec<Index>
    where
        Self::Item: PartialEq,
    {
        symmetry::symmetry_indices(self)
    }

    fn symmetry(&self) -> usize
    where
        Self::Item: PartialEq,
    {
        symmetry::symmetry(self)
    }

    /// Wraps the sequence into a stateful `Ring` cursor.
    fn into_ring(self) -> Ring<Self> {
        Ring::new(self)
    }
}

impl<S: Seq> Circular for S {}

#[cfg(test)]
mod test {
    use super::Circular;

    fn ring() -> String {
        "ABCDE".to_owned()
    }

    fn squaroid() -> Vec<u8> {
        vec![2, 1, 2, 2, 1, 2, 2, 1, 2, 2, 1, 2]
    }

    #[test]
    fn indexing() {
        assert_eq!(ring().index_from(-1).unwrap(), 4);
        assert_eq!('E', ring().apply_o(-1).unwrap());
    }

    #[test]
    fn transforming() {
        assert_eq!(ring().rotate_right(1), "EABCD");
        assert_eq!(ring().rotate_left(1), "BCDEA");
        assert_eq!(ring().start_at(1), "BCDEA");
        assert_eq!(ring().reflect_at(0), "AEDCB");
    }

    #[test]
    fn slicing() {
        assert_eq!(ring().slice_o(-1, 6), "EABCDEA");
        assert_eq!(ring().slice_o_by(-1, 6, 3).unwrap(), "ECA");
        assert_eq!(ring().index_o(&"EAB".to_owned(), 0).unwrap(), 4);
    }

    #[test]
    fn iterating() {
        assert_eq!(
            ring().rotations().collect::<Vec<_>>(),
            ["ABCDE", "BCDEA", "CDEAB", "DEABC", "EABCD"]
        );
        assert_eq!(ring().reflections().collect::<Vec<_>>(), ["ABCDE", "AEDCB"]);
        assert_eq!(ring().reversions().collect::<Vec<_>>(), ["ABCDE", "EDCBA"]);
        assert_eq!(10, ring().rotations_and_reflections().count());
    }

    #[test]
    fn comparing() {
        assert!(ring().is_rotation_of(&"CDEAB".to_owned()));
        assert!(ring().is_reflection_of(&"AEDCB".to_owned()));
        assert!(ring().is_reversion_of(&"EDCBA".to_owned()));
        assert!(ring().is_rotation_or_reflection_of(&"CBAED".to_owned()));
    }

    #[test]
    fn symmetry() {
        assert_eq!(4, squaroid().rotational_symmetry());
        assert_eq!(squaroid().symmetry_indices(), [1, 4, 7, 10]);
        assert_eq!(4, squaroid().symmetry());
    }

    #[test]
    fn vec_rotation_returns_a_new_vec() {
        let v = vec![1, 2, 3];
        let rotated = v.rotate_left(1);
        assert_eq!(vec![2, 3, 1], rotated);
        assert_eq!(vec![1, 2, 3], v);
    }

    #[test]
    fn into_ring() {
        let mut cursor = ring().into_ring();
        cursor.rotate_left(2);
        assert_eq!(cursor.current(), "CDEAB");
    }
}
