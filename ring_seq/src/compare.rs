pub use self::iter::{Reflections, Reversions, Rotations, RotationsAndReflections};
use crate::Seq;

mod iter;

/// The ring and its rotations, one step at a time to the left.
///
/// ```
/// let all: Vec<String> = ring_seq::rotations(&"ABC".to_owned()).collect();
/// assert_eq!(all, ["ABC", "BCA", "CAB"]);
/// ```
pub fn rotations<S: Seq>(seq: &S) -> Rotations<'_, S> {
    Rotations::new(seq.items())
}

/// The ring and its reflection at index 0.
pub fn reflections<S: Seq>(seq: &S) -> Reflections<'_, S> {
    Reflections::new(seq.items())
}

/// The ring and its plain reversal.
pub fn reversions<S: Seq>(seq: &S) -> Reversions<'_, S> {
    Reversions::new(seq.items())
}

/// Every rotation of the ring, then every rotation of its reflection.
pub fn rotations_and_reflections<S: Seq>(seq: &S) -> RotationsAndReflections<'_, S> {
    RotationsAndReflections::new(seq.items())
}

fn is_in<S, I>(that: &S, length: usize, mut orbit: I) -> bool
where
    S: Seq,
    S::Item: PartialEq,
    I: Iterator<Item = S>,
{
    let that = that.items();
    that.len() == length && orbit.any(|variant| *variant.items() == *that)
}

pub fn is_rotation_of<S>(seq: &S, that: &S) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    is_in(that, seq.length(), rotations(seq))
}

pub fn is_reflection_of<S>(seq: &S, that: &S) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    is_in(that, seq.length(), reflections(seq))
}

pub fn is_reversion_of<S>(seq: &S, that: &S) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    is_in(that, seq.length(), reversions(seq))
}

pub fn is_rotation_or_reflection_of<S>(seq: &S, that: &S) -> bool
where
    S: Seq,
    S::Item: PartialEq,
{
    is_in(that, seq.length(), rotations_and_reflections(seq))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{reflect_at, rotate_left};

    fn abcde() -> String {
        "ABCDE".to_owned()
    }

    #[test]
    fn rotations_start_with_self() {
        let all: Vec<String> = rotations(&abcde()).collect();
        assert_eq!(all, ["ABCDE", "BCDEA", "CDEAB", "DEABC", "EABCD"]);
    }

    #[test]
    fn rotations_are_exact_size() {
        let v = vec![1, 2, 3, 4];
        let mut it = rotations(&v);
        assert_eq!(4, it.len());
        it.next();
        assert_eq!(3, it.len());
        assert_eq!(Some(vec![4, 1, 2, 3]), it.last());
    }

    #[test]
    fn reflections_and_reversions() {
        let refl: Vec<String> = reflections(&abcde()).collect();
        let rev: Vec<String> = reversions(&abcde()).collect();
        assert_eq!(refl, ["ABCDE", "AEDCB"]);
        assert_eq!(rev, ["ABCDE", "EDCBA"]);
    }

    #[test]
    fn rotations_and_reflections_order() {
        let all: Vec<String> = rotations_and_reflections(&abcde()).collect();
        assert_eq!(
            all,
            [
                "ABCDE", "BCDEA", "CDEAB", "DEABC", "EABCD", "AEDCB", "EDCBA", "DCBAE", "CBAED",
                "BAEDC"
            ]
        );
        let three: Vec<String> = rotations_and_reflections(&"ABC".to_owned()).collect();
        assert_eq!(three, ["ABC", "BCA", "CAB", "ACB", "CBA", "BAC"]);
    }

    #[test]
    fn combined_orbit_matches_composition() {
        let v = vec![3, 1, 4, 1, 5, 9];
        let expected: Vec<Vec<i32>> = reflections(&v)
            .flat_map(|r| (0..6).map(move |k| rotate_left(&r, k)))
            .collect();
        let actual: Vec<Vec<i32>> = rotations_and_reflections(&v).collect();
        assert_eq!(expected, actual);
        assert_eq!(reflect_at(&v, 0), actual[6]);
    }

    #[test]
    fn empty_orbits_are_empty() {
        let empty = String::new();
        assert_eq!(0, rotations(&empty).count());
        assert_eq!(0, reflections(&empty).count());
        assert_eq!(0, reversions(&empty).count());
        assert_eq!(0, rotations_and_reflections(&empty).len());
    }

    #[test]
    fn single_element_orbits() {
        let one = vec!['x'];
        assert_eq!(1, rotations(&one).count());
        assert_eq!(vec![vec!['x'], vec!['x']], reflections(&one).collect::<Vec<_>>());
        assert_eq!(2, rotations_and_reflections(&one).count());
    }

    #[test]
    fn membership() {
        assert!(is_rotation_of(&abcde(), &"CDEAB".to_owned()));
        assert!(is_rotation_of(&abcde(), &abcde()));
        assert!(is_reflection_of(&abcde(), &"AEDCB".to_owned()));
        assert!(is_reversion_of(&abcde(), &"EDCBA".to_owned()));
        assert!(is_rotation_or_reflection_of(&abcde(), &"CBAED".to_owned()));
    }

    #[test]
    fn non_membership() {
        assert!(!is_rotation_of(&abcde(), &"AEDCB".to_owned()));
        assert!(!is_reflection_of(&abcde(), &"EDCBA".to_owned()));
        assert!(!is_reversion_of(&abcde(), &"AEDCB".to_owned()));
        assert!(!is_rotation_or_reflection_of(&abcde(), &"ACBDE".to_owned()));
        assert!(!is_rotation_of(&abcde(), &"ABCD".to_owned()));
    }

    #[test]
    fn empty_is_never_a_member() {
        let empty = Vec::<u8>::new();
        assert!(!is_rotation_of(&empty, &empty));
        assert!(!is_reflection_of(&empty, &empty));
    }

    #[test]
    fn works_for_fixed_arrays() {
        let b: Box<[u8]> = vec![1, 2, 3].into_boxed_slice();
        let c: Box<[u8]> = vec![3, 1, 2].into_boxed_slice();
        assert!(is_rotation_of(&b, &c));
        assert!(!is_reversion_of(&b, &c));
    }
}
