//! Circular views over finite sequences.
//!
//! Any `String`, `Vec<T>`, `Box<[T]>`, `Arc<[T]>` or `VecDeque<T>` can be
//! treated as a ring whose last element is adjacent to its first. Every
//! transform returns a value of the same concrete kind it was given.
//!
//! ```
//! use ring_seq::{rotate_left, slice_o};
//!
//! assert_eq!(rotate_left(&"ABC".to_owned(), 1), "BCA");
//! assert_eq!(slice_o(&"ABC".to_owned(), -1, 5, 1).unwrap(), "CABCAB");
//! ```
pub use circular::Circular;
pub use compare::{
    is_reflection_of, is_reversion_of, is_rotation_of, is_rotation_or_reflection_of, reflections,
    reversions, rotations, rotations_and_reflections, Reflections, Reversions, Rotations,
    RotationsAndReflections,
};
pub use error::Error;
pub use index::{apply_o, index_from, Index, IndexO};
pub use ring::Ring;
pub use seq::Seq;
pub use symmetry::{rotational_symmetry, symmetry, symmetry_indices};
pub use transform::{
    index_o, reflect_at, reverse, rotate_left, rotate_right, slice_o, start_at,
};

pub type Result<T> = core::result::Result<T, Error>;

mod error {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        /// A normalized index was requested against a ring with no elements.
        EmptySequence,
        /// A slice step of zero.
        InvalidStep,
        /// A circular search found no occurrence inside its window.
        NotFound,
    }

    impl std::fmt::Display for self::Error {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Error::EmptySequence => write!(f, "an empty sequence has no normalized index"),
                Error::InvalidStep => write!(f, "slice step cannot be zero"),
                Error::NotFound => write!(f, "subsequence not found in the circular window"),
            }
        }
    }
    impl std::error::Error for self::Error {}
}

mod circular;
mod compare;
mod index;
mod ring;
mod seq;
mod symmetry;
mod transform;
