use clap::{Parser, Subcommand};

/// Inspect a sequence as a ring: its last element is adjacent to its first.
///
/// Without a separator the input is read as text, one element per character.
#[derive(Debug, Parser)]
#[command(name = "ring_explorer", version)]
pub struct Cli {
    /// Split the input into tokens on this separator instead of reading it as text.
    #[arg(short, long, env = "RING_SEPARATOR", global = true)]
    pub separator: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a circular index against the length of the ring.
    Normalize {
        seq: String,
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
    /// Element at a circular index.
    At {
        seq: String,
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
    /// Rotate to the right, or to the left with `--left`.
    Rotate {
        seq: String,
        #[arg(allow_negative_numbers = true)]
        step: isize,
        #[arg(long)]
        left: bool,
    },
    /// View the ring starting from a circular index.
    StartAt {
        seq: String,
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
    /// Reflect the ring around a circular index.
    Reflect {
        seq: String,
        #[arg(allow_negative_numbers = true, default_value_t = 0)]
        index: isize,
    },
    /// Circular slice `[from, to)`, possibly longer than the ring.
    Slice {
        seq: String,
        #[arg(allow_negative_numbers = true)]
        from: isize,
        #[arg(allow_negative_numbers = true)]
        to: isize,
        #[arg(long, allow_negative_numbers = true, default_value_t = 1)]
        step: isize,
    },
    /// First circular occurrence of a subsequence.
    Find {
        seq: String,
        needle: String,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0)]
        start: isize,
        #[arg(long, allow_negative_numbers = true)]
        end: Option<isize>,
    },
    /// All rotations, one step at a time to the left.
    Rotations { seq: String },
    /// The ring and its reflection.
    Reflections { seq: String },
    /// The ring and its reversal.
    Reversions { seq: String },
    /// All rotations of the ring and of its reflection.
    Orbit { seq: String },
    /// Whether `other` is a rotation, reflection or reversion of the ring.
    Compare { seq: String, other: String },
    /// Rotational order, reflection axes and reflectional order.
    Symmetry { seq: String },
    /// Drive a cursor over the ring: `r` rotates right, `l` rotates left, `f` reflects.
    Walk { seq: String, moves: String },
}

#[cfg(test)]
mod test {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn negative_indices_are_positional() {
        let cli = Cli::try_parse_from(["ring_explorer", "at", "ABCDE", "-1"]).unwrap();
        assert!(matches!(cli.command, Command::At { index: -1, .. }));
    }

    #[test]
    fn slice_defaults_to_unit_step() {
        let cli = Cli::try_parse_from(["ring_explorer", "slice", "ABCDE", "-1", "6"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Slice {
                from: -1,
                to: 6,
                step: 1,
                ..
            }
        ));
    }

    #[test]
    fn separator_is_global() {
        let cli =
            Cli::try_parse_from(["ring_explorer", "symmetry", "2,1,2,2,1,2", "-s", ","]).unwrap();
        assert_eq!(Some(","), cli.separator.as_deref());
    }

    #[test]
    fn reflect_index_is_optional() {
        let cli = Cli::try_parse_from(["ring_explorer", "reflect", "ABC"]).unwrap();
        assert!(matches!(cli.command, Command::Reflect { index: 0, .. }));
    }

    #[test]
    fn unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["ring_explorer", "spin", "ABC"]).is_err());
    }
}
