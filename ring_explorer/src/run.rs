use crate::{
    cli::{Cli, Command},
    GeneralResult,
};
use ring_seq::{
    apply_o, index_from, index_o, is_reflection_of, is_reversion_of, is_rotation_of,
    is_rotation_or_reflection_of, reflect_at, reflections, reversions, rotate_left, rotate_right,
    rotational_symmetry, rotations, rotations_and_reflections, slice_o, start_at, symmetry,
    symmetry_indices, IndexO, Ring, Seq,
};
use std::fmt::Display;

/// Runs the parsed command, returning the lines to print.
pub fn execute(cli: &Cli) -> GeneralResult<Vec<String>> {
    match cli.separator.as_deref() {
        Some(sep) => run(&cli.command, |s| tokens(s, sep), |v: &Vec<String>| v.join(sep)),
        None => run(&cli.command, str::to_owned, |s: &String| s.clone()),
    }
}

fn tokens(s: &str, sep: &str) -> Vec<String> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(sep).map(str::to_owned).collect()
    }
}

fn run<S, R, W>(command: &Command, read: R, show: W) -> GeneralResult<Vec<String>>
where
    S: Seq,
    S::Item: PartialEq + Display,
    R: Fn(&str) -> S,
    W: Fn(&S) -> String,
{
    let lines = match command {
        Command::Normalize { seq, index } => {
            vec![index_from(read(seq).length(), *index)?.to_string()]
        }
        Command::At { seq, index } => vec![apply_o(&read(seq), *index)?.to_string()],
        Command::Rotate { seq, step, left } => {
            let seq = read(seq);
            let rotated = if *left {
                rotate_left(&seq, *step)
            } else {
                rotate_right(&seq, *step)
            };
            vec![show(&rotated)]
        }
        Command::StartAt { seq, index } => vec![show(&start_at(&read(seq), *index))],
        Command::Reflect { seq, index } => vec![show(&reflect_at(&read(seq), *index))],
        Command::Slice {
            seq,
            from,
            to,
            step,
        } => vec![show(&slice_o(&read(seq), *from, *to, *step)?)],
        Command::Find {
            seq,
            needle,
            start,
            end,
        } => {
            let found = index_o(&read(seq), &read(needle), *start, end.map(IndexO))?;
            vec![found.to_string()]
        }
        Command::Rotations { seq } => {
            let seq = read(seq);
            rotations(&seq).map(|r| show(&r)).collect()
        }
        Command::Reflections { seq } => {
            let seq = read(seq);
            reflections(&seq).map(|r| show(&r)).collect()
        }
        Command::Reversions { seq } => {
            let seq = read(seq);
            reversions(&seq).map(|r| show(&r)).collect()
        }
        Command::Orbit { seq } => {
            let seq = read(seq);
            rotations_and_reflections(&seq).map(|r| show(&r)).collect()
        }
        Command::Compare { seq, other } => {
            let (seq, other) = (read(seq), read(other));
            vec![
                format!("rotation: {}", is_rotation_of(&seq, &other)),
                format!("reflection: {}", is_reflection_of(&seq, &other)),
                format!("reversion: {}", is_reversion_of(&seq, &other)),
                format!(
                    "rotation or reflection: {}",
                    is_rotation_or_reflection_of(&seq, &other)
                ),
            ]
        }
        Command::Symmetry { seq } => {
            let seq = read(seq);
            let axes: Vec<String> = symmetry_indices(&seq)
                .iter()
                .map(ToString::to_string)
                .collect();
            vec![
                format!("rotational: {}", rotational_symmetry(&seq)),
                format!("axes: [{}]", axes.join(", ")),
                format!("reflectional: {}", symmetry(&seq)),
            ]
        }
        Command::Walk { seq, moves } => walk(Ring::new(read(seq)), moves, show)?,
    };
    Ok(lines)
}

fn walk<S, W>(mut ring: Ring<S>, moves: &str, show: W) -> GeneralResult<Vec<String>>
where
    S: Seq,
    S::Item: Display,
    W: Fn(&S) -> String,
{
    let mut lines = Vec::with_capacity(moves.len());
    for m in moves.chars().filter(|c| !c.is_whitespace()) {
        match m {
            'r' => ring.rotate_right(1),
            'l' => ring.rotate_left(1),
            'f' => ring.reflect(),
            other => return Err(format!("unknown move '{other}', expected one of r, l, f").into()),
        }
        log::debug!(target: "ring_explorer::walk", "Head at {}, reflected: {}", ring.head_index(), ring.is_reflected());
        let head = ring.current_head()?;
        lines.push(format!("{m} {head} {}", show(&ring.current())));
    }
    Ok(lines)
}
