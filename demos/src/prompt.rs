use std::io::{self, BufRead, Write};
use std::str::FromStr;

use gridstar_core::Point;

use crate::config::Experiment;

fn ask<T, R, W>(input: &mut R, output: &mut W, question: &str, current: T) -> io::Result<T>
where
    T: FromStr + std::fmt::Display + Copy,
    R: BufRead,
    W: Write,
{
    write!(output, "{question} [{current}]: ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(current);
    }
    let line = line.trim();
    if line.is_empty() {
        return Ok(current);
    }
    match line.parse() {
        Ok(v) => Ok(v),
        Err(_) => {
            log::warn!("invalid value {line:?}, keeping {current}");
            Ok(current)
        }
    }
}

/// Ask for the parameters of the next experiment. Empty or unparsable
/// answers keep the previous value.
pub fn next_experiment<R: BufRead, W: Write>(
    prev: &Experiment,
    input: &mut R,
    output: &mut W,
) -> io::Result<Experiment> {
    let width = ask(input, output, "grid width", prev.width)?;
    let height = ask(input, output, "grid height", prev.height)?;
    let x1 = ask(input, output, "start x", prev.start.x)?;
    let y1 = ask(input, output, "start y", prev.start.y)?;
    let x2 = ask(input, output, "goal x", prev.goal.x)?;
    let y2 = ask(input, output, "goal y", prev.goal.y)?;
    let obstacles = ask(input, output, "obstacles", prev.obstacles)?;
    Ok(Experiment {
        width,
        height,
        start: Point::new(x1, y1),
        goal: Point::new(x2, y2),
        obstacles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_replace_values() {
        let mut input = io::Cursor::new("10\n12\n1\n2\n9\n11\n30\n");
        let mut out = Vec::new();
        let next = next_experiment(&Experiment::default(), &mut input, &mut out).unwrap();
        assert_eq!(
            next,
            Experiment {
                width: 10,
                height: 12,
                start: Point::new(1, 2),
                goal: Point::new(9, 11),
                obstacles: 30,
            }
        );
        assert!(String::from_utf8(out).unwrap().starts_with("grid width [50]: "));
    }

    #[test]
    fn bad_or_missing_answers_keep_previous() {
        let prev = Experiment::default();
        let mut input = io::Cursor::new("abc\n\n3\n-x\n");
        let next = next_experiment(&prev, &mut input, &mut io::sink()).unwrap();
        assert_eq!(next.width, prev.width);
        assert_eq!(next.height, prev.height);
        assert_eq!(next.start, Point::new(3, prev.start.y));
        assert_eq!(next.goal, prev.goal);
        assert_eq!(next.obstacles, prev.obstacles);
    }
}
