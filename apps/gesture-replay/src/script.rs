//! Line-oriented gesture scripts.
//!
//! ```text
//! # comment
//! down 200 600 0
//! move 200 560 16
//! up 200 560 32
//! frame 48
//! cancel 60
//! ```
//!
//! Coordinates are viewport pixels, times are milliseconds.

use std::fmt;

use momentum_ui_graphics::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Down { position: Point, time_millis: f64 },
    Move { position: Point, time_millis: f64 },
    Up { position: Point, time_millis: f64 },
    Cancel { time_millis: f64 },
    /// Render a frame at this time.
    Frame { time_millis: f64 },
}

impl Step {
    pub fn time_millis(&self) -> f64 {
        match *self {
            Step::Down { time_millis, .. }
            | Step::Move { time_millis, .. }
            | Step::Up { time_millis, .. }
            | Step::Cancel { time_millis }
            | Step::Frame { time_millis } => time_millis,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptError {
    UnknownCommand {
        line: usize,
        command: String,
    },
    WrongArity {
        line: usize,
        command: &'static str,
        expected: usize,
        found: usize,
    },
    InvalidNumber {
        line: usize,
        value: String,
    },
    TimeWentBackwards {
        line: usize,
        previous: f64,
        found: f64,
    },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownCommand { line, command } => {
                write!(f, "line {line}: unknown command '{command}'")
            }
            ScriptError::WrongArity {
                line,
                command,
                expected,
                found,
            } => write!(
                f,
                "line {line}: '{command}' takes {expected} arguments, got {found}"
            ),
            ScriptError::InvalidNumber { line, value } => {
                write!(f, "line {line}: '{value}' is not a finite number")
            }
            ScriptError::TimeWentBackwards {
                line,
                previous,
                found,
            } => write!(
                f,
                "line {line}: time {found}ms is earlier than the previous {previous}ms"
            ),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse(source: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    let mut previous = f64::NEG_INFINITY;
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }
        let step = parse_line(line, content)?;
        let time = step.time_millis();
        if time < previous {
            return Err(ScriptError::TimeWentBackwards {
                line,
                previous,
                found: time,
            });
        }
        previous = time;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_line(line: usize, content: &str) -> Result<Step, ScriptError> {
    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let (name, arity): (&'static str, usize) = match command {
        "down" => ("down", 3),
        "move" => ("move", 3),
        "up" => ("up", 3),
        "cancel" => ("cancel", 1),
        "frame" => ("frame", 1),
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };
    if args.len() != arity {
        return Err(ScriptError::WrongArity {
            line,
            command: name,
            expected: arity,
            found: args.len(),
        });
    }

    let numbers = args
        .iter()
        .map(|arg| number(line, arg))
        .collect::<Result<Vec<f64>, _>>()?;

    let step = match (name, numbers.as_slice()) {
        ("cancel", &[t]) => Step::Cancel { time_millis: t },
        ("frame", &[t]) => Step::Frame { time_millis: t },
        (kind, &[x, y, t]) => {
            let position = Point::new(x as f32, y as f32);
            match kind {
                "down" => Step::Down {
                    position,
                    time_millis: t,
                },
                "move" => Step::Move {
                    position,
                    time_millis: t,
                },
                _ => Step::Up {
                    position,
                    time_millis: t,
                },
            }
        }
        _ => {
            return Err(ScriptError::WrongArity {
                line,
                command: name,
                expected: arity,
                found: numbers.len(),
            })
        }
    };
    Ok(step)
}

fn number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or_else(|| ScriptError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let steps = parse(
            "# flick\n\
             down 200 600 0\n\
             move 200 560.5 16\n\
             \n\
             up 200 560.5 32   # release\n\
             frame 48\n\
             cancel 60\n",
        )
        .expect("valid script");

        assert_eq!(
            steps,
            vec![
                Step::Down {
                    position: Point::new(200.0, 600.0),
                    time_millis: 0.0
                },
                Step::Move {
                    position: Point::new(200.0, 560.5),
                    time_millis: 16.0
                },
                Step::Up {
                    position: Point::new(200.0, 560.5),
                    time_millis: 32.0
                },
                Step::Frame { time_millis: 48.0 },
                Step::Cancel { time_millis: 60.0 },
            ]
        );
    }

    #[test]
    fn reports_line_of_unknown_command() {
        let err = parse("down 0 0 0\nswipe 1 2 3").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                command: "swipe".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 2: unknown command 'swipe'");
    }

    #[test]
    fn rejects_wrong_argument_count() {
        let err = parse("move 1 2").unwrap_err();
        assert_eq!(
            err,
            ScriptError::WrongArity {
                line: 1,
                command: "move",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        assert!(matches!(
            parse("frame NaN"),
            Err(ScriptError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse("down a 1 2"),
            Err(ScriptError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_time_going_backwards() {
        let err = parse("down 0 0 20\nmove 0 5 10").unwrap_err();
        assert!(matches!(err, ScriptError::TimeWentBackwards { line: 2, .. }));
    }
}
