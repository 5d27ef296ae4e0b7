//! # Plain text problems
//!
//! Whitespace separated numbers, in this order:
//!
//! * the number of sources `n` and the number of sinks `m`,
//! * `n` supply values,
//! * `n` rows of `m` unit costs,
//! * `m` demand values.
//!
//! Anything after a `#` on a line is a comment. Line breaks carry no meaning otherwise.
use std::str::FromStr;

use crate::data::number::Cost;
use crate::data::problem::Problem;
use crate::io::error::{FileLocation, ImportError, ParseError};

/// Parse a problem in plain text form.
///
/// # Arguments
///
/// * `program`: The complete problem description.
///
/// # Errors
///
/// A `Parse` error when tokens are missing, superfluous or not numbers; a `Problem` error when the
/// numbers don't form a valid problem.
pub fn parse<C: Cost + FromStr>(program: &str) -> Result<Problem<C>, ImportError> {
    let mut tokens = tokens(program);

    let nr_sources = read::<usize>(&mut tokens, "number of sources")?;
    let nr_sinks = read::<usize>(&mut tokens, "number of sinks")?;
    let supply = read_many::<i64>(&mut tokens, nr_sources, "supply")?;
    let cost = (0..nr_sources)
        .map(|i| {
            read_many::<C>(&mut tokens, nr_sinks, "cost")
                .map_err(|error| ParseError::with_cause(format!("Could not read cost row {}", i), error))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let demand = read_many::<i64>(&mut tokens, nr_sinks, "demand")?;

    if let Some(location) = tokens.next() {
        return Err(ParseError::with_file_location("Unexpected token after the demand", location).into());
    }

    Ok(Problem::new(supply, demand, cost)?)
}

/// Split the program into tokens, remembering the line each came from.
fn tokens(program: &str) -> impl Iterator<Item = FileLocation<'_>> {
    program.lines()
        .enumerate()
        .flat_map(|(index, line)| {
            let content = line.split('#').next().unwrap_or_default();
            content.split_whitespace().map(move |token| (index as u64 + 1, token))
        })
}

fn read<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = FileLocation<'a>>,
    what: &str,
) -> Result<T, ParseError> {
    let (line_number, token) = tokens.next()
        .ok_or_else(|| ParseError::new(format!("Unexpected end of input while reading the {}", what)))?;

    token.parse().map_err(|_| ParseError::with_file_location(
        format!("Could not parse {} \"{}\"", what, token),
        (line_number, token),
    ))
}

fn read_many<'a, T: FromStr>(
    tokens: &mut impl Iterator<Item = FileLocation<'a>>,
    count: usize,
    what: &str,
) -> Result<Vec<T>, ParseError> {
    (0..count).map(|_| read(tokens, what)).collect()
}

#[cfg(test)]
mod test {
    use crate::data::error::{Location, ProblemError};
    use crate::data::problem::Problem;
    use crate::io::error::ImportError;
    use crate::io::plain::parse;

    const PROGRAM: &str = "\
# Three factories, three warehouses
3 3
100 200 300   # supply
4 3 8
2 7 3
5 6 2
150 250 200   # demand
";

    #[test]
    fn textbook() {
        let problem = parse::<i64>(PROGRAM).unwrap();
        let expected = Problem::new(
            vec![100, 200, 300],
            vec![150, 250, 200],
            vec![vec![4, 3, 8], vec![2, 7, 3], vec![5, 6, 2]],
        ).unwrap();

        assert_eq!(problem, expected);
    }

    #[test]
    fn fractional_costs() {
        let problem = parse::<f64>("1 2\n10\n0.5 1.25\n4 6").unwrap();
        assert_eq!(problem.cost()[(0, 1)], 1.25);
    }

    #[test]
    fn missing_token() {
        match parse::<i64>("2 2\n10 20\n1 2\n3 4\n15") {
            Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), None),
            _ => panic!(),
        }
    }

    #[test]
    fn trailing_token() {
        match parse::<i64>("1 1\n10\n1\n10\n\n7") {
            Err(ImportError::Parse(error)) => assert_eq!(error.line_number(), Some(6)),
            _ => panic!(),
        }
    }

    #[test]
    fn not_a_number() {
        match parse::<i64>("2 2\n10 20\n1 2\n3 x\n15 15") {
            Err(ImportError::Parse(error)) => {
                assert_eq!(error.line_number(), Some(4));
                assert!(error.to_string().contains("Could not read cost row 1"));
            },
            _ => panic!(),
        }
    }

    #[test]
    fn negative_supply() {
        match parse::<i64>("1 1\n-10\n1\n10") {
            Err(ImportError::Problem(error)) => {
                assert_eq!(error, ProblemError::NegativeValue(Location::Supply(0)));
            },
            _ => panic!(),
        }
    }
}
