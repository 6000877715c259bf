/*
Reads the city data format:

    <num cities>
    <time 1,0>
    <time 2,0> <time 2,1>
    <time 3,0> <time 3,1> <time 3,2>
    ...

Each time is a non-negative integer or `x`/`X` for a blocked path. Every other byte separates
values, so layout, commas, minus signs and non-ASCII text carry no meaning. Trailing values are
ignored.
*/

use std::fs;
use std::path::Path;

use crate::error::ParseError;
use crate::graph::{CityGraph, Weight, MAX_WEIGHT};

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Value(u64),
    Blocked,
}

#[derive(Clone)]
struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self
            .rest
            .iter()
            .position(|&b| b.is_ascii_digit() || b == b'x' || b == b'X')?;
        let rest = &self.rest[start..];
        if !rest[0].is_ascii_digit() {
            self.rest = &rest[1..];
            return Some(Ok(Token::Blocked));
        }
        let end = rest
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, tail) = rest.split_at(end);
        self.rest = tail;
        let digits = String::from_utf8_lossy(digits);
        Some(
            digits
                .parse::<u64>()
                .map(Token::Value)
                .map_err(|_| ParseError::ValueTooLarge(digits.into_owned())),
        )
    }
}

fn tokens(bytes: &[u8]) -> Tokens<'_> {
    Tokens { rest: bytes }
}

fn weight(value: u64) -> Result<Weight, ParseError> {
    Weight::try_from(value)
        .ok()
        .filter(|&w| w <= MAX_WEIGHT)
        .ok_or_else(|| ParseError::ValueTooLarge(value.to_string()))
}

pub fn parse_bytes(bytes: &[u8]) -> Result<CityGraph, ParseError> {
    let mut tokens = tokens(bytes);
    let num_cities = match tokens.next().transpose()? {
        Some(Token::Value(n)) => n,
        _ => return Err(ParseError::MissingCityCount),
    };
    if num_cities == 0 {
        return Err(ParseError::InvalidGraphSize);
    }
    let too_large = || ParseError::ValueTooLarge(num_cities.to_string());
    let num_cities = usize::try_from(num_cities).map_err(|_| too_large())?;
    let expected = num_cities
        .checked_mul(num_cities - 1)
        .map(|n| n / 2)
        .ok_or_else(too_large)?;

    // Count before allocating, so a huge city count with no data behind it fails cheaply.
    let available = tokens.clone().take(expected).count();
    if available < expected {
        return Err(ParseError::MissingValues {
            expected,
            found: available,
        });
    }

    let mut graph = CityGraph::new(num_cities)?;
    let mut found = 0;
    for row in 1..num_cities {
        for col in 0..row {
            let w = match tokens.next().transpose()? {
                Some(Token::Value(v)) => Some(weight(v)?),
                Some(Token::Blocked) => None,
                None => return Err(ParseError::MissingValues { expected, found }),
            };
            graph.set_weight(row, col, w)?;
            found += 1;
        }
    }
    Ok(graph)
}

pub fn parse_str(text: &str) -> Result<CityGraph, ParseError> {
    parse_bytes(text.as_bytes())
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<CityGraph, ParseError> {
    let bytes = fs::read(path)?;
    parse_bytes(&bytes)
}
