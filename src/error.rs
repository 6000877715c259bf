use crate::graph::{CityId, Weight};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid graph size: a graph needs at least one city")]
    InvalidGraphSize,

    #[error("Data allocation error: could not reserve room for {0} entries")]
    AllocationFailure(usize),

    #[error("No edge can join city {0} to itself")]
    SelfLoop(CityId),

    #[error("City {city} is out of range for a graph of {num_cities} cities")]
    CityOutOfRange { city: CityId, num_cities: usize },

    #[error("Travel time {0} is too large for a single edge")]
    WeightTooLarge(Weight),

    #[error("Source city {city} is out of range for a graph of {num_cities} cities")]
    SourceOutOfRange { city: CityId, num_cities: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("could not read data file")]
    Io(#[from] std::io::Error),

    #[error("No city count specified in data file")]
    MissingCityCount,

    #[error("Invalid graph size: the city count must be at least 1")]
    InvalidGraphSize,

    #[error("Not enough values specified in data file: expected {expected}, found {found}")]
    MissingValues { expected: usize, found: usize },

    #[error("Value {0} is too large")]
    ValueTooLarge(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
