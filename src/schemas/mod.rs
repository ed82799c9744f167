pub mod movie;
pub mod trending;

#[cfg(test)]
mod movie_test;

pub use movie::{MovieListResponse, MovieSummary};
pub use trending::{CounterDocument, CounterListResponse, TrendingEntry};
