pub mod movie_formatter;

#[cfg(test)]
mod movie_formatter_test;

pub use movie_formatter::{format_movie_result, format_trending_entry};
