pub mod models;

#[cfg(test)]
mod models_test;
