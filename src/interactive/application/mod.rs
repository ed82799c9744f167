pub mod fetch_service;
pub mod trending_service;

#[cfg(test)]
mod trending_service_test;
