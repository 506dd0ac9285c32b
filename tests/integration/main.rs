//! API integration tests against the in-memory engine.

mod helpers;

mod category_test;
mod company_test;
mod health_test;
mod pagination_test;
mod product_test;
