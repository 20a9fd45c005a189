mod auth_tests;
mod calculator_tests;
mod page_tests;
mod property_tests;
mod saved_tests;
