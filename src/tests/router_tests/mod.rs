mod export_tests;
mod page_tests;
