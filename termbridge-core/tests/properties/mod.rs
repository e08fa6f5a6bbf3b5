mod import_tests;
mod name_tests;
