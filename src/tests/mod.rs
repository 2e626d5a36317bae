mod html_fallback_tests;
mod url_tests;
mod utils;
