// Help test module
#[cfg(test)]
mod page_tests;
