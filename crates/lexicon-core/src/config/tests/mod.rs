// Config test module
#[cfg(test)]
mod key_tests;
