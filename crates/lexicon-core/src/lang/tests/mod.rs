#[cfg(test)]
mod plural_tests;
#[cfg(test)]
mod text_tests;
