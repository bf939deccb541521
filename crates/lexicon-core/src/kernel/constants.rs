/// Library name
pub const LIB_NAME: &str = "Lexicon";

/// Library version
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title shown in the default message format
pub const DEFAULT_FORMAT_TITLE: &str = "Lexicon";

/// Default message format: `[title]` followed by the message
pub const DEFAULT_FORMAT: &str = "&f[&9Lexicon&f] %s";

/// Lines per help page
pub const HELP_PAGE_CAPACITY: usize = 5;

/// Width of the help title and footer bars, in characters
pub const HELP_BAR_WIDTH: usize = 60;
