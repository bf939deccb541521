//! # Lexicon Core Lang
//!
//! User-facing message templates and their delivery.
//!
//! ## Key Components:
//!
//! - [`TemplatedText`](text::TemplatedText): a message format read from a
//!   store, with positional substitution, pluralization clauses and color
//!   code translation.
//! - [`format_args`](format::format_args): printf-style substitution over
//!   [`Value`](crate::value::Value) arguments.
//! - [`color`](color::color) and [`ChatColor`](color::ChatColor): the
//!   `&`-prefixed color alphabet.
//! - [`dispatch`]: sends formatted messages to a [`Recipient`](dispatch::Recipient)
//!   or a [`CommandChannel`](dispatch::CommandChannel).
//! - [`InternalLang`](internal::InternalLang): the library's own messages.
pub mod color;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod internal;
pub mod plural;
pub mod text;

pub use color::{color, strip_color, translate_alternate_codes, ChatColor, ALT_COLOR_CHAR, COLOR_CHAR};
pub use dispatch::{send_formatted, send_message, send_raw, send_title, tell_raw, CommandChannel, Recipient};
pub use error::{LangError, Result};
pub use format::format_args;
pub use internal::InternalLang;
pub use plural::apply_plurals;
pub use text::{default_wrapper_format, proper, proper_case, Formatted, TemplatedText, Wrapper};

// Test module declaration
#[cfg(test)]
mod tests;
