use std::borrow::Cow;
use std::sync::Arc;

use crate::config::key::{Setting, ValueKey};
use crate::kernel::constants;
use crate::lang::color::color;
use crate::lang::error::Result;
use crate::lang::format::format_args;
use crate::lang::plural::apply_plurals;
use crate::storage::ValueStore;
use crate::value::Value;

/// The enclosing format a message is wrapped in when it is sent.
#[derive(Debug, Clone)]
pub enum Wrapper {
    /// The message is its own format
    Itself,
    /// The library-wide default format
    Library,
    /// A specific format message
    Custom(Arc<TemplatedText>),
    /// No enclosing format
    None,
}

/// A user-facing message template backed by a store, or synthetic.
#[derive(Debug, Clone)]
pub struct TemplatedText {
    key: ValueKey,
    wrapper: Wrapper,
}

impl TemplatedText {
    /// Create a message bound to `store`, wrapped in the library format
    pub fn new(path: impl Into<String>, default: impl Into<String>, store: Arc<dyn ValueStore>) -> Self {
        Self::from_key(ValueKey::new(path, Value::Text(default.into()), store))
    }

    /// Create a message with no store whose format string is `format`.
    pub fn synthetic(format: impl Into<String>) -> Self {
        Self::from_key(ValueKey::synthetic(Value::Text(format.into())))
    }

    pub fn from_key(key: ValueKey) -> Self {
        Self {
            key,
            wrapper: Wrapper::Library,
        }
    }

    /// Bind a declared message to a store
    pub fn of<S: Setting + ?Sized>(setting: &S, store: Arc<dyn ValueStore>) -> Self {
        Self::from_key(setting.key(store))
    }

    pub fn with_wrapper(mut self, wrapper: Wrapper) -> Self {
        self.wrapper = wrapper;
        self
    }

    pub fn key(&self) -> &ValueKey {
        &self.key
    }

    pub fn path(&self) -> Option<&str> {
        self.key.path()
    }

    /// The default format string
    pub fn default_format(&self) -> Cow<'_, str> {
        match self.key.default_value() {
            Value::Text(text) => Cow::Borrowed(text.as_str()),
            Value::Null => Cow::Borrowed(""),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// The format this message is wrapped in, if any
    pub fn wrapper(&self) -> Option<Cow<'_, TemplatedText>> {
        match &self.wrapper {
            Wrapper::Itself => Some(Cow::Borrowed(self)),
            Wrapper::Library => Some(Cow::Owned(default_wrapper_format(None))),
            Wrapper::Custom(format) => Some(Cow::Borrowed(format.as_ref())),
            Wrapper::None => None,
        }
    }

    /// The raw format string, without substitution or color.
    ///
    /// Synthetic messages return their default verbatim. Bound messages
    /// return the textual form of the stored value, or an empty string when
    /// the store has none.
    pub fn get(&self) -> String {
        if self.key.is_synthetic() {
            return self.default_format().into_owned();
        }
        self.key.raw().map(|raw| raw.to_string()).unwrap_or_default()
    }

    /// Substitute `args` into the format string
    pub fn format(&self, args: &[Value]) -> Result<String> {
        format_args(&self.get(), args)
    }

    /// Substitute `args`, then translate color codes
    pub fn format_and_color(&self, args: &[Value]) -> Result<String> {
        Ok(color(&self.format(args)?))
    }

    /// Rewrite the pluralization clauses for `amount`, then substitute `args`
    /// and translate color codes.
    pub fn plural_format(&self, amount: i64, args: &[Value]) -> Result<String> {
        let rewritten = apply_plurals(&self.get(), amount);
        Ok(color(&format_args(&rewritten, args)?))
    }
}

/// The library's default message format: a colored `[title]` prefix followed
/// by the message.
pub fn default_wrapper_format(title: Option<&str>) -> TemplatedText {
    TemplatedText::synthetic(format!(
        "&f[&9{}&f] %s",
        title.unwrap_or(constants::DEFAULT_FORMAT_TITLE)
    ))
}

/// Implemented by plugins that want their own message format.
pub trait Formatted {
    fn name(&self) -> &str;

    fn message_format(&self) -> TemplatedText {
        default_wrapper_format(Some(self.name()))
    }
}

/// Capitalize the first character and lower-case the rest, appending
/// `punctuation` when the trimmed text contains a space.
pub fn proper_case(raw: &str, punctuation: char) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out: String = first.to_uppercase().collect();
    out.push_str(&chars.as_str().to_lowercase());
    if trimmed.contains(' ') {
        out.push(punctuation);
    }
    out
}

/// [`proper_case`] with a full stop
pub fn proper(raw: &str) -> String {
    proper_case(raw, '.')
}
