use std::sync::Arc;

use crate::config::key::Setting;
use crate::kernel::constants;
use crate::lang::text::{TemplatedText, Wrapper};
use crate::storage::ValueStore;
use crate::value::Value;

/// Messages the library itself sends, with their built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalLang {
    Format,
    CommandHelpTitleFormat,
    CommandHelpPageFormat,
    CommandHelpItemFormat,
    CommandHelpBarChar,
    CommandHelpBarColor,
    CommandHelpTitleColor,
    CommandHelpTitleContainer,
    CommandHelpInfo,
}

impl InternalLang {
    pub const ALL: [InternalLang; 9] = [
        InternalLang::Format,
        InternalLang::CommandHelpTitleFormat,
        InternalLang::CommandHelpPageFormat,
        InternalLang::CommandHelpItemFormat,
        InternalLang::CommandHelpBarChar,
        InternalLang::CommandHelpBarColor,
        InternalLang::CommandHelpTitleColor,
        InternalLang::CommandHelpTitleContainer,
        InternalLang::CommandHelpInfo,
    ];

    pub fn default_format(&self) -> &'static str {
        match self {
            InternalLang::Format => constants::DEFAULT_FORMAT,
            InternalLang::CommandHelpTitleFormat => "Help for %s",
            InternalLang::CommandHelpPageFormat => "&ePage %d/%d",
            InternalLang::CommandHelpItemFormat => "&6%s&f: &e%s",
            InternalLang::CommandHelpBarChar => "-",
            InternalLang::CommandHelpBarColor => "&e",
            InternalLang::CommandHelpTitleColor => "&9",
            InternalLang::CommandHelpTitleContainer => "%s[%s%s%s]",
            InternalLang::CommandHelpInfo => "Displays help information",
        }
    }

    /// The built-in message, unaffected by any store
    pub fn text(&self) -> TemplatedText {
        TemplatedText::synthetic(self.default_format()).with_wrapper(self.wrapper())
    }

    /// The message as overridden by `store`, or the built-in one without a store.
    pub fn text_in(&self, store: Option<Arc<dyn ValueStore>>) -> TemplatedText {
        match store {
            Some(store) => TemplatedText::of(self, store).with_wrapper(self.wrapper()),
            None => self.text(),
        }
    }

    fn wrapper(&self) -> Wrapper {
        match self {
            InternalLang::Format => Wrapper::Itself,
            _ => Wrapper::Library,
        }
    }
}

impl Setting for InternalLang {
    fn path(&self) -> &str {
        match self {
            InternalLang::Format => "format",
            InternalLang::CommandHelpTitleFormat => "command.help.title-format",
            InternalLang::CommandHelpPageFormat => "command.help.page-format",
            InternalLang::CommandHelpItemFormat => "command.help.item-format",
            InternalLang::CommandHelpBarChar => "command.help.bar-char",
            InternalLang::CommandHelpBarColor => "command.help.bar-color",
            InternalLang::CommandHelpTitleColor => "command.help.title-color",
            InternalLang::CommandHelpTitleContainer => "command.help.title-container",
            InternalLang::CommandHelpInfo => "command.help.info",
        }
    }

    fn default_value(&self) -> Value {
        Value::Text(self.default_format().to_string())
    }
}
