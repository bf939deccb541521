use std::sync::Arc;

use crate::config::key::Setting;
use crate::help::page::HelpPage;
use crate::kernel::constants::HELP_BAR_WIDTH;
use crate::lang::color::color;
use crate::lang::error::Result;
use crate::lang::internal::InternalLang;
use crate::lang::text::TemplatedText;
use crate::storage::ValueStore;
use crate::value::Value;

/// Renders help pages with the library's built-in messages.
///
/// Messages are read from the given lang store when it holds them, and fall
/// back to their built-in defaults otherwise.
#[derive(Debug, Clone)]
pub struct HelpView {
    store: Option<Arc<dyn ValueStore>>,
    bar: String,
}

impl HelpView {
    pub fn new(store: Option<Arc<dyn ValueStore>>) -> Self {
        let mut view = Self {
            store,
            bar: String::new(),
        };
        let fill = view.message(InternalLang::CommandHelpBarChar).get().chars().next().unwrap_or('-');
        view.bar = std::iter::repeat_n(fill, HELP_BAR_WIDTH).collect();
        view
    }

    fn message(&self, lang: InternalLang) -> TemplatedText {
        match &self.store {
            Some(store) if store.contains(lang.path()) => lang.text_in(Some(Arc::clone(store))),
            _ => lang.text(),
        }
    }

    /// The plain bar drawn above and below a page
    pub fn bar(&self) -> &str {
        &self.bar
    }

    /// One help line for a command usage and its description
    pub fn item(&self, usage: &str, info: &str) -> Result<String> {
        self.message(InternalLang::CommandHelpItemFormat)
            .format(&[Value::from(usage), Value::from(info)])
    }

    /// Render `page` as colored lines: title bar, page counter, the page's
    /// lines and a footer bar.
    pub fn render(&self, page: &HelpPage) -> Result<String> {
        let title = self
            .message(InternalLang::CommandHelpTitleFormat)
            .format(&[Value::from(page.title.as_str())])?;
        let counter = self
            .message(InternalLang::CommandHelpPageFormat)
            .format(&[Value::from(page.page), Value::from(page.total_pages)])?;

        let mut out = Vec::with_capacity(page.lines.len() + 3);
        out.push(self.title_bar(&title)?);
        out.push(counter);
        out.extend(page.lines.iter().cloned());
        out.push(self.footer("&f"));
        Ok(color(&out.join("\n")))
    }

    fn title_bar(&self, title: &str) -> Result<String> {
        let bar_color = self.message(InternalLang::CommandHelpBarColor).get();
        let title_color = self.message(InternalLang::CommandHelpTitleColor).get();
        let line = format!("{}{}", bar_color, self.bar);
        let center = self.message(InternalLang::CommandHelpTitleContainer).format(&[
            Value::from(bar_color.as_str()),
            Value::from(title_color),
            Value::from(title),
            Value::from(bar_color.as_str()),
        ])?;
        let pivot = line.chars().count() / 2;
        let side: String = line
            .chars()
            .take(pivot.saturating_sub(center.chars().count() / 2))
            .collect();
        Ok(format!("{}{}{}", side, center, side))
    }

    // The footer is drawn slightly shorter than the title bar.
    fn footer(&self, bar_color: &str) -> String {
        let line = format!("{}{}", bar_color, self.bar);
        let keep = line.chars().count().saturating_sub(11);
        line.chars().take(keep).collect()
    }
}
