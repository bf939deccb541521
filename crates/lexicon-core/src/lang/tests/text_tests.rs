#![cfg(test)]

use std::sync::Arc;

use crate::config::key::{seed_defaults, Setting};
use crate::lang::error::{LangError, Result};
use crate::lang::internal::InternalLang;
use crate::lang::text::{default_wrapper_format, proper, proper_case, Formatted, TemplatedText, Wrapper};
use crate::storage::{SettingsStore, ValueStore};
use crate::value::Value;

fn lang_store() -> Arc<SettingsStore> {
    Arc::new(SettingsStore::new("lang"))
}

#[test]
fn test_synthetic_text_returns_its_format() -> Result<()> {
    let text = TemplatedText::synthetic("Hello %s");
    assert_eq!(text.path(), None);
    assert_eq!(text.get(), "Hello %s");
    assert_eq!(text.format(&["Bob".into()])?, "Hello Bob");
    Ok(())
}

#[test]
fn test_bound_text_reads_store() -> Result<()> {
    let store = lang_store();
    let text = TemplatedText::new("greeting", "Hello %s", store.clone());
    assert_eq!(text.get(), "");
    assert_eq!(text.default_format(), "Hello %s");

    store.set("greeting", Value::from("Howdy %s"));
    assert_eq!(text.get(), "Howdy %s");
    assert_eq!(text.format(&["Ann".into()])?, "Howdy Ann");
    Ok(())
}

#[test]
fn test_bound_text_renders_non_text_values() {
    let store = lang_store();
    store.set("count", Value::Int(3));
    let text = TemplatedText::new("count", "", store);
    assert_eq!(text.get(), "3");
}

#[test]
fn test_format_and_color() -> Result<()> {
    let text = TemplatedText::synthetic("&aWelcome, %s&r");
    assert_eq!(text.format_and_color(&["Eve".into()])?, "\u{00A7}aWelcome, Eve\u{00A7}r");
    Ok(())
}

#[test]
fn test_plural_format() -> Result<()> {
    let text = TemplatedText::synthetic("&eThere {PLURALA player|players} online, %s");
    assert_eq!(
        text.plural_format(1, &["enjoy".into()])?,
        "\u{00A7}eThere is 1 player online, enjoy"
    );
    assert_eq!(
        text.plural_format(4, &["enjoy".into()])?,
        "\u{00A7}eThere are 4 players online, enjoy"
    );

    let coins = TemplatedText::synthetic("You have %d {PLURAL coin|coins}");
    assert_eq!(coins.plural_format(3, &[Value::Int(3)])?, "You have 3 coins");
    assert_eq!(coins.plural_format(1, &[Value::Int(1)])?, "You have 1 coin");
    assert_eq!(coins.plural_format(0, &[Value::Int(0)])?, "You have 0 coins");
    Ok(())
}

#[test]
fn test_format_errors_propagate() {
    let text = TemplatedText::synthetic("%s and %s");
    assert!(matches!(
        text.format(&["one".into()]),
        Err(LangError::MissingArgument { position: 2, .. })
    ));
}

#[test]
fn test_wrappers() {
    let text = TemplatedText::synthetic("body");
    let library = text.wrapper().map(|w| w.get());
    assert_eq!(library.as_deref(), Some("&f[&9Lexicon&f] %s"));

    let itself = TemplatedText::synthetic("[%s]").with_wrapper(Wrapper::Itself);
    assert_eq!(itself.wrapper().map(|w| w.get()).as_deref(), Some("[%s]"));

    let custom = TemplatedText::synthetic("body")
        .with_wrapper(Wrapper::Custom(Arc::new(TemplatedText::synthetic("<%s>"))));
    assert_eq!(custom.wrapper().map(|w| w.get()).as_deref(), Some("<%s>"));

    let none = TemplatedText::synthetic("body").with_wrapper(Wrapper::None);
    assert!(none.wrapper().is_none());
}

struct ArenaPlugin;

impl Formatted for ArenaPlugin {
    fn name(&self) -> &str {
        "Arena"
    }
}

#[test]
fn test_default_wrapper_format() {
    assert_eq!(default_wrapper_format(None).get(), "&f[&9Lexicon&f] %s");
    assert_eq!(default_wrapper_format(Some("Shop")).get(), "&f[&9Shop&f] %s");
    assert_eq!(ArenaPlugin.message_format().get(), "&f[&9Arena&f] %s");
}

#[test]
fn test_proper_case() {
    assert_eq!(proper_case("  hello world  ", '!'), "Hello world!");
    assert_eq!(proper_case("DIAMOND", '!'), "Diamond");
    assert_eq!(proper_case("   ", '!'), "");
    assert_eq!(proper("gOLDEN apple"), "Golden apple.");
    assert_eq!(proper(""), "");
}

#[test]
fn test_internal_lang_defaults() {
    assert_eq!(InternalLang::CommandHelpPageFormat.text().get(), "&ePage %d/%d");
    assert_eq!(InternalLang::Format.text().get(), "&f[&9Lexicon&f] %s");
    assert_eq!(
        InternalLang::Format.text().wrapper().map(|w| w.get()).as_deref(),
        Some("&f[&9Lexicon&f] %s")
    );
    assert_eq!(InternalLang::CommandHelpBarChar.text_in(None).get(), "-");
}

#[test]
fn test_internal_lang_overrides() {
    let store = lang_store();
    assert_eq!(seed_defaults(&*store, InternalLang::ALL), InternalLang::ALL.len());
    store.set(InternalLang::CommandHelpPageFormat.path(), Value::from("Seite %d/%d"));

    let dyn_store: Arc<dyn ValueStore> = store;
    let page = InternalLang::CommandHelpPageFormat.text_in(Some(dyn_store.clone()));
    assert_eq!(page.get(), "Seite %d/%d");
    assert_eq!(InternalLang::CommandHelpInfo.text_in(Some(dyn_store)).get(), "Displays help information");
}
