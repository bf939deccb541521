use lexicon_core::lang::Recipient;

/// The terminal, as a message recipient.
///
/// Messages are printed to standard output, one per line.
#[derive(Debug, Default)]
pub struct ConsoleRecipient;

impl Recipient for ConsoleRecipient {
    fn identifier(&self) -> &str {
        "console"
    }

    fn send_text(&self, text: &str) {
        println!("{}", text);
    }
}
