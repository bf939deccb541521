use std::fmt;

/// Escape character the host client understands
pub const COLOR_CHAR: char = '\u{00A7}';

/// Character used in stored text to introduce a color code
pub const ALT_COLOR_CHAR: char = '&';

/// Color and style codes of the chat protocol: `0`-`9`, `a`-`f`, `k`-`o` and `r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Obfuscated,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatColor {
    pub const ALL: [ChatColor; 22] = [
        ChatColor::Black,
        ChatColor::DarkBlue,
        ChatColor::DarkGreen,
        ChatColor::DarkAqua,
        ChatColor::DarkRed,
        ChatColor::DarkPurple,
        ChatColor::Gold,
        ChatColor::Gray,
        ChatColor::DarkGray,
        ChatColor::Blue,
        ChatColor::Green,
        ChatColor::Aqua,
        ChatColor::Red,
        ChatColor::LightPurple,
        ChatColor::Yellow,
        ChatColor::White,
        ChatColor::Obfuscated,
        ChatColor::Bold,
        ChatColor::Strikethrough,
        ChatColor::Underline,
        ChatColor::Italic,
        ChatColor::Reset,
    ];

    pub fn code(&self) -> char {
        match self {
            ChatColor::Black => '0',
            ChatColor::DarkBlue => '1',
            ChatColor::DarkGreen => '2',
            ChatColor::DarkAqua => '3',
            ChatColor::DarkRed => '4',
            ChatColor::DarkPurple => '5',
            ChatColor::Gold => '6',
            ChatColor::Gray => '7',
            ChatColor::DarkGray => '8',
            ChatColor::Blue => '9',
            ChatColor::Green => 'a',
            ChatColor::Aqua => 'b',
            ChatColor::Red => 'c',
            ChatColor::LightPurple => 'd',
            ChatColor::Yellow => 'e',
            ChatColor::White => 'f',
            ChatColor::Obfuscated => 'k',
            ChatColor::Bold => 'l',
            ChatColor::Strikethrough => 'm',
            ChatColor::Underline => 'n',
            ChatColor::Italic => 'o',
            ChatColor::Reset => 'r',
        }
    }

    /// Look up a code; letters are matched case-insensitively.
    pub fn from_code(code: char) -> Option<ChatColor> {
        let code = code.to_ascii_lowercase();
        ChatColor::ALL.into_iter().find(|color| color.code() == code)
    }

    /// Style codes (`k`-`o`) as opposed to colors and reset
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            ChatColor::Obfuscated
                | ChatColor::Bold
                | ChatColor::Strikethrough
                | ChatColor::Underline
                | ChatColor::Italic
        )
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}

/// Replace every `alt` + code pair with the client escape for that code.
///
/// An `alt` character followed by anything that is not a code is kept as is.
pub fn translate_alternate_codes(alt: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == alt {
            if let Some(color) = chars.peek().and_then(|&next| ChatColor::from_code(next)) {
                chars.next();
                out.push(COLOR_CHAR);
                out.push(color.code());
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Translate `&`-prefixed color codes
pub fn color(text: &str) -> String {
    translate_alternate_codes(ALT_COLOR_CHAR, text)
}

/// Remove client color escapes from already translated text
pub fn strip_color(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == COLOR_CHAR && chars.peek().is_some_and(|&next| ChatColor::from_code(next).is_some()) {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
