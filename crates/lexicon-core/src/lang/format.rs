//! printf-style positional substitution.
//!
//! Specifiers follow `%[index$][flags][width][.precision]conversion`:
//!
//! | conversion | accepts            | renders                              |
//! |------------|--------------------|--------------------------------------|
//! | `s` `S`    | anything           | textual form (`S` upper-cases)       |
//! | `b` `B`    | anything           | `false` for null/false, else `true`  |
//! | `d`        | int                | decimal                              |
//! | `x` `X`    | int                | hexadecimal, two's complement        |
//! | `f`        | float              | fixed point, 6 decimals by default   |
//! | `e` `E`    | float              | scientific, `1.500000e+01`           |
//! | `c`        | int or 1-char text | a single character                   |
//! | `n`        | -                  | line break                           |
//! | `%`        | -                  | a literal `%`                        |
//!
//! Flags: `-` left-justify, `0` zero-pad, `+` always sign, space for a
//! leading blank on positive numbers, `,` digit grouping. A precision on
//! `d`, `x` or `c`, or a space or `,` flag on `s`, `b` or `c`, makes the
//! specifier malformed. A null argument renders as `null` for every
//! conversion except `b`.
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::lang::error::{LangError, Result};
use crate::value::Value;

static SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"%(?:(\d+)\$)?([-+ 0,]*)(\d+)?(?:\.(\d+))?([a-zA-Z%])")
        .expect("format specifier pattern is valid")
});

/// Substitute `args` into `template` in order.
///
/// Surplus arguments are ignored; a specifier without an argument fails.
pub fn format_args(template: &str, args: &[Value]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut ordinary = 0;

    for caps in SPECIFIER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        push_literal(&mut out, &template[last..whole.start()], last)?;
        last = whole.end();

        let specifier = Specifier::parse(&caps, whole.as_str());
        if !specifier.is_well_formed() {
            return Err(LangError::MalformedSpecifier(whole.start()));
        }
        match specifier.conversion {
            '%' => {
                out.push_str(&specifier.pad("%".to_string()));
                continue;
            }
            'n' => {
                out.push('\n');
                continue;
            }
            _ => {}
        }

        let position = match specifier.index {
            Some(0) => return Err(LangError::MalformedSpecifier(whole.start())),
            Some(index) => index,
            None => {
                ordinary += 1;
                ordinary
            }
        };
        let arg = args.get(position - 1).ok_or_else(|| LangError::MissingArgument {
            placeholder: specifier.raw.to_string(),
            position,
        })?;
        out.push_str(&specifier.render(arg)?);
    }

    push_literal(&mut out, &template[last..], last)?;
    Ok(out)
}

fn push_literal(out: &mut String, literal: &str, offset: usize) -> Result<()> {
    if let Some(at) = literal.find('%') {
        return Err(LangError::MalformedSpecifier(offset + at));
    }
    out.push_str(literal);
    Ok(())
}

#[derive(Debug)]
struct Specifier<'t> {
    raw: &'t str,
    index: Option<usize>,
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

impl<'t> Specifier<'t> {
    fn parse(caps: &Captures<'_>, raw: &'t str) -> Self {
        let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<usize>().ok());
        let flags = caps.get(2).map_or("", |m| m.as_str());
        Self {
            raw,
            index: number(1),
            left: flags.contains('-'),
            zero: flags.contains('0'),
            plus: flags.contains('+'),
            space: flags.contains(' '),
            group: flags.contains(','),
            width: number(3),
            precision: number(4),
            conversion: caps
                .get(5)
                .and_then(|m| m.as_str().chars().next())
                .unwrap_or('s'),
        }
    }

    /// Precision is meaningless for integer and character conversions, and
    /// the space and `,` flags only apply to numbers.
    fn is_well_formed(&self) -> bool {
        let conversion = self.conversion.to_ascii_lowercase();
        if self.precision.is_some() && matches!(conversion, 'd' | 'x' | 'c') {
            return false;
        }
        !((self.space || self.group) && matches!(conversion, 's' | 'b' | 'c'))
    }

    fn render(&self, arg: &Value) -> Result<String> {
        let upper = self.conversion.is_ascii_uppercase();
        if upper && !matches!(self.conversion, 'S' | 'B' | 'X' | 'E' | 'C') {
            return Err(LangError::UnknownConversion(self.raw.to_string()));
        }
        let body = match self.conversion.to_ascii_lowercase() {
            'b' => {
                let truth = match arg {
                    Value::Null => false,
                    Value::Bool(b) => *b,
                    _ => true,
                };
                self.pad(self.truncate(truth.to_string()))
            }
            's' => self.pad(self.truncate(arg.to_string())),
            'd' | 'x' | 'f' | 'e' | 'c' if arg.is_null() => self.pad("null".to_string()),
            'd' => match arg {
                Value::Int(i) => {
                    let digits = i.unsigned_abs().to_string();
                    let digits = if self.group { group_digits(&digits) } else { digits };
                    self.pad_number(*i < 0, digits)
                }
                _ => return Err(self.incompatible(arg)),
            },
            'x' => match arg {
                Value::Int(i) => self.pad(format!("{:x}", *i as u64)),
                _ => return Err(self.incompatible(arg)),
            },
            'f' => match arg {
                Value::Float(x) if !x.is_finite() => self.pad(non_finite(*x)),
                Value::Float(x) => {
                    let digits = format!("{:.*}", self.precision.unwrap_or(6), x.abs());
                    let digits = if self.group { group_fixed(&digits) } else { digits };
                    self.pad_number(x.is_sign_negative() && *x != 0.0, digits)
                }
                _ => return Err(self.incompatible(arg)),
            },
            'e' => match arg {
                Value::Float(x) if !x.is_finite() => self.pad(non_finite(*x)),
                Value::Float(x) => {
                    let digits = scientific(x.abs(), self.precision.unwrap_or(6));
                    self.pad_number(x.is_sign_negative() && *x != 0.0, digits)
                }
                _ => return Err(self.incompatible(arg)),
            },
            'c' => {
                let c = match arg {
                    Value::Int(code) => u32::try_from(*code).ok().and_then(char::from_u32),
                    Value::Text(text) if text.chars().count() == 1 => text.chars().next(),
                    _ => None,
                };
                match c {
                    Some(c) => self.pad(c.to_string()),
                    None => return Err(self.incompatible(arg)),
                }
            }
            _ => return Err(LangError::UnknownConversion(self.raw.to_string())),
        };
        Ok(if upper { body.to_uppercase() } else { body })
    }

    fn incompatible(&self, arg: &Value) -> LangError {
        LangError::IncompatibleArgument {
            placeholder: self.raw.to_string(),
            found: arg.kind(),
        }
    }

    fn truncate(&self, text: String) -> String {
        match self.precision {
            Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
            _ => text,
        }
    }

    fn pad(&self, text: String) -> String {
        let len = text.chars().count();
        match self.width {
            Some(width) if len < width => {
                let fill = " ".repeat(width - len);
                if self.left {
                    text + &fill
                } else {
                    fill + &text
                }
            }
            _ => text,
        }
    }

    fn pad_number(&self, negative: bool, digits: String) -> String {
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        match self.width {
            Some(width) if self.zero && !self.left && sign.len() + digits.len() < width => {
                let zeros = "0".repeat(width - sign.len() - digits.len());
                format!("{}{}{}", sign, zeros, digits)
            }
            _ => self.pad(format!("{}{}", sign, digits)),
        }
    }
}

fn non_finite(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_sign_negative() {
        "-Infinity".to_string()
    } else {
        "Infinity".to_string()
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn group_fixed(digits: &str) -> String {
    match digits.split_once('.') {
        Some((whole, fraction)) => format!("{}.{}", group_digits(whole), fraction),
        None => group_digits(digits),
    }
}

// Rust renders `1.5e1`; the message format expects a signed two-digit exponent.
fn scientific(x: f64, precision: usize) -> String {
    let rendered = format!("{:.*e}", precision, x);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => rendered,
    }
}
