use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLURAL_ARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{PLURALA ([^|}]*)\|([^}]*)\}").expect("PLURALA pattern is valid"));

static PLURAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{PLURAL ([^|}]*)\|([^}]*)\}").expect("PLURAL pattern is valid"));

/// Rewrite the pluralization clauses of `template` for `amount`.
///
/// - `{PLURALA one|many}` becomes `is 1 one` when `amount == 1`, otherwise
///   `are <amount> many`.
/// - `{PLURAL one|many}` becomes `one` when `amount == 1`, otherwise `many`.
///
/// Each branch runs up to the next `|` or `}`, so a clause never spans into
/// the next one. `PLURALA` clauses are rewritten first. Every occurrence is
/// rewritten.
pub fn apply_plurals(template: &str, amount: i64) -> String {
    let singular = amount == 1;
    let articled = PLURAL_ARTICLE.replace_all(template, |caps: &Captures<'_>| {
        if singular {
            // Singular is defined as amount == 1, so the count is written literally.
            format!("is 1 {}", &caps[1])
        } else {
            format!("are {} {}", amount, &caps[2])
        }
    });
    PLURAL
        .replace_all(&articled, |caps: &Captures<'_>| {
            if singular {
                caps[1].to_string()
            } else {
                caps[2].to_string()
            }
        })
        .into_owned()
}
