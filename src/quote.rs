//! The quoting capability used for every string literal the assembler emits.

/// Escapes a raw value into a complete SQL string literal, quotes included.
///
/// The assembler never escapes on its own, so plugging the driver's native
/// routine here is how callers get quoting that matches their database.
pub trait Quote {
    fn quote(&self, raw: &str) -> String;
}

/// Standard SQL quoting: wraps in single quotes and doubles embedded ones.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnsiQuote;

impl Quote for AnsiQuote {
    fn quote(&self, raw: &str) -> String {
        let mut quoted = String::with_capacity(raw.len() + 2);
        quoted.push('\'');

        let mut last = 0;
        for (index, char) in raw.char_indices() {
            if char == '\'' {
                quoted.push_str(&raw[last..index]);
                quoted.push_str("''");
                last = index + char.len_utf8();
            }
        }
        quoted.push_str(&raw[last..]);

        quoted.push('\'');
        quoted
    }
}

impl<F> Quote for F
where
    F: Fn(&str) -> String,
{
    fn quote(&self, raw: &str) -> String {
        self(raw)
    }
}
