// MySQL table options

use std::collections::HashMap;

/// Key/value view of a table options clause.
///
/// Keys are kept verbatim. A bare word such as `DEFAULT` maps to an empty value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    options: HashMap<String, String>,
}

impl TableOptions {
    /// Parse an options clause.
    ///
    /// Splits on whitespace outside quotes, then splits each item on the first
    /// `=` and trims surrounding quotes from the value. The `=` is optional
    /// before a quoted value and may be surrounded by spaces.
    pub fn parse(text: &str) -> Self {
        let mut options = HashMap::new();
        let mut items = split_unquoted(text.trim()).into_iter().peekable();

        while let Some(item) = items.next() {
            let (key, value) = match item.split_once('=') {
                // `KEY= value`
                Some((key, "")) => (key, items.next().unwrap_or_default()),
                Some((key, value)) => (key, value),
                None => match items.peek().copied() {
                    // `KEY = value`
                    Some("=") => {
                        items.next();
                        (item, items.next().unwrap_or_default())
                    }
                    // `KEY =value`
                    Some(next) if next.starts_with('=') => {
                        items.next();
                        (item, &next[1..])
                    }
                    // `COMMENT 'text'`
                    Some(next) if next.starts_with(|c: char| c == '\'' || c == '"') => {
                        items.next();
                        (item, next)
                    }
                    _ => (item, ""),
                },
            };
            options.insert(key.to_string(), unquote(value));
        }

        Self { options }
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// ASCII case-insensitive lookup, so `COMMENT` and `comment` both match
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.get(key).or_else(|| {
            self.options
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str())
        })
    }

    /// Table comment, if the clause has one
    pub fn comment(&self) -> Option<&str> {
        self.get_ignore_case("comment")
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Strip surrounding quotes and collapse doubled inner quotes
fn unquote(value: &str) -> String {
    for quote in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let doubled: String = [quote, quote].iter().collect();
            return value[1..value.len() - 1].replace(&doubled, &quote.to_string());
        }
    }
    value.trim_matches('"').trim_matches('\'').to_string()
}

fn split_unquoted(text: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '\'' || c == '"' => {
                quote = Some(c);
                start.get_or_insert(i);
            }
            None if c.is_whitespace() => {
                if let Some(s) = start.take() {
                    items.push(&text[s..i]);
                }
            }
            None => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        items.push(&text[s..]);
    }

    items
}
