// Render tree

/// A node that produces a piece of SQL text
pub trait Element {
    fn format(&self) -> String;
}

impl Element for String {
    fn format(&self) -> String {
        self.clone()
    }
}

/// Ordered list of elements joined by an optional separator.
#[derive(Default)]
pub struct Container {
    list: Vec<Box<dyn Element>>,
    separator: Option<String>,
    /// Leave the separator off after the last element
    skip_last: bool,
}

impl Container {
    /// Container that concatenates its elements with nothing in between
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(separator: impl Into<String>, skip_last: bool) -> Self {
        Self {
            list: Vec::new(),
            separator: Some(separator.into()),
            skip_last,
        }
    }

    pub fn append(&mut self, element: impl Element + 'static) {
        self.list.push(Box::new(element));
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let last = self.list.len().saturating_sub(1);

        for (i, element) in self.list.iter().enumerate() {
            out.push_str(&element.format());
            if let Some(sep) = &self.separator {
                if !(self.skip_last && i == last) {
                    out.push_str(sep);
                }
            }
        }
        out
    }
}

impl Element for Container {
    fn format(&self) -> String {
        self.render()
    }
}
