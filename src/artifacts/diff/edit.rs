use std::fmt::Display;

/// Kind of an edit operation, mapped one-to-one to its render prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Keep,
    Insert,
    Remove,
}

impl Tag {
    pub fn prefix(&self) -> char {
        match self {
            Tag::Keep => ' ',
            Tag::Insert => '+',
            Tag::Remove => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Keep { value: T },
    Insert { value: T },
    Remove { value: T },
}

pub type EditScript<T> = Vec<Edit<T>>;

impl<T> Edit<T> {
    pub fn tag(&self) -> Tag {
        match self {
            Edit::Keep { .. } => Tag::Keep,
            Edit::Insert { .. } => Tag::Insert,
            Edit::Remove { .. } => Tag::Remove,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Edit::Keep { value } | Edit::Insert { value } | Edit::Remove { value } => value,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, Edit::Keep { .. })
    }
}

impl<T: Display> Edit<T> {
    /// Prefix character followed by the value, with trailing whitespace stripped.
    pub fn as_string(&self) -> String {
        let line = format!("{}{}", self.tag().prefix(), self.value());
        line.trim_end().to_string()
    }
}

impl<T: Display> Display for Edit<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
