/// Outcome of coercing a raw scheduler field into a typed value.
///
/// Parsers keep the distinction between a value that was read and one that
/// could not be read; the public records collapse [`Coerced::Unparseable`]
/// into a documented default (`0`, `"N/A"`, `queued`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<T> {
    Parsed(T),
    Unparseable,
}

impl<T> Coerced<T> {
    #[inline]
    pub fn is_parsed(&self) -> bool {
        matches!(self, Coerced::Parsed(_))
    }

    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Coerced::Parsed(x) => Some(x),
            Coerced::Unparseable => None,
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.ok().unwrap_or(default)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Coerced<U> {
        match self {
            Coerced::Parsed(x) => Coerced::Parsed(f(x)),
            Coerced::Unparseable => Coerced::Unparseable,
        }
    }

    /// Keep `self` if it was parsed, otherwise evaluate the fallback.
    pub fn or_else(self, f: impl FnOnce() -> Coerced<T>) -> Coerced<T> {
        match self {
            Coerced::Parsed(_) => self,
            Coerced::Unparseable => f(),
        }
    }
}

impl<T: Default> Coerced<T> {
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.ok().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Coerced<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Coerced::Parsed(x),
            None => Coerced::Unparseable,
        }
    }
}
