use std::fmt;

/// Upstream sequence addressed by the one-letter id in `/numbers/{numberid}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl NumberKind {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "p" => Some(Self::Prime),
            "f" => Some(Self::Fibonacci),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            _ => None,
        }
    }

    /// Path segment the upstream generator serves this sequence under.
    pub fn upstream_path(self) -> &'static str {
        match self {
            Self::Prime => "primes",
            Self::Fibonacci => "fibo",
            Self::Even => "even",
            Self::Random => "rand",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upstream_path())
    }
}
