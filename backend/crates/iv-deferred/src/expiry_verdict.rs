use std::fmt;

/// What an expiry handler asks of the operator. Advisory: the entry is gone
/// from the registry either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryVerdict {
    Discard,
    Escalate,
}

impl ExpiryVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Escalate => "escalate",
        }
    }
}

impl fmt::Display for ExpiryVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
