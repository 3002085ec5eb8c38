use std::fmt;

/// A handle to notify in a reply, stored without the leading `@`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mention {
    pub handle: String,
}

impl Mention {
    pub fn new(handle: impl Into<String>) -> Self {
        let handle = handle.into();
        let handle = match handle.strip_prefix('@') {
            Some(stripped) => stripped.to_string(),
            None => handle,
        };
        Self { handle }
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.handle)
    }
}
