/// A maximal run of non-whitespace characters read from the input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
    /// Byte offset of the token's first character in the input.
    pub offset: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
