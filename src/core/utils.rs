pub trait NormalizeWhitespace {
    fn normalize_whitespace(&self) -> String;
}

//"  Il   mange\tune pomme. " -> "Il mange une pomme."
impl NormalizeWhitespace for str {
    fn normalize_whitespace(&self) -> String {
        self.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Implement the trait for `String` by forwarding the method to `str`
impl NormalizeWhitespace for String {
    fn normalize_whitespace(&self) -> String {
        self.as_str().normalize_whitespace()
    }
}
