//! Reusable artifact fixtures.
//!
//! Bytecode constants are plain hex creation code; `placeholder` produces
//! the legacy 40-character link placeholder a compiler leaves for an
//! unresolved library address.

/// Plain library creation code with no placeholders
pub const LIBRARY_BYTECODE: &str = "608060405260aa601055";

/// A second, distinct library body
pub const LIBRARY_BYTECODE_ALT: &str = "608060405260bb601055";

/// Creation code starting with the invalid opcode; the dev chain reverts
/// the deployment on confirmation
pub const FAILING_BYTECODE: &str = "fe608060405260cc601055";

/// Legacy link placeholder: `__` then the name truncated to 36 characters,
/// right-padded with `_` to exactly 40.
pub fn placeholder(name: &str) -> String {
    let truncated: String = name.chars().take(36).collect();
    format!("__{truncated:_<38}")
}

/// Creation code that references each named library once
pub fn linked_bytecode(libraries: &[&str]) -> String {
    let mut code = String::from("6080604052");
    for library in libraries {
        code.push_str("73");
        code.push_str(&placeholder(library));
    }
    code.push_str("601055");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_40_chars() {
        assert_eq!(placeholder("CDTLibrary").len(), 40);
        assert_eq!(placeholder("A").len(), 40);
        assert_eq!(placeholder(&"X".repeat(50)).len(), 40);
    }
}
