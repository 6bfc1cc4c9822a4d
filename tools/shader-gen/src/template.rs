//! Template placeholder substitution
//!
//! Templates are plain text. The only recognized syntax is the two literal
//! placeholder tokens below; everything else is copied through untouched.

/// Placeholder replaced by the shader name
pub const SHADER_NAME_TOKEN: &str = "@SHADER_NAME@";

/// Placeholder replaced by the byte-literal block
pub const SHADER_SRC_TOKEN: &str = "@SHADER_SRC@";

/// Number of occurrences of each placeholder in a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderCounts {
    pub name: usize,
    pub src: usize,
}

/// Count the placeholder occurrences in `template`.
pub fn count_placeholders(template: &str) -> PlaceholderCounts {
    PlaceholderCounts {
        name: template.matches(SHADER_NAME_TOKEN).count(),
        src: template.matches(SHADER_SRC_TOKEN).count(),
    }
}

/// Fill in a template.
///
/// Runs two full-text passes: every [`SHADER_NAME_TOKEN`] becomes `name`, then
/// every [`SHADER_SRC_TOKEN`] in the result becomes `block`. The name is
/// inserted verbatim, so a name containing `@SHADER_SRC@` is expanded by the
/// second pass as well.
pub fn substitute(template: &str, name: &str, block: &str) -> String {
    template
        .replace(SHADER_NAME_TOKEN, name)
        .replace(SHADER_SRC_TOKEN, block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_basic() {
        let out = substitute(
            "const char @SHADER_NAME@[] = {\n@SHADER_SRC@\n};",
            "basic",
            "    0x00,",
        );
        assert_eq!(out, "const char basic[] = {\n    0x00,\n};");
    }

    #[test]
    fn test_substitute_all_occurrences() {
        let template = "@SHADER_NAME@ @SHADER_SRC@ @SHADER_NAME@ @SHADER_SRC@ @SHADER_NAME@";
        let out = substitute(template, "n", "b");
        assert_eq!(out, "n b n b n");
    }

    #[test]
    fn test_substitute_without_placeholders() {
        let template = "/* nothing to see */\n";
        assert_eq!(substitute(template, "name", "block"), template);
    }

    #[test]
    fn test_name_inserted_verbatim() {
        let name = "weird \"name\" \\ with {braces} $1";
        assert_eq!(substitute("[@SHADER_NAME@]", name, ""), format!("[{name}]"));
    }

    #[test]
    fn test_name_containing_src_token_is_expanded() {
        let out = substitute("@SHADER_NAME@", "x_@SHADER_SRC@", "BLOCK");
        assert_eq!(out, "x_BLOCK");
    }

    #[test]
    fn test_block_is_not_rescanned_for_name() {
        let out = substitute("@SHADER_SRC@", "name", "@SHADER_NAME@");
        assert_eq!(out, "@SHADER_NAME@");
    }

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders(""), PlaceholderCounts::default());
        assert_eq!(
            count_placeholders("@SHADER_NAME@@SHADER_SRC@ @SHADER_SRC@"),
            PlaceholderCounts { name: 1, src: 2 }
        );
    }
}
