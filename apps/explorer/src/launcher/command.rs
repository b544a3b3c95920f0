//! Command line formatting for file manager templates

/// Prefix identifying the Windows Explorer convention
const EXPLORER_PREFIX: &str = "explorer";

/// Whether a template follows the Windows Explorer convention
pub fn is_explorer_template(template: &str) -> bool {
    template
        .get(..EXPLORER_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(EXPLORER_PREFIX))
}

/// Format the command line that opens `folder` with a template
///
/// - `explorer…` templates open the folder, or select `file` when given
///   (`/select,<file>` replaces the folder argument)
/// - templates ending in `=` take the folder glued on with no space
/// - anything else takes the folder as a space-separated argument
///
/// `file` only matters for the Explorer form.
pub fn build_command(template: &str, folder: &str, file: Option<&str>) -> String {
    let template = template.trim();

    if is_explorer_template(template) {
        match file {
            Some(file) => format!("{} /select,{}", template, file),
            None => format!("{} {}", template, folder),
        }
    } else if template.ends_with('=') {
        format!("{}{}", template, folder)
    } else {
        format!("{} {}", template, folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explorer_opens_folder() {
        assert_eq!(build_command("explorer", "C:\\data", None), "explorer C:\\data");
    }

    #[test]
    fn test_explorer_selects_file() {
        assert_eq!(
            build_command("explorer", "C:\\data", Some("C:\\data\\a.txt")),
            "explorer /select,C:\\data\\a.txt"
        );
    }

    #[test]
    fn test_explorer_prefix_is_case_insensitive() {
        assert!(is_explorer_template("Explorer.exe"));
        assert!(is_explorer_template("EXPLORER /e,"));
        assert_eq!(
            build_command("  Explorer.exe ", "C:\\data", None),
            "Explorer.exe C:\\data"
        );
    }

    #[test]
    fn test_not_explorer_templates() {
        assert!(!is_explorer_template("expl"));
        assert!(!is_explorer_template("nautilus"));
        assert!(!is_explorer_template("my-explorer"));
        assert!(!is_explorer_template(""));
    }

    #[test]
    fn test_non_ascii_template_does_not_panic() {
        assert!(!is_explorer_template("ファイル"));
        assert_eq!(build_command("ファイル", "/tmp", None), "ファイル /tmp");
    }

    #[test]
    fn test_equals_template_appends_directly() {
        assert_eq!(build_command("nautilus=", "/home/u", None), "nautilus=/home/u");
    }

    #[test]
    fn test_plain_template_joins_with_space() {
        assert_eq!(build_command("open", "/Users/u", None), "open /Users/u");
    }

    #[test]
    fn test_file_ignored_outside_explorer() {
        assert_eq!(
            build_command("nautilus", "/home/u", Some("/home/u/a.txt")),
            "nautilus /home/u"
        );
        assert_eq!(
            build_command("nautilus=", "/home/u", Some("/home/u/a.txt")),
            "nautilus=/home/u"
        );
    }
}
