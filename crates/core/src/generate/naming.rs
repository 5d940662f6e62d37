use chrono::{DateTime, Utc};

/// Convert a raw name to snake_case.
///
/// Word boundaries are detected on case transitions and on runs of
/// non-alphanumeric characters; consecutive separators collapse to a single
/// underscore. Idempotent on input that is already snake_case.
pub fn snake_case(raw: &str) -> String {
    let chars: Vec<char> = raw.trim().chars().collect();
    let mut out = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            // Separator run; emit at most one underscore, none at the start
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }

        if c.is_uppercase() {
            let prev_is_lower =
                i > 0 && chars[i - 1].is_alphanumeric() && !chars[i - 1].is_uppercase();
            let upper_run_ends = i > 0
                && chars[i - 1].is_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_lowercase());

            if !out.is_empty() && !out.ends_with('_') && (prev_is_lower || upper_run_ends) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    while out.ends_with('_') {
        out.pop();
    }

    out
}

/// Derive a migration file name from a normalized name and a timestamp.
///
/// Format `YYYYMMDDHHMMSS_<name>.php`, so lexicographic order equals
/// chronological order at second granularity. Two invocations within the
/// same second produce the same file name and the later write wins.
pub fn migration_file_name(name: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}.php", at.format("%Y%m%d%H%M%S"), name)
}

/// Derive a rule file name from the verbatim class name.
pub fn rule_file_name(name: &str) -> String {
    format!("{name}.php")
}

/// Whether the given name is usable as a class identifier.
pub fn is_valid_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_snake_case_spaces() {
        assert_eq!(snake_case("add email to users"), "add_email_to_users");
    }

    #[test]
    fn test_snake_case_camel_case() {
        assert_eq!(snake_case("AddEmailToUsers"), "add_email_to_users");
    }

    #[test]
    fn test_snake_case_upper_runs() {
        assert_eq!(snake_case("HTTPServer"), "http_server");
    }

    #[test]
    fn test_snake_case_mixed_separators() {
        assert_eq!(snake_case("  add.email--to users "), "add_email_to_users");
    }

    #[test]
    fn test_snake_case_digits() {
        assert_eq!(snake_case("add2Users"), "add2_users");
    }

    #[test]
    fn test_snake_case_idempotent() {
        let once = snake_case("Add email to users");
        assert_eq!(snake_case(&once), once);
    }

    #[test]
    fn test_snake_case_empty() {
        assert_eq!(snake_case("   "), "");
    }

    #[test]
    fn test_migration_file_name_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let name = migration_file_name("add_email_to_users", at);
        assert_eq!(name, "20240309140507_add_email_to_users.php");

        let pattern = regex::Regex::new(r"^\d{14}_[a-z0-9_]+\.php$").unwrap();
        assert!(pattern.is_match(&name));
    }

    #[test]
    fn test_migration_file_names_sort_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 8).unwrap();

        let first = migration_file_name("add_email_to_users", earlier);
        let second = migration_file_name("add_email_to_users", later);
        assert!(first < second);
    }

    #[test]
    fn test_rule_file_name() {
        assert_eq!(rule_file_name("UniqueEmail"), "UniqueEmail.php");
    }

    #[test]
    fn test_valid_class_names() {
        assert!(is_valid_class_name("UniqueEmail"));
        assert!(is_valid_class_name("_Internal"));
        assert!(is_valid_class_name("Rule2"));
        assert!(!is_valid_class_name(""));
        assert!(!is_valid_class_name("2Fast"));
        assert!(!is_valid_class_name("Unique Email"));
        assert!(!is_valid_class_name("Unique-Email"));
    }
}
