//! Identifier casing for generated type names.

/// Convert a snake_case identifier to PascalCase (e.g., "user_account" -> "UserAccount")
///
/// Empty segments from leading, trailing, or consecutive underscores are
/// skipped.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a snake_case identifier to camelCase (e.g., "user_account" -> "userAccount")
///
/// The first non-empty segment passes through unchanged; later segments get
/// their first character uppercased.
pub fn to_camel_case(s: &str) -> String {
    let mut segments = s.split('_').filter(|segment| !segment.is_empty());
    let first = match segments.next() {
        None => return String::new(),
        Some(segment) => segment,
    };
    segments.fold(first.to_string(), |mut out, segment| {
        let mut chars = segment.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
        out
    })
}
