/// Runtime pathname helpers
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

/// Separator between path segments
pub const SEPARATOR: char = '/';

/// Prefix marking a segment as a parameter placeholder (`:id_user`)
pub const PARAM_MARKER: char = ':';

/// Splits a runtime pathname into its non-empty segments
///
/// Leading, trailing and repeated separators produce empty pieces, which are
/// dropped, so `/users//42/` and `users/42` split the same way.
///
/// # Examples
///
/// ```
/// use rhtmx_pathnames::segment::split_pathname;
///
/// assert_eq!(split_pathname("/private/users/321"), vec!["private", "users", "321"]);
/// assert_eq!(split_pathname("//private///users/"), vec!["private", "users"]);
/// assert!(split_pathname("/").is_empty());
/// ```
pub fn split_pathname(pathname: &str) -> Vec<&str> {
    pathname
        .split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Checks whether a segment literal is a parameter placeholder
///
/// Placeholders match any single non-empty runtime segment.
///
/// # Examples
///
/// ```
/// use rhtmx_pathnames::segment::is_placeholder;
///
/// assert!(is_placeholder(":id_user"));
/// assert!(!is_placeholder("users"));
/// assert!(!is_placeholder("sign:in"));
/// ```
pub fn is_placeholder(literal: &str) -> bool {
    literal.starts_with(PARAM_MARKER)
}
