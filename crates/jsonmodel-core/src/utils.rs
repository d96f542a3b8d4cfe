/// Last dot-separated segment of a qualified name.
///
/// # Examples
/// ```
/// use jsonmodel_core::utils::simple_name;
/// assert_eq!(simple_name("com.acme.Person"), "Person");
/// assert_eq!(simple_name("Person"), "Person");
/// ```
pub fn simple_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or(qualified_name, |(_, name)| name)
}

/// Everything before the last dot, or `""` for the default package.
///
/// # Examples
/// ```
/// use jsonmodel_core::utils::package_name;
/// assert_eq!(package_name("com.acme.Person"), "com.acme");
/// assert_eq!(package_name("Person"), "");
/// ```
pub fn package_name(qualified_name: &str) -> &str {
    qualified_name
        .rsplit_once('.')
        .map_or("", |(package, _)| package)
}

/// Match a qualified name against a type pattern.
///
/// - `com.acme.Person` matches exactly that name
/// - `com.acme.*` matches types declared directly in `com.acme`
/// - `com.acme.**` matches types in `com.acme` and every package below it
pub fn matches_type_pattern(pattern: &str, qualified_name: &str) -> bool {
    if let Some(root) = pattern.strip_suffix(".**") {
        return qualified_name
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('.'));
    }
    if let Some(package) = pattern.strip_suffix(".*") {
        return package_name(qualified_name) == package;
    }
    pattern == qualified_name
}
