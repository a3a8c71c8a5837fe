//! Utility functionality

use std::borrow::Cow;
use std::env;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)\}|\$([A-Za-z0-9_]+)").expect("placeholder pattern is valid")
});

/// Replaces `$NAME` and `${NAME}` placeholders using `lookup`. Names the
/// lookup does not know expand to the empty string, a `$` that does not
/// start a name is kept as is.
pub fn expand_with<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match PLACEHOLDER.replace_all(value, |caps: &Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        lookup(name).unwrap_or_default()
    }) {
        Cow::Borrowed(unchanged) => unchanged.to_owned(),
        Cow::Owned(expanded) => expanded,
    }
}

/// Expands placeholders against the environment of the current process.
///
/// ```
/// use crane::utils::expand_env;
///
/// assert_eq!(expand_env("plain value"), "plain value");
/// ```
pub fn expand_env(value: &str) -> String {
    expand_with(value, |name| env::var(name).ok())
}

/// Expands every element of `values`, keeping their order.
pub fn expand_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| expand_env(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_expand_both_forms() {
        let vars = HashMap::from([("HOST", "db.local"), ("PORT", "5432")]);
        assert_eq!(
            expand_with("$HOST:${PORT}", lookup_in(&vars)),
            "db.local:5432"
        );
    }

    #[test]
    fn test_unset_expands_to_empty() {
        let vars = HashMap::new();
        assert_eq!(expand_with("a${MISSING}b$ALSO_MISSING", lookup_in(&vars)), "ab");
    }

    #[test]
    fn test_lone_dollar_is_kept() {
        let vars = HashMap::new();
        assert_eq!(expand_with("cost: $ 5", lookup_in(&vars)), "cost: $ 5");
        assert_eq!(expand_with("trailing$", lookup_in(&vars)), "trailing$");
    }

    #[test]
    fn test_expand_env_reads_process_environment() {
        // PATH is set in every environment cargo runs tests in
        let path = env::var("PATH").unwrap();
        assert_eq!(expand_env("${PATH}"), path);
    }

    quickcheck! {
        fn property_test_placeholder_resolves_to_value(value: String) -> bool {
            let value = value.replace('$', "");
            let vars = HashMap::from([("CRANE_VALUE", value.as_str())]);
            let braced = expand_with("pre-${CRANE_VALUE}-post", lookup_in(&vars));
            let bare = expand_with("$CRANE_VALUE", lookup_in(&vars));
            braced == format!("pre-{}-post", value) && bare == value && !braced.contains("${")
        }

        fn property_test_text_without_dollar_is_untouched(value: String) -> bool {
            let value = value.replace('$', "");
            expand_with(&value, |_| Some("x".to_owned())) == value
        }
    }
}
