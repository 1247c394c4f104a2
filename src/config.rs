/// Root package prefix of the driver's own classes.
pub const CLASS_NAME_PREFIX: &str = "net.snowflake.client";

/// Short alias written in place of [`CLASS_NAME_PREFIX`].
pub const CLASS_NAME_ALIAS: &str = "n.s.c";

/// Prefix used by the legacy (v1) integration classes.
pub const LEGACY_CLASS_NAME_PREFIX: &str = "com.snowflake";

/// Alias for [`LEGACY_CLASS_NAME_PREFIX`]. Downstream log parsers key on it,
/// so it must stay distinct from [`CLASS_NAME_ALIAS`].
pub const LEGACY_CLASS_NAME_ALIAS: &str = "c.s";

/// Source of the "dump stack traces" switch.
///
/// Consulted once per formatted event.
pub trait StackTraceFlag: Send + Sync {
    fn enabled(&self) -> bool;
}

/// A flag fixed at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedFlag(pub bool);

impl StackTraceFlag for FixedFlag {
    fn enabled(&self) -> bool {
        self.0
    }
}

impl StackTraceFlag for bool {
    fn enabled(&self) -> bool {
        *self
    }
}

/// Prefix-to-alias table used to keep class names short in log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAbbreviations {
    pub root_prefix: String,
    pub root_alias: String,
    pub legacy_prefix: String,
    pub legacy_alias: String,
}

impl ClassAbbreviations {
    pub fn new(
        root_prefix: impl Into<String>,
        root_alias: impl Into<String>,
        legacy_prefix: impl Into<String>,
        legacy_alias: impl Into<String>,
    ) -> Self {
        ClassAbbreviations {
            root_prefix: root_prefix.into(),
            root_alias: root_alias.into(),
            legacy_prefix: legacy_prefix.into(),
            legacy_alias: legacy_alias.into(),
        }
    }

    /// Replace a known prefix with its alias. The root prefix wins over the
    /// legacy one; anything else is returned unchanged.
    pub fn shorten(&self, class_name: &str) -> String {
        if let Some(rest) = class_name.strip_prefix(self.root_prefix.as_str()) {
            format!("{}{}", self.root_alias, rest)
        } else if let Some(rest) = class_name.strip_prefix(self.legacy_prefix.as_str()) {
            format!("{}{}", self.legacy_alias, rest)
        } else {
            class_name.to_string()
        }
    }
}

impl Default for ClassAbbreviations {
    fn default() -> Self {
        ClassAbbreviations::new(
            CLASS_NAME_PREFIX,
            CLASS_NAME_ALIAS,
            LEGACY_CLASS_NAME_PREFIX,
            LEGACY_CLASS_NAME_ALIAS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_root_prefix() {
        let abbr = ClassAbbreviations::default();
        assert_eq!(
            abbr.shorten("net.snowflake.client.jdbc.SnowflakeConnectionV1"),
            "n.s.c.jdbc.SnowflakeConnectionV1"
        );
    }

    #[test]
    fn test_shorten_legacy_prefix() {
        let abbr = ClassAbbreviations::default();
        assert_eq!(
            abbr.shorten("com.snowflake.gscommon.core.SqlState"),
            "c.s.gscommon.core.SqlState"
        );
    }

    #[test]
    fn test_shorten_passes_through_unknown() {
        let abbr = ClassAbbreviations::default();
        assert_eq!(abbr.shorten("org.apache.http.Client"), "org.apache.http.Client");
        assert_eq!(abbr.shorten(""), "");
    }

    #[test]
    fn test_shorten_is_plain_prefix_match() {
        // No package boundary check: the prefix is matched as text.
        let abbr = ClassAbbreviations::default();
        assert_eq!(abbr.shorten("com.snowflakex.Foo"), "c.sx.Foo");
    }

    #[test]
    fn test_root_checked_before_legacy() {
        let abbr = ClassAbbreviations::new("a::b", "R", "a", "L");
        assert_eq!(abbr.shorten("a::b::c"), "R::c");
        assert_eq!(abbr.shorten("a::x"), "L::x");
    }

    #[test]
    fn test_fixed_and_bool_flags() {
        assert!(FixedFlag(true).enabled());
        assert!(!FixedFlag::default().enabled());
        assert!(true.enabled());
        assert!(!false.enabled());
    }
}
