//! Global casting policy: the default type tag and the falsey pattern.

use regex::Regex;

use envsetting_core::DEFAULT_FALSEY_PATTERN;
use envsetting_core::lang::tags;

use crate::errors::Result;
use crate::options::Tag;

/// Configuration for the default cast path.
///
/// `default_class` is used for variables (and collection elements) without an explicit tag. `falsey` decides which raw
/// strings read as `false` in the `boolean` and `string_unless_falsey` coercions.
///
/// ## Examples
/// ```rust
/// use envsetting::Policy;
///
/// let policy = Policy::default().with_falsey_pattern("(?i)^nope$").unwrap();
/// assert!(policy.is_falsey("NOPE"));
/// assert!(!policy.is_falsey("0"));
/// ```
#[derive(Debug, Clone)]
pub struct Policy {
    pub default_class: Tag,
    pub falsey: Regex,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            default_class: Tag::from(tags::DEFAULT_CLASS),
            falsey: default_falsey_regex(),
        }
    }
}

impl Policy {
    pub fn with_default_class(mut self, tag: impl Into<Tag>) -> Self {
        self.default_class = tag.into();
        self
    }

    pub fn with_falsey_regex(mut self, falsey: Regex) -> Self {
        self.falsey = falsey;
        self
    }

    /// Compile `pattern` and use it as the falsey pattern.
    ///
    /// ## Errors
    /// - [`crate::EnvSettingError::InvalidPattern`] if `pattern` does not compile.
    pub fn with_falsey_pattern(self, pattern: &str) -> Result<Self> {
        Ok(self.with_falsey_regex(Regex::new(pattern)?))
    }

    /// Whether `raw` matches the falsey pattern.
    pub fn is_falsey(&self, raw: &str) -> bool {
        self.falsey.is_match(raw)
    }
}

// Regex has no PartialEq; two policies agree when their sources agree.
impl PartialEq for Policy {
    fn eq(&self, other: &Self) -> bool {
        self.default_class == other.default_class && self.falsey.as_str() == other.falsey.as_str()
    }
}

/// The builtin falsey pattern, compiled.
#[allow(clippy::expect_used)]
pub fn default_falsey_regex() -> Regex {
    Regex::new(DEFAULT_FALSEY_PATTERN).expect("INVARIANT: builtin falsey pattern compiles")
}
