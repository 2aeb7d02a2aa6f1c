use std::fmt;

/// Number of hex characters kept from the digest.
pub const CODE_LEN: usize = 8;

/// Short identifier for a stored URL. Used both as the store key and as the
/// `/redirect/:id` path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wrap a code without checking its shape. Codes taken from request paths
    /// go through here; an odd-looking code is just a lookup miss.
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

/// Derive the short code for `url`: the first 8 lowercase hex characters of
/// its MD5 digest.
///
/// Deterministic and unsalted, so the same URL always maps to the same code.
/// 32 bits of space means unrelated URLs can collide; nothing detects that.
pub fn generate(url: &str) -> ShortCode {
    let digest = md5::compute(url.as_bytes());
    let mut hex = format!("{:x}", digest);
    hex.truncate(CODE_LEN);
    ShortCode(hex)
}
