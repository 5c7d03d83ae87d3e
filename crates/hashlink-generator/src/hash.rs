use crate::error::Error;
use crate::Generator;
use hashlink_core::shortcode::MAX_LENGTH;
use hashlink_core::ShortCode;
use md5::{Digest, Md5};
use typed_builder::TypedBuilder;

pub const DEFAULT_PREFIX_LEN: usize = 8;

/// Configures a [`HashPrefixGenerator`].
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct HashPrefixSettings {
    /// Number of leading hex characters of the digest kept as the code.
    ///
    /// The default of 8 leaves a 2^32 keyspace, so collisions between
    /// different inputs become likely past a few tens of thousands of links.
    #[builder(default = DEFAULT_PREFIX_LEN)]
    pub prefix_len: usize,
}

impl Default for HashPrefixSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Derives short codes from the MD5 digest of the input.
///
/// The code is the first `prefix_len` characters of the lowercase hex digest
/// of the input's UTF-8 bytes. No salt, counter or randomness is involved.
#[derive(Debug, Clone)]
pub struct HashPrefixGenerator {
    prefix_len: usize,
}

impl HashPrefixGenerator {
    pub fn new(settings: HashPrefixSettings) -> Result<Self, Error> {
        if settings.prefix_len == 0 || settings.prefix_len > MAX_LENGTH {
            return Err(Error::InvalidPrefixLength {
                len: settings.prefix_len,
                max: MAX_LENGTH,
            });
        }

        Ok(Self {
            prefix_len: settings.prefix_len,
        })
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }
}

impl Default for HashPrefixGenerator {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
        }
    }
}

impl Generator for HashPrefixGenerator {
    fn generate(&self, input: &str) -> ShortCode {
        let digest = Md5::digest(input.as_bytes());
        let mut code = hex::encode(digest);
        code.truncate(self.prefix_len);
        ShortCode::new_unchecked(code)
    }
}
