use blst::min_pk::PublicKey as RawPublicKey;
use derive_more::From;

use crate::{error::Error, public_key_bytes::PublicKeyBytes};

/// A decompressed public key that has been checked to be a valid group element.
#[derive(Clone, Copy, PartialEq, Eq, Debug, From)]
pub struct PublicKey(RawPublicKey);

impl TryFrom<PublicKeyBytes> for PublicKey {
    type Error = Error;

    #[inline]
    fn try_from(bytes: PublicKeyBytes) -> Result<Self, Self::Error> {
        let raw = RawPublicKey::uncompress(bytes.as_bytes()).map_err(Error::DecompressionFailed)?;

        // `uncompress` accepts the point at infinity and points outside the subgroup.
        raw.validate().map_err(Error::InvalidPublicKey)?;

        Ok(Self(raw))
    }
}

impl From<PublicKey> for PublicKeyBytes {
    #[inline]
    fn from(public_key: PublicKey) -> Self {
        Self(public_key.0.compress())
    }
}

impl PublicKey {
    #[must_use]
    pub fn to_bytes(self) -> PublicKeyBytes {
        self.into()
    }
}
