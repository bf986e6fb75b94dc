//! Per-mode signing material selection.

use std::fmt;
use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use botgate_core::error::AuthError;
use botgate_core::result::AuthResult;
use botgate_core::traits::cloud::CloudProvider;
use botgate_core::traits::credential::CredentialProvider;
use botgate_core::types::pairing::PairingSnapshot;

/// Key material tagged with the one algorithm it implies.
///
/// The variant is closed: a symmetric secret is only ever used with HS256
/// and a certificate only with RS256. Verification constructs its
/// `Validation` from [`SigningMaterial::algorithm`], so a token stating
/// any other algorithm is rejected outright; there is no negotiation.
#[derive(Clone)]
pub enum SigningMaterial {
    /// Locally held symmetric secret.
    Symmetric {
        /// Raw secret bytes.
        secret: Vec<u8>,
    },
    /// Public key material supplied by the paired control plane.
    Asymmetric {
        /// PEM-encoded public key.
        certificate: String,
    },
}

impl SigningMaterial {
    /// The single algorithm this material may be used with.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Symmetric { .. } => Algorithm::HS256,
            Self::Asymmetric { .. } => Algorithm::RS256,
        }
    }

    /// Build the verification key for this material.
    pub fn decoding_key(&self) -> AuthResult<DecodingKey> {
        match self {
            Self::Symmetric { secret } => Ok(DecodingKey::from_secret(secret)),
            Self::Asymmetric { certificate } => DecodingKey::from_rsa_pem(certificate.as_bytes())
                .map_err(|e| {
                    AuthError::configuration(format!("Invalid control-plane certificate: {e}"))
                }),
        }
    }

    /// Build the signing key for this material.
    ///
    /// Only the symmetric arm can sign; the asymmetric arm holds public
    /// material exclusively.
    pub fn encoding_key(&self) -> AuthResult<EncodingKey> {
        match self {
            Self::Symmetric { secret } => Ok(EncodingKey::from_secret(secret)),
            Self::Asymmetric { .. } => Err(AuthError::internal(
                "Cannot sign with public certificate material",
            )),
        }
    }
}

impl fmt::Debug for SigningMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symmetric { .. } => f.debug_struct("Symmetric").finish_non_exhaustive(),
            Self::Asymmetric { .. } => f.debug_struct("Asymmetric").finish_non_exhaustive(),
        }
    }
}

/// Resolves which key material applies to a given sign or verify call.
///
/// Material is fetched from the collaborators on every call; secrets and
/// certificates may rotate out-of-band, so nothing is cached here.
pub struct SigningContext {
    /// Credential collaborator holding the symmetric secret.
    credentials: Arc<dyn CredentialProvider>,
    /// Cloud collaborator holding the certificate.
    cloud: Arc<dyn CloudProvider>,
    /// Pairing state captured at construction.
    pairing: PairingSnapshot,
}

impl SigningContext {
    /// Creates a new signing context over the given collaborators.
    pub fn new(
        credentials: Arc<dyn CredentialProvider>,
        cloud: Arc<dyn CloudProvider>,
        pairing: PairingSnapshot,
    ) -> Self {
        Self {
            credentials,
            cloud,
            pairing,
        }
    }

    /// The pairing snapshot this context was constructed with.
    pub fn pairing(&self) -> &PairingSnapshot {
        &self.pairing
    }

    /// Material for signing a new token.
    ///
    /// Issuance only happens for local root login, so this is always the
    /// symmetric path.
    pub async fn signing_material(&self) -> AuthResult<SigningMaterial> {
        let secret = self.credentials.token_secret().await?;
        Ok(SigningMaterial::Symmetric { secret })
    }

    /// Material for verifying a presented token: the control-plane
    /// certificate when paired, the local secret otherwise.
    pub async fn verification_material(&self) -> AuthResult<SigningMaterial> {
        if self.pairing.paired {
            let certificate = self.cloud.certificate().await?;
            Ok(SigningMaterial::Asymmetric { certificate })
        } else {
            self.signing_material().await
        }
    }
}

impl fmt::Debug for SigningContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningContext")
            .field("pairing", &self.pairing)
            .finish()
    }
}
