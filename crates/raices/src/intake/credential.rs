use bcrypt::BcryptError;

/// Shortest secret the wizard accepts.
pub const MIN_CREDENTIAL_LEN: usize = 8;

/// Cost factor used in production. Kept configurable so the test suite can
/// run at the cheapest cost bcrypt allows.
pub const DEFAULT_HASH_COST: u32 = 10;

/// Cheapest cost bcrypt accepts; anything lower is rejected by the crate.
pub const MIN_HASH_COST: u32 = 4;
const MAX_HASH_COST: u32 = 31;

/// One-way, cost-factor hashing for the sign-up credential.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_COST)
    }
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_HASH_COST, MAX_HASH_COST),
        }
    }

    pub fn hash(&self, secret: &str) -> Result<String, CredentialError> {
        Ok(bcrypt::hash(secret, self.cost)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential hashing failed: {0}")]
    Hash(#[from] BcryptError),
}
