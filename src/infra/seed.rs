// ============================================================
// Layer 6 — Global Seed Resolution
// ============================================================
// The shuffle seed comes from the PL_GLOBAL_SEED environment
// variable when it holds a non-negative integer, otherwise 42.
//
//   PL_GLOBAL_SEED unset   → 42 (logged at debug)
//   PL_GLOBAL_SEED="abc"   → 42 (logged at warn)
//   PL_GLOBAL_SEED=" 123 " → 123
//
// This is the only place the variable is read; everything
// downstream receives the seed as a plain u64.

use std::env;

/// Environment variable holding the global seed
pub const SEED_ENV_VAR: &str = "PL_GLOBAL_SEED";

/// Seed used when the variable is missing or unusable
pub const DEFAULT_SEED: u64 = 42;

/// Read PL_GLOBAL_SEED and resolve it to a seed.
pub fn seed_from_env() -> u64 {
    resolve_seed(env::var(SEED_ENV_VAR).ok().as_deref())
}

/// Resolve a raw variable value (None = unset) to a seed.
pub fn resolve_seed(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        tracing::debug!("{} not set, using seed {}", SEED_ENV_VAR, DEFAULT_SEED);
        return DEFAULT_SEED;
    };

    match raw.trim().parse::<u64>() {
        Ok(seed) => seed,
        Err(e) => {
            tracing::warn!(
                "{}='{}' is not a valid seed ({}), using seed {}",
                SEED_ENV_VAR,
                raw,
                e,
                DEFAULT_SEED
            );
            DEFAULT_SEED
        }
    }
}
