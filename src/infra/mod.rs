// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns the other layers lean on:
//
//   seed.rs    — Resolves the shuffle seed from PL_GLOBAL_SEED,
//                falling back to 42.
//
//   hparams.rs — Saves the resolved DataModuleConfig as JSON
//                so a run's partitioning can be reproduced.

/// Global seed resolution from the environment
pub mod seed;

/// DataModuleConfig JSON snapshots
pub mod hparams;
