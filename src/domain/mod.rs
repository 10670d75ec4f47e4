// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// data module works with:
//
//   - EventRecord: one (event name, label) row
//   - Stage:       the lifecycle stage a training loop asks for
//   - traits:      seams for record sources and transforms
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits

/// One event-name/label row
pub mod event_record;

/// Lifecycle stages (fit, validate, test, predict)
pub mod stage;

/// Core abstractions (traits) that other layers implement
pub mod traits;
