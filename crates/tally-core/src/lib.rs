//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It contains the receipt domain
//! model and the whole points calculator as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tally-api (HTTP Layer)                      │   │
//! │  │   POST /receipts/process   GET /receipts   GET …/{id}/points    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                   tally-store (State Layer)                     │   │
//! │  │        in-memory ReceiptStore: register / list / find           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ tally-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  points   │  │   error   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │   score   │  │ ParseMoney│  │   │
//! │  │   │   Item    │  │ i64 cents │  │ breakdown │  │   Error   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, NewReceipt, Item)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`points`] - The seven scoring rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Scoring is deterministic - same receipt = same points
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Lenient Scoring**: A malformed field contributes zero points, it never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{points, NewReceipt, Receipt};
//!
//! let submitted = NewReceipt {
//!     retailer: "Target".into(),
//!     total: "1.25".into(),
//!     ..NewReceipt::default()
//! };
//!
//! // The store assigns the id; here we do it by hand.
//! let receipt = Receipt::from_new(submitted, "r-1".into());
//!
//! // 6 retailer characters + 25 for a quarter-multiple total.
//! assert_eq!(points::score(&receipt), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::ParseMoneyError;
pub use money::Money;
pub use types::{Item, NewReceipt, Receipt};
