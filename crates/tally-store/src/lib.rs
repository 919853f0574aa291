//! # tally-store: In-Memory Receipt Storage
//!
//! The state layer of Tally. One process-wide [`ReceiptStore`] sits between
//! the HTTP handlers and the pure scoring logic in `tally-core`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │   tally-api handlers                                                │
//! │        │ register / list_all / find_by_id                           │
//! │        ▼                                                            │
//! │   ★ tally-store (THIS CRATE) ★                                      │
//! │     ReceiptStore ──► Mutex<Vec<Receipt>>                            │
//! │        │                                                            │
//! │        ▼                                                            │
//! │   tally-core types (Receipt, NewReceipt)                            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage is memory only. A restart forgets every receipt; that is the
//! intended lifecycle, not a gap.

pub mod store;

pub use store::ReceiptStore;
