//! # Receipt Store
//!
//! Holds every receipt registered since the process started.
//!
//! ## Thread Safety
//! The collection is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every HTTP handler holds a handle to the same store
//! 2. Only one handler should touch the vector at a time
//! 3. Handlers run concurrently on the async runtime
//!
//! The lock guards short critical sections only (a push, a scan, a clone)
//! and is never held across an await point.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Operations                                   │
//! │                                                                         │
//! │  HTTP Request               Store Call             State Change         │
//! │  ────────────               ──────────             ────────────         │
//! │                                                                         │
//! │  POST /receipts/process ──► register() ──────────► receipts.push(r)    │
//! │                                                                         │
//! │  GET /receipts ───────────► list_all() ──────────► (read only)         │
//! │                                                                         │
//! │  GET …/{id}/points ───────► find_by_id() ────────► (read only)         │
//! │                                                                         │
//! │  GET /health ─────────────► len() ───────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Receipts are append-only. There is no update, delete, or         │
//! │        eviction; the id handed out at registration stays valid for      │
//! │        the life of the process.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tracing::debug;
use uuid::Uuid;

use tally_core::{NewReceipt, Receipt};

/// The shared in-memory receipt collection.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Vec<Receipt>>>` because:
/// - `Arc`: Allows shared ownership across handler tasks
/// - `Mutex`: Ensures only one task touches the vector at a time
///
/// ## Why Not RwLock?
/// Store operations are quick (a push or a linear scan over an in-memory
/// vector). A RwLock would add complexity with minimal benefit.
///
/// Cloning a `ReceiptStore` clones the handle, not the receipts: every
/// clone reads and writes the same collection.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    receipts: Arc<Mutex<Vec<Receipt>>>,
}

impl ReceiptStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Executes a function with read access to the receipts.
    fn with_receipts<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Receipt>) -> R,
    {
        let receipts = self.receipts.lock().expect("Receipt store mutex poisoned");
        f(&receipts)
    }

    /// Executes a function with write access to the receipts.
    fn with_receipts_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<Receipt>) -> R,
    {
        let mut receipts = self.receipts.lock().expect("Receipt store mutex poisoned");
        f(&mut receipts)
    }

    /// Registers a submitted receipt and returns its assigned id.
    ///
    /// The id is a freshly minted UUID v4; the receipt is appended after
    /// every previously registered one. Registration never fails and never
    /// inspects the receipt's content.
    pub fn register(&self, new: NewReceipt) -> String {
        let id = Uuid::new_v4().to_string();
        debug!(id = %id, retailer = %new.retailer, "Registering receipt");

        let receipt = Receipt::from_new(new, id.clone());
        self.with_receipts_mut(|receipts| receipts.push(receipt));
        id
    }

    /// Returns every registered receipt, in registration order.
    pub fn list_all(&self) -> Vec<Receipt> {
        self.with_receipts(|receipts| receipts.clone())
    }

    /// Looks a receipt up by id. `None` when no receipt has that id.
    pub fn find_by_id(&self, id: &str) -> Option<Receipt> {
        self.with_receipts(|receipts| receipts.iter().find(|r| r.id == id).cloned())
    }

    /// Number of registered receipts.
    pub fn len(&self) -> usize {
        self.with_receipts(|receipts| receipts.len())
    }

    /// Whether the store holds no receipts.
    pub fn is_empty(&self) -> bool {
        self.with_receipts(|receipts| receipts.is_empty())
    }
}

/// A default store is an empty store.
impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}
