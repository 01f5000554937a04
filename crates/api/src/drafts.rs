use std::collections::HashMap;

use prodgen_core::draft::DraftProduct;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory draft sessions, one [`DraftProduct`] per session id.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. Each session belongs to one operator, so
/// transitions are applied read-modify-write without further coordination.
pub struct DraftSessions {
    drafts: RwLock<HashMap<Uuid, DraftProduct>>,
}

impl DraftSessions {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self {
            drafts: RwLock::new(HashMap::new()),
        }
    }

    /// Open a new session holding an empty draft.
    pub async fn open(&self) -> (Uuid, DraftProduct) {
        let id = Uuid::new_v4();
        let draft = DraftProduct::default();
        self.drafts.write().await.insert(id, draft.clone());
        (id, draft)
    }

    /// A copy of the session's current draft.
    pub async fn get(&self, id: Uuid) -> Option<DraftProduct> {
        self.drafts.read().await.get(&id).cloned()
    }

    /// Apply a transition to the session's draft and store the result.
    ///
    /// Returns the new draft, or `None` if the session does not exist.
    pub async fn apply<F>(&self, id: Uuid, transition: F) -> Option<DraftProduct>
    where
        F: FnOnce(DraftProduct) -> DraftProduct,
    {
        let mut drafts = self.drafts.write().await;
        let slot = drafts.get_mut(&id)?;
        let next = transition(std::mem::take(slot));
        *slot = next.clone();
        Some(next)
    }

    /// Close a session. Returns `true` if it existed.
    pub async fn close(&self, id: Uuid) -> bool {
        self.drafts.write().await.remove(&id).is_some()
    }

    /// Number of open sessions.
    pub async fn len(&self) -> usize {
        self.drafts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for DraftSessions {
    fn default() -> Self {
        Self::new()
    }
}
