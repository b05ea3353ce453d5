//! Per-server single-flight gate for farm actions.
//!
//! Every farm action for a server runs while holding that server's guard, so
//! actions in one server are strictly serialized while different servers
//! proceed in parallel. Entries are reference counted and removed once the last
//! holder or waiter is gone, so the map only grows with concurrent activity.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::sync::OwnedMutexGuard;

type Slot = (Arc<tokio::sync::Mutex<()>>, usize);

/// Map of per-server locks shared by every handler.
#[derive(Clone, Default)]
pub struct FarmGate {
    slots: Arc<Mutex<HashMap<u64, Slot>>>,
}

/// Exclusive right to run a farm action for one server.
///
/// Released on drop, including on early return and panic unwind.
pub struct FarmGuard {
    // Unlocks before the slot count is released.
    _lock: OwnedMutexGuard<()>,
    _slot: SlotRef,
}

/// One counted interest in a server's slot, given back on drop.
struct SlotRef {
    server_id: u64,
    slots: Arc<Mutex<HashMap<u64, Slot>>>,
}

impl Drop for SlotRef {
    fn drop(&mut self) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(slot) = slots.get_mut(&self.server_id) {
            slot.1 -= 1;
            if slot.1 == 0 {
                slots.remove(&self.server_id);
            }
        }
    }
}

impl FarmGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other action holds `server_id`, then takes it.
    pub async fn acquire(&self, server_id: u64) -> FarmGuard {
        let lock = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            let slot = slots
                .entry(server_id)
                .or_insert_with(|| (Arc::new(tokio::sync::Mutex::new(())), 0));
            slot.1 += 1;
            slot.0.clone()
        };

        // Counted before awaiting so waiters keep the entry alive; a cancelled
        // waiter gives the count back when `slot` drops.
        let slot = SlotRef {
            server_id,
            slots: self.slots.clone(),
        };

        FarmGuard {
            _lock: lock.lock_owned().await,
            _slot: slot,
        }
    }

    /// Number of servers with a holder or waiter.
    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.slots.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    #[tokio::test]
    async fn removes_entry_after_release() {
        let gate = FarmGate::new();

        let guard = gate.acquire(1).await;
        assert_eq!(gate.active(), 1);

        drop(guard);
        assert_eq!(gate.active(), 0);
    }

    #[tokio::test]
    async fn serializes_actions_in_one_server() {
        let gate = FarmGate::new();
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let gate = gate.clone();
            let inside = inside.clone();
            let max_inside = max_inside.clone();
            handles.push(tokio::spawn(async move {
                let _guard = gate.acquire(7).await;
                let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                max_inside.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(2)).await;
                inside.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
        assert_eq!(gate.active(), 0);
    }

    #[tokio::test]
    async fn different_servers_do_not_block() {
        let gate = FarmGate::new();

        let _first = gate.acquire(1).await;
        let second = tokio::time::timeout(Duration::from_millis(100), gate.acquire(2)).await;

        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn cancelled_waiter_releases_its_count() {
        let gate = FarmGate::new();

        let held = gate.acquire(1).await;
        let waited = tokio::time::timeout(Duration::from_millis(10), gate.acquire(1)).await;
        assert!(waited.is_err());

        drop(held);
        assert_eq!(gate.active(), 0);
    }
}
