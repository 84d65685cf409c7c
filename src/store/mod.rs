//! Content stores.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ PostStore / PageStore                                        │
//! │                                                              │
//! │   create() ──► tokio::spawn(fetch) ──► BloggerClient (GET)   │
//! │                      │                                       │
//! │                      ▼                                       │
//! │   Signal<list>  Signal<is_loading>  Signal<error>            │
//! │        │                                                     │
//! │        └── derived views recomputed on read                  │
//! │            (filtered_posts, all_tags, get_*_by_*)            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Failure handling differs between the two stores: posts keep the list they
//! had, pages revert to the bundled sample pages.

mod pages;
mod posts;

pub use pages::PageStore;
pub use posts::PostStore;

use crate::log;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// Handle of the fetch a store starts on creation, awaited at most once.
#[derive(Debug, Default)]
struct InitialFetch(Mutex<Option<JoinHandle<()>>>);

impl InitialFetch {
    fn set(&self, task: JoinHandle<()>) {
        *self.0.lock() = Some(task);
    }

    async fn wait(&self, store: &str) {
        let task = self.0.lock().take();
        if let Some(task) = task
            && let Err(err) = task.await
        {
            log!("error"; "initial {store} fetch aborted: {err}");
        }
    }
}
