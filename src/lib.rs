//! A current value paired with a bounded, undoable history of the values it held before.
//!
//! ```
//! use history_state::HistoryState;
//!
//! let mut state = HistoryState::with_value(1);
//! state.set(2);
//! state.set(3);
//! assert_eq!(state.histories(), &[1, 2]);
//! assert_eq!(state.pop(), Some(2));
//! assert_eq!(state.current(), Some(&2));
//! ```

pub mod error;
pub mod history;
pub mod notify;
pub mod shared;
pub mod state;

pub use error::{Result, StateError};
pub use history::History;
pub use notify::{Change, SubscriptionId};
pub use shared::SharedHistoryState;
pub use state::{Builder, HistoryState, Snapshot};

/// History bound used when none is configured.
pub const DEFAULT_MAX_HEAP: usize = 20;
