pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::disposables::Disposables;
pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::error::ContextError;
pub use crate::host::{FrameId, Host, TimerId};
pub use crate::input::{Key, KeyEvent, KeyEvents, ListenerId, Modifiers};
pub use crate::locals::{local_or_default, require_local, try_local, with_local};
pub use crate::runtime::{ComposeGuard, remember};
pub use crate::scope::{Scope, current_scope, scoped_disposables, scoped_effect};
pub use crate::signal::{Signal, signal};
pub use web_time::{Duration, Instant};
