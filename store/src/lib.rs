pub mod authz;
pub mod guard;
pub mod session;

mod store;
pub use store::SessionStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use guard::{GuardOutcome, RouteRequirement};
pub use session::{Role, Session};
