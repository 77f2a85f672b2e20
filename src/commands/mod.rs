//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule and receives an already-built registry.

pub mod assemble;
pub mod list;
pub mod policy;
pub mod resolve;

pub use assemble::{execute_assemble, AssembleOptions};
pub use list::{execute_list, ListOptions};
pub use policy::{execute_policy, PolicyOptions};
pub use resolve::{execute_resolve, ResolveOptions};
