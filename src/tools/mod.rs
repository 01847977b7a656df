pub mod invocation;
pub mod registry;
pub mod shaping;

pub use invocation::ToolInvocation;
