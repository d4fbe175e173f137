//! Java source-model core: signatures and element handles.
//!
//! - [`signature`]: validate, decode, encode and render type and method
//!   signatures
//! - [`resolver`]: map scopes, resource paths and compiler bindings to
//!   element handles
//! - [`common`]: limits, source ranges, naming conventions
//!
//! ```no_run
//! use jsm::resolver::HandleResolver;
//!
//! let model = jsm::load_workspace(std::path::Path::new("workspace.json"))?;
//! let mut resolver = HandleResolver::new(&model);
//! let unit = resolver.resolve_resource_path("/app/src/com/acme/Widget.java", None)?;
//! println!("{unit}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub use jsm_common as common;
pub use jsm_resolver as resolver;
pub use jsm_signature as signature;

pub mod tracing_config;

pub mod workspace;
pub use workspace::{load_workspace, load_workspace_config};
