//! Emitters turning schema entries into Go declarations.
//!
//! ```text
//! ProtocolDoc
//!     ↓
//!  [fields]  naming + types → ResolvedField
//!     ↓
//!  ├─→ [structs]      → StructDecl (event / request / response)
//!  ├─→ [constructor]  → FuncDecl   (New<Name>Request)
//!  └─→ [registry]     → maps + unwrap functions (after all categories)
//! ```
//!
//! Struct and constructor emission are pure per entry and may run in any
//! order. The registry is a join point over the whole document.

pub mod constructor;
pub mod docs;
pub mod fields;
pub mod registry;
pub mod structs;

pub use constructor::emit_constructor;
pub use fields::{ResolvedField, resolve_fields};
pub use registry::{NameIndex, emit_registry};
pub use structs::emit_struct;
