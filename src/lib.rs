//! flyon-vdom - Server-side FlyonUI components over a small HTML node tree
//!
//! ## Core Concepts
//!
//! **Immutable components**: every component is a plain value. Builders
//! (`with_*`) consume and return it, [`Component::with`] returns a modified
//! copy and leaves the receiver untouched.
//!
//! **Modifier algebra**: typed style facets ([`Color`], [`Size`],
//! [`Variant`] and component-local enums) map to FlyonUI class tokens. On
//! one axis the last modifier wins; different axes compose.
//!
//! ## Modules
//! - `node`: Node/Element/Text tree that components build
//! - `html`: element and attribute constructors
//! - `render`: HTML serialization to strings, `io::Write` and `fmt::Write`
//! - `classes`: class list composition with per-axis slots
//! - `modifier`: style modifiers
//! - `component`: the [`Component`] trait
//! - `components`: the FlyonUI component set
//! - `id`: id generation for interactive components
//!
//! ## Usage
//!
//! ```
//! use flyon_vdom::prelude::*;
//!
//! let button = Button::new(["Save"]).with(modifiers![Color::Success, Size::Small]);
//! assert_eq!(
//!     button.render_to_string(),
//!     r#"<button class="btn btn-success btn-sm">Save</button>"#
//! );
//! ```

// Declarative macros must come first so later modules can use them.
#[macro_use]
mod macros;

/// Attribute types
pub mod attr;

/// Node types: Element, Node, Text
pub mod node;

/// Element and attribute constructors
pub mod html;

/// HTML rendering
pub mod render;

/// Class list composition
pub mod classes;

/// Style modifiers
pub mod modifier;

/// The component contract
pub mod component;

/// Attribute/content partitioning of loose node lists
pub mod partition;

/// Id generation
pub mod id;

/// Deterministic hashing for seeded id scopes
pub mod hash;

/// Error types
pub mod error;

/// FlyonUI components
pub mod components;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Element, Node, Text, TextKind};

// Attribute types
pub use attr::{Attr, Attrs, AttrsExt};

// Component contract
pub use component::Component;

#[cfg(feature = "parallel")]
pub use component::render_components;

// Modifiers
pub use classes::{Axis, Classes};
pub use modifier::{
    Color, DividerOrientation, DrawerSide, DropdownPosition, IndicatorPosition, LoadingType,
    ModalPosition, ModalSize, Modifier, Size, SkeletonShape, SpinnerType, StatsOrientation,
    TabsSize, TabsVariant, TimelineOrientation, TooltipPosition, ValidationType, Variant,
};

// Render
pub use render::{RenderConfig, render_to_string};

// Identity
pub use id::{IdGenerator, IdScope, generate_id};

// Error types
pub use error::{RenderError, RenderResult};

// Components
pub use components::*;
