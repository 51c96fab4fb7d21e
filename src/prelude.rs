//! Prelude module for common imports.
//!
//! ```ignore
//! use flyon_vdom::prelude::*;
//! ```

// Node types
pub use crate::node::{Element, Node, Text};

// Attributes
pub use crate::attr::{Attr, Attrs, AttrsExt};

// Builders
pub use crate::html;
pub use crate::modifiers;

// Component contract
pub use crate::component::Component;

// Modifiers
pub use crate::modifier::{
    Color, DividerOrientation, DrawerSide, DropdownPosition, IndicatorPosition, LoadingType,
    ModalPosition, ModalSize, Modifier, Size, SkeletonShape, SpinnerType, StatsOrientation,
    TabsSize, TabsVariant, TimelineOrientation, TooltipPosition, ValidationType, Variant,
};

// Render
pub use crate::render::RenderConfig;

// Identity
pub use crate::id::{IdScope, generate_id};

// Error
pub use crate::error::{RenderError, RenderResult};

// Components
pub use crate::components::*;
