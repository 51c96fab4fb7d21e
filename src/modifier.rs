//! Modifier algebra
//!
//! Global axes (`Color`, `Size`, `Variant`) map to a short token that each
//! component prefixes with its own class namespace (`btn-primary`,
//! `input-lg`). Component-local enums map to the class they emit, either
//! verbatim (`DrawerSide::Right` is `drawer-end`) or as a suffix documented
//! on the type.
//!
//! [`Modifier`] is the sum of every axis plus two escape hatches: a custom
//! class and an extra attribute. Components react to the variants they
//! understand and ignore the rest.

use std::fmt;

use compact_str::CompactString;

use crate::attr::Attr;

/// Declares a fieldless enum with a fixed string token per variant.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// String token used when deriving CSS classes.
            pub const fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

// =============================================================================
// Global axes
// =============================================================================

token_enum! {
    /// Theme color.
    pub enum Color {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Neutral => "neutral",
    }
}

token_enum! {
    /// Component size.
    pub enum Size {
        ExtraSmall => "xs",
        Small => "sm",
        #[default]
        Medium => "md",
        Large => "lg",
        ExtraLarge => "xl",
    }
}

token_enum! {
    /// Visual style.
    pub enum Variant {
        #[default]
        Solid => "solid",
        Outline => "outline",
        Ghost => "ghost",
        Soft => "soft",
    }
}

// =============================================================================
// Component-local axes (token is the full class)
// =============================================================================

token_enum! {
    /// Edge a drawer slides in from.
    pub enum DrawerSide {
        #[default]
        Left => "drawer-start",
        Right => "drawer-end",
        Top => "drawer-top",
        Bottom => "drawer-bottom",
    }
}

token_enum! {
    /// Width of a modal dialog. `Default` emits no class.
    pub enum ModalSize {
        #[default]
        Default => "",
        Small => "modal-dialog-sm",
        Medium => "modal-dialog-md",
        Large => "modal-dialog-lg",
        ExtraLarge => "modal-dialog-xl",
        FullWidth => "modal-dialog-full",
    }
}

token_enum! {
    /// Vertical placement of a modal. `Default` emits no class.
    pub enum ModalPosition {
        #[default]
        Default => "",
        Middle => "modal-middle",
        Bottom => "modal-bottom",
    }
}

token_enum! {
    /// Tab bar style. `Default` emits no class.
    pub enum TabsVariant {
        #[default]
        Default => "",
        Bordered => "tabs-bordered",
        Lifted => "tabs-lifted",
        Boxed => "tabs-boxed",
    }
}

token_enum! {
    /// Tab bar size. `Medium` emits no class.
    pub enum TabsSize {
        ExtraSmall => "tabs-xs",
        Small => "tabs-sm",
        #[default]
        Medium => "",
        Large => "tabs-lg",
    }
}

token_enum! {
    /// Where a dropdown menu opens relative to its trigger.
    pub enum DropdownPosition {
        #[default]
        Bottom => "dropdown-bottom",
        Top => "dropdown-top",
        Left => "dropdown-left",
        Right => "dropdown-right",
        BottomStart => "dropdown-bottom dropdown-start",
        BottomEnd => "dropdown-bottom dropdown-end",
        TopStart => "dropdown-top dropdown-start",
        TopEnd => "dropdown-top dropdown-end",
    }
}

token_enum! {
    /// Placement of an indicator badge.
    pub enum IndicatorPosition {
        #[default]
        TopStart => "indicator-top-start",
        TopCenter => "indicator-top-center",
        TopEnd => "indicator-top-end",
        MiddleStart => "indicator-middle-start",
        MiddleCenter => "indicator-middle-center",
        MiddleEnd => "indicator-middle-end",
        BottomStart => "indicator-bottom-start",
        BottomCenter => "indicator-bottom-center",
        BottomEnd => "indicator-bottom-end",
    }
}

token_enum! {
    /// How a loading indicator is drawn. The class is the token verbatim.
    pub enum LoadingType {
        #[default]
        Spinner => "loading-spinner",
        Dots => "loading-dots",
        Ring => "loading-ring",
        Ball => "loading-ball",
        Bars => "loading-bars",
        Infinity => "loading-infinity",
    }
}

token_enum! {
    /// Layout direction of a stats group.
    pub enum StatsOrientation {
        #[default]
        Vertical => "stats-vertical",
        Horizontal => "stats-horizontal",
    }
}

token_enum! {
    /// Layout direction of a timeline.
    pub enum TimelineOrientation {
        #[default]
        Vertical => "timeline-vertical",
        Horizontal => "timeline-horizontal",
    }
}

// =============================================================================
// Component-local axes (token is a class suffix)
// =============================================================================

token_enum! {
    /// Tooltip placement, emitted as `tooltip-<token>`.
    pub enum TooltipPosition {
        #[default]
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

token_enum! {
    /// Skeleton placeholder shape, emitted as `skeleton-<token>`.
    pub enum SkeletonShape {
        #[default]
        Rectangle => "rectangle",
        Circle => "circle",
        Text => "text",
    }
}

token_enum! {
    /// Spinner animation, emitted as `loading-<token>`. `Default` emits nothing.
    pub enum SpinnerType {
        #[default]
        Default => "",
        Dots => "dots",
        Ring => "ring",
        Ball => "ball",
        Bars => "bars",
        Infinity => "infinity",
    }
}

token_enum! {
    /// Severity of a validation message, emitted as `text-<token>`.
    pub enum ValidationType {
        #[default]
        Error => "error",
        Warning => "warning",
        Success => "success",
        Info => "info",
    }
}

token_enum! {
    /// Divider direction, emitted as `divider-<token>`.
    pub enum DividerOrientation {
        #[default]
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

// =============================================================================
// Modifier
// =============================================================================

declare_modifiers! {
    /// A single style facet accepted by [`Component::with`](crate::Component::with).
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Modifier {
        Color,
        Size,
        Variant,
        DrawerSide,
        ModalSize,
        ModalPosition,
        TabsVariant,
        TabsSize,
        DropdownPosition,
        IndicatorPosition,
        TooltipPosition,
        SkeletonShape,
        SpinnerType,
        LoadingType,
        StatsOrientation,
        TimelineOrientation,
        ValidationType,
        DividerOrientation,
    }
    extra {
        /// Caller-supplied class, appended after facet classes
        Class(CompactString),
        /// Extra attribute on the outer element
        Attr(Attr),
    }
}

impl Modifier {
    /// Custom class modifier
    pub fn class(class: impl Into<CompactString>) -> Self {
        Self::Class(class.into())
    }

    /// Extra attribute modifier
    pub fn attr(name: impl Into<CompactString>, value: impl Into<String>) -> Self {
        Self::Attr(Attr::new(name, value))
    }
}

impl From<&str> for Modifier {
    #[inline]
    fn from(class: &str) -> Self {
        Self::Class(class.into())
    }
}

impl From<String> for Modifier {
    #[inline]
    fn from(class: String) -> Self {
        Self::Class(class.into())
    }
}

impl From<Attr> for Modifier {
    #[inline]
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<&Modifier> for Modifier {
    #[inline]
    fn from(modifier: &Modifier) -> Self {
        modifier.clone()
    }
}
