//! Accessor and conversion macros
//!
//! These macros eliminate repetitive match/impl code for the node and
//! modifier sum types. All macros use `paste` internally for identifier
//! concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with single-field variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text
///     impl_enum_accessors!(element: Element, text: Text);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident : $ty:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&$ty> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut $ty> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

/// Declare the `Modifier` sum type from a list of axis types.
///
/// # Generated items
/// - `enum Modifier { Color(Color), Size(Size), ... }`
/// - `From<Axis> for Modifier` for every listed type
/// - `Modifier::as_xxx(&self) -> Option<Axis>` (snake-cased variant name)
#[macro_export]
macro_rules! declare_modifiers {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),* $(,)?
        }
        extra {
            $( $(#[$xmeta:meta])* $xvariant:ident($xty:ty) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $name {
            $( $(#[$vmeta])* $variant($variant), )*
            $( $(#[$xmeta])* $xvariant($xty), )*
        }

        $(
            impl From<$variant> for $name {
                #[inline]
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        impl $name {
            ::paste::paste! {
                $(
                    #[doc = "Get the " $variant " value if this modifier carries one"]
                    #[inline]
                    pub fn [<as_ $variant:snake>](&self) -> Option<$variant> {
                        match self { Self::$variant(v) => Some(*v), _ => None }
                    }
                )*
            }
        }
    };
}

/// Build a heterogeneous modifier list for `Component::with`.
///
/// ```ignore
/// let button = Button::new(["Click me"]).with(modifiers![Color::Primary, Size::Large]);
/// ```
#[macro_export]
macro_rules! modifiers {
    () => {
        ::std::vec::Vec::<$crate::Modifier>::new()
    };
    ($($m:expr),+ $(,)?) => {
        [$($crate::Modifier::from($m)),+]
    };
}

/// Implement `From<Component> for Node` for each listed component type.
///
/// The conversion builds the component's element tree, so components can be
/// nested anywhere a node is accepted.
#[macro_export]
macro_rules! impl_into_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::Node {
                #[inline]
                fn from(component: $ty) -> Self {
                    $crate::Component::to_node(&component)
                }
            }

            impl From<&$ty> for $crate::Node {
                #[inline]
                fn from(component: &$ty) -> Self {
                    $crate::Component::to_node(component)
                }
            }
        )*
    };
}

#[cfg(test)]
mod tests {
    use crate::modifier::{Color, Modifier, Size};

    #[test]
    fn test_modifiers_macro_mixes_axes() {
        let mods = modifiers![Color::Primary, Size::Large];
        assert_eq!(mods.len(), 2);
        assert_eq!(mods[0].as_color(), Some(Color::Primary));
        assert_eq!(mods[1].as_size(), Some(Size::Large));
        assert!(mods[0].as_size().is_none());
    }

    #[test]
    fn test_empty_modifiers_macro() {
        let mods: Vec<Modifier> = modifiers![];
        assert!(mods.is_empty());
    }
}
