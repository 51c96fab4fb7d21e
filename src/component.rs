//! The component contract.
//!
//! A component is an immutable configuration value that knows how to build
//! its markup tree. Every component type implements [`Component`] and can be
//! converted into a [`Node`] for nesting inside other components.

use std::io;

use crate::error::RenderResult;
use crate::modifier::Modifier;
use crate::node::Node;
use crate::render::{self, RenderConfig};

/// A FlyonUI component.
pub trait Component: Clone {
    /// Build the markup tree for this component.
    fn to_node(&self) -> Node;

    /// Apply one modifier in place. Modifiers on axes this component does
    /// not understand are ignored.
    fn apply_modifier(&mut self, modifier: &Modifier);

    /// Return a copy with `modifiers` applied in order.
    ///
    /// The receiver is left untouched. Within one call the last modifier
    /// on an axis wins.
    fn with<I>(&self, modifiers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Modifier>,
    {
        let mut next = self.clone();
        for modifier in modifiers {
            next.apply_modifier(&modifier.into());
        }
        next
    }

    /// Render as HTML to `w`.
    fn render<W>(&self, w: &mut W) -> RenderResult<()>
    where
        W: io::Write + ?Sized,
    {
        self.render_with(&RenderConfig::default(), w)
    }

    /// Render as HTML to `w` with an explicit configuration.
    fn render_with<W>(&self, config: &RenderConfig, w: &mut W) -> RenderResult<()>
    where
        W: io::Write + ?Sized,
    {
        render::render(&self.to_node(), config, w)
    }

    /// Render to an in-memory string.
    fn render_to_string(&self) -> String {
        render::render_to_string(&self.to_node(), &RenderConfig::default())
    }
}

/// Render a slice of components in parallel, preserving order.
#[cfg(feature = "parallel")]
pub fn render_components<C>(components: &[C], config: &RenderConfig) -> Vec<String>
where
    C: Component + Sync,
{
    use rayon::prelude::*;

    components
        .par_iter()
        .map(|c| render::render_to_string(&c.to_node(), config))
        .collect()
}
