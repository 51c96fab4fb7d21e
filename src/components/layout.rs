//! Layout wrappers: Container, Grid, Flex, Stack.

use super::shell::prefixed_component;

prefixed_component! {
    /// Page-width container (`<div class="container">`).
    Container { tag: "div", base: "container", heuristic: Generic }
}

prefixed_component! {
    /// CSS grid wrapper (`<div class="grid">`).
    Grid { tag: "div", base: "grid", heuristic: Generic }
}

prefixed_component! {
    /// Flexbox wrapper (`<div class="flex">`).
    Flex { tag: "div", base: "flex", heuristic: Generic }
}

prefixed_component! {
    /// Stacked children (`<div class="stack">`).
    Stack { tag: "div", base: "stack", heuristic: Generic }
}

impl Default for Container {
    fn default() -> Self {
        Self::from_shell(super::shell::Shell::new("container"))
    }
}
