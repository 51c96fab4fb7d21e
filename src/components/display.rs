//! Basic display components: Alert, Badge, Button, Card, Avatar.
//!
//! Each is a single element carrying its base class, the global
//! Color/Size/Variant classes under its own prefix, and caller content.

use super::shell::prefixed_component;

prefixed_component! {
    /// Alert box (`<div class="alert">`).
    Alert { tag: "div", base: "alert", heuristic: Generic }
}

prefixed_component! {
    /// Inline badge (`<span class="badge">`).
    Badge { tag: "span", base: "badge", heuristic: Badge }
}

prefixed_component! {
    /// Button (`<button class="btn">`).
    Button { tag: "button", base: "btn", heuristic: Generic }
}

prefixed_component! {
    /// Card container (`<div class="card">`).
    Card { tag: "div", base: "card", heuristic: Generic }
}

prefixed_component! {
    /// Avatar wrapper (`<div class="avatar">`).
    Avatar { tag: "div", base: "avatar", heuristic: Generic }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attr;
    use crate::component::Component;
    use crate::html;
    use crate::modifier::{Color, Modifier, Size, Variant};
    use crate::node::Node;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_button_primary_large() {
        let button = Button::new(["Click me"]).with(modifiers![Color::Primary, Size::Large]);
        assert_eq!(
            button.render_to_string(),
            r#"<button class="btn btn-primary btn-lg">Click me</button>"#
        );
    }

    #[test]
    fn test_alert_attrs_and_content() {
        let alert = Alert::new([html::id("notice"), html::text("Saved")])
            .with_color(Color::Success)
            .with_variant(Variant::Soft)
            .with_class("mb-4");
        assert_eq!(
            alert.render_to_string(),
            r#"<div class="alert alert-success alert-soft mb-4" id="notice">Saved</div>"#
        );
    }

    #[test]
    fn test_badge_legacy_heuristic() {
        let badge = Badge::from_legacy([Node::raw(r#"title="hint""#), Node::text("New")]);
        assert_eq!(
            badge.render_to_string(),
            r#"<span class="badge">title="hint"New</span>"#
        );
        let typed = Badge::new([html::title("hint"), html::text("New")]);
        assert_eq!(
            typed.render_to_string(),
            r#"<span class="badge" title="hint">New</span>"#
        );
    }

    #[test]
    fn test_empty_containers_keep_base_class() {
        let empty: [Node; 0] = [];
        assert_eq!(Card::new(empty.clone()).render_to_string(), r#"<div class="card"></div>"#);
        assert_eq!(Avatar::new(empty).render_to_string(), r#"<div class="avatar"></div>"#);
    }

    #[test]
    fn test_with_leaves_receiver_untouched() {
        let card = Card::new(["Body"]);
        let before = card.render_to_string();
        let styled = card.with([Modifier::from(Color::Info), Modifier::attr("data-x", "1")]);
        assert_eq!(card.render_to_string(), before);
        assert_eq!(
            styled.render_to_string(),
            r#"<div class="card card-info" data-x="1">Body</div>"#
        );
    }

    #[test]
    fn test_from_parts() {
        let alert = Alert::from_parts([Attr::new("role", "alert")], [Node::text("1 + 1 = 2")]);
        assert_eq!(
            alert.render_to_string(),
            r#"<div class="alert" role="alert">1 + 1 = 2</div>"#
        );
    }
}
