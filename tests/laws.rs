//! Composition laws that hold for every component.

use flyon_vdom::prelude::*;
use pretty_assertions::assert_eq;

/// One rendering of every component family under a fixed id scope.
fn sample() -> Vec<(&'static str, Node)> {
    IdScope::with_prefix("law").enter(|| {
        vec![
            ("btn", Button::new(["b"]).into()),
            ("alert", Alert::new(["a"]).into()),
            ("badge", Badge::new(["x"]).into()),
            ("card", Card::new(["c"]).into()),
            ("avatar", Avatar::new(["v"]).into()),
            ("progress", Progress::new(10).into()),
            ("input", Input::new().into()),
            ("select", Select::new().into()),
            ("textarea", Textarea::new().into()),
            ("checkbox", Checkbox::new().into()),
            ("radio", Radio::new().into()),
            ("range", Range::new().into()),
            ("toggle", Toggle::new().into()),
            ("file-input", FileInput::new().into()),
            ("collapse-group", Accordion::new([]).into()),
            ("collapse", Collapse::new("t", "c").into()),
            ("drawer", Drawer::new("m", "s").into()),
            ("modal", Modal::new("t", ["c"]).into()),
            ("dropdown", Dropdown::new("t", Vec::<Node>::new()).into()),
            ("swap", Swap::new("on", "off").into()),
            ("divider", Divider::default().into()),
            ("tooltip", Tooltip::new(["t"]).into()),
        ]
    })
}

#[test]
fn test_base_class_preserved() {
    for (base, node) in sample() {
        let elem = node.as_element().unwrap_or_else(|| panic!("{base} is not an element"));
        assert!(elem.has_class(base), "{base} missing from {:?}", elem.class());
    }
}

#[test]
fn test_builders_leave_receiver_untouched() {
    let button = Button::new(["Go"]);
    let before = button.render_to_string();
    let _ = button.clone().with_color(Color::Error);
    let _ = button.with(modifiers![Size::Large, "w-full"]);
    assert_eq!(button.render_to_string(), before);

    let tabs = Tabs::new([TabItem::new("a", "A", "x")]).with_id("t");
    let before = tabs.render_to_string();
    let _ = tabs.with(modifiers![TabsVariant::Boxed]);
    assert_eq!(tabs.render_to_string(), before);
}

#[test]
fn test_global_modifier_emission() {
    for color in Color::ALL {
        let html = Badge::new(["x"]).with([*color]).render_to_string();
        assert!(html.contains(&format!("badge-{color}")), "{html}");
    }
    for size in Size::ALL {
        let html = Button::new(["x"]).with([*size]).render_to_string();
        assert!(html.contains(&format!("btn-{size}")), "{html}");
    }
    for variant in Variant::ALL {
        let html = Alert::new(["x"]).with([*variant]).render_to_string();
        assert!(html.contains(&format!("alert-{variant}")), "{html}");
    }
}

#[test]
fn test_elided_defaults() {
    let input = Input::new().with(modifiers![Color::Primary, Size::Medium]);
    assert_eq!(input.render_to_string(), r#"<input type="text" class="input input-bordered">"#);
    let input = Input::new().with(modifiers![Color::Error, Size::Small]);
    assert!(input.render_to_string().contains(r#"class="input input-bordered input-error input-sm""#));
}

#[test]
fn test_render_is_deterministic() {
    let accordion = Accordion::new([AccordionItem::open("a", "A", "x")]);
    let modal = Modal::new("t", ["c"]);
    assert_eq!(accordion.render_to_string(), accordion.render_to_string());
    assert_eq!(modal.render_to_string(), modal.render_to_string());
}

#[test]
fn test_labels_target_toggle_inputs() {
    let nodes: Vec<Node> = vec![
        Collapse::new("t", "c").into(),
        Drawer::new("m", "s").into(),
        Swap::new("on", "off").into(),
        Accordion::new([AccordionItem::new("i1", "One", "x")]).into(),
    ];
    for node in nodes {
        let input = node.find(|e| e.tag == "input").and_then(|e| e.id());
        let label = node
            .find(|e| e.tag == "label" && e.has_attr("for"))
            .and_then(|e| e.get_attr("for"));
        assert!(input.is_some());
        assert_eq!(input, label);
    }
}

#[test]
fn test_empty_with_is_identity() {
    let button = Button::new(["x"]).with_color(Color::Info);
    assert_eq!(button.with(modifiers![]), button);
    assert_eq!(button.with(modifiers![]).render_to_string(), button.render_to_string());
}

#[test]
fn test_different_axes_compose() {
    let base = Alert::new(["x"]);
    let chained = base.with([Color::Warning]).with([Variant::Soft]);
    let joined = base.with(modifiers![Color::Warning, Variant::Soft]);
    assert_eq!(chained.render_to_string(), joined.render_to_string());

    let modal = Modal::new("t", ["c"]).with_id("m");
    assert_eq!(
        modal.with([ModalSize::Small]).with([ModalPosition::Middle]).render_to_string(),
        modal.with(modifiers![ModalSize::Small, ModalPosition::Middle]).render_to_string()
    );
}

#[test]
fn test_same_axis_last_wins() {
    let button = Button::new(["x"]);
    assert_eq!(
        button.with(modifiers![Color::Primary, Color::Error]).render_to_string(),
        button.with([Color::Error]).render_to_string()
    );
    let drawer = Drawer::new("m", "s").with_id("d");
    assert_eq!(
        drawer.with(modifiers![DrawerSide::Top, DrawerSide::Right]).render_to_string(),
        drawer.with([DrawerSide::Right]).render_to_string()
    );
}

#[test]
fn test_unknown_modifiers_are_ignored() {
    let swap = Swap::new("a", "b").with_id("s");
    assert_eq!(
        swap.with(modifiers![Size::Large, TabsVariant::Lifted]).render_to_string(),
        swap.render_to_string()
    );
}
