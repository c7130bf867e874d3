use boxlay::prelude::*;
use boxlay::text::Monospace;

fn init() -> Tree {
    let _ = env_logger::builder().is_test(true).try_init();
    Tree::new(Monospace::new(Size(10, 20)))
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
    Rect::new(Coord(x, y), Size(w, h))
}

#[test]
fn caption_change_relays_out_parent_box() {
    let mut tree = init();
    let row = tree.create(None, WidgetKind::HBox, rect(0, 0, 300, 40)).unwrap();
    let a = tree.create(Some(row), WidgetKind::Label, Rect::ZERO).unwrap();
    let b = tree.create(Some(row), WidgetKind::Label, Rect::ZERO).unwrap();
    tree.set_caption(a, "one").unwrap();
    tree.set_caption(b, "two").unwrap();
    assert_eq!(tree.position(b).unwrap(), Coord(34, 10));

    tree.set_caption(a, "three").unwrap();
    assert_eq!(tree.size(a).unwrap(), Size(50, 20));
    assert_eq!(tree.position(b).unwrap(), Coord(54, 10));
}

#[test]
fn propagation_stops_at_first_non_box() {
    let mut tree = init();
    let outer = tree.create(None, WidgetKind::HBox, rect(0, 0, 400, 100)).unwrap();
    let frame = tree.create(Some(outer), WidgetKind::Widget, rect(0, 0, 200, 60)).unwrap();
    let inner = tree.create(Some(frame), WidgetKind::HBox, rect(0, 0, 200, 60)).unwrap();
    let label = tree.create(Some(inner), WidgetKind::Label, Rect::ZERO).unwrap();

    // a position-only move is not undone unless the outer box lays out again
    tree.set_position(frame, Coord(77, 77)).unwrap();
    tree.set_caption(label, "hello").unwrap();

    assert_eq!(tree.rect(label).unwrap(), rect(0, 20, 50, 20));
    assert_eq!(tree.position(frame).unwrap(), Coord(77, 77));
}

#[test]
fn propagation_walks_nested_boxes() {
    let mut tree = init();
    let outer = tree.create(None, WidgetKind::HBox, rect(0, 0, 400, 100)).unwrap();
    let inner = tree.create(Some(outer), WidgetKind::VBox, Rect::ZERO).unwrap();
    let label = tree.create(Some(inner), WidgetKind::Label, Rect::ZERO).unwrap();

    tree.set_position(inner, Coord(77, 77)).unwrap();
    tree.set_caption(label, "hello").unwrap();

    assert_eq!(tree.rect(inner).unwrap(), rect(0, 40, 50, 20));
    assert_eq!(tree.rect(label).unwrap(), rect(0, 0, 50, 20));
}

#[test]
fn unattached_label_keeps_its_size() {
    let mut tree = init();
    let label = tree.create(None, WidgetKind::Label, rect(1, 2, 3, 4)).unwrap();
    tree.set_caption(label, "text").unwrap();
    assert_eq!(tree.rect(label).unwrap(), rect(1, 2, 3, 4));
    assert_eq!(tree.requested_size(label).unwrap(), Some(Size(40, 20)));
}

#[test]
fn leftward_growth_inside_plain_parent() {
    let mut tree = init();
    let panel = tree.create(None, WidgetKind::Widget, rect(0, 0, 300, 100)).unwrap();
    let label = tree.create(Some(panel), WidgetKind::Label, rect(200, 10, 20, 20)).unwrap();
    tree.set_property(label, "ExpandDirection", "Left Top").unwrap();

    tree.set_caption(label, "abcdef").unwrap();
    assert_eq!(tree.rect(label).unwrap(), rect(160, 10, 60, 20));

    tree.set_caption(label, "ab").unwrap();
    assert_eq!(tree.rect(label).unwrap(), rect(200, 10, 20, 20));
}

#[test]
fn plain_widget_notification_only_relays_out() {
    let mut tree = init();
    let row = tree.create(None, WidgetKind::HBox, rect(0, 0, 100, 20)).unwrap();
    let a = tree.create(Some(row), WidgetKind::Widget, rect(0, 0, 10, 10)).unwrap();
    let b = tree.create(Some(row), WidgetKind::Widget, rect(0, 0, 10, 10)).unwrap();

    tree.set_size(a, Size(30, 10)).unwrap();
    assert_eq!(tree.position(b).unwrap().0, 14);
    tree.notify_size_change(a).unwrap();
    assert_eq!(tree.size(a).unwrap(), Size(30, 10));
    assert_eq!(tree.position(b).unwrap().0, 34);
}

#[test]
fn descendant_notification_reports_participation() {
    let mut tree = init();
    let row = tree.create(None, WidgetKind::HBox, rect(0, 0, 100, 20)).unwrap();
    let plain = tree.create(None, WidgetKind::Widget, Rect::ZERO).unwrap();
    assert_eq!(tree.on_descendant_size_changed(row), Ok(true));
    assert_eq!(tree.on_descendant_size_changed(plain), Ok(false));
}
