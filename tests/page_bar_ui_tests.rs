//! Headless rendering tests for the page bar.
//!
//! Each test drives a real `egui::Context` frame by frame with synthetic
//! input and checks the actions the bar reports and the state it keeps.

use egui::{Event, Key, Modifiers, PointerButton, Pos2, Rect, pos2, vec2};
use form_pages::config::Config;
use form_pages::page::{PageCoordinator, PageId, PageMessage, PageState};
use form_pages::context_menu::MenuItem;
use form_pages::tab_bar_ui::{PageBarAction, PageBarUI};

struct Harness {
    ctx: egui::Context,
    bar: PageBarUI,
    config: Config,
    width: f32,
}

impl Harness {
    fn new(width: f32) -> Self {
        let config = Config::default();
        Self {
            ctx: egui::Context::default(),
            bar: PageBarUI::new(config.drag_threshold),
            config,
            width,
        }
    }

    fn frame(&mut self, pages: &PageState, events: Vec<Event>) -> PageBarAction {
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(self.width, 600.0))),
            events,
            ..Default::default()
        };
        let mut action = PageBarAction::None;
        let bar = &mut self.bar;
        let config = &self.config;
        let _ = self.ctx.run(input, |ctx| {
            action = bar.render(ctx, pages, config);
        });
        action
    }

    /// Move to `pos`, press and release `which` over three frames. Returns
    /// every action reported along the way.
    fn click_with(
        &mut self,
        pages: &PageState,
        pos: Pos2,
        which: PointerButton,
    ) -> Vec<PageBarAction> {
        [
            vec![Event::PointerMoved(pos)],
            vec![pointer(pos, which, true)],
            vec![pointer(pos, which, false)],
        ]
        .into_iter()
        .map(|events| self.frame(pages, events))
        .filter(|action| *action != PageBarAction::None)
        .collect()
    }

    fn click(&mut self, pages: &PageState, pos: Pos2) -> Vec<PageBarAction> {
        self.click_with(pages, pos, PointerButton::Primary)
    }

    fn tab_rect(&self, id: PageId) -> Rect {
        self.bar
            .tab_rects()
            .iter()
            .find(|(tab, _)| *tab == id)
            .map(|(_, rect)| *rect)
            .expect("tab was rendered")
    }

    fn tab_center(&self, id: PageId) -> Pos2 {
        self.bar
            .tab_rects()
            .iter()
            .find(|(tab, _)| *tab == id)
            .map(|(_, rect)| rect.center())
            .expect("tab was rendered")
    }
}

fn key(key: Key) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

fn pointer(pos: Pos2, button: PointerButton, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    pointer(pos, PointerButton::Primary, pressed)
}

#[test]
fn test_every_page_gets_a_tab_of_uniform_width() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    assert_eq!(h.frame(&pages, vec![]), PageBarAction::None);

    let rects = h.bar.tab_rects();
    assert_eq!(rects.len(), pages.len());
    let order: Vec<PageId> = rects.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, [PageId(1), PageId(2), PageId(3), PageId(4)]);
    for (_, rect) in rects {
        assert!((rect.width() - h.config.tab_min_width).abs() < 0.5);
    }
    // Left to right in list order
    assert!(rects.windows(2).all(|w| w[0].1.left() < w[1].1.left()));
}

#[test]
fn test_no_fades_when_strip_fits() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);
    h.frame(&pages, vec![]);
    assert!(!h.bar.fades().left);
    assert!(!h.bar.fades().right);
}

#[test]
fn test_right_fade_when_strip_overflows() {
    let mut h = Harness::new(420.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);
    h.frame(&pages, vec![]);
    assert!(!h.bar.fades().left, "nothing hidden on the left at offset 0");
    assert!(h.bar.fades().right, "later tabs are hidden on the right");
}

#[test]
fn test_left_fade_after_scrolling() {
    let mut h = Harness::new(420.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);
    h.bar.test_set_scroll_offset(120.0);
    h.frame(&pages, vec![]);
    assert!(h.bar.scroll_offset() > 0.0);
    assert!(h.bar.fades().left);
}

#[test]
fn test_click_selects_page() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let center = h.tab_center(PageId(2));
    h.frame(&pages, vec![Event::PointerMoved(center), button(center, true)]);
    let action = h.frame(&pages, vec![button(center, false)]);

    assert_eq!(action, PageBarAction::Select(PageId(2)));
    assert!(!h.bar.is_dragging());
}

#[test]
fn test_keyboard_drag_commits_reorder() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.bar.test_start_keyboard_drag(PageId(1), 0);
    assert_eq!(h.bar.test_dragging_page(), Some(PageId(1)));

    assert_eq!(h.frame(&pages, vec![key(Key::ArrowRight)]), PageBarAction::None);
    assert_eq!(h.bar.test_drop_target_index(), Some(1));
    h.frame(&pages, vec![key(Key::ArrowRight)]);
    h.frame(&pages, vec![key(Key::ArrowRight)]);
    assert_eq!(h.bar.test_drop_target_index(), Some(3));

    // The preview renders Info last but nothing is committed yet
    assert_eq!(h.bar.tab_rects().last().map(|(id, _)| *id), Some(PageId(1)));
    assert_eq!(pages.pages()[0].id, PageId(1));

    let action = h.frame(&pages, vec![key(Key::Enter)]);
    assert_eq!(action, PageBarAction::Reorder { from: 0, to: 3 });
    assert!(!h.bar.is_dragging());
}

#[test]
fn test_keyboard_drag_clamps_at_edges() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.bar.test_start_keyboard_drag(PageId(1), 0);
    h.frame(&pages, vec![key(Key::ArrowLeft)]);
    assert_eq!(h.bar.test_drop_target_index(), Some(0));

    // Dropping in place is not a reorder
    assert_eq!(h.frame(&pages, vec![key(Key::Enter)]), PageBarAction::None);
}

#[test]
fn test_escape_cancels_keyboard_drag() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.bar.test_start_keyboard_drag(PageId(2), 1);
    h.frame(&pages, vec![key(Key::ArrowRight)]);
    let action = h.frame(&pages, vec![key(Key::Escape)]);

    assert_eq!(action, PageBarAction::None);
    assert_eq!(h.bar.test_dragging_page(), None);
    let order: Vec<PageId> = h.bar.tab_rects().iter().map(|(id, _)| *id).collect();
    assert_eq!(order, [PageId(1), PageId(2), PageId(3), PageId(4)]);
}

#[test]
fn test_context_menu_stays_open_without_input() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let anchor = h.bar.tab_rects()[2].1;
    h.bar.test_open_context_menu(PageId(3), anchor);
    h.frame(&pages, vec![]);
    h.frame(&pages, vec![]);

    assert!(h.bar.is_context_menu_open());
    assert_eq!(h.bar.context_menu_target(), Some(PageId(3)));
}

#[test]
fn test_context_menu_closes_when_target_deleted() {
    let mut h = Harness::new(1400.0);
    let mut coordinator = PageCoordinator::new(PageState::demo());
    h.frame(coordinator.state(), vec![]);

    let anchor = h.bar.tab_rects()[3].1;
    h.bar.test_open_context_menu(PageId(4), anchor);
    assert!(h.bar.is_context_menu_open());

    coordinator.dispatch(PageMessage::Delete(PageId(4)));
    h.frame(coordinator.state(), vec![]);

    assert!(!h.bar.is_context_menu_open());
    assert_eq!(h.bar.tab_rects().len(), 3);
}

#[test]
fn test_escape_dismisses_context_menu() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let anchor = h.bar.tab_rects()[0].1;
    h.bar.test_open_context_menu(PageId(1), anchor);
    let action = h.frame(&pages, vec![key(Key::Escape)]);

    assert_eq!(action, PageBarAction::None);
    assert!(!h.bar.is_context_menu_open());
}

#[test]
fn test_close_context_menu_helper() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.bar.test_open_context_menu(PageId(2), Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0)));
    h.bar.test_close_context_menu();
    h.frame(&pages, vec![]);
    assert!(!h.bar.is_context_menu_open());
}

#[test]
fn test_bar_height_comes_from_config() {
    let h = Harness::new(800.0);
    assert_eq!(h.bar.get_height(&h.config), h.config.tab_bar_height);
}

#[test]
fn test_pointer_drag_past_threshold_reorders() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let start = h.tab_center(PageId(1));
    let end = h.tab_center(PageId(4));
    h.frame(&pages, vec![Event::PointerMoved(start)]);
    h.frame(&pages, vec![button(start, true)]);

    // Under the activation distance the press is still a potential click
    h.frame(&pages, vec![Event::PointerMoved(start + vec2(4.0, 0.0))]);
    assert!(!h.bar.is_dragging());

    h.frame(&pages, vec![Event::PointerMoved(start + vec2(20.0, 0.0))]);
    assert!(h.bar.is_dragging());
    assert_eq!(h.bar.test_dragging_page(), Some(PageId(1)));

    for step in 1..=4 {
        let x = start.x + (end.x - start.x) * step as f32 / 4.0;
        h.frame(&pages, vec![Event::PointerMoved(pos2(x, start.y))]);
    }
    assert_eq!(h.bar.test_drop_target_index(), Some(3));

    let action = h.frame(&pages, vec![button(end, false)]);
    assert_eq!(action, PageBarAction::Reorder { from: 0, to: 3 });
    assert!(!h.bar.is_dragging());
}

#[test]
fn test_small_movement_then_release_selects() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let center = h.tab_center(PageId(2));
    h.frame(&pages, vec![Event::PointerMoved(center)]);
    h.frame(&pages, vec![button(center, true)]);
    let nudged = center + vec2(3.0, 0.0);
    h.frame(&pages, vec![Event::PointerMoved(nudged)]);
    assert!(!h.bar.is_dragging());

    let action = h.frame(&pages, vec![button(nudged, false)]);
    assert_eq!(action, PageBarAction::Select(PageId(2)));
}

#[test]
fn test_right_click_opens_menu_for_that_tab() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let center = h.tab_center(PageId(3));
    let actions = h.click_with(&pages, center, PointerButton::Secondary);
    assert!(actions.is_empty());
    h.frame(&pages, vec![]);

    assert!(h.bar.is_context_menu_open());
    assert_eq!(h.bar.context_menu_target(), Some(PageId(3)));
    assert_eq!(h.bar.context_menu_anchor(), Some(h.tab_rect(PageId(3))));
}

#[test]
fn test_menu_button_on_active_tab_toggles_menu() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    // "⋮" sits at the right edge of the active tab
    let rect = h.tab_rect(PageId(1));
    let menu_button = pos2(rect.right() - 15.0, rect.center().y);

    let actions = h.click(&pages, menu_button);
    assert!(actions.is_empty(), "opening the menu selects nothing");
    assert!(h.bar.is_context_menu_open());
    assert_eq!(h.bar.context_menu_target(), Some(PageId(1)));

    h.frame(&pages, vec![]);
    h.click(&pages, menu_button);
    assert!(!h.bar.is_context_menu_open());
}

#[test]
fn test_menu_item_click_dispatches_and_closes() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let center = h.tab_center(PageId(3));
    h.click_with(&pages, center, PointerButton::Secondary);
    for _ in 0..3 {
        h.frame(&pages, vec![]);
    }

    let delete = h
        .bar
        .context_menu_item_rect(MenuItem::Delete)
        .expect("menu rows laid out");
    let actions = h.click(&pages, delete.center());

    assert_eq!(actions, [PageBarAction::Delete(PageId(3))]);
    assert!(!h.bar.is_context_menu_open());
}

#[test]
fn test_menu_rename_item_requests_prompt() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.click_with(&pages, h.tab_center(PageId(2)), PointerButton::Secondary);
    for _ in 0..3 {
        h.frame(&pages, vec![]);
    }

    let rename = h
        .bar
        .context_menu_item_rect(MenuItem::Rename)
        .expect("menu rows laid out");
    let actions = h.click(&pages, rename.center());
    assert_eq!(actions, [PageBarAction::Rename(PageId(2))]);
}

#[test]
fn test_click_outside_menu_dismisses_it() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.click_with(&pages, h.tab_center(PageId(3)), PointerButton::Secondary);
    for _ in 0..3 {
        h.frame(&pages, vec![]);
    }
    assert!(h.bar.is_context_menu_open());

    let actions = h.click(&pages, pos2(1200.0, 100.0));
    assert!(actions.is_empty());
    assert!(!h.bar.is_context_menu_open());
}

#[test]
fn test_separator_plus_inserts_between_tabs() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let first = h.tab_rect(PageId(1));
    let second = h.tab_rect(PageId(2));
    let gap = pos2((first.right() + second.left()) / 2.0, first.center().y);

    let actions = h.click(&pages, gap);
    assert_eq!(actions, [PageBarAction::Add(1)]);
}

#[test]
fn test_add_page_button_appends() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    let add = h.bar.add_button_rect();
    assert!(add.left() > h.tab_rect(PageId(4)).right());

    let actions = h.click(&pages, add.center());
    assert_eq!(actions, [PageBarAction::Add(pages.len())]);
}

#[test]
fn test_space_on_focused_tab_starts_keyboard_reorder() {
    let mut h = Harness::new(1400.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.ctx
        .memory_mut(|m| m.request_focus(egui::Id::new(("page_tab", PageId(2)))));
    h.frame(&pages, vec![key(Key::Space)]);
    assert_eq!(h.bar.test_dragging_page(), Some(PageId(2)));
    assert_eq!(h.bar.test_drop_target_index(), Some(1));

    h.frame(&pages, vec![key(Key::ArrowLeft)]);
    let action = h.frame(&pages, vec![key(Key::Enter)]);
    assert_eq!(action, PageBarAction::Reorder { from: 1, to: 0 });
}

#[test]
fn test_arrow_buttons_scroll_by_configured_amount() {
    let mut h = Harness::new(420.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);
    h.frame(&pages, vec![]);
    assert!(h.bar.fades().right);

    let viewport = h.bar.strip_viewport();
    let right_arrow = pos2(viewport.right() - 18.0, viewport.center().y);
    h.click(&pages, right_arrow);
    h.frame(&pages, vec![]);

    assert!((h.bar.scroll_offset() - h.config.scroll_amount).abs() < 0.5);
    assert!(h.bar.fades().left);

    let left_arrow = pos2(viewport.left() + 18.0, viewport.center().y);
    h.click(&pages, left_arrow);
    h.frame(&pages, vec![]);

    assert!(h.bar.scroll_offset().abs() < 0.5);
    assert!(!h.bar.fades().left);
}

#[test]
fn test_open_menu_follows_its_tab_when_strip_scrolls() {
    let mut h = Harness::new(420.0);
    let pages = PageState::demo();
    h.frame(&pages, vec![]);

    h.click_with(&pages, h.tab_center(PageId(1)), PointerButton::Secondary);
    h.frame(&pages, vec![]);
    let before = h.bar.context_menu_anchor().expect("menu open");

    h.bar.test_set_scroll_offset(100.0);
    h.frame(&pages, vec![]);

    let after = h.bar.context_menu_anchor().expect("menu still open");
    assert_eq!(after, h.tab_rect(PageId(1)));
    assert!((before.left() - after.left() - 100.0).abs() < 0.5);
}
