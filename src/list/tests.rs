//! Tests for the list component.

use super::style::FOCUS_MARKER;
use super::*;
use crate::error::ListError;
use crate::scroll::{ScrollArea, ScrollContainer, SharedScrollArea};
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn create_actions(count: usize) -> Vec<Action> {
    (0..count)
        .map(|i| Action::new(format!("test{i}"), format!("test{i}")))
        .collect()
}

fn with_min_count(min_element_count: usize) -> ListConfig {
    ListConfig {
        min_element_count,
        ..ListConfig::default()
    }
}

fn focused_title(list: &ListModel<Action>) -> Option<&str> {
    list.focused_item().map(|item| item.title.as_str())
}

fn visible_titles(list: &ListModel<Action>) -> Vec<&str> {
    list.visible_items()
        .into_iter()
        .map(|item| item.title.as_str())
        .collect()
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn counting_handler(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

fn emit_scroll(area: &Arc<Mutex<ScrollArea>>) {
    Arc::clone(area).dispatch_scroll();
}

#[test]
fn test_filter_box_shown_above_threshold() {
    let list = ListModel::new(create_actions(8), true)
        .with_config(with_min_count(4))
        .unwrap();
    assert!(list.show_filter());

    let list = ListModel::new(create_actions(8), true)
        .with_config(with_min_count(8))
        .unwrap();
    assert!(!list.show_filter());
}

#[test]
fn test_set_items_recomputes_filter_box() {
    let mut list = ListModel::new(create_actions(4), true)
        .with_config(with_min_count(5))
        .unwrap();
    assert!(!list.show_filter());

    list.set_items(create_actions(7));
    assert!(list.show_filter());

    // Filter text alone never changes it.
    list.set_filter_string("test3");
    assert!(list.show_filter());
}

#[test]
fn test_default_threshold() {
    assert!(!ListModel::new(create_actions(10), true).show_filter());
    assert!(ListModel::new(create_actions(11), true).show_filter());
}

#[test]
fn test_hidden_item_stays_hidden() {
    let mut actions = create_actions(9);
    actions[8].visible = false;
    let mut list = ListModel::new(actions, true);

    assert_eq!(list.visible_items().len(), 8);
    assert!(!list.is_item_visible(&list.actions()[8]));

    list.set_filter_string("test8");
    assert!(list.is_empty());

    list.set_filter_string("");
    assert_eq!(list.visible_items().len(), 8);
}

#[test]
fn test_filter_matches_substring() {
    let mut list = ListModel::new(create_actions(12), true);

    list.set_filter_string("test");
    assert_eq!(list.visible_items().len(), 12);

    list.set_filter_string("1");
    assert_eq!(visible_titles(&list), vec!["test1", "test10", "test11"]);
    assert!(!list.is_item_visible(&list.actions()[0]));
    assert!(list.is_item_visible(&list.actions()[10]));
}

#[test]
fn test_filter_ignores_case() {
    let items = vec![Action::new("a", "Best Item"), Action::new("b", "other")];
    let mut list = ListModel::new(items, true);
    list.set_filter_string("BEST");
    assert_eq!(visible_titles(&list), vec!["Best Item"]);
}

#[test]
fn test_typing_filter_chars() {
    let mut list = ListModel::new(create_actions(12), true);
    list.push_filter_char('1');
    list.push_filter_char('0');
    assert_eq!(list.filter_string(), "10");
    assert_eq!(visible_titles(&list), vec!["test10"]);

    list.pop_filter_char();
    assert_eq!(list.filter_string(), "1");
    assert_eq!(list.visible_items().len(), 3);
}

#[test]
fn test_set_items_reapplies_filter() {
    let mut list = ListModel::new(create_actions(12), true);
    assert!(list.show_filter());
    list.set_filter_string("1");

    list.set_items(create_actions(5));

    assert_eq!(list.len(), 5);
    assert_eq!(list.filter_string(), "1");
    assert_eq!(visible_titles(&list), vec!["test1"]);
    assert!(!list.show_filter());
}

#[test]
fn test_set_items_drops_stale_focus() {
    let mut list = ListModel::new(create_actions(12), true);
    list.focus_item_by_id("test11").unwrap();

    list.set_items(create_actions(5));
    assert!(list.focused_item().is_none());

    list.focus_item_by_id("test3").unwrap();
    list.set_items(create_actions(6));
    assert_eq!(focused_title(&list), Some("test3"));
}

#[test]
fn test_custom_filter_owns_visibility() {
    let items: Vec<Action> = (1..=7)
        .map(|i| Action::new(format!("test{i}"), format!("test{i}")))
        .collect();
    let mut list = ListModel::new(items, true).with_filter(|items: &mut [Action], text: &str| {
        for item in items.iter_mut() {
            let visible = text.is_empty() || item.title.contains('1');
            item.set_visible(visible);
        }
    });
    assert!(list.has_custom_filter());
    assert_eq!(list.visible_items().len(), 7);

    list.set_filter_string("anything");
    assert_eq!(visible_titles(&list), vec!["test1"]);
    assert!(!list.actions()[1].visible);

    list.set_filter_string("");
    assert_eq!(list.visible_items().len(), 7);
}

#[test]
fn test_fuzzy_filter() {
    let items = vec![
        Action::new("1", "Apple"),
        Action::new("2", "Banana"),
        Action::new("3", "Apricot"),
    ];
    let mut list = ListModel::new(items, true).with_filter(FuzzyFilter::new());

    list.set_filter_string("ap");
    assert_eq!(visible_titles(&list), vec!["Apple", "Apricot"]);

    list.set_filter_string("");
    assert_eq!(list.visible_items().len(), 3);
}

#[test]
fn test_refresh_clears_filter() {
    let mut list = ListModel::new(create_actions(12), true);
    list.set_filter_string("11");
    assert_eq!(list.visible_items().len(), 1);

    list.refresh();
    assert_eq!(list.filter_string(), "");
    assert_eq!(list.visible_items().len(), 12);
}

#[test]
fn test_empty_list_placeholder() {
    let mut list: ListModel<Action> = ListModel::new(Vec::new(), true);
    assert!(list.is_empty());
    assert_eq!(list.empty_message(), DEFAULT_EMPTY_MESSAGE);
    assert!(list.view().contains(DEFAULT_EMPTY_MESSAGE));

    list.set_is_all_data_loaded(false);
    assert_eq!(list.empty_message(), DEFAULT_LOADING_MESSAGE);
    assert!(list.view().contains(DEFAULT_LOADING_MESSAGE));
}

#[test]
fn test_filtered_out_list_is_empty() {
    let mut list = ListModel::new(create_actions(3), true);
    assert!(!list.is_empty());
    list.set_filter_string("nothing");
    assert!(list.is_empty());
}

#[test]
fn test_focus_item() {
    let mut list = ListModel::new(create_actions(12), true);
    let item = list.actions()[3].clone();

    list.set_focused_item(Some(&item)).unwrap();
    assert_eq!(focused_title(&list), Some("test3"));
    assert!(list.is_item_focused(&item));

    list.set_focused_item(None).unwrap();
    assert!(list.focused_item().is_none());
}

#[test]
fn test_focus_unknown_item_fails() {
    let mut list = ListModel::new(create_actions(3), true);
    let stranger = Action::new("ghost", "ghost");

    assert_eq!(
        list.set_focused_item(Some(&stranger)),
        Err(ListError::UnknownItem {
            id: "ghost".to_string()
        })
    );
    assert!(list.focused_item().is_none());
}

#[test]
fn test_focus_next_wraps() {
    let mut list = ListModel::new(create_actions(12), true);

    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test0"));

    list.focus_item_by_id("test11").unwrap();
    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test0"));
}

#[test]
fn test_focus_next_skips_filtered_items() {
    let mut list = ListModel::new(create_actions(12), true);
    list.set_filter_string("1");

    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test1"));
    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test10"));
    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test11"));
    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test1"));
}

#[test]
fn test_focus_prev_wraps() {
    let mut list = ListModel::new(create_actions(12), true);

    // Unfocused lists enter at the first visible item in both directions.
    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test0"));
    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test11"));
    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test10"));
}

#[test]
fn test_focus_prev_skips_filtered_items() {
    let mut list = ListModel::new(create_actions(12), true);
    list.set_filter_string("1");

    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test1"));
    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test11"));
    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test10"));
}

#[test]
fn test_focus_starts_at_selected_item() {
    let actions = create_actions(12);
    let selected = actions[2].clone();
    let mut list = ListModel::new(actions, true).with_selected_item(selected);

    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test2"));
    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test3"));
}

#[test]
fn test_focus_ignores_filtered_out_selection() {
    let actions = create_actions(12);
    let selected = actions[2].clone();
    let mut list = ListModel::new(actions, true).with_selected_item(selected);
    list.set_filter_string("1");

    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test1"));
}

#[test]
fn test_focus_moves_on_from_filtered_out_item() {
    let mut list = ListModel::new(create_actions(12), true);
    list.focus_item_by_id("test5").unwrap();
    list.set_filter_string("1");

    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test10"));

    list.focus_item_by_id("test5").unwrap();
    list.focus_prev_visible_item();
    assert_eq!(focused_title(&list), Some("test1"));
}

#[test]
fn test_focus_on_empty_list_is_noop() {
    let mut list = ListModel::new(create_actions(3), true);
    list.set_filter_string("nothing");
    list.focus_next_visible_item();
    list.focus_prev_visible_item();
    assert!(list.focused_item().is_none());
}

#[test]
fn test_select_focused_item() {
    let mut list = ListModel::new(create_actions(12), true);
    list.select_focused_item();
    assert!(list.selected_item().is_none());

    list.focus_item_by_id("test4").unwrap();
    list.select_focused_item();

    assert_eq!(list.selected_item().map(|item| item.id.as_str()), Some("test4"));
    assert!(list.is_item_selected(&list.actions()[4]));
    assert!(!list.is_item_selected(&list.actions()[3]));
}

#[test]
fn test_selection_without_interaction() {
    let mut list = ListModel::new(create_actions(3), false);
    assert!(!list.allow_selection());

    let item = list.actions()[1].clone();
    list.set_selected_item(Some(item));
    assert_eq!(list.selected_item().map(|item| item.id.as_str()), Some("test1"));

    list.set_selected_item(None);
    assert!(list.selected_item().is_none());
}

#[test]
fn test_mouse_move_clears_focus() {
    let mut list = ListModel::new(create_actions(3), true);
    list.focus_next_visible_item();
    assert!(list.focused_item().is_some());

    list.on_mouse_move();
    assert!(list.focused_item().is_none());
}

#[test]
fn test_item_class_tokens() {
    let items = vec![
        Action::new("a", "A").with_css("extra"),
        Action::new("b", "B"),
    ];
    let mut list = ListModel::new(items, true);
    list.focus_item_by_id("a").unwrap();
    list.select_focused_item();

    assert_eq!(
        list.get_item_class(&list.actions()[0]),
        "list__item list__item--focused list__item--selected extra"
    );
    assert_eq!(list.get_item_class(&list.actions()[1]), "list__item");
}

#[test]
fn test_item_class_all_states() {
    let items = vec![Action::new("a", "A").with_enabled(false).with_css("extra")];
    let mut list = ListModel::new(items, true);
    list.focus_item_by_id("a").unwrap();
    list.select_focused_item();

    assert_eq!(
        list.get_item_class(&list.actions()[0]),
        "list__item list__item--focused list__item--selected list__item--disabled extra"
    );
}

#[test]
fn test_item_class_skips_blank_and_repeated_tokens() {
    let items = vec![
        Action::new("a", "A").with_css("list__item"),
        Action::new("b", "B").with_css("   "),
        Action::new("c", "C").with_css(" list__item--selected "),
    ];
    let mut list = ListModel::new(items, true);
    list.focus_item_by_id("c").unwrap();
    list.select_focused_item();

    assert_eq!(list.get_item_class(&list.actions()[0]), "list__item");
    assert_eq!(list.get_item_class(&list.actions()[1]), "list__item");
    assert_eq!(
        list.get_item_class(&list.actions()[2]),
        "list__item list__item--focused list__item--selected"
    );
}

#[test]
fn test_item_class_uses_configured_names() {
    let mut config = ListConfig::default();
    config.class_names.base = "row".to_string();
    config.class_names.focused = "row--active".to_string();
    let mut list = ListModel::new(create_actions(2), true)
        .with_config(config)
        .unwrap();
    list.focus_item_by_id("test1").unwrap();

    assert_eq!(list.get_item_class(&list.actions()[1]), "row row--active");
}

#[test]
fn test_add_and_remove_scroll_listener() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let counter = Arc::new(AtomicUsize::new(0));
    let mut list = ListModel::new(create_actions(20), true);
    list.init_list_container(Box::new(Arc::clone(&area)));

    list.add_scroll_event_listener(counting_handler(&counter));
    assert!(list.is_scroll_listener_active());
    emit_scroll(&area);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    list.remove_scroll_event_listener();
    assert!(!list.is_scroll_listener_active());
    assert!(list.has_scroll_handler());
    assert_eq!(area.lock().unwrap().listener_count(), 0);
    emit_scroll(&area);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    // A second removal is harmless.
    list.remove_scroll_event_listener();
}

#[test]
fn test_readding_listener_never_fires_twice() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let counter = Arc::new(AtomicUsize::new(0));
    let mut list = ListModel::new(create_actions(20), true);
    list.init_list_container(Box::new(Arc::clone(&area)));

    list.add_scroll_event_listener(counting_handler(&counter));
    list.add_scroll_event_listener(counting_handler(&counter));
    assert_eq!(area.lock().unwrap().listener_count(), 1);

    emit_scroll(&area);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listener_follows_rebound_container() {
    let first = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let second = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let counter = Arc::new(AtomicUsize::new(0));
    let mut list = ListModel::new(create_actions(20), true);

    list.init_list_container(Box::new(Arc::clone(&first)));
    list.add_scroll_event_listener(counting_handler(&counter));
    list.init_list_container(Box::new(Arc::clone(&second)));

    assert_eq!(first.lock().unwrap().listener_count(), 0);
    assert_eq!(second.lock().unwrap().listener_count(), 1);
    emit_scroll(&second);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_listener_added_before_container() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let counter = Arc::new(AtomicUsize::new(0));
    let mut list = ListModel::new(create_actions(20), true);

    list.add_scroll_event_listener(counting_handler(&counter));
    assert!(list.has_scroll_handler());
    assert!(!list.is_scroll_listener_active());

    list.init_list_container(Box::new(Arc::clone(&area)));
    assert!(list.is_scroll_listener_active());
    emit_scroll(&area);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dispose_releases_listener() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let counter = Arc::new(AtomicUsize::new(0));
    {
        let mut list = ListModel::new(create_actions(20), true);
        list.init_list_container(Box::new(Arc::clone(&area)));
        list.add_scroll_event_listener(counting_handler(&counter));
        assert_eq!(area.lock().unwrap().listener_count(), 1);
    }
    assert_eq!(area.lock().unwrap().listener_count(), 0);
}

#[test]
fn test_last_item_rendered_requests_more() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let mut list = ListModel::new(create_actions(5), true);
    list.init_list_container(Box::new(Arc::clone(&area)));
    list.set_is_all_data_loaded(false);
    let last = list.actions()[4].clone();
    let other = list.actions()[2].clone();

    assert!(!list.on_last_item_rendered(&other));
    assert!(!list.has_vertical_scroller());

    assert!(list.on_last_item_rendered(&last));
    assert!(list.has_vertical_scroller());
}

#[test]
fn test_scroller_flag_follows_container_overflow() {
    let area = Arc::new(Mutex::new(ScrollArea::new(50, 5)));
    let mut list = ListModel::new(create_actions(5), true);
    list.init_list_container(Box::new(Arc::clone(&area)));
    list.set_is_all_data_loaded(false);
    let last = list.actions()[4].clone();

    // More data is still wanted, but nothing overflows.
    assert!(list.on_last_item_rendered(&last));
    assert!(!list.has_vertical_scroller());

    area.lock().unwrap().set_content_height(80);
    assert!(list.on_last_item_rendered(&last));
    assert!(list.has_vertical_scroller());

    area.lock().unwrap().set_content_height(10);
    assert!(list.on_last_item_rendered(&last));
    assert!(!list.has_vertical_scroller());
}

#[test]
fn test_scroller_flag_without_container() {
    let mut list = ListModel::new(create_actions(5), true);
    list.set_is_all_data_loaded(false);
    let last = list.actions()[4].clone();

    assert!(list.on_last_item_rendered(&last));
    assert!(!list.has_vertical_scroller());
}

#[test]
fn test_scroll_handler_can_query_container() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let overflow_seen = Arc::new(AtomicUsize::new(0));
    let mut list = ListModel::new(create_actions(20), true);
    list.init_list_container(Box::new(Arc::clone(&area)));

    let watched = Arc::clone(&area);
    let seen = Arc::clone(&overflow_seen);
    list.add_scroll_event_listener(move || {
        if watched.has_vertical_scroller() {
            seen.fetch_add(1, Ordering::SeqCst);
        }
    });

    assert!(area.scroll_down(3));
    assert!(area.scroll_up(1));
    assert_eq!(overflow_seen.load(Ordering::SeqCst), 2);
}

#[test]
fn test_last_item_rendered_when_all_loaded() {
    let mut list = ListModel::new(create_actions(5), true);
    assert!(list.is_all_data_loaded());
    let last = list.actions()[4].clone();

    assert!(!list.on_last_item_rendered(&last));
    assert!(!list.has_vertical_scroller());
}

#[test]
fn test_render_window_paging() {
    let config = ListConfig {
        render_page_size: Some(5),
        ..ListConfig::default()
    };
    let mut list = ListModel::new(create_actions(12), true)
        .with_config(config)
        .unwrap();
    list.set_is_all_data_loaded(false);

    assert_eq!(list.rendered_actions().len(), 5);
    assert!(list.has_more_to_render());
    assert_eq!(list.visible_items().len(), 5);

    let last = list.rendered_actions()[4].clone();
    assert!(list.on_last_item_rendered(&last));

    assert_eq!(list.render_more(10), 7);
    assert!(!list.has_more_to_render());
    assert_eq!(list.visible_items().len(), 12);
    assert!(!list.on_last_item_rendered(&last));
}

#[test]
fn test_render_more_saturates() {
    let config = ListConfig {
        render_page_size: Some(3),
        ..ListConfig::default()
    };
    let mut list = ListModel::new(create_actions(12), true)
        .with_config(config)
        .unwrap();

    assert_eq!(list.render_more(usize::MAX), 9);
    assert_eq!(list.rendered_actions().len(), 12);
    assert_eq!(list.render_more(usize::MAX), 0);
}

#[test]
fn test_narrow_width_still_truncates() {
    let items = vec![Action::new("a", "a long title")];
    let list = ListModel::new(items, true).with_width(1);
    let view = list.view();
    assert!(view.contains('…'));
    assert!(!view.contains("long"));
}

#[test]
fn test_focus_stays_in_rendered_window() {
    let config = ListConfig {
        render_page_size: Some(3),
        ..ListConfig::default()
    };
    let mut list = ListModel::new(create_actions(12), true)
        .with_config(config)
        .unwrap();
    list.focus_item_by_id("test2").unwrap();
    list.focus_next_visible_item();
    assert_eq!(focused_title(&list), Some("test0"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ListConfig {
        render_page_size: Some(0),
        ..ListConfig::default()
    };
    let result = ListModel::new(create_actions(3), true).with_config(config);
    assert!(matches!(result, Err(ListError::InvalidConfig(_))));
}

#[test]
fn test_update_navigation_keys() {
    let mut list = ListModel::new(create_actions(3), true);

    assert!(list.update(key(KeyCode::Down)).is_none());
    assert_eq!(focused_title(&list), Some("test0"));
    list.update(key(KeyCode::Tab));
    assert_eq!(focused_title(&list), Some("test1"));
    list.update(key(KeyCode::Up));
    assert_eq!(focused_title(&list), Some("test0"));
    list.update(key(KeyCode::Up));
    assert_eq!(focused_title(&list), Some("test2"));
}

#[test]
fn test_update_filter_typing() {
    let mut list = ListModel::new(create_actions(12), true);

    list.update(key(KeyCode::Char('1')));
    list.update(key(KeyCode::Char('1')));
    assert_eq!(list.filter_string(), "11");
    assert_eq!(visible_titles(&list), vec!["test11"]);

    list.update(key(KeyCode::Backspace));
    assert_eq!(list.filter_string(), "1");

    list.update(key(KeyCode::Esc));
    assert_eq!(list.filter_string(), "");
}

#[test]
fn test_update_ignores_typing_without_filter_box() {
    let mut list = ListModel::new(create_actions(3), true);
    list.update(key(KeyCode::Char('x')));
    assert_eq!(list.filter_string(), "");
}

#[test]
fn test_update_select_respects_allow_selection() {
    let mut list = ListModel::new(create_actions(3), false);
    list.update(key(KeyCode::Down));
    assert!(list.update(key(KeyCode::Enter)).is_none());
    assert!(list.selected_item().is_none());
}

#[test]
fn test_update_pointer_and_scroll_messages() {
    let area = Arc::new(Mutex::new(ScrollArea::new(5, 20)));
    let counter = Arc::new(AtomicUsize::new(0));
    let mut list = ListModel::new(create_actions(3), true);
    list.init_list_container(Box::new(Arc::clone(&area)));
    list.add_scroll_event_listener(counting_handler(&counter));

    list.update(Box::new(ScrollMsg) as Msg);
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    list.focus_next_visible_item();
    list.update(Box::new(PointerMovedMsg) as Msg);
    assert!(list.focused_item().is_none());
}

#[tokio::test]
async fn test_update_emits_item_selected() {
    let mut list = ListModel::new(create_actions(3), true);
    list.update(key(KeyCode::Down));
    list.update(key(KeyCode::Down));

    let cmd = list.update(key(KeyCode::Enter)).expect("select command");
    let msg = cmd.await.expect("selected message");
    let selected = msg.downcast_ref::<ItemSelectedMsg>().expect("ItemSelectedMsg");

    assert_eq!(selected.id, "test1");
    assert_eq!(list.selected_item().map(|item| item.id.as_str()), Some("test1"));
}

#[tokio::test]
async fn test_update_emits_load_more() {
    let mut list = ListModel::new(create_actions(3), true);
    list.set_is_all_data_loaded(false);

    let rendered = LastItemRenderedMsg {
        id: "test1".to_string(),
    };
    assert!(list.update(Box::new(rendered) as Msg).is_none());

    let rendered = LastItemRenderedMsg {
        id: "test2".to_string(),
    };
    let cmd = list.update(Box::new(rendered) as Msg).expect("load command");
    let msg = cmd.await.expect("load message");
    assert!(msg.downcast_ref::<LoadMoreMsg>().is_some());
}

#[test]
fn test_view_renders_filter_and_items() {
    let mut list = ListModel::new(create_actions(12), true);
    list.set_filter_string("1");
    list.focus_next_visible_item();

    let view = list.view();
    assert!(view.contains("Filter: "));
    assert!(view.contains(&format!("{FOCUS_MARKER} ")));
    assert!(view.contains("test10"));
    assert!(!view.contains("test2"));
}

#[test]
fn test_init_model() {
    let (list, cmd) = <ListModel<Action> as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert!(list.is_empty());
    assert!(list.allow_selection());
}
