//! Tests for the autocomplete widget.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::listener;
    use crate::Component;
    use bubbletea_rs::{KeyMsg, MouseMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A focused widget whose change callback records every value.
    fn recording() -> (Model, Arc<Mutex<Vec<String>>>) {
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        let mut m = new().with_on_change(move |v| sink.lock().unwrap().push(v));
        std::mem::drop(m.focus());
        (m, changes)
    }

    fn plain(s: &str) -> String {
        strip_ansi_escapes::strip_str(s)
    }

    #[test]
    fn test_new_default_values() {
        let m = new();
        assert!(!m.is_open());
        assert!(!m.focused());
        assert!(m.is_mounted());
        assert_eq!(m.value(), "");
        assert_eq!(m.highlighted(), None);
        assert!(m.suggestions().is_empty());
    }

    #[test]
    fn test_query_pu_opens_with_pune_first() {
        let (mut m, _) = recording();
        m.set_value("Pu");
        assert!(m.is_open());
        assert_eq!(m.suggestions()[0], "Pune");
        assert!(m.suggestions().len() <= 8);
    }

    #[test]
    fn test_query_without_matches_stays_closed() {
        let (mut m, _) = recording();
        m.set_value("xyz");
        assert!(!m.is_open());
        assert!(m.suggestions().is_empty());
    }

    #[test]
    fn test_single_character_does_not_open() {
        let (mut m, _) = recording();
        m.set_value("P");
        assert!(!m.is_open());
        assert!(m.suggestions().is_empty());
    }

    #[test]
    fn test_query_change_resets_highlight() {
        let (mut m, _) = recording();
        m.set_value("Pa");
        m.handle_key(&key(KeyCode::Down));
        m.handle_key(&key(KeyCode::Down));
        assert_eq!(m.highlighted(), Some(1));

        m.set_value("Pat");
        assert_eq!(m.highlighted(), None);
        assert!(m.is_open());
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let (mut m, _) = recording();
        m.set_value("Pa");
        let last = m.suggestions().len() - 1;

        assert_eq!(m.handle_key(&key(KeyCode::Down)), KeyOutcome::Consumed);
        assert_eq!(m.highlighted(), Some(0));

        assert_eq!(m.handle_key(&key(KeyCode::Up)), KeyOutcome::Consumed);
        assert_eq!(m.highlighted(), Some(last));

        m.handle_key(&key(KeyCode::Down));
        assert_eq!(m.highlighted(), Some(0));
    }

    #[test]
    fn test_ctrl_n_and_ctrl_p_navigate() {
        let (mut m, _) = recording();
        m.set_value("Pu");
        let ctrl_n = KeyMsg {
            key: KeyCode::Char('n'),
            modifiers: KeyModifiers::CONTROL,
        };
        let ctrl_p = KeyMsg {
            key: KeyCode::Char('p'),
            modifiers: KeyModifiers::CONTROL,
        };
        m.handle_key(&ctrl_n);
        m.handle_key(&ctrl_n);
        assert_eq!(m.highlighted(), Some(1));
        m.handle_key(&ctrl_p);
        assert_eq!(m.highlighted(), Some(0));
    }

    #[test]
    fn test_enter_without_highlight_does_nothing() {
        let (mut m, changes) = recording();
        m.set_value("Pu");
        let before = m.state().clone();

        let outcome = m.handle_key(&key(KeyCode::Enter));
        assert_eq!(outcome, KeyOutcome::Consumed);
        assert!(outcome.is_default_prevented());
        assert_eq!(m.state(), &before);
        assert!(changes.lock().unwrap().is_empty());
        assert!(m.focused());
    }

    #[test]
    fn test_enter_commits_highlighted() {
        let (mut m, changes) = recording();
        m.set_value("Pu");
        m.handle_key(&key(KeyCode::Down));
        m.handle_key(&key(KeyCode::Down));

        let outcome = m.handle_key(&key(KeyCode::Enter));
        assert_eq!(outcome, KeyOutcome::Committed("Puri".to_string()));
        assert!(outcome.is_default_prevented());
        assert_eq!(changes.lock().unwrap().as_slice(), ["Puri".to_string()]);
        assert!(!m.is_open());
        assert_eq!(m.highlighted(), None);
        assert!(!m.focused());
    }

    #[test]
    fn test_echoed_commit_keeps_list_closed() {
        let (mut m, changes) = recording();
        m.set_value("Mu");
        m.handle_key(&key(KeyCode::Down));
        m.handle_key(&key(KeyCode::Enter));

        // The caller applies the committed value.
        let committed = changes.lock().unwrap().last().cloned().unwrap();
        m.set_value(&committed);
        assert_eq!(m.value(), "Mumbai");
        assert!(!m.is_open());
        assert_eq!(m.highlighted(), None);
        assert_eq!(m.suggestions(), ["Mumbai".to_string()]);

        // Coming back to the field shows the list again.
        std::mem::drop(m.focus());
        assert!(m.is_open());
    }

    #[test]
    fn test_escape_closes_without_touching_value() {
        let (mut m, changes) = recording();
        m.set_value("Pa");
        m.handle_key(&key(KeyCode::Down));

        let outcome = m.handle_key(&key(KeyCode::Esc));
        assert_eq!(outcome, KeyOutcome::Dismissed);
        assert!(!outcome.is_default_prevented());
        assert!(!m.is_open());
        assert_eq!(m.highlighted(), None);
        assert_eq!(m.value(), "Pa");
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_focus_reopens_without_requery() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let source = move |q: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            crate::suggest::suggest(q)
        };
        let mut m = Model::with_source(source);
        std::mem::drop(m.focus());
        m.set_value("Mu");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        m.handle_key(&key(KeyCode::Esc));
        m.blur();
        assert!(!m.is_open());

        std::mem::drop(m.focus());
        assert!(m.is_open());
        assert_eq!(m.suggestions(), ["Mumbai".to_string()]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_list_keys_are_inert_while_closed() {
        let (mut m, changes) = recording();
        m.set_value("xyz");
        assert_eq!(m.handle_key(&key(KeyCode::Down)), KeyOutcome::Ignored);
        assert_eq!(m.handle_key(&key(KeyCode::Enter)), KeyOutcome::Ignored);
        assert!(!m.handle_key(&key(KeyCode::Enter)).is_default_prevented());
        assert_eq!(m.highlighted(), None);
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_typing_is_passed_to_callback() {
        let (mut m, changes) = recording();
        m.set_value("Pu");

        let outcome = m.handle_key(&key(KeyCode::Char('n')));
        assert_eq!(outcome, KeyOutcome::Edited("Pun".to_string()));
        // Controlled: nothing changes until the caller sets the value.
        assert_eq!(m.value(), "Pu");
        assert_eq!(changes.lock().unwrap().as_slice(), ["Pun".to_string()]);

        m.set_value("Pun");
        assert_eq!(m.suggestions(), ["Pune".to_string()]);

        m.handle_key(&key(KeyCode::Backspace));
        assert_eq!(changes.lock().unwrap().last().map(String::as_str), Some("Pu"));
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let (mut m, changes) = recording();
        m.set_value("Pu");
        m.blur();
        assert_eq!(m.handle_key(&key(KeyCode::Down)), KeyOutcome::Ignored);
        assert_eq!(m.handle_key(&key(KeyCode::Char('n'))), KeyOutcome::Ignored);
        assert_eq!(m.highlighted(), None);
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_click_commits_regardless_of_highlight() {
        let (mut m, changes) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");
        m.handle_key(&key(KeyCode::Down));
        assert_eq!(m.highlighted(), Some(0));

        // Row 2 is the second suggestion.
        let outcome = m.handle_press(2, 2, MouseButton::Left);
        assert_eq!(outcome, PointerOutcome::Committed("Puri".to_string()));
        assert_eq!(changes.lock().unwrap().as_slice(), ["Puri".to_string()]);
        assert!(!m.is_open());
        assert_eq!(m.highlighted(), None);
        assert!(!m.focused());
    }

    #[test]
    fn test_right_click_on_suggestion_is_ignored() {
        let (mut m, changes) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");
        assert_eq!(m.handle_press(2, 1, MouseButton::Right), PointerOutcome::Ignored);
        assert!(m.is_open());
        assert!(changes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_press_outside_closes() {
        let (mut m, _) = recording();
        m.set_origin(4, 1);
        m.set_value("Pu");
        assert!(m.is_open());

        assert_eq!(m.handle_press(4, 20, MouseButton::Left), PointerOutcome::Dismissed);
        assert!(!m.is_open());
        assert_eq!(m.value(), "Pu");

        // Already closed: nothing more to do.
        assert_eq!(m.handle_press(4, 20, MouseButton::Left), PointerOutcome::Ignored);
    }

    #[test]
    fn test_press_inside_keeps_list_open() {
        let (mut m, _) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");
        assert_eq!(m.handle_press(1, 0, MouseButton::Left), PointerOutcome::Ignored);
        assert!(m.is_open());
    }

    #[test]
    fn test_press_without_origin_is_not_outside() {
        let (mut m, _) = recording();
        m.set_value("Pu");
        assert_eq!(m.handle_press(60, 40, MouseButton::Left), PointerOutcome::Ignored);
        assert!(m.is_open());
    }

    #[test]
    fn test_press_on_input_focuses_and_reopens() {
        let (mut m, _) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");
        m.handle_key(&key(KeyCode::Esc));
        m.blur();

        assert_eq!(m.handle_press(1, 0, MouseButton::Left), PointerOutcome::Focused);
        assert!(m.focused());
        assert!(m.is_open());
    }

    #[test]
    fn test_update_routes_messages() {
        let (mut m, _) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");

        let down: Msg = Box::new(key(KeyCode::Down));
        assert!(m.update(down).is_none());
        assert_eq!(m.highlighted(), Some(0));

        let press: Msg = Box::new(MouseMsg {
            x: 0,
            y: 30,
            button: MouseEventKind::Down(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
        });
        m.update(press);
        assert!(!m.is_open());
    }

    #[test]
    fn test_unmount_removes_listener() {
        let (mut m, _) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");
        let id = m.listener_id().unwrap();
        assert!(listener::is_registered(id));

        m.unmount();
        assert!(!m.is_mounted());
        assert!(!listener::is_registered(id));
        assert!(!m.is_open());
        assert_eq!(m.handle_press(0, 30, MouseButton::Left), PointerOutcome::Ignored);
        assert_eq!(m.handle_key(&key(KeyCode::Down)), KeyOutcome::Ignored);
    }

    #[test]
    fn test_drop_removes_listener() {
        let m = new();
        let id = m.listener_id().unwrap();
        assert!(listener::is_registered(id));
        drop(m);
        assert!(!listener::is_registered(id));
    }

    #[test]
    fn test_instances_are_independent() {
        let (mut from, _) = recording();
        let (mut to, _) = recording();
        from.set_value("Pu");
        to.set_value("Mu");
        from.handle_key(&key(KeyCode::Down));

        assert_eq!(from.highlighted(), Some(0));
        assert_eq!(to.highlighted(), None);
        assert_ne!(from.listener_id(), to.listener_id());
    }

    #[test]
    fn test_deduplicating_config() {
        let mut m = Model::with_config(Config::default().with_deduplicate(true)).unwrap();
        m.set_value("Patn");
        assert_eq!(m.suggestions(), ["Patna".to_string()]);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Model::with_config(Config::default().with_max_suggestions(0)).is_err());
    }

    #[test]
    fn test_view_closed_is_single_line() {
        let (mut m, _) = recording();
        m.set_placeholder("Leaving from");
        let v = plain(&m.view());
        assert!(v.contains("Leaving from"));
        assert_eq!(v.lines().count(), 1);
    }

    #[test]
    fn test_view_lists_suggestions_with_marker() {
        let (mut m, _) = recording();
        m.set_value("Pu");
        let v = plain(&m.view());
        let lines: Vec<&str> = v.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Pu"));
        assert!(lines[1].contains(MARKER));
        assert!(lines[1].contains("Pune"));
        assert!(lines[2].contains("Puri"));
    }

    #[test]
    fn test_view_after_escape_hides_list() {
        let (mut m, _) = recording();
        m.set_value("Pu");
        m.handle_key(&key(KeyCode::Esc));
        assert_eq!(plain(&m.view()).lines().count(), 1);
    }

    #[test]
    fn test_layout_matches_view() {
        let (mut m, _) = recording();
        m.set_origin(0, 0);
        m.set_value("Pa");
        let layout = m.layout().unwrap();
        assert_eq!(layout.list_rows, m.suggestions().len());
        assert_eq!(layout.hit_test(0, 1), HitTarget::Suggestion(0));
    }

    #[test]
    fn test_key_map_help() {
        use crate::key::KeyMap as _;
        let km = default_key_map();
        let bindings = km.short_help();
        let short: Vec<&str> = bindings.iter().map(|b| b.help().desc.as_str()).collect();
        assert_eq!(short, vec!["next", "previous", "select", "dismiss"]);
        assert_eq!(km.full_help().len(), 2);
    }

    fn ctrl(c: char) -> KeyMsg {
        KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    #[test]
    fn test_runs_as_program_model() {
        use bubbletea_rs::Model as BubbleTeaModel;

        let (mut m, _) = <Model as BubbleTeaModel>::init();
        assert!(m.focused());

        for c in ['P', 'u'] {
            BubbleTeaModel::update(&mut m, Box::new(key(KeyCode::Char(c))));
        }
        assert_eq!(m.value(), "Pu");
        assert!(m.is_open());
        assert_eq!(m.suggestions()[0], "Pune");

        BubbleTeaModel::update(&mut m, Box::new(key(KeyCode::Down)));
        BubbleTeaModel::update(&mut m, Box::new(key(KeyCode::Enter)));
        assert_eq!(m.value(), "Pune");
        assert!(!m.is_open());
        assert!(!m.focused());
        assert_eq!(plain(&BubbleTeaModel::view(&m)).lines().count(), 1);
    }

    #[test]
    fn test_owning_value_still_reports_changes() {
        let (m, changes) = recording();
        let mut m = m.owning_value();
        m.handle_key(&key(KeyCode::Char('M')));
        m.handle_key(&key(KeyCode::Char('u')));
        assert_eq!(m.value(), "Mu");
        assert_eq!(
            changes.lock().unwrap().as_slice(),
            ["M".to_string(), "Mu".to_string()]
        );
        assert_eq!(m.suggestions(), ["Mumbai".to_string()]);
    }

    #[test]
    fn test_last_outcome_follows_update() {
        let (mut m, _) = recording();
        m.set_origin(0, 0);
        m.set_value("Pu");
        assert_eq!(m.last_outcome(), None);

        m.update(Box::new(key(KeyCode::Down)));
        assert_eq!(m.last_outcome(), Some(&Outcome::Key(KeyOutcome::Consumed)));
        assert!(m.last_outcome().is_some_and(Outcome::is_default_prevented));

        m.update(Box::new(key(KeyCode::Esc)));
        assert_eq!(m.last_outcome(), Some(&Outcome::Key(KeyOutcome::Dismissed)));
        assert!(!m.last_outcome().is_some_and(Outcome::is_default_prevented));

        m.update(Box::new(MouseMsg {
            x: 1,
            y: 0,
            button: MouseEventKind::Down(MouseButton::Left),
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(m.last_outcome(), Some(&Outcome::Pointer(PointerOutcome::Ignored)));

        m.update(Box::new(7u8));
        assert_eq!(m.last_outcome(), None);
    }

    #[test]
    fn test_set_value_after_unmount_stays_closed() {
        let (mut m, _) = recording();
        m.unmount();
        m.set_value("Pu");
        assert_eq!(m.value(), "Pu");
        assert!(!m.is_open());
        assert!(m.suggestions().is_empty());
        assert_eq!(plain(&m.view()).lines().count(), 1);
    }

    #[test]
    fn test_word_deletion_with_multibyte_whitespace() {
        let (mut m, changes) = recording();
        m.set_value("Navi\u{A0}Mumbai");
        assert_eq!(
            m.handle_key(&ctrl('w')),
            KeyOutcome::Edited("Navi\u{A0}".to_string())
        );
        assert_eq!(
            changes.lock().unwrap().as_slice(),
            ["Navi\u{A0}".to_string()]
        );
    }

    #[test]
    fn test_caret_moves_and_edits_in_place() {
        let (mut m, changes) = recording();
        m.set_value("Pne");
        assert_eq!(m.caret(), 3);

        assert_eq!(m.handle_key(&key(KeyCode::Left)), KeyOutcome::Moved);
        assert_eq!(m.handle_key(&key(KeyCode::Left)), KeyOutcome::Moved);
        assert!(!m.handle_key(&key(KeyCode::Home)).is_default_prevented());
        assert_eq!(m.caret(), 0);
        m.handle_key(&key(KeyCode::Right));
        assert!(changes.lock().unwrap().is_empty());

        let outcome = m.handle_key(&key(KeyCode::Char('u')));
        assert_eq!(outcome, KeyOutcome::Edited("Pune".to_string()));
        m.set_value("Pune");
        assert_eq!(m.caret(), 2);

        // A value the widget did not propose puts the caret at the end.
        m.set_value("Mumbai");
        assert_eq!(m.caret(), 6);
    }

    #[test]
    fn test_forward_delete_reaches_callback() {
        let (mut m, changes) = recording();
        m.set_value("Puri");
        m.handle_key(&key(KeyCode::Home));
        let outcome = m.handle_key(&key(KeyCode::Delete));
        assert_eq!(outcome, KeyOutcome::Edited("uri".to_string()));
        assert_eq!(changes.lock().unwrap().as_slice(), ["uri".to_string()]);
    }

    #[test]
    fn test_commit_of_current_value_does_not_swallow_later_queries() {
        let (mut m, _) = recording();
        m.set_value("Pune");
        m.handle_key(&key(KeyCode::Down));
        assert_eq!(
            m.handle_key(&key(KeyCode::Enter)),
            KeyOutcome::Committed("Pune".to_string())
        );

        m.set_value("Pun");
        m.set_value("Pune");
        assert!(m.is_open());
    }
}
