// Undo/redo behaviour of the editor as seen through its public API

use canvas_text_editor_wasm::toolbar::{FieldChange, StyleToggle};
use canvas_text_editor_wasm::{
    Action, Document, EditorConfig, EditorState, FontSize, FontWeight, Outcome, Position, Selection,
};

#[test]
fn test_add_undo_redo_scenario() {
    let mut editor = EditorState::default();
    let original = editor.document().clone();
    assert_eq!(original.get(1).unwrap().value, "Celebrare");
    assert_eq!(original.get(1).unwrap().position, Position::new(100.0, 100.0));

    editor.apply(Action::AddItem).unwrap();
    let two_items = editor.document().clone();
    assert_eq!(two_items.len(), 2);
    let added = two_items.get(2).expect("new item should get id 2");
    assert_eq!(added.value, "New Text");
    assert_eq!(added.position, Position::new(50.0, 50.0));

    editor.apply(Action::Undo).unwrap();
    assert_eq!(editor.document(), &original);

    editor.apply(Action::Redo).unwrap();
    assert_eq!(editor.document(), &two_items);
}

#[test]
fn test_add_item_assigns_unused_id() {
    let mut editor = EditorState::default();

    for _ in 0..5 {
        let before = editor.document().clone();
        let next_id = before.next_id();
        assert!(!before.contains(next_id));

        editor.add_item();

        assert_eq!(editor.document().len(), before.len() + 1);
        assert!(editor.document().contains(next_id));
    }
}

#[test]
fn test_add_item_clears_redo() {
    let mut editor = EditorState::default();
    editor.add_item();
    editor.undo();
    assert!(editor.can_redo());

    editor.add_item();
    let after_add = editor.document().clone();

    assert!(!editor.can_redo());
    assert_eq!(editor.redo(), Outcome::Unchanged);
    assert_eq!(editor.document(), &after_add);
}

#[test]
fn test_style_edit_clears_redo() {
    let mut editor = EditorState::default();
    editor.add_item();
    editor.undo();

    editor
        .set_field(1, FieldChange::FontSize(FontSize::Px24))
        .unwrap();

    assert!(!editor.can_redo());
}

#[test]
fn test_undo_restores_snapshot_exactly() {
    let mut editor = EditorState::default();
    editor.select(Selection::Selected(1)).unwrap();

    let before = editor.document().clone();
    editor
        .edit_selected(FieldChange::Value("Changed".to_string()))
        .unwrap();
    assert_ne!(editor.document(), &before);

    editor.undo();
    assert_eq!(editor.document(), &before);
}

#[test]
fn test_redo_then_undo_restores_pre_redo() {
    let mut editor = EditorState::default();
    editor.add_item();
    editor.add_item();
    editor.undo();

    let before_redo = editor.document().clone();
    editor.redo();
    editor.undo();

    assert_eq!(editor.document(), &before_redo);
}

#[test]
fn test_empty_history_calls_are_noops() {
    let mut editor = EditorState::default();
    let before = editor.document().clone();

    assert_eq!(editor.apply(Action::Undo).unwrap(), Outcome::Unchanged);
    assert_eq!(editor.apply(Action::Redo).unwrap(), Outcome::Unchanged);
    assert_eq!(editor.document(), &before);
}

#[test]
fn test_bold_toggle_idempotence() {
    let mut editor = EditorState::default();
    editor.select(Selection::Selected(1)).unwrap();
    let original = editor.selected_item().unwrap().font_weight;

    editor.apply(Action::Toggle { toggle: StyleToggle::Bold }).unwrap();
    assert_eq!(editor.selected_item().unwrap().font_weight, FontWeight::Bold);
    editor.apply(Action::Toggle { toggle: StyleToggle::Bold }).unwrap();

    assert_eq!(editor.selected_item().unwrap().font_weight, original);
}

#[test]
fn test_history_limit_from_config() {
    let config = EditorConfig::from_json(r#"{ "historyLimit": 2 }"#).unwrap();
    let mut editor = EditorState::new(config);

    for _ in 0..4 {
        editor.add_item();
    }
    assert_eq!(editor.history().undo_count(), 2);

    editor.undo();
    editor.undo();
    assert_eq!(editor.undo(), Outcome::Unchanged);
    assert_eq!(editor.document().len(), 3);
}

#[test]
fn test_with_document_starts_without_history() {
    let doc = Document::from_items(vec![]);
    let editor = EditorState::with_document(EditorConfig::default(), doc);

    assert!(editor.document().is_empty());
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}
