use tinytext::app::{Message, Model, update};
use tinytext::editor::{Buffer, Cursor, Direction, Editor};
use tinytext::storage;
use tinytext::ui::render_screen;

fn session(path: &std::path::Path) -> Model {
    let text = storage::load(path).unwrap();
    let buffer = Buffer::from_text(&text).with_path(path);
    Model::new(Editor::new(buffer), (80, 24))
}

fn apply(model: Model, messages: impl IntoIterator<Item = Message>) -> Model {
    messages.into_iter().fold(model, update)
}

#[test]
fn test_new_file_is_created_edited_and_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.txt");

    let model = session(&path);
    assert!(path.exists(), "opening a missing file creates it");
    assert_eq!(model.editor.buffer().line_count(), 1);

    let model = apply(
        model,
        [
            Message::InsertText("milk".into()),
            Message::Enter,
            Message::Tab,
            Message::InsertText("eggs".into()),
        ],
    );
    assert_eq!(model.editor.cursor(), Cursor::at(1, 8));

    storage::save(&path, &model.editor.buffer().serialize()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "milk\n    eggs");
}

#[test]
fn test_round_trip_preserves_untouched_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.txt");
    let original = "first\r\nsecond\r\n\r\nlast";
    std::fs::write(&path, original).unwrap();

    let model = session(&path);
    assert_eq!(model.editor.buffer().line_count(), 4);
    storage::save(&path, &model.editor.buffer().serialize()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_join_and_split_through_messages() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lines.txt");
    std::fs::write(&path, "ab\ncd").unwrap();

    let model = apply(
        session(&path),
        [Message::Move(Direction::Down), Message::Backspace],
    );
    assert_eq!(
        model.editor.buffer().lines().collect::<Vec<_>>(),
        ["abcd"]
    );
    assert_eq!(model.editor.cursor(), Cursor::at(0, 2));

    let model = apply(model, [Message::Enter]);
    assert_eq!(
        model.editor.buffer().lines().collect::<Vec<_>>(),
        ["ab", "cd"]
    );
    assert_eq!(model.editor.cursor(), Cursor::at(1, 0));
}

#[test]
fn test_screen_reflects_session_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("screen.txt");
    std::fs::write(&path, "hi").unwrap();

    let model = apply(session(&path), [Message::Move(Direction::Right)]);
    let ansi = render_screen(
        model.editor.buffer(),
        model.editor.cursor(),
        10,
    )
    .to_ansi();
    assert_eq!(
        ansi,
        "\n\u{1b}[47;100m TinyText \u{1b}[0m\nh\u{1b}[47;30mi\u{1b}[0m\n"
    );
}
