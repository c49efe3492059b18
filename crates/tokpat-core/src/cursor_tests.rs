use crate::{CharCursor, StringCursor};

#[test]
fn reads_characters_in_order() {
    let mut cursor = StringCursor::new("ab");

    assert_eq!(cursor.read(), Some('a'));
    assert_eq!(cursor.read(), Some('b'));
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.offset(), 2);
}

#[test]
fn unread_steps_back() {
    let mut cursor = StringCursor::new("ab");

    cursor.read();
    cursor.read();
    cursor.unread();

    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.remaining(), "b");
}

#[test]
fn unread_after_end_of_input_undoes_the_end_read() {
    let mut cursor = StringCursor::new("a");

    assert_eq!(cursor.read(), Some('a'));
    assert_eq!(cursor.read(), None);
    cursor.unread();

    assert_eq!(cursor.offset(), 1);
    assert!(cursor.is_at_end());
}

#[test]
fn handles_multibyte_characters() {
    let mut cursor = StringCursor::new("é1");

    assert_eq!(cursor.read(), Some('é'));
    cursor.unread();
    assert_eq!(cursor.remaining(), "é1");
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn reset_rewinds() {
    let mut cursor = StringCursor::new("abc");
    cursor.read();
    cursor.read();
    cursor.read();
    cursor.read();

    cursor.reset();

    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.remaining(), "abc");
    assert_eq!(cursor.read(), Some('a'));
}

#[test]
fn unread_at_start_is_a_no_op() {
    let mut cursor = StringCursor::new("a");
    cursor.unread();

    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.text(), "a");
}
