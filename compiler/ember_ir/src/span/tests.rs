use super::*;

#[test]
fn test_span_merge_covers_both() {
    let a = Span::new(4, 9);
    let b = Span::new(1, 6);
    assert_eq!(a.merge(b), Span::new(1, 9));
    assert_eq!(b.merge(a), Span::new(1, 9));
}

#[test]
fn test_span_len_and_empty() {
    assert_eq!(Span::new(3, 8).len(), 5);
    assert!(Span::DUMMY.is_empty());
    assert!(!Span::new(0, 1).is_empty());
}

#[test]
fn test_span_slice() {
    let source = "let answer = 42;";
    assert_eq!(Span::new(4, 10).slice(source), Some("answer"));
    assert_eq!(Span::new(10, 99).slice(source), None);
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
    assert_eq!(Position::default(), Position::START);
}
