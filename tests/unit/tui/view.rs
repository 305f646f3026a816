use super::*;

#[test]
fn test_event_result() {
    assert!(EventResult::Consumed.is_consumed());
    assert!(EventResult::Ignored.is_ignored());
    assert!(EventResult::Quit.is_quit());
    assert!(!EventResult::Quit.is_consumed());
}
