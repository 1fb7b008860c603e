use super::*;

#[test]
fn default_is_idle() {
    assert_eq!(SubmissionResult::default(), SubmissionResult::Idle);
}

#[test]
fn only_pending_blocks_submit() {
    assert!(SubmissionResult::Idle.can_submit());
    assert!(!SubmissionResult::Pending.can_submit());
    assert!(SubmissionResult::Succeeded("t".to_owned()).can_submit());
    assert!(SubmissionResult::Failed(ApiError::Unavailable).can_submit());
}

#[test]
fn terminal_states() {
    assert!(!SubmissionResult::Idle.is_terminal());
    assert!(!SubmissionResult::Pending.is_terminal());
    assert!(SubmissionResult::Succeeded("t".to_owned()).is_terminal());
    assert!(SubmissionResult::Failed(ApiError::Unavailable).is_terminal());
}

#[test]
fn label_hides_token() {
    assert_eq!(SubmissionResult::Succeeded("secret".to_owned()).label(), "succeeded");
}
