#[cfg(test)]
mod tests {
    use crate::interactive::domain::models::RequestState;

    #[test]
    fn loading_is_the_only_loading_state() {
        assert!(RequestState::Loading.is_loading());
        assert!(!RequestState::Idle.is_loading());
        assert!(!RequestState::Success.is_loading());
        assert!(!RequestState::Error("boom".to_string()).is_loading());
    }

    #[test]
    fn error_message_is_only_present_on_error() {
        assert_eq!(
            RequestState::Error("boom".to_string()).error_message(),
            Some("boom")
        );
        assert_eq!(RequestState::Success.error_message(), None);
        assert_eq!(RequestState::Idle.error_message(), None);
    }
}
