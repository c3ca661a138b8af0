#[cfg(test)]
mod lifecycle_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tokio_util::sync::CancellationToken;
    use crate::lifecycle::enums::lifecycle_error::LifecycleError;
    use crate::lifecycle::structs::lifecycle::Lifecycle;
    use crate::lifecycle::traits::lifecycle_hook::{HookError, LifecycleHook};

    type Journal = Arc<Mutex<Vec<String>>>;

    struct RecordingHook {
        name: String,
        journal: Journal,
        fail_start: bool,
        fail_stop: bool,
    }

    impl RecordingHook {
        fn append(lifecycle: &Lifecycle, journal: &Journal, name: &str, fail_start: bool, fail_stop: bool) {
            lifecycle.append(Arc::new(RecordingHook {
                name: name.to_string(),
                journal: journal.clone(),
                fail_start,
                fail_stop,
            }));
        }
    }

    #[async_trait]
    impl LifecycleHook for RecordingHook {
        fn name(&self) -> String {
            self.name.clone()
        }

        async fn on_start(&self, _token: &CancellationToken) -> Result<(), HookError> {
            self.journal.lock().push(format!("start {}", self.name));
            if self.fail_start {
                return Err("refused".into());
            }
            Ok(())
        }

        async fn on_stop(&self, token: &CancellationToken) -> Result<(), HookError> {
            match token.is_cancelled() {
                true => self.journal.lock().push(format!("stop {} (cancelled)", self.name)),
                false => self.journal.lock().push(format!("stop {}", self.name)),
            }
            if self.fail_stop {
                return Err("stuck".into());
            }
            Ok(())
        }
    }

    /// Fires the start token, then fails, like a shutdown signal arriving
    /// while the hook was starting.
    struct CancellingHook;

    #[async_trait]
    impl LifecycleHook for CancellingHook {
        fn name(&self) -> String {
            String::from("cancelling")
        }

        async fn on_start(&self, token: &CancellationToken) -> Result<(), HookError> {
            token.cancel();
            Err("interrupted".into())
        }

        async fn on_stop(&self, _token: &CancellationToken) -> Result<(), HookError> {
            Ok(())
        }
    }

    /// Only stops once its token fires, and then reports a failure.
    struct StallingHook;

    #[async_trait]
    impl LifecycleHook for StallingHook {
        fn name(&self) -> String {
            String::from("stalling")
        }

        async fn on_start(&self, _token: &CancellationToken) -> Result<(), HookError> {
            Ok(())
        }

        async fn on_stop(&self, token: &CancellationToken) -> Result<(), HookError> {
            token.cancelled().await;
            Err("abandoned".into())
        }
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.lock().clone()
    }

    #[tokio::test]
    async fn test_start_in_order_stop_in_reverse() {
        let lifecycle = Lifecycle::new();
        let journal = Journal::default();
        for name in ["a", "b", "c"] {
            RecordingHook::append(&lifecycle, &journal, name, false, false);
        }
        let token = CancellationToken::new();

        lifecycle.start(&token).await.unwrap();
        lifecycle.stop(&token).await.unwrap();
        assert_eq!(entries(&journal), vec!["start a", "start b", "start c", "stop c", "stop b", "stop a"]);
    }

    #[tokio::test]
    async fn test_start_failure_rolls_back_started_hooks() {
        let lifecycle = Lifecycle::new();
        let journal = Journal::default();
        RecordingHook::append(&lifecycle, &journal, "a", false, false);
        RecordingHook::append(&lifecycle, &journal, "b", false, false);
        RecordingHook::append(&lifecycle, &journal, "c", true, false);
        RecordingHook::append(&lifecycle, &journal, "d", false, false);

        let error = lifecycle.start(&CancellationToken::new()).await.unwrap_err();
        match error {
            LifecycleError::StartFailed { hook, source } => {
                assert_eq!(hook, "c");
                assert_eq!(source.to_string(), "refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(entries(&journal), vec!["start a", "start b", "start c", "stop b", "stop a"]);
    }

    #[tokio::test]
    async fn test_rollback_runs_on_fresh_token_after_cancellation() {
        let lifecycle = Lifecycle::new();
        let journal = Journal::default();
        RecordingHook::append(&lifecycle, &journal, "a", false, false);
        lifecycle.append(Arc::new(CancellingHook));
        let token = CancellationToken::new();

        let error = lifecycle.start(&token).await.unwrap_err();
        assert!(token.is_cancelled());
        assert!(matches!(error, LifecycleError::StartFailed { ref hook, .. } if hook == "cancelling"));
        assert_eq!(entries(&journal), vec!["start a", "stop a"]);
    }

    #[tokio::test]
    async fn test_rollback_is_bounded_by_grace_period() {
        let lifecycle = Lifecycle::new().with_rollback_grace_period(Duration::from_millis(50));
        let journal = Journal::default();
        RecordingHook::append(&lifecycle, &journal, "a", false, false);
        lifecycle.append(Arc::new(StallingHook));
        RecordingHook::append(&lifecycle, &journal, "c", true, false);

        let started = tokio::time::timeout(Duration::from_secs(5), lifecycle.start(&CancellationToken::new())).await;
        assert!(matches!(started, Ok(Err(LifecycleError::StartFailed { .. }))));
        assert_eq!(entries(&journal), vec!["start a", "start c", "stop a (cancelled)"]);
    }

    #[tokio::test]
    async fn test_stop_within_reports_abandoned_hooks() {
        let lifecycle = Lifecycle::new();
        lifecycle.append(Arc::new(StallingHook));

        match lifecycle.stop_within(Duration::from_millis(50)).await {
            Err(LifecycleError::StopFailed { failures }) => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].0, "stalling");
                assert_eq!(failures[0].1.to_string(), "abandoned");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stop_continues_past_failures() {
        let lifecycle = Lifecycle::new();
        let journal = Journal::default();
        RecordingHook::append(&lifecycle, &journal, "a", false, true);
        RecordingHook::append(&lifecycle, &journal, "b", false, false);
        RecordingHook::append(&lifecycle, &journal, "c", false, true);

        let error = lifecycle.stop(&CancellationToken::new()).await.unwrap_err();
        assert_eq!(entries(&journal), vec!["stop c", "stop b", "stop a"]);
        match &error {
            LifecycleError::StopFailed { failures } => {
                let names: Vec<&str> = failures.iter().map(|(name, _)| name.as_str()).collect();
                assert_eq!(names, vec!["c", "a"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.to_string(), "2 hook(s) failed to stop");
    }

    #[tokio::test]
    async fn test_empty_lifecycle() {
        let lifecycle = Lifecycle::new();
        assert!(lifecycle.is_empty());
        lifecycle.start(&CancellationToken::new()).await.unwrap();
        lifecycle.stop(&CancellationToken::new()).await.unwrap();
    }

    #[test]
    fn test_hook_names_in_registration_order() {
        let lifecycle = Lifecycle::new();
        let journal = Journal::default();
        RecordingHook::append(&lifecycle, &journal, "first", false, false);
        RecordingHook::append(&lifecycle, &journal, "second", false, false);
        assert_eq!(lifecycle.len(), 2);
        assert_eq!(lifecycle.hook_names(), vec!["first".to_string(), "second".to_string()]);
        assert!(entries(&journal).is_empty());
    }
}
