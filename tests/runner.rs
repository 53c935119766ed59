#[cfg(test)]
mod tests {
    use futures::{StreamExt, stream};
    use keel::{
        DbCommand, DbConnection, Dialect, Error, GeneratedSql, Result, RetryPolicy, Row,
        SqliteDialect, Value, run_ignoring_errors, run_with_retry, run_with_timeout,
    };
    use std::{
        sync::{
            Arc,
            atomic::{AtomicU32, Ordering},
        },
        time::{Duration, Instant},
    };
    use tokio::time::sleep;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[tokio::test]
    async fn retry_stops_after_exhausting_the_policy() {
        init_logs();
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let result: std::result::Result<(), Error> = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(Error::validation("transient")) }
            },
            &policy,
        )
        .await;
        // max_retries of 3 means one initial attempt plus three retries.
        assert_eq!(attempts.load(Ordering::SeqCst), 4);
        assert!(matches!(result, Err(Error::Validation(..))));
    }

    #[tokio::test]
    async fn retry_returns_first_success() {
        init_logs();
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::new(5, Duration::from_millis(1));
        let result = run_with_retry(
            || {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 2 {
                        Err(Error::validation("transient"))
                    } else {
                        Ok(attempt)
                    }
                }
            },
            &policy,
        )
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_classifier_cuts_the_loop_short() {
        let attempts = AtomicU32::new(0);
        let policy = RetryPolicy::new(10, Duration::from_millis(1))
            .retry_if(|error: &Error| matches!(error, Error::Timeout(..)));
        let result: std::result::Result<(), Error> = run_with_retry(
            || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { Err(Error::Cancelled) }
            },
            &policy,
        )
        .await;
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn retry_preserves_the_error_type() {
        // The loop propagates the operation's own error, not a wrapper.
        let policy: RetryPolicy<String> = RetryPolicy::new(1, Duration::from_millis(1));
        let result: std::result::Result<(), String> =
            run_with_retry(|| async { Err("broken".to_string()) }, &policy).await;
        assert_eq!(result.unwrap_err(), "broken");
    }

    #[tokio::test]
    async fn timeout_fires_before_a_slow_operation() {
        let started = Instant::now();
        let result = run_with_timeout(
            async {
                sleep(Duration::from_millis(200)).await;
                7
            },
            Duration::from_millis(50),
            std::future::pending(),
        )
        .await;
        assert!(matches!(result, Err(Error::Timeout(..))));
        assert!(started.elapsed() < Duration::from_millis(150));
    }

    #[tokio::test]
    async fn timed_out_operation_still_runs_to_completion() {
        let completed = Arc::new(AtomicU32::new(0));
        let flag = Arc::clone(&completed);
        let result = run_with_timeout(
            async move {
                sleep(Duration::from_millis(50)).await;
                flag.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(10),
            std::future::pending(),
        )
        .await;
        assert!(matches!(result, Err(Error::Timeout(..))));
        // The caller stopped waiting but the work was not retracted.
        sleep(Duration::from_millis(100)).await;
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn timeout_returns_the_value_in_time() {
        let result = run_with_timeout(
            async { 7 },
            Duration::from_secs(1),
            std::future::pending(),
        )
        .await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn cancellation_wins_over_the_timer() {
        let result: Result<()> = run_with_timeout(
            std::future::pending(),
            Duration::from_secs(10),
            async { sleep(Duration::from_millis(10)).await },
        )
        .await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    #[should_panic(expected = "operation blew up")]
    async fn panicking_operation_resumes_the_panic() {
        let _ = run_with_timeout(
            async { panic!("operation blew up") },
            Duration::from_secs(1),
            std::future::pending(),
        )
        .await;
    }

    #[tokio::test]
    async fn zero_timeout_is_rejected() {
        let result = run_with_timeout(async { 7 }, Duration::ZERO, std::future::pending()).await;
        assert!(matches!(result, Err(Error::Validation(..))));
    }

    #[tokio::test]
    async fn ignoring_errors_routes_them_to_the_handler() {
        let mut seen = Vec::new();
        let value = run_ignoring_errors(async { Ok::<_, Error>(7) }, |e| seen.push(e)).await;
        assert_eq!(value, Some(7));
        assert!(seen.is_empty());
        let value: Option<()> =
            run_ignoring_errors(async { Err(Error::Cancelled) }, |e| seen.push(e)).await;
        assert_eq!(value, None);
        assert_eq!(seen.len(), 1);
    }

    // Minimal in-memory driver exercising the execution boundary.
    struct FakeConnection {
        open: bool,
    }

    struct FakeCommand {
        sql: GeneratedSql,
    }

    impl DbConnection for FakeConnection {
        type Command = FakeCommand;

        async fn open(&mut self) -> Result<()> {
            self.open = true;
            Ok(())
        }

        async fn create_command(&mut self, sql: GeneratedSql) -> Result<Self::Command> {
            if !self.open {
                return Err(Error::connection("fake", "not open"));
            }
            Ok(FakeCommand { sql })
        }
    }

    impl DbCommand for FakeCommand {
        async fn execute_non_query(&mut self) -> Result<u64> {
            Ok(self.sql.parameters.len() as u64)
        }

        async fn execute_scalar(&mut self) -> Result<Value> {
            Ok(Value::Int64(Some(1)))
        }

        fn execute_reader(&mut self) -> impl futures::Stream<Item = Result<Row>> + Send {
            let row: Row = vec![("Id".to_string(), Value::Int64(Some(1)))];
            stream::iter(vec![Ok(row)])
        }
    }

    #[tokio::test]
    async fn generated_commands_flow_through_a_driver() {
        let mut connection = FakeConnection { open: false };
        let sql = SqliteDialect
            .insert_command("Users", &[("Name", Value::from("Ada"))], false)
            .unwrap();
        assert!(matches!(
            connection.create_command(sql).await,
            Err(Error::Connection { .. })
        ));

        connection.open().await.unwrap();
        let sql = SqliteDialect
            .insert_command(
                "Users",
                &[("Name", Value::from("Ada")), ("Age", Value::from(36))],
                false,
            )
            .unwrap();
        let mut command = connection.create_command(sql).await.unwrap();
        assert_eq!(command.execute_non_query().await.unwrap(), 2);
        assert_eq!(command.execute_scalar().await.unwrap(), Value::Int64(Some(1)));
        let rows: Vec<_> = command.execute_reader().collect().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].as_ref().unwrap()[0],
            ("Id".to_string(), Value::Int64(Some(1)))
        );
    }
}
