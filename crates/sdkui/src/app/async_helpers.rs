use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

pub(super) async fn run_with_timeout<T, E, F, M>(
    timeout: Duration,
    timeout_operation: &'static str,
    future: F,
    map_error: M,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    M: FnOnce(E) -> AppError,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err(map_error(error)),
        Err(_) => Err(AppError::timeout(timeout_operation, timeout.as_secs())),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sdkui_backend::BackendError;

    use super::run_with_timeout;
    use crate::error::AppError;

    #[tokio::test]
    async fn inner_success_passes_through() {
        let result = run_with_timeout(
            Duration::from_secs(1),
            "Loading versions",
            async { Ok::<_, BackendError>(42) },
            AppError::snapshot_load_failed,
        )
        .await
        .expect("success result should pass through");

        assert_eq!(result, 42);
    }

    #[tokio::test]
    async fn inner_error_is_mapped() {
        let result = run_with_timeout(
            Duration::from_secs(1),
            "Loading versions",
            async { Err::<(), _>(BackendError::NotFound) },
            AppError::snapshot_load_failed,
        )
        .await;

        assert_eq!(
            result,
            Err(AppError::snapshot_load_failed(BackendError::NotFound))
        );
    }

    #[tokio::test]
    async fn slow_future_times_out() {
        let result = run_with_timeout(
            Duration::from_millis(5),
            "Loading versions",
            async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok::<_, BackendError>(())
            },
            AppError::snapshot_load_failed,
        )
        .await;

        assert_eq!(
            result,
            Err(AppError::Timeout {
                operation: "Loading versions",
                seconds: 0,
            })
        );
    }
}
