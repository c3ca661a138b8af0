use std::future::Future;
use tokio_util::sync::CancellationToken;
use crate::connector::enums::driver_error::DriverError;

/// Runs `future` on its own task so that a cancelled caller can walk away
/// from it. Returns `None` when `token` fired first (or had already fired);
/// the task then keeps running and a successful output is handed to
/// `cleanup`.
pub(crate) async fn run_abandonable<T, F, C, CF>(
    token: &CancellationToken,
    future: F,
    cleanup: C,
) -> Option<Result<T, DriverError>>
where
    T: Send + 'static,
    F: Future<Output = Result<T, DriverError>> + Send + 'static,
    C: FnOnce(T) -> CF + Send + 'static,
    CF: Future<Output = ()> + Send + 'static,
{
    let mut task = tokio::spawn(future);
    tokio::select! {
        biased;
        joined = &mut task => Some(joined.map_err(DriverError::from).and_then(|result| result)),
        _ = token.cancelled() => {
            tokio::spawn(async move {
                if let Ok(Ok(value)) = task.await {
                    cleanup(value).await;
                }
            });
            None
        }
    }
}
