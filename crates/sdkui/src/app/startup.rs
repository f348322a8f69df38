//! Blocking startup jobs run on named worker threads. The caller awaits a
//! completion signal instead of joining the thread.

use log::debug;

pub(super) async fn run_one_shot<T, F>(name: &'static str, job: F) -> std::io::Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (done_tx, done_rx) = tokio::sync::oneshot::channel();

    std::thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            debug!("Worker {name} started");
            let _ = done_tx.send(job());
        })?;

    done_rx
        .await
        .map_err(|_| std::io::Error::other(format!("worker {name} stopped without a result")))
}
