use std::sync::mpsc;
use std::time::Duration;

pub(super) const WORKER_RESULT_POLL_INTERVAL: Duration = Duration::from_millis(24);

/// Run `work` on a named thread and hand its result to `on_result` on the GTK
/// main loop. `on_lost` runs instead when the thread ends without a result.
pub(super) fn spawn_worker<T, W, H, L>(name: &str, work: W, on_result: H, on_lost: L)
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
    H: FnOnce(T) + 'static,
    L: FnOnce() + 'static,
{
    let (tx, rx) = mpsc::channel::<T>();
    let spawned = std::thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let result = work();
            let _ = tx.send(result);
        });
    if let Err(err) = spawned {
        tracing::error!(?err, worker = name, "failed to spawn worker thread");
        on_lost();
        return;
    }

    let worker = name.to_string();
    let mut on_result = Some(on_result);
    let mut on_lost = Some(on_lost);
    gtk4::glib::timeout_add_local(WORKER_RESULT_POLL_INTERVAL, move || match rx.try_recv() {
        Ok(result) => {
            if let Some(on_result) = on_result.take() {
                on_result(result);
            }
            gtk4::glib::ControlFlow::Break
        }
        Err(mpsc::TryRecvError::Empty) => gtk4::glib::ControlFlow::Continue,
        Err(mpsc::TryRecvError::Disconnected) => {
            tracing::warn!(worker = worker.as_str(), "worker exited without a result");
            if let Some(on_lost) = on_lost.take() {
                on_lost();
            }
            gtk4::glib::ControlFlow::Break
        }
    });
}
