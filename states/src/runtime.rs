use std::future::Future;

/// Spawns fire-and-forget async work on the platform executor.
///
/// On native this requires a Tokio runtime context (see `Runtime::enter`).
/// On wasm the future runs on the browser event loop.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    drop(tokio::spawn(future));
}

#[cfg(target_arch = "wasm32")]
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
