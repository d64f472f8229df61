//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor while reqwest needs tokio. HTTP calls are
//! spawned onto one shared tokio runtime and awaited from GPUI tasks.
//!
//! ```text
//! cx.spawn(async move |cx| {
//!     let page = run_in_tokio(async move { api.fetch_page(..).await }).await;
//!     this.update(cx, |state, cx| state.apply(page, cx))
//! })
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::{Builder, Runtime};

static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        match Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("storefront-io")
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create tokio runtime");
                std::process::exit(1);
            }
        }
    })
}

/// Run `future` on the tokio runtime and await its output
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_returns_output() {
        let value = smol::block_on(run_in_tokio(async {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            42
        }));
        assert_eq!(value, 42);
    }

    #[test]
    fn test_run_in_tokio_from_many_tasks() {
        let values = smol::block_on(async {
            let mut out = Vec::new();
            for i in 0..4u32 {
                out.push(run_in_tokio(async move { i * 2 }).await);
            }
            out
        });
        assert_eq!(values, vec![0, 2, 4, 6]);
    }
}
