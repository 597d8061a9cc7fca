#[cfg(unix)]
async fn wait_for_signal_impl() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => tokio::select! {
            _ = terminate.recv() => "SIGTERM",
            _ = tokio::signal::ctrl_c() => "SIGINT",
        },
        Err(_) => {
            let _ = tokio::signal::ctrl_c().await;
            "SIGINT"
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal_impl() -> &'static str {
    let _ = tokio::signal::ctrl_c().await;
    "CTRL_C"
}

/// Waits for SIGTERM or SIGINT (Ctrl-C elsewhere) and returns its name.
pub async fn wait_for_stop_signal() -> &'static str {
    wait_for_signal_impl().await
}
