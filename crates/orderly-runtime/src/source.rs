//! OS signal source feeding shutdown requests

use orderly_core::{ShutdownError, ShutdownResult, TerminationSignal};
use std::task::Poll;

#[cfg(unix)]
type SignalStream = tokio::signal::unix::Signal;

#[cfg(windows)]
type SignalStream = tokio::signal::windows::CtrlC;

#[cfg(not(any(unix, windows)))]
struct SignalStream;

#[cfg(not(any(unix, windows)))]
impl SignalStream {
    fn poll_recv(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Option<()>> {
        Poll::Ready(None)
    }
}

/// Registered handlers for a set of termination signals
pub(crate) struct SignalListener {
    streams: Vec<(TerminationSignal, SignalStream)>,
}

impl SignalListener {
    /// Register handlers for every signal in `signals`
    ///
    /// Must run inside a tokio runtime. Duplicates are registered once.
    pub(crate) fn install(signals: &[TerminationSignal]) -> ShutdownResult<Self> {
        let mut streams: Vec<(TerminationSignal, SignalStream)> = Vec::with_capacity(signals.len());
        for &signal in signals {
            if streams.iter().any(|(registered, _)| *registered == signal) {
                continue;
            }
            streams.push((signal, register(signal)?));
        }
        Ok(Self { streams })
    }

    /// Wait for the first delivered signal
    ///
    /// Returns `None` if every stream has closed.
    pub(crate) async fn recv(&mut self) -> Option<TerminationSignal> {
        std::future::poll_fn(|cx| {
            let mut open = false;
            for (signal, stream) in self.streams.iter_mut() {
                match stream.poll_recv(cx) {
                    Poll::Ready(Some(())) => return Poll::Ready(Some(*signal)),
                    Poll::Ready(None) => {}
                    Poll::Pending => open = true,
                }
            }
            if open { Poll::Pending } else { Poll::Ready(None) }
        })
        .await
    }
}

#[cfg(unix)]
fn register(signal: TerminationSignal) -> ShutdownResult<SignalStream> {
    use tokio::signal::unix::SignalKind;

    let kind = match signal {
        TerminationSignal::Interrupt => SignalKind::interrupt(),
        TerminationSignal::Terminate => SignalKind::terminate(),
        TerminationSignal::Hangup => SignalKind::hangup(),
        TerminationSignal::Quit => SignalKind::quit(),
    };
    tokio::signal::unix::signal(kind)
        .map_err(|e| ShutdownError::SignalInstall(format!("{}: {}", signal, e)))
}

#[cfg(windows)]
fn register(signal: TerminationSignal) -> ShutdownResult<SignalStream> {
    match signal {
        TerminationSignal::Interrupt => tokio::signal::windows::ctrl_c()
            .map_err(|e| ShutdownError::SignalInstall(format!("{}: {}", signal, e))),
        other => Err(ShutdownError::UnsupportedSignal(other)),
    }
}

#[cfg(not(any(unix, windows)))]
fn register(signal: TerminationSignal) -> ShutdownResult<SignalStream> {
    Err(ShutdownError::UnsupportedSignal(signal))
}

#[cfg(test)]
#[path = "source/source_tests.rs"]
mod source_tests;
