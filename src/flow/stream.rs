//! Incremental generation results
//!
//! A `TextStream` yields fragments until the provider finishes, then hands
//! over the final text once. It cannot be rewound.

use tokio::sync::{mpsc, oneshot};

use super::FlowError;

pub struct TextStream {
    chunks: mpsc::Receiver<Result<String, FlowError>>,
    response: oneshot::Receiver<Result<String, FlowError>>,
}

/// Provider side of a `TextStream`
pub struct TextStreamSender {
    chunks: mpsc::Sender<Result<String, FlowError>>,
    response: oneshot::Sender<Result<String, FlowError>>,
}

impl TextStream {
    /// Create a connected sender/stream pair buffering up to `buffer` fragments
    pub fn channel(buffer: usize) -> (TextStreamSender, Self) {
        let (chunk_tx, chunk_rx) = mpsc::channel(buffer.max(1));
        let (response_tx, response_rx) = oneshot::channel();
        (
            TextStreamSender {
                chunks: chunk_tx,
                response: response_tx,
            },
            Self {
                chunks: chunk_rx,
                response: response_rx,
            },
        )
    }

    /// Next fragment, or `None` once the provider has finished
    pub async fn next_chunk(&mut self) -> Option<Result<String, FlowError>> {
        self.chunks.recv().await
    }

    /// Final text; resolves after the provider calls `finish`
    pub async fn response(self) -> Result<String, FlowError> {
        drop(self.chunks);
        match self.response.await {
            Ok(result) => result,
            Err(_) => Err(FlowError::StreamClosed),
        }
    }
}

impl TextStreamSender {
    /// Push one fragment; fails once the consumer has gone away
    pub async fn send_chunk(&self, chunk: impl Into<String>) -> Result<(), FlowError> {
        self.chunks
            .send(Ok(chunk.into()))
            .await
            .map_err(|_| FlowError::StreamClosed)
    }

    /// End the stream and deliver the final text
    pub fn finish(self, text: impl Into<String>) {
        let Self { chunks, response } = self;
        drop(chunks);
        let _ = response.send(Ok(text.into()));
    }

    /// End the stream with an error surfaced to the consumer's next read
    pub async fn fail(self, err: FlowError) {
        let Self { chunks, response } = self;
        let _ = chunks.send(Err(err)).await;
        drop(response);
    }
}
