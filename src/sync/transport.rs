//! The transport seam.
//!
//! The channel itself (WebRTC data channel, socket, in-memory pipe) is a
//! collaborator: it must already be connected, ordered, and reliable. This
//! layer only hands it bytes. Inbound bytes are pushed into
//! [`Session::handle_payload`](super::Session::handle_payload) by whoever
//! owns the channel callbacks.

use std::collections::VecDeque;

/// Outbound half of an established bidirectional channel.
///
/// `send` is infallible by contract: delivery guarantees (and the
/// consequences of breaking them) belong to the transport collaborator, not
/// to this layer.
pub trait Transport {
    fn send(&mut self, payload: &[u8]);
}

/// A transport that queues payloads for the caller to drain.
///
/// Useful when the real channel wants to be pumped from the outside, and for
/// wiring two sessions together in tests.
#[derive(Clone, Debug, Default)]
pub struct QueueTransport {
    queue: VecDeque<Vec<u8>>,
}

impl QueueTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest queued payload.
    pub fn pop(&mut self) -> Option<Vec<u8>> {
        self.queue.pop_front()
    }

    /// Drain everything queued so far, oldest first.
    pub fn drain(&mut self) -> Vec<Vec<u8>> {
        self.queue.drain(..).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Transport for QueueTransport {
    fn send(&mut self, payload: &[u8]) {
        self.queue.push_back(payload.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order() {
        let mut transport = QueueTransport::new();
        transport.send(b"first");
        transport.send(b"second");
        assert_eq!(transport.pop().as_deref(), Some(b"first".as_slice()));
        assert_eq!(transport.pop().as_deref(), Some(b"second".as_slice()));
        assert!(transport.pop().is_none());
        assert!(transport.is_empty());
    }
}
