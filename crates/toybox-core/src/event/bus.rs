// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use parking_lot::Mutex;

use crate::event::{EngineEvent, EventSuppressor};
use crate::memory::Shared;
use crate::uid::Uid;

/// A shared handle to an [`EventBus`].
pub type SharedEventBus = Shared<EventBus>;

/// Identifies a subscription so it can be revoked later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberToken(Uid);

/// An event in flight, carrying the handled flag subscribers may set.
///
/// Delivery continues through every subscriber regardless of the flag, so
/// multiple observers can see the same event; the flag is reported back to
/// [`EventBus::send`] callers.
#[derive(Debug)]
pub struct EventEnvelope {
    event: EngineEvent,
    handled: bool,
}

impl EventEnvelope {
    fn new(event: EngineEvent) -> Self {
        Self {
            event,
            handled: false,
        }
    }

    /// The event being delivered.
    pub fn event(&self) -> &EngineEvent {
        &self.event
    }

    /// Marks the event as handled.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }

    /// Returns `true` once some subscriber marked the event handled.
    pub fn is_handled(&self) -> bool {
        self.handled
    }
}

type Handler = Box<dyn FnMut(&mut EventEnvelope) + Send>;

/// A thread-safe event channel with subscriber dispatch.
///
/// Producers on any thread enqueue with [`post`]; the owning thread calls
/// [`flush`] to deliver the backlog in post order. [`send`] bypasses the
/// queue and delivers synchronously on the calling thread.
///
/// [`post`]: EventBus::post
/// [`flush`]: EventBus::flush
/// [`send`]: EventBus::send
pub struct EventBus {
    sender: flume::Sender<EngineEvent>,
    receiver: flume::Receiver<EngineEvent>,
    subscribers: Mutex<Vec<(SubscriberToken, Shared<Mutex<Handler>>)>>,
}

impl EventBus {
    /// Creates a new bus backed by an unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        log::info!("EventBus initialized.");
        Self {
            sender,
            receiver,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Registers a handler and returns the token that revokes it.
    ///
    /// ## Arguments
    /// * `handler` - Called once per delivered event, in subscription order.
    ///
    /// ## Returns
    /// A stable token accepted by [`EventBus::unsubscribe`].
    pub fn subscribe<F>(&self, handler: F) -> SubscriberToken
    where
        F: FnMut(&mut EventEnvelope) + Send + 'static,
    {
        let token = SubscriberToken(Uid::generate());
        self.subscribers
            .lock()
            .push((token, Shared::new(Mutex::new(Box::new(handler)))));
        token
    }

    /// Removes the subscription identified by `token`.
    ///
    /// ## Returns
    /// `true` when a subscription was removed, `false` for unknown tokens.
    pub fn unsubscribe(&self, token: SubscriberToken) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(candidate, _)| *candidate != token);
        subscribers.len() != before
    }

    /// Enqueues an event without blocking. Callable from any thread.
    pub fn post(&self, event: EngineEvent) {
        log::trace!("Posting event: {event:?}");
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to post event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the posting end of the queue, for producers that
    /// outlive a borrow of the bus.
    pub fn poster(&self) -> flume::Sender<EngineEvent> {
        self.sender.clone()
    }

    /// Delivers every event queued before this call, in post order, on the
    /// calling thread.
    ///
    /// The backlog is snapshotted first, so events posted by handlers during
    /// the flush wait for the next one. While an [`EventSuppressor`] is
    /// alive the backlog is drained but nothing is delivered.
    pub fn flush(&self) {
        let pending: Vec<EngineEvent> = self.receiver.try_iter().collect();
        if pending.is_empty() {
            return;
        }
        if EventSuppressor::is_active() {
            log::trace!("Suppressor active; discarding {} queued events.", pending.len());
            return;
        }
        for event in pending {
            self.dispatch(event);
        }
    }

    /// Synchronously delivers `event` to every subscriber.
    ///
    /// ## Returns
    /// The event's handled flag. Always `false` while a suppressor is alive.
    pub fn send(&self, event: EngineEvent) -> bool {
        if EventSuppressor::is_active() {
            log::trace!("Suppressor active; dropping event: {event:?}");
            return false;
        }
        self.dispatch(event)
    }

    fn dispatch(&self, event: EngineEvent) -> bool {
        log::trace!("Dispatching event: {event:?}");
        // Snapshot so a handler can subscribe or unsubscribe mid-dispatch
        // without deadlocking on the subscriber list.
        let handlers: Vec<Shared<Mutex<Handler>>> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        let mut envelope = EventEnvelope::new(event);
        for handler in handlers {
            (handler.lock())(&mut envelope);
        }
        envelope.handled
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queued", &self.receiver.len())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}
