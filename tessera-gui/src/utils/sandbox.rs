use std::collections::VecDeque;

use iced::futures::StreamExt;
use iced_runtime::{task, Action};

use crate::tessera::{Message, Tessera};

/// Drives a [`Tessera`] application outside of the iced runtime.
pub struct Sandbox {
    tessera: Tessera,
}

impl Sandbox {
    pub fn new(tessera: Tessera) -> Self {
        Self { tessera }
    }

    pub fn tessera(&self) -> &Tessera {
        &self.tessera
    }

    /// Applies a single message and collects the messages produced by the
    /// resulting task, without feeding them back.
    pub async fn step(&mut self, message: Message) -> Vec<Message> {
        let task = self.tessera.update(message);
        let mut produced = Vec::new();
        if let Some(mut stream) = task::into_stream(task) {
            while let Some(action) = stream.next().await {
                if let Action::Output(msg) = action {
                    produced.push(msg);
                }
            }
        }
        produced
    }

    /// Applies a message and keeps feeding produced messages back until the
    /// application is quiescent.
    pub async fn update(&mut self, message: Message) {
        let mut queue = VecDeque::new();
        queue.push_back(message);
        while let Some(message) = queue.pop_front() {
            queue.extend(self.step(message).await);
        }
    }
}
