// View selector - holds the active topic
//
// Exactly one topic is active at any time. Selection events overwrite it
// and raise a render request; the dispatch step reads it. Both happen on
// the UI thread, so no synchronization is needed.

use crate::topic::{InvalidTopicError, Topic};

/// Active selection plus a pending re-render flag
#[derive(Debug, Clone)]
pub struct ViewSelector {
    active: Topic,
    render_requested: bool,
}

impl ViewSelector {
    /// Start on the overall view with a first render pending
    pub fn new() -> Self {
        Self {
            active: Topic::default(),
            render_requested: true,
        }
    }

    pub fn current_topic(&self) -> Topic {
        self.active
    }

    /// Make `topic` active and request a re-render
    ///
    /// Reselecting the active topic still requests a render.
    pub fn select(&mut self, topic: Topic) {
        if topic != self.active {
            tracing::info!("Topic selected: {}", topic.label());
        }
        self.active = topic;
        self.render_requested = true;
    }

    /// Select by slug or label
    ///
    /// The selection is left untouched when the name is unknown.
    pub fn select_label(&mut self, name: &str) -> Result<Topic, InvalidTopicError> {
        let topic: Topic = name.parse()?;
        self.select(topic);
        Ok(topic)
    }

    pub fn select_next(&mut self) {
        self.select(self.active.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.active.prev());
    }

    /// Whether a render is pending, without clearing it
    #[cfg(test)]
    pub fn render_pending(&self) -> bool {
        self.render_requested
    }

    /// Consume the pending render request
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new()
    }
}
