//! Change notifications for UI observers.

use tracing::debug;
use vr_paint_ipc::ToolToUi;

type Listener = Box<dyn Fn(&ToolToUi) + Send + Sync>;

/// Fan-out of [`ToolToUi`] messages to subscribed observers.
///
/// Delivery is synchronous and in subscription order.
#[derive(Default)]
pub struct NotificationBus {
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationBus")
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for every subsequent message.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&ToolToUi) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn publish(&self, message: ToolToUi) {
        debug!("notify: {:?}", message);
        for listener in &self.listeners {
            listener(&message);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
