use super::GameEvent;

/// Anything that reacts to the client's game event stream.
///
/// Events must be delivered in arrival order on one thread; handlers never
/// see two events interleaved.
pub trait EventHandler {
    fn handle_event(&mut self, event: &GameEvent);

    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle_event(event);
        }
    }
}
