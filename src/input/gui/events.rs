/// User events delivered to the GUI event loop from other threads.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event is waiting in the presenter adapter. The loop marks a
    /// redraw as pending; the next redraw picks the event up.
    Wake,
}
