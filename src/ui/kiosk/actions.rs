//! Intents the kiosk screen can dispatch to the form controller.

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    NextField,
    PrevField,

    Input(char),
    DeleteChar,

    Save,
    Export,

    // reset gate
    RequestReset,
    ConfirmReset,
    CancelReset,
}
