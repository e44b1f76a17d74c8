// Interface adapters: wire protocol, the HTTP client, and the terminal
// rendering/dialog adapters.

pub mod clients;
pub mod protocol;
pub mod terminal;
