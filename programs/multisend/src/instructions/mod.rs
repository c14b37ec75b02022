mod get_received;
mod initialize;
mod lz_receive;
mod lz_receive_types;
mod quote;
mod roles;
mod send;
mod set_remote;

pub use get_received::*;
pub use initialize::*;
pub use lz_receive::*;
pub use lz_receive_types::*;
pub use quote::*;
pub use roles::*;
pub use send::*;
pub use set_remote::*;
