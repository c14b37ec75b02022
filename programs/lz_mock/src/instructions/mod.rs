mod clear;
mod quote;
mod register_oapp;
mod send;

pub use clear::*;
pub use quote::*;
pub use register_oapp::*;
pub use send::*;
