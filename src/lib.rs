pub mod catalog;
mod codec;
mod decoder;
mod error;
mod keys;
mod renderer;

pub use crate::{codec::*, decoder::*, error::*, keys::*, renderer::*};
