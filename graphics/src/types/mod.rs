//! Plain descriptor types shared across the graphics API.

mod buffer;

pub use buffer::{BufferDescriptor, BufferUsage};
