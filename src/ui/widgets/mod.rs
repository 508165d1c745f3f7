pub mod channels;
pub mod header;
pub mod preview;
pub mod uniforms;

mod shared;
