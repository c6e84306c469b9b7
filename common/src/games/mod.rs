mod frame_sink;
mod session_rng;

pub mod snake;

pub use frame_sink::FrameSink;
pub use session_rng::SessionRng;
