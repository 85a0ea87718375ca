pub mod play;
pub mod replay;
