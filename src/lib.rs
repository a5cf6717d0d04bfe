pub mod level;
pub mod record;
pub mod component;
pub mod format;
pub mod sink;
pub mod layer;

pub mod init;
pub mod noop_sink;
pub mod env;
