pub mod commands;
pub mod init;
pub mod profile;
pub mod room;
pub mod tag;
pub mod version;

pub use commands::Commands;
pub use init::Init;
pub use profile::Profile;
pub use room::Room;
pub use tag::Tagging;
pub use version::Version;
