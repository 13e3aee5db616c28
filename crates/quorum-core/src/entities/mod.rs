//! Domain entities

mod channel;
mod folder;
mod guild;
mod member;
mod message;
mod presence;
mod role;

pub use channel::{Channel, ChannelType, OverwriteKind, PermissionOverwrite};
pub use folder::GuildFolder;
pub use guild::Guild;
pub use member::Member;
pub use message::Message;
pub use presence::Status;
pub use role::Role;
