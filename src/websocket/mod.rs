mod broadcaster;
mod hub;
mod messages;
mod session;

pub use broadcaster::LiveBroadcaster;
pub use hub::BroadcastHub;
pub use messages::{competition_room, match_room};
pub use session::LiveSession;
