mod collision_filter;
mod contact;
mod detector;
pub mod response;

pub use self::collision_filter::{CollisionGroups, MAX_COLLISION_GROUPS};
pub use self::contact::{Contact, Neighbor, NeighborState, Resolution};
pub use self::detector::{BodySnapshot, ContactDetector};
pub use self::response::{friction_force, resolve_elastic, resolve_static, ElasticOutcome, StaticResponse};
