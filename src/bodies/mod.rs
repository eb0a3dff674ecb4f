mod appearance;
mod body;
mod body_type;
mod builder;
mod material;

pub use self::appearance::{Appearance, ColorPair, Shape};
pub use self::body::Body;
pub use self::body_type::BodyType;
pub use self::builder::{game_zone, BodyBuilder};
pub use self::material::Material;
