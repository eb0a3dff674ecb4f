mod symplectic_euler;

pub use self::symplectic_euler::integrate;
