//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use collisions::WalkableProbe;
pub(crate) use input::read_input;
pub(crate) use locomotion::drive_locomotion;
