pub mod boot;
pub mod konami;
pub mod step;
pub mod typewriter;
pub mod world;
