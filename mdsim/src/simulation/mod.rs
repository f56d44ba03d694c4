pub mod states;
pub mod params;
pub mod boundary;
pub mod geometry;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod init;
pub mod driver;
pub mod scenario;
