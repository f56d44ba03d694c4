#[cfg(feature = "viewer")]
pub mod mdsim_vis2d;
