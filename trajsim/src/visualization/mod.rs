pub mod playback;
pub mod table;

#[cfg(feature = "vis")]
pub mod traj_vis2d;
#[cfg(feature = "vis")]
pub mod traj_vis3d;
