pub mod anim;
pub mod math;
pub mod sdf;
pub mod uniforms;
