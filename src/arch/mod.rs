mod linear;
pub mod loss;

pub use linear::{LinearLayer, NUM_WEIGHTS};
