mod traits;

pub use traits::Engine;
