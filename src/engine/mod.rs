// Engine modules: input, clock, combo detection

pub mod clock;
pub mod combo;
pub mod input;
