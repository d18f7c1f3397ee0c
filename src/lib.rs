pub mod num;
pub mod trig;
