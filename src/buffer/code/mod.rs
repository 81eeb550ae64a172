mod fake;
mod real;

pub use fake::FakeBuffer;
pub use real::RealBuffer;
