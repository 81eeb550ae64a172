mod byte;
mod equal;
mod kilobyte;
mod megabyte;

pub use byte::{Byte, BYTE_RANGE};
pub use equal::{Equal, Scale};
pub use kilobyte::Kilobyte;
pub use megabyte::Megabyte;
