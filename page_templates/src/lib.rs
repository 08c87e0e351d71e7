pub mod templates;

pub use templates::{HeadPage, SumPage};
