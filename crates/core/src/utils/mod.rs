pub mod properties;

pub use properties::Properties;
