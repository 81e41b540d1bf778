pub mod properties;

mod extract;
mod lines;
mod range;
mod ucd;

pub use extract::extract;
pub use extract::ExtractError;

pub use lines::data_lines;
pub use lines::is_data_line;
pub use lines::numbered_data_lines;

pub use properties::PropertiesError;

pub use range::CodepointRange;

pub use ucd::UcdFile;
