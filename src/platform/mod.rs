mod unified;

pub use unified::WindowEntry;
