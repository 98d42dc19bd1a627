mod formatter_factory;
mod parser_factory;
mod presenter_factory;

pub use formatter_factory::{FormatterFactory, FormatterType};
pub use parser_factory::ParserFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
