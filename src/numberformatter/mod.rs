mod helper_constants;
pub mod helper_functions;
pub mod enums;
pub mod number_formatter;

pub use enums::PhoneNumberFormat;
pub use number_formatter::NumberFormatter;
