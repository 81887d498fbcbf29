mod dictionary;
mod primitive;
mod stream;
mod string;

pub use dictionary::Dictionary;
pub use primitive::{format_real, Object, ObjectId};
pub use stream::Stream;
pub use string::{escape_literal, escape_name, hex_string};
