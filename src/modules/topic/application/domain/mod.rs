pub mod entities;
pub mod url_name;
