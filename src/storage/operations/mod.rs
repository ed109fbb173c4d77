// OpenDAL-backed building blocks of the container
pub mod cat;
pub mod copy;
pub mod delete;
pub mod list;
pub mod mkdir;
pub mod stat;
pub mod upload;

pub use cat::FileReader;
pub use copy::Copier;
pub use delete::Deleter;
pub use list::Lister;
pub use mkdir::Mkdirer;
pub use stat::Stater;
pub use upload::Uploader;
