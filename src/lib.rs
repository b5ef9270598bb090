pub mod error;
pub mod field;
pub mod filetype;
pub mod obfuscate;
pub mod path;
pub mod user;
pub mod files;

pub use error::{Result, WireError};
pub use field::{Field, FieldId};
pub use filetype::FileTypeInfo;
pub use files::{file_name_list, total_item_count, total_size, FileNameWithInfo};
pub use path::{decode_path, encode_path};
pub use user::UserRecord;
