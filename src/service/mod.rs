pub mod identity_index;

pub use identity_index::{get_existed_network_keys, get_path_name, IdentityIndex};
