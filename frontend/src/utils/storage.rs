use web_sys::{Storage, Window};

pub const CURRENT_USER_KEY: &str = "current_user";
pub const ACCESS_TOKEN_KEY: &str = "access_token";

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn remove_items(keys: &[&str]) {
    if let Ok(storage) = local_storage() {
        for key in keys {
            let _ = storage.remove_item(key);
        }
    }
}
