// Route path constants - single source of truth for all API paths

pub const HOME: &str = "/";
pub const HEALTH: &str = "/health";
pub const ITEMS: &str = "/items";
pub const ITEMS_BY_NAME: &str = "/items/name/{name}";
pub const ITEMS_BY_ID: &str = "/items/id/{id}";
