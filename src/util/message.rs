pub static MESSAGE_ROUTE_NOT_FOUND: &str = "route not found";
pub static MESSAGE_INTERNAL_SERVER_ERROR: &str = "internal server error";

pub static STATUS_NOT_FOUND: &str = "not found";
pub static STATUS_INTERNAL_SERVER_ERROR: &str = "internal server error";
