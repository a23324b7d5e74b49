// Backend endpoints - the server is an opaque collaborator, these paths are
// the whole contract the frontend knows about.
pub const CHECK_SESSION_ENDPOINT: &str = "/api/check-session";
pub const PROFILE_ENDPOINT: &str = "/api/profile";
pub const REQUEST_ACCESS_ENDPOINT: &str = "/api/request-access";
pub const ACCESS_LOG_ENDPOINT: &str = "/api/access-log";
pub const ALL_PERSONNEL_ENDPOINT: &str = "/api/all-personnel";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

// Navigation targets
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const HOME_PATH: &str = "/";

// Clearance value that unlocks the admin panel (exact string match)
pub const ADMIN_CLEARANCE: &str = "TOP SECRET";

// How long a request-access banner stays visible
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

// Fixed ids the dashboard markup must provide
pub const PROFILE_NAME_ID: &str = "profile-name";
pub const PROFILE_RANK_ID: &str = "profile-rank";
pub const PROFILE_UNIT_ID: &str = "profile-unit";
pub const PROFILE_CLEARANCE_ID: &str = "profile-clearance";
pub const USER_GREETING_ID: &str = "user-greeting";
pub const LOGIN_TIME_ID: &str = "login-time";
pub const ACCESS_AREAS_ID: &str = "access-areas";
pub const AREA_SELECT_ID: &str = "area-select";
pub const ACCESS_MESSAGE_ID: &str = "access-message";
pub const ADMIN_PANEL_ID: &str = "admin-panel";
pub const MODAL_ID: &str = "modal";
pub const MODAL_TITLE_ID: &str = "modal-title";
pub const MODAL_BODY_ID: &str = "modal-body";
pub const REQUEST_ACCESS_BTN_ID: &str = "request-access-btn";
pub const VIEW_ACCESS_LOG_BTN_ID: &str = "view-access-log-btn";
pub const VIEW_PERSONNEL_BTN_ID: &str = "view-personnel-btn";
pub const LOGOUT_BTN_ID: &str = "logout-btn";
